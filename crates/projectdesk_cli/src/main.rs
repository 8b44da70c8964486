//! Operator CLI for ProjectDesk.
//!
//! # Responsibility
//! - Provide a smoke probe for `projectdesk_core` linkage (`ping`).
//! - Run scripted project/task CRUD against a database file.
//! - Print the facility branding strings served to the web front.

use clap::{Args, Parser, Subcommand};
use projectdesk_core::db::open_db;
use projectdesk_core::{
    facility_theme, format_facility_address, format_facility_contact, init_stderr_logging,
    mock_facility, ProjectDraft, ProjectService, RepoError, Route, SqliteProjectRepository,
    SqliteTaskRepository, TaskService,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "projectdesk", version, about = "ProjectDesk command line")]
struct Cli {
    /// Log level written to stderr (trace|debug|info|warn|error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print core ping and version.
    Ping,
    /// Manage projects.
    Projects {
        #[command(subcommand)]
        command: ProjectCommand,
    },
    /// Manage project tasks.
    Tasks {
        #[command(subcommand)]
        command: TaskCommand,
    },
    /// Print facility branding strings.
    Facility,
}

#[derive(Args)]
struct DbArgs {
    /// SQLite database file.
    #[arg(long)]
    db: PathBuf,
}

#[derive(Subcommand)]
enum ProjectCommand {
    List {
        #[command(flatten)]
        db: DbArgs,
        #[arg(long)]
        limit: Option<u32>,
    },
    Add {
        #[command(flatten)]
        db: DbArgs,
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    Show {
        #[command(flatten)]
        db: DbArgs,
        id: Uuid,
    },
    Remove {
        #[command(flatten)]
        db: DbArgs,
        id: Uuid,
    },
}

#[derive(Subcommand)]
enum TaskCommand {
    List {
        #[command(flatten)]
        db: DbArgs,
        project_id: Uuid,
    },
    Add {
        #[command(flatten)]
        db: DbArgs,
        project_id: Uuid,
        title: String,
    },
    Complete {
        #[command(flatten)]
        db: DbArgs,
        task_id: Uuid,
        /// Reopen instead of completing.
        #[arg(long)]
        undo: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_stderr_logging(&cli.log_level) {
        eprintln!("projectdesk: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("projectdesk: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Ping => {
            println!("projectdesk_core ping={}", projectdesk_core::ping());
            println!("projectdesk_core version={}", projectdesk_core::core_version());
        }
        Command::Projects { command } => run_projects(command)?,
        Command::Tasks { command } => run_tasks(command)?,
        Command::Facility => print_facility(),
    }
    Ok(())
}

fn run_projects(command: ProjectCommand) -> Result<(), Box<dyn Error>> {
    match command {
        ProjectCommand::List { db, limit } => {
            let conn = open_db(&db.db)?;
            let service = ProjectService::new(SqliteProjectRepository::new(&conn));
            for project in service.list_projects(limit, 0)? {
                println!("{}\t{}", project.id, project.name);
            }
        }
        ProjectCommand::Add {
            db,
            name,
            description,
            icon,
        } => {
            let conn = open_db(&db.db)?;
            let service = ProjectService::new(SqliteProjectRepository::new(&conn));
            let project = service.create_project(&ProjectDraft {
                name,
                description,
                icon,
            })?;
            println!("{}", project.id);
        }
        ProjectCommand::Show { db, id } => {
            let conn = open_db(&db.db)?;
            let service = ProjectService::new(SqliteProjectRepository::new(&conn));
            let project = service.get_project(id)?.ok_or(RepoError::NotFound(id))?;
            println!("id: {}", project.id);
            println!("name: {}", project.name);
            println!("description: {}", project.description);
            if let Some(icon) = &project.icon {
                println!("icon: {icon}");
            }
            println!("route: {}", Route::ProjectDetail(project.id));
        }
        ProjectCommand::Remove { db, id } => {
            let conn = open_db(&db.db)?;
            ProjectService::new(SqliteProjectRepository::new(&conn)).delete_project(id)?;
        }
    }
    Ok(())
}

fn run_tasks(command: TaskCommand) -> Result<(), Box<dyn Error>> {
    match command {
        TaskCommand::List { db, project_id } => {
            let conn = open_db(&db.db)?;
            let service = TaskService::new(SqliteTaskRepository::new(&conn));
            for task in service.list_tasks(project_id)? {
                let mark = if task.is_completed { "x" } else { " " };
                println!("[{mark}] {}\t{}", task.id, task.title);
            }
        }
        TaskCommand::Add {
            db,
            project_id,
            title,
        } => {
            let conn = open_db(&db.db)?;
            let task =
                TaskService::new(SqliteTaskRepository::new(&conn)).add_task(project_id, &title)?;
            println!("{}", task.id);
        }
        TaskCommand::Complete { db, task_id, undo } => {
            let conn = open_db(&db.db)?;
            TaskService::new(SqliteTaskRepository::new(&conn)).set_completed(task_id, !undo)?;
        }
    }
    Ok(())
}

fn print_facility() {
    let facility = mock_facility();
    let address = format_facility_address(&facility);
    let contact = format_facility_contact(&facility);
    let theme = facility_theme(&facility);

    println!("{}", facility.name);
    println!("{}", address.full);
    println!("{} | {} | {}", contact.phone, contact.email_link, contact.website_link);
    println!(
        "theme={} primary={} secondary={}",
        theme.theme, theme.primary_color, theme.secondary_color
    );
}
