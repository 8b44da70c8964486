use projectdesk_core::db::open_db_in_memory;
use projectdesk_core::{
    Project, ProjectRepository, ProjectTask, RepoError, SqliteProjectRepository,
    SqliteTaskRepository, TaskPatch, TaskRepository, TaskService,
};
use rusqlite::Connection;
use uuid::Uuid;

fn seed_project(conn: &Connection, name: &str) -> Project {
    let project = Project::new(name);
    SqliteProjectRepository::new(conn)
        .create_project(&project)
        .unwrap();
    project
}

#[test]
fn create_and_list_tasks_in_creation_order() {
    let conn = open_db_in_memory().unwrap();
    let project = seed_project(&conn, "Kitchen");
    let repo = SqliteTaskRepository::new(&conn);

    let titles = ["Measure", "Order cabinets", "Install"];
    for title in titles {
        repo.create_task(&ProjectTask::new(project.id, title)).unwrap();
    }

    let listed = repo
        .list_tasks(project.id)
        .unwrap()
        .into_iter()
        .map(|task| task.title)
        .collect::<Vec<_>>();
    assert_eq!(listed, titles);
}

#[test]
fn tasks_are_scoped_to_their_project() {
    let conn = open_db_in_memory().unwrap();
    let first = seed_project(&conn, "First");
    let second = seed_project(&conn, "Second");
    let repo = SqliteTaskRepository::new(&conn);

    repo.create_task(&ProjectTask::new(first.id, "only in first"))
        .unwrap();

    assert_eq!(repo.list_tasks(first.id).unwrap().len(), 1);
    assert!(repo.list_tasks(second.id).unwrap().is_empty());
}

#[test]
fn create_under_missing_project_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let missing = Uuid::new_v4();
    let err = repo
        .create_task(&ProjectTask::new(missing, "orphan"))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));

    let err = repo.list_tasks(missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
}

#[test]
fn update_and_delete_task() {
    let conn = open_db_in_memory().unwrap();
    let project = seed_project(&conn, "Chores");
    let repo = SqliteTaskRepository::new(&conn);

    let mut task = ProjectTask::new(project.id, "Dishes");
    repo.create_task(&task).unwrap();

    task.toggle();
    task.title = "Dishes and pans".to_string();
    repo.update_task(&task).unwrap();
    assert_eq!(repo.get_task(task.id).unwrap().unwrap(), task);

    repo.delete_task(task.id).unwrap();
    assert!(repo.get_task(task.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_task(task.id).unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[test]
fn get_rejects_out_of_range_completion_flag() {
    let conn = open_db_in_memory().unwrap();
    let project = seed_project(&conn, "Raw");
    conn.execute_batch("PRAGMA ignore_check_constraints = ON;")
        .unwrap();
    let id = Uuid::new_v4();
    conn.execute(
        "INSERT INTO project_tasks (id, project_id, title, is_completed)
         VALUES (?1, ?2, 'raw', 7);",
        [id.to_string(), project.id.to_string()],
    )
    .unwrap();

    let err = SqliteTaskRepository::new(&conn).get_task(id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn service_patch_keeps_unset_fields() {
    let conn = open_db_in_memory().unwrap();
    let project = seed_project(&conn, "Writing");
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    let task = service.add_task(project.id, "  Draft chapter  ").unwrap();
    assert_eq!(task.title, "Draft chapter");
    assert!(!task.is_completed);

    let completed = service.set_completed(task.id, true).unwrap();
    assert_eq!(completed.title, "Draft chapter");
    assert!(completed.is_completed);

    let renamed = service
        .update_task(
            task.id,
            &TaskPatch {
                title: Some("Draft chapter one".to_string()),
                is_completed: None,
            },
        )
        .unwrap();
    assert!(renamed.is_completed);
    assert_eq!(service.list_tasks(project.id).unwrap(), vec![renamed]);
}

#[test]
fn service_rejects_blank_titles() {
    let conn = open_db_in_memory().unwrap();
    let project = seed_project(&conn, "Blank");
    let service = TaskService::new(SqliteTaskRepository::new(&conn));

    assert!(matches!(
        service.add_task(project.id, "   ").unwrap_err(),
        RepoError::Validation(_)
    ));
}
