//! Project task repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Tasks are only created under an existing project.
//! - Task lists are ordered by creation (`created_at ASC, rowid ASC`).

use crate::model::project::ProjectId;
use crate::model::task::{ProjectTask, TaskId};
use crate::repo::project_repo::{parse_uuid_column, RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection, Row};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    project_id,
    title,
    is_completed
FROM project_tasks";

/// Repository interface for task operations.
pub trait TaskRepository {
    fn create_task(&self, task: &ProjectTask) -> RepoResult<TaskId>;
    fn update_task(&self, task: &ProjectTask) -> RepoResult<()>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<ProjectTask>>;
    /// Lists tasks of one project; `NotFound` when the project is missing.
    fn list_tasks(&self, project_id: ProjectId) -> RepoResult<Vec<ProjectTask>>;
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn project_exists(&self, project_id: ProjectId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1);",
            [project_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &ProjectTask) -> RepoResult<TaskId> {
        task.validate()?;
        if !self.project_exists(task.project_id)? {
            return Err(RepoError::NotFound(task.project_id));
        }

        self.conn.execute(
            "INSERT INTO project_tasks (id, project_id, title, is_completed)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                task.id.to_string(),
                task.project_id.to_string(),
                task.title.trim(),
                bool_to_int(task.is_completed),
            ],
        )?;

        info!(
            "event=task_create module=repo status=ok task_id={} project_id={}",
            task.id, task.project_id
        );
        Ok(task.id)
    }

    fn update_task(&self, task: &ProjectTask) -> RepoResult<()> {
        task.validate()?;

        let changed = self.conn.execute(
            "UPDATE project_tasks
             SET
                title = ?1,
                is_completed = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?3 AND project_id = ?4;",
            params![
                task.title.trim(),
                bool_to_int(task.is_completed),
                task.id.to_string(),
                task.project_id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(task.id));
        }

        Ok(())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<ProjectTask>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_tasks(&self, project_id: ProjectId) -> RepoResult<Vec<ProjectTask>> {
        if !self.project_exists(project_id)? {
            return Err(RepoError::NotFound(project_id));
        }

        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL}
             WHERE project_id = ?1
             ORDER BY created_at ASC, rowid ASC;"
        ))?;
        let mut rows = stmt.query([project_id.to_string()])?;
        let mut tasks = Vec::new();

        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM project_tasks WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<ProjectTask> {
    let id_text: String = row.get("id")?;
    let id = parse_uuid_column(&id_text, "project_tasks.id")?;
    let project_text: String = row.get("project_id")?;
    let project_id = parse_uuid_column(&project_text, "project_tasks.project_id")?;

    let is_completed = match row.get::<_, i64>("is_completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_completed value `{other}` in project_tasks.is_completed"
            )));
        }
    };

    let task = ProjectTask {
        id,
        project_id,
        title: row.get("title")?,
        is_completed,
    };
    task.validate()
        .map_err(|err| RepoError::InvalidData(format!("task {id}: {err}")))?;
    Ok(task)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
