use projectdesk_core::db::open_db_in_memory;
use projectdesk_core::{
    ModelValidationError, Project, ProjectDraft, ProjectListQuery, ProjectRepository,
    ProjectService, ProjectTask, RepoError, SqliteProjectRepository, SqliteTaskRepository,
    TaskRepository,
};
use uuid::Uuid;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    let mut project = Project::new("Garden");
    project.description = "Spring planting".to_string();
    project.icon = Some("leaf".to_string());
    let id = repo.create_project(&project).unwrap();

    let loaded = repo.get_project(id).unwrap().unwrap();
    assert_eq!(loaded, project);
}

#[test]
fn get_missing_project_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    assert!(repo.get_project(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn create_rejects_blank_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    let err = repo.create_project(&Project::new("   ")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ModelValidationError::EmptyField("name"))
    ));
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    let project = Project::new("missing");
    let err = repo.update_project(&project).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == project.id));
}

#[test]
fn list_orders_by_name_case_insensitively_and_paginates() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    for name in ["charlie", "Alpha", "bravo"] {
        repo.create_project(&Project::new(name)).unwrap();
    }

    let names = |query: &ProjectListQuery| {
        repo.list_projects(query)
            .unwrap()
            .into_iter()
            .map(|project| project.name)
            .collect::<Vec<_>>()
    };

    assert_eq!(
        names(&ProjectListQuery::default()),
        vec!["Alpha", "bravo", "charlie"]
    );
    assert_eq!(
        names(&ProjectListQuery {
            limit: Some(1),
            offset: 1
        }),
        vec!["bravo"]
    );
    assert_eq!(
        names(&ProjectListQuery {
            limit: None,
            offset: 2
        }),
        vec!["charlie"]
    );
}

#[test]
fn delete_removes_project_and_cascades_tasks() {
    let conn = open_db_in_memory().unwrap();
    let projects = SqliteProjectRepository::new(&conn);
    let tasks = SqliteTaskRepository::new(&conn);

    let project = Project::new("Move house");
    projects.create_project(&project).unwrap();
    let task = ProjectTask::new(project.id, "Book van");
    tasks.create_task(&task).unwrap();

    projects.delete_project(project.id).unwrap();

    assert!(projects.get_project(project.id).unwrap().is_none());
    assert!(tasks.get_task(task.id).unwrap().is_none());
    let err = projects.delete_project(project.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == project.id));
}

#[test]
fn get_rejects_invalid_persisted_rows() {
    let conn = open_db_in_memory().unwrap();
    let id = Uuid::new_v4();
    conn.execute(
        "INSERT INTO projects (id, name) VALUES (?1, '  ');",
        [id.to_string()],
    )
    .unwrap();

    let repo = SqliteProjectRepository::new(&conn);
    let err = repo.get_project(id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn service_trims_draft_fields_and_updates_in_place() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::new(&conn));

    let created = service
        .create_project(&ProjectDraft {
            name: "  Launch  ".to_string(),
            description: Some(" v1 ".to_string()),
            icon: Some("   ".to_string()),
        })
        .unwrap();
    assert_eq!(created.name, "Launch");
    assert_eq!(created.description, "v1");
    assert_eq!(created.icon, None);

    let updated = service
        .update_project(created.id, &ProjectDraft::named("Launch v2"))
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.description, "");

    let listed = service.list_projects(None, 0).unwrap();
    assert_eq!(listed, vec![updated]);
}

#[test]
fn service_update_of_missing_project_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::new(&conn));

    let id = Uuid::new_v4();
    let err = service
        .update_project(id, &ProjectDraft::named("ghost"))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(missing) if missing == id));
}
