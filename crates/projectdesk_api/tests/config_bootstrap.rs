use projectdesk_api::{ApiConfig, ConfigError};
use projectdesk_core::db::DbTarget;
use projectdesk_core::{ProjectDraft, ProjectService, SqliteProjectRepository};
use std::fs;

#[test]
fn config_file_and_secrets_file_resolve_to_a_usable_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("projects.db");
    let secrets_path = dir.path().join("secrets.toml");
    let config_path = dir.path().join("api.toml");

    fs::write(
        &secrets_path,
        format!(
            "[secrets]\nProjectsDb = \"Data Source={};\"\n",
            db_path.display()
        ),
    )
    .unwrap();
    fs::write(
        &config_path,
        format!(
            "[server]\nbind = \"127.0.0.1:0\"\n\n[database]\nsecrets_file = \"{}\"\n",
            secrets_path.display()
        ),
    )
    .unwrap();

    let config = ApiConfig::from_toml_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    let store = config.secret_store().unwrap();
    let target = config.resolve_database(store.as_ref()).unwrap();
    assert_eq!(target, DbTarget::File(db_path.clone()));

    let conn = target.open().unwrap();
    ProjectService::new(SqliteProjectRepository::new(&conn))
        .create_project(&ProjectDraft::named("persisted"))
        .unwrap();
    drop(conn);

    let reopened = DbTarget::File(db_path).open().unwrap();
    let listed = ProjectService::new(SqliteProjectRepository::new(&reopened))
        .list_projects(None, 0)
        .unwrap();
    assert_eq!(listed.len(), 1);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ApiConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn malformed_config_is_a_parse_error() {
    let err = ApiConfig::from_toml_str("[server\nbind = 1").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
