//! Embedded project store schema.
//!
//! Steps run in one transaction, so a store is either fully upgraded or left
//! at its previous `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::{Connection, Transaction};

/// One numbered schema step.
#[derive(Debug, Clone, Copy)]
pub struct SchemaStep {
    pub version: u32,
    pub name: &'static str,
    sql: &'static str,
}

const SCHEMA: &[SchemaStep] = &[
    SchemaStep {
        version: 1,
        name: "projects",
        sql: include_str!("0001_projects.sql"),
    },
    SchemaStep {
        version: 2,
        name: "project_tasks",
        sql: include_str!("0002_project_tasks.sql"),
    },
];

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    SCHEMA.last().map_or(0, |step| step.version)
}

/// Reads the schema version recorded in `conn`.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?)
}

/// Steps not yet applied to a store at `version`.
pub fn pending_steps(version: u32) -> impl Iterator<Item = &'static SchemaStep> {
    SCHEMA.iter().filter(move |step| step.version > version)
}

/// Upgrades `conn` to [`latest_version`].
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from_version = schema_version(conn)?;
    let latest = latest_version();
    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }

    let tx = conn.transaction()?;
    let mut applied = 0usize;
    for step in pending_steps(from_version) {
        run_step(&tx, step)?;
        applied += 1;
    }
    if applied == 0 {
        return Ok(());
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={} steps={}",
        from_version, latest, applied
    );
    Ok(())
}

fn run_step(tx: &Transaction<'_>, step: &SchemaStep) -> DbResult<()> {
    tx.execute_batch(step.sql)
        .and_then(|()| tx.pragma_update(None, "user_version", step.version))
        .map_err(|source| DbError::Migration {
            version: step.version,
            name: step.name,
            source,
        })?;
    debug!(
        "event=db_migrate_step module=db status=ok version={} name={}",
        step.version, step.name
    );
    Ok(())
}
