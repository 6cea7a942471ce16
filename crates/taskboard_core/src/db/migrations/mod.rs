//! Schema steps for the taskboard database.
//!
//! Each step upgrades `user_version` by exactly one; all pending steps run in
//! one transaction so a crash never leaves a half-upgraded file.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// SQL for upgrading from `index` to `index + 1`.
const STEPS: &[&str] = &[include_str!("0001_init.sql")];

/// Versions before and after a migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub from: u32,
    pub to: u32,
}

impl MigrationReport {
    pub fn upgraded(&self) -> bool {
        self.from != self.to
    }
}

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    STEPS.len() as u32
}

/// Reads the schema version stored in the file.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

/// Brings the schema up to [`latest_version`].
pub fn apply_migrations(conn: &mut Connection) -> DbResult<MigrationReport> {
    let found = schema_version(conn)?;
    let supported = latest_version();
    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }

    let report = MigrationReport {
        from: found,
        to: supported,
    };
    if !report.upgraded() {
        return Ok(report);
    }

    let tx = conn.transaction()?;
    for (index, sql) in STEPS.iter().enumerate().skip(found as usize) {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", index as u32 + 1)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={}",
        report.from, report.to
    );
    Ok(report)
}
