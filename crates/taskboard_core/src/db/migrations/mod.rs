//! Table layout upgrades for the collection store.
//!
//! Each step is an SQL script tagged with the layout number it produces; the
//! file's current number lives in `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// Ordered `(layout, script)` pairs; layouts strictly increase.
const LAYOUT_STEPS: &[(u32, &str)] = &[(1, include_str!("0001_collections.sql"))];

/// Layout number this build writes.
pub fn latest_version() -> u32 {
    LAYOUT_STEPS.last().map_or(0, |(layout, _)| *layout)
}

/// Brings the store file up to [`latest_version`] in one transaction.
///
/// A file already at the latest layout is left untouched.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let on_disk = stored_layout(conn)?;
    let latest = latest_version();

    if on_disk > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: on_disk,
            latest_supported: latest,
        });
    }
    if on_disk == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (layout, script) in LAYOUT_STEPS.iter().filter(|(layout, _)| *layout > on_disk) {
        tx.execute_batch(script)?;
        tx.pragma_update(None, "user_version", layout)?;
    }
    tx.commit()?;

    info!("event=store_upgrade module=db status=ok from={on_disk} to={latest}");
    Ok(())
}

fn stored_layout(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
