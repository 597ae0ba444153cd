//! Collection repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map each `CollectionKey` to one JSON document in the `collections` table.
//! - Keep SQL and JSON details inside the persistence boundary.
//!
//! # Invariants
//! - `save` replaces the whole document for its key.
//! - An absent key loads as an empty collection (or no current user).
//! - Multiple keys are never written in one transaction.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::user::User;
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Named record in the durable store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Boards,
    Columns,
    Tasks,
    Users,
    CurrentUser,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 5] = [
        Self::Boards,
        Self::Columns,
        Self::Tasks,
        Self::Users,
        Self::CurrentUser,
    ];

    /// Storage key as written to the `collections` table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boards => "taskboard_boards",
            Self::Columns => "taskboard_columns",
            Self::Tasks => "taskboard_tasks",
            Self::Users => "taskboard_users",
            Self::CurrentUser => "taskboard_current_user",
        }
    }
}

impl Display for CollectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from collection persistence.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Payload could not be encoded or decoded as JSON.
    Serialization {
        key: CollectionKey,
        message: String,
    },
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization { key, message } => {
                write!(f, "invalid payload for `{key}`: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "collection repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "collection repository requires table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization { .. } => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key/document storage for entity collections.
///
/// Implementors only move raw JSON documents; the typed helpers are provided.
pub trait CollectionRepository {
    /// Reads the raw document stored under `key`, if any.
    fn read_payload(&self, key: CollectionKey) -> RepoResult<Option<String>>;
    /// Overwrites the raw document stored under `key`.
    fn write_payload(&self, key: CollectionKey, payload: &str) -> RepoResult<()>;

    /// Loads a collection; an absent key yields an empty vector.
    fn load<T: DeserializeOwned>(&self, key: CollectionKey) -> RepoResult<Vec<T>>
    where
        Self: Sized,
    {
        match self.read_payload(key)? {
            Some(payload) => decode(key, &payload),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrites a collection with `items`.
    fn save<T: Serialize>(&self, key: CollectionKey, items: &[T]) -> RepoResult<()>
    where
        Self: Sized,
    {
        let payload = encode(key, &items)?;
        self.write_payload(key, &payload)
    }

    /// Loads the active user, if one was stored.
    fn load_current_user(&self) -> RepoResult<Option<User>>
    where
        Self: Sized,
    {
        let key = CollectionKey::CurrentUser;
        match self.read_payload(key)? {
            Some(payload) => decode::<Option<User>>(key, &payload),
            None => Ok(None),
        }
    }

    /// Stores the active user.
    fn save_current_user(&self, user: &User) -> RepoResult<()>
    where
        Self: Sized,
    {
        let key = CollectionKey::CurrentUser;
        let payload = encode(key, user)?;
        self.write_payload(key, &payload)
    }
}

impl<R: CollectionRepository> CollectionRepository for &R {
    fn read_payload(&self, key: CollectionKey) -> RepoResult<Option<String>> {
        (**self).read_payload(key)
    }

    fn write_payload(&self, key: CollectionKey, payload: &str) -> RepoResult<()> {
        (**self).write_payload(key, payload)
    }
}

/// SQLite-backed collection repository.
pub struct SqliteCollectionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCollectionRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_collection_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CollectionRepository for SqliteCollectionRepository<'_> {
    fn read_payload(&self, key: CollectionKey) -> RepoResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload
                 FROM collections
                 WHERE key = ?1;",
                [key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn write_payload(&self, key: CollectionKey, payload: &str) -> RepoResult<()> {
        let result = self.conn.execute(
            "INSERT INTO collections (key, payload, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![key.as_str(), payload],
        );

        match result {
            Ok(_) => {
                debug!(
                    "event=collection_save module=repo status=ok key={} bytes={}",
                    key,
                    payload.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=collection_save module=repo status=error key={} error={}",
                    key, err
                );
                Err(err.into())
            }
        }
    }
}

fn encode<T: Serialize + ?Sized>(key: CollectionKey, value: &T) -> RepoResult<String> {
    serde_json::to_string(value).map_err(|err| RepoError::Serialization {
        key,
        message: err.to_string(),
    })
}

fn decode<T: DeserializeOwned>(key: CollectionKey, payload: &str) -> RepoResult<T> {
    serde_json::from_str(payload).map_err(|err| RepoError::Serialization {
        key,
        message: err.to_string(),
    })
}

fn ensure_collection_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'collections'
        );",
        [],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(RepoError::MissingRequiredTable("collections"));
    }

    Ok(())
}
