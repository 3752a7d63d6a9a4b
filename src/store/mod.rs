//! Durable local record store: a string-keyed map of JSON records plus
//! named append-only lists, backed by SQLite.
//!
//! This is the only module that touches physical storage for attendance
//! and DPR data. Every write is a single statement or a single
//! transaction, so a failed commit leaves the prior state untouched.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use rusqlite::{OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub struct LocalRecordStore {
    pool: DbPool,
}

fn storage_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Storage(e.to_string())
}

impl LocalRecordStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open a store on the given database path, running migrations first.
    pub fn open(db_path: &str) -> AppResult<Self> {
        let pool = DbPool::new(db_path)?;
        crate::db::initialize::init_db(&pool.conn)?;
        Ok(Self::new(pool))
    }

    /// Read one record. A missing key is a valid outcome, not an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let raw: Option<String> = self
            .pool
            .conn
            .query_row("SELECT value FROM records WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(storage_err)?;

        match raw {
            Some(json) => {
                let value = serde_json::from_str(&json).map_err(storage_err)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Write one record, replacing any prior value for the key.
    /// Durable when this returns Ok.
    pub fn put<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value).map_err(storage_err)?;

        self.pool
            .conn
            .execute(
                "INSERT OR REPLACE INTO records (key, value) VALUES (?1, ?2)",
                params![key, json],
            )
            .map_err(storage_err)?;

        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM records WHERE key = ?1", [key])
            .map_err(storage_err)?;
        Ok(())
    }

    /// Empty the key/value namespace. Lists are deliberately untouched:
    /// clearing day-scoped state must never erase DPR history.
    pub fn clear(&mut self) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM records", [])
            .map_err(storage_err)?;
        Ok(())
    }

    /// Append one record to a named list and return its assigned position.
    /// Positions are dense and assigned in durability order; committed
    /// entries are never rewritten.
    pub fn append_to_list<T: Serialize>(&mut self, list: &str, record: &T) -> AppResult<i64> {
        let json = serde_json::to_string(record).map_err(storage_err)?;

        let tx = self.pool.conn.transaction().map_err(storage_err)?;

        let position: i64 = tx
            .query_row(
                "SELECT COALESCE(MAX(position), -1) + 1 FROM list_entries WHERE list = ?1",
                [list],
                |row| row.get(0),
            )
            .map_err(storage_err)?;

        tx.execute(
            "INSERT INTO list_entries (list, position, payload) VALUES (?1, ?2, ?3)",
            params![list, position, json],
        )
        .map_err(storage_err)?;

        tx.commit().map_err(storage_err)?;

        Ok(position)
    }

    /// Read a whole list in append order.
    pub fn read_list<T: DeserializeOwned>(&self, list: &str) -> AppResult<Vec<T>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached(
                "SELECT payload FROM list_entries WHERE list = ?1 ORDER BY position ASC",
            )
            .map_err(storage_err)?;

        let rows = stmt
            .query_map([list], |row| row.get::<_, String>(0))
            .map_err(storage_err)?;

        let mut out = Vec::new();
        for r in rows {
            let json = r.map_err(storage_err)?;
            out.push(serde_json::from_str(&json).map_err(storage_err)?);
        }
        Ok(out)
    }

    /// Access the underlying connection, e.g. for audit logging.
    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }
}
