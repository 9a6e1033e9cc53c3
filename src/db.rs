// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::Error;
use crate::models::{Account, TransactionRecord};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, params};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Ubfeed", "ubfeed"));

/// Fallback location used when no database path is given on the command line.
pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("ubfeed.sqlite"))
}

pub fn open(path: &Path) -> Result<Connection, Error> {
    let conn = Connection::open(path).map_err(|err| Error::Open(path.to_path_buf(), err))?;
    init_schema(&conn).map_err(Error::Schema)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS accounts(
        id TEXT PRIMARY KEY,
        number TEXT NOT NULL,
        name TEXT NOT NULL,
        client_id TEXT NOT NULL,
        client_secret TEXT NOT NULL,
        username TEXT NOT NULL,
        password TEXT NOT NULL,
        partner_id TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS records(
        account_id TEXT NOT NULL,
        tran_id TEXT NOT NULL,
        tran_type TEXT NOT NULL,
        amount TEXT NOT NULL,
        currency TEXT NOT NULL,
        tran_date TEXT NOT NULL,
        remarks2 TEXT NOT NULL,
        remarks TEXT NOT NULL,
        balance_currency TEXT NOT NULL,
        posted_date TEXT NOT NULL,
        tran_description TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_records_tran ON records(tran_id, tran_type);
    "#,
    )
}

pub fn list_accounts(conn: &Connection) -> Result<Vec<Account>, Error> {
    let mut stmt = conn
        .prepare(
            "SELECT CAST(id AS TEXT), CAST(number AS TEXT), CAST(name AS TEXT),
                    CAST(client_id AS TEXT), CAST(client_secret AS TEXT),
                    CAST(username AS TEXT), CAST(password AS TEXT), CAST(partner_id AS TEXT)
             FROM accounts",
        )
        .map_err(Error::Store)?;
    let rows = stmt
        .query_map([], |r| {
            Ok(Account {
                id: r.get(0)?,
                number: r.get(1)?,
                name: r.get(2)?,
                client_id: r.get(3)?,
                client_secret: r.get(4)?,
                username: r.get(5)?,
                password: r.get(6)?,
                partner_id: r.get(7)?,
            })
        })
        .map_err(Error::Store)?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Error::Store)
}

/// Inserts `record` unless a row with the same (tran_id, tran_type) exists.
/// Returns whether a row was written.
pub fn persist_if_new(
    conn: &Connection,
    account_id: &str,
    record: &TransactionRecord,
) -> Result<bool, Error> {
    let changed = conn
        .execute(
            "INSERT INTO records(account_id, tran_id, tran_type, amount, currency, tran_date,
                                 remarks2, remarks, balance_currency, posted_date, tran_description)
             SELECT ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11
             WHERE NOT EXISTS (SELECT 1 FROM records WHERE tran_id=?2 AND tran_type=?3)",
            params![
                account_id,
                record.tran_id,
                record.tran_type,
                record.amount,
                record.currency,
                record.tran_date,
                record.remarks2,
                record.remarks,
                record.balance_currency,
                record.posted_date,
                record.tran_description,
            ],
        )
        .map_err(|source| Error::Persist {
            tran_id: record.tran_id.clone(),
            tran_type: record.tran_type.clone(),
            source,
        })?;
    Ok(changed > 0)
}
