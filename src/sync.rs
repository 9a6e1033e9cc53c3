// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One pass over every stored account: token, fetch, store, notify.
//!
//! Accounts and their transactions are handled strictly in order. The first
//! error stops the whole run; accounts after the failing one are not touched.

use crate::bank::BankApi;
use crate::db;
use crate::errors::Error;
use crate::models::Account;
use crate::notify::Notifier;
use rusqlite::Connection;
use tracing::{debug, info};

pub struct SyncContext<'a, B: BankApi> {
    pub conn: &'a Connection,
    pub bank: &'a B,
    /// `None` unless `--notify` was given.
    pub notifier: Option<&'a dyn Notifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountSummary {
    pub account: String,
    pub fetched: usize,
    pub inserted: usize,
    pub notified: usize,
}

pub fn run<B: BankApi>(ctx: &SyncContext<'_, B>) -> Result<Vec<AccountSummary>, Error> {
    let accounts = db::list_accounts(ctx.conn)?;
    info!(count = accounts.len(), "loaded accounts");

    let mut summaries = Vec::with_capacity(accounts.len());
    for account in &accounts {
        let summary = sync_account(ctx, account)?;
        info!(
            account = %summary.account,
            fetched = summary.fetched,
            inserted = summary.inserted,
            notified = summary.notified,
            "account synced"
        );
        summaries.push(summary);
    }
    Ok(summaries)
}

pub fn sync_account<B: BankApi>(
    ctx: &SyncContext<'_, B>,
    account: &Account,
) -> Result<AccountSummary, Error> {
    let token = ctx.bank.fetch_access_token(account)?;
    let records = ctx.bank.fetch_transactions(account, &token)?;

    let mut summary = AccountSummary {
        account: account.name.clone(),
        fetched: records.len(),
        ..Default::default()
    };
    for record in &records {
        if !db::persist_if_new(ctx.conn, &account.id, record)? {
            continue;
        }
        debug!(tran_id = %record.tran_id, tran_type = %record.tran_type, "stored new transaction");
        summary.inserted += 1;

        if let Some(notifier) = ctx.notifier {
            notifier.notify(account, record)?;
            summary.notified += 1;
        }
    }
    Ok(summary)
}

pub fn summary_rows(summaries: &[AccountSummary]) -> Vec<Vec<String>> {
    summaries
        .iter()
        .map(|s| {
            vec![
                s.account.clone(),
                s.fetched.to_string(),
                s.inserted.to_string(),
                s.notified.to_string(),
            ]
        })
        .collect()
}
