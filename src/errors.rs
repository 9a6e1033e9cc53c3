// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure that can abort a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to open database at `{0:?}`")]
    Open(PathBuf, #[source] rusqlite::Error),

    #[error("Unable to prepare database schema")]
    Schema(#[source] rusqlite::Error),

    #[error("Unable to read accounts from the store")]
    Store(#[source] rusqlite::Error),

    #[error("Unable to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Token request failed for account `{account}`")]
    Auth {
        account: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Transaction request failed for account `{account}`")]
    Transport {
        account: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Transaction request for account `{account}` returned {status}: {body}")]
    Remote {
        account: String,
        status: StatusCode,
        body: String,
    },

    #[error("Malformed transaction list for account `{account}`")]
    Decode {
        account: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unable to store transaction `{tran_id}` ({tran_type})")]
    Persist {
        tran_id: String,
        tran_type: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Unable to notify transaction `{tran_id}`")]
    Notify {
        tran_id: String,
        #[source]
        source: NotifyError,
    },
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Invalid posted date `{0}`")]
    PostedDate(String, #[source] chrono::ParseError),

    #[error("Invalid amount `{0}`")]
    Amount(String, #[source] std::num::ParseFloatError),

    #[error("Webhook request failed")]
    Webhook(#[source] reqwest::Error),

    #[error("Webhook returned {0}")]
    WebhookStatus(StatusCode),
}
