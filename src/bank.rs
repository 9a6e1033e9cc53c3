// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! UnionBank partner API: password-grant token exchange and the
//! transaction list.

use crate::errors::Error;
use crate::models::{Account, TransactionRecord, TransactionsPage};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, error};

pub const BASE_URL: &str = "https://api.unionbankph.com";
const TOKEN_PATH: &str = "/ubp/external/partners/v1/oauth2/token";
const TRANSACTIONS_PATH: &str = "/ubp/external/portal/accounts/v1/transactions/paginate";

/// Only the first page is ever requested.
pub const PAGE_LIMIT: u32 = 500;

const TOKEN_SCOPE: &str = "account_inquiry";

/// The calls the sync loop makes against the bank.
pub trait BankApi {
    fn fetch_access_token(&self, account: &Account) -> Result<String, Error>;

    fn fetch_transactions(
        &self,
        account: &Account,
        token: &str,
    ) -> Result<Vec<TransactionRecord>, Error>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Clone)]
pub struct BankClient {
    client: Client,
    base_url: String,
}

impl BankClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn token_url(&self) -> String {
        format!("{}{}", self.base_url, TOKEN_PATH)
    }

    pub fn transactions_url(&self) -> String {
        format!("{}{}?limit={}", self.base_url, TRANSACTIONS_PATH, PAGE_LIMIT)
    }
}

impl BankApi for BankClient {
    fn fetch_access_token(&self, account: &Account) -> Result<String, Error> {
        let auth_err = |source: reqwest::Error| Error::Auth {
            account: account.name.clone(),
            source,
        };
        let form = [
            ("grant_type", "password"),
            ("client_id", account.client_id.as_str()),
            ("username", account.username.as_str()),
            ("password", account.password.as_str()),
            ("scope", TOKEN_SCOPE),
        ];
        debug!(account = %account.name, "requesting access token");
        let resp = self
            .client
            .post(self.token_url())
            .header(ACCEPT, "application/json")
            .form(&form[..])
            .send()
            .map_err(auth_err)?;
        let token: TokenResponse = resp.json().map_err(auth_err)?;
        Ok(token.access_token)
    }

    fn fetch_transactions(
        &self,
        account: &Account,
        token: &str,
    ) -> Result<Vec<TransactionRecord>, Error> {
        debug!(account = %account.name, "requesting transactions");
        let resp = self
            .client
            .get(self.transactions_url())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header("x-ibm-client-id", &account.client_id)
            .header("x-ibm-client-secret", &account.client_secret)
            .header("x-partner-id", &account.partner_id)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .map_err(|source| Error::Transport {
                account: account.name.clone(),
                source,
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().unwrap_or_default();
            error!(account = %account.name, %status, "{body}");
            return Err(Error::Remote {
                account: account.name.clone(),
                status,
                body,
            });
        }

        let page: TransactionsPage = resp.json().map_err(|source| Error::Decode {
            account: account.name.clone(),
            source,
        })?;
        Ok(page.records)
    }
}
