// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub number: String,
    pub name: String,
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub partner_id: String,
}

/// One entry of the partner's transaction list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionRecord {
    #[serde(deserialize_with = "null_as_empty")]
    pub tran_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub tran_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub amount: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub tran_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub remarks2: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub remarks: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub balance_currency: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub posted_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub tran_description: String,
}

impl TransactionRecord {
    pub fn is_credit(&self) -> bool {
        self.tran_type == "C"
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TransactionsPage {
    #[serde(rename = "Records", alias = "records", default)]
    pub records: Vec<TransactionRecord>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
