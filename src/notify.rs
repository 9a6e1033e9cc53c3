// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::{Error, NotifyError};
use crate::models::{Account, TransactionRecord};
use crate::utils::{collapse_whitespace, group_thousands};
use chrono::NaiveDateTime;
use reqwest::blocking::Client;
use serde_json::json;
use tracing::debug;

const POSTED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

pub trait Notifier {
    fn notify(&self, account: &Account, record: &TransactionRecord) -> Result<(), Error>;
}

/// Posts `{"text": ...}` messages to an incoming-webhook URL.
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    client: Client,
    hook_url: String,
}

impl SlackNotifier {
    pub fn new(client: Client, hook_url: impl Into<String>) -> Self {
        Self {
            client,
            hook_url: hook_url.into(),
        }
    }

    fn post(&self, text: &str) -> Result<(), NotifyError> {
        let resp = self
            .client
            .post(&self.hook_url)
            .json(&json!({ "text": text }))
            .send()
            .map_err(NotifyError::Webhook)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(NotifyError::WebhookStatus(status));
        }
        Ok(())
    }
}

impl Notifier for SlackNotifier {
    fn notify(&self, account: &Account, record: &TransactionRecord) -> Result<(), Error> {
        let wrap = |source: NotifyError| Error::Notify {
            tran_id: record.tran_id.clone(),
            source,
        };
        let text = format_message(account, record).map_err(wrap)?;
        debug!(tran_id = %record.tran_id, "posting notification");
        self.post(&text).map_err(wrap)
    }
}

pub fn format_message(account: &Account, record: &TransactionRecord) -> Result<String, NotifyError> {
    let (icon, label) = if record.is_credit() {
        (":green_heart:", "Credit")
    } else {
        (":heart:", "Debit")
    };
    let posted = format_posted_date(&record.posted_date)?;
    let amount = format_amount(&record.amount)?;
    let line = format!(
        "{} New Unionbank {} {} {}: {} {} {} {} {} on {}",
        icon,
        account.name,
        label,
        record.tran_id,
        amount,
        record.currency,
        record.tran_description,
        record.remarks,
        record.remarks2,
        posted
    );
    Ok(collapse_whitespace(&line))
}

/// `2024-03-07T14:05:00.000` -> `3/7 14:05`
pub fn format_posted_date(raw: &str) -> Result<String, NotifyError> {
    let dt = NaiveDateTime::parse_from_str(raw, POSTED_DATE_FORMAT)
        .map_err(|err| NotifyError::PostedDate(raw.to_string(), err))?;
    Ok(dt.format("%-m/%-d %H:%M").to_string())
}

/// Two fraction digits with English digit grouping, e.g. `1,234.50`.
/// Rounding follows the binary value of the parsed `f64`.
pub fn format_amount(raw: &str) -> Result<String, NotifyError> {
    let amount: f64 = raw
        .parse()
        .map_err(|err| NotifyError::Amount(raw.to_string(), err))?;
    let fixed = format!("{:.2}", amount);
    if !amount.is_finite() {
        return Ok(fixed);
    }
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    Ok(format!("{}{}.{}", sign, group_thousands(int_part), frac_part))
}
