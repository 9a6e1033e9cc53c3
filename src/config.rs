// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use anyhow::{Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub notify: bool,
    pub proxy_url: String,
    pub slack_hook_url: Option<String>,
}

impl Config {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let db_path = match m.get_one::<String>("db") {
            Some(p) => PathBuf::from(p),
            None => db::db_path()?,
        };
        let notify = m.get_flag("notify");
        let Some(proxy_url) = m.get_one::<String>("proxy_url").cloned() else {
            bail!("PROXY_URL is not set");
        };
        let slack_hook_url = m.get_one::<String>("slack_hook_url").cloned();
        if notify && slack_hook_url.is_none() {
            bail!("SLACK_HOOK_URL is required with --notify");
        }
        Ok(Self {
            db_path,
            notify,
            proxy_url,
            slack_hook_url,
        })
    }
}
