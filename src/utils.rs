// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::Error;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use reqwest::Proxy;

const UA: &str = concat!("ubfeed/", env!("CARGO_PKG_VERSION"));

/// The one client shared by every request of a run, routed through `proxy_url`.
pub fn http_client(proxy_url: &str) -> Result<reqwest::blocking::Client, Error> {
    let proxy = Proxy::all(proxy_url).map_err(Error::Client)?;
    reqwest::blocking::Client::builder()
        .user_agent(UA)
        .proxy(proxy)
        .build()
        .map_err(Error::Client)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Inserts `,` every three digits of an unsigned integer string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
