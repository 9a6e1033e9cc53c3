// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

pub fn build_cli() -> Command {
    Command::new("ubfeed")
        .version(crate_version!())
        .about("Fetch new UnionBank transactions into SQLite and optionally post them to Slack")
        .arg(
            Arg::new("db")
                .value_name("DB")
                .help("Path to the SQLite database (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("notify")
                .long("notify")
                .action(ArgAction::SetTrue)
                .help("Post each newly stored transaction to Slack"),
        )
        .arg(
            Arg::new("proxy_url")
                .long("proxy-url")
                .env("PROXY_URL")
                .required(true)
                .help("Forward proxy for all outbound HTTP"),
        )
        .arg(
            Arg::new("slack_hook_url")
                .long("slack-hook-url")
                .env("SLACK_HOOK_URL")
                .required_if_eq("notify", "true")
                .help("Incoming webhook URL used with --notify"),
        )
}
