// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;

use ubfeed::bank::BankClient;
use ubfeed::config::Config;
use ubfeed::notify::{Notifier, SlackNotifier};
use ubfeed::sync::{self, SyncContext};
use ubfeed::{cli, db, utils};

fn main() -> ExitCode {
    // RUST_LOG overrides the default INFO level.
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(env_filter)
        .init();

    let matches = cli::build_cli().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            for cause in err.chain().skip(1) {
                eprintln!("  Caused by: {cause}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let config = Config::from_matches(matches)?;
    let conn = db::open(&config.db_path)?;
    let client = utils::http_client(&config.proxy_url)?;

    let bank = BankClient::new(client.clone());
    let slack = match (config.notify, &config.slack_hook_url) {
        (true, Some(url)) => Some(SlackNotifier::new(client, url.as_str())),
        _ => None,
    };
    let ctx = SyncContext {
        conn: &conn,
        bank: &bank,
        notifier: slack.as_ref().map(|n| n as &dyn Notifier),
    };

    let summaries = sync::run(&ctx)
        .with_context(|| format!("Sync aborted for {}", config.db_path.display()))?;
    println!(
        "{}",
        utils::pretty_table(
            &["Account", "Fetched", "New", "Notified"],
            sync::summary_rows(&summaries)
        )
    );
    Ok(())
}
