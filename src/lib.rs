// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod bank;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod notify;
pub mod sync;
pub mod utils;

pub use errors::{Error, NotifyError};
