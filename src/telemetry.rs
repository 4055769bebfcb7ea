// SPDX-License-Identifier: PMPL-1.0-or-later

//! Log output for the command-line tool
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to binaries. The filter comes from `TOUR_I18N_LOG` (standard `EnvFilter`
//! syntax), defaulting to `warn`, or `debug` with `--verbose`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TOUR_I18N_LOG";

pub fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose { "tour_i18n=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
