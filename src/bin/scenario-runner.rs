// Copyright (c) 2025 - Cowboy AI, Inc.
//! Scenario Runner
//!
//! Replays scripted command sequences against fresh models and logs whether
//! every contract and invariant held.
//!
//! Run with: cargo run --bin scenario-runner [scenarios.json]
//!
//! Without an argument the built-in reference scenarios are replayed.
//! Exits non-zero when a scenario fails a check.
//! Driver settings come from `PBT_*` environment variables, log filtering
//! from `RUST_LOG`.

use anyhow::{bail, Context, Result};
use pbt_kata::scenarios::{builtin_scenarios, load_scenarios, run_all};
use pbt_kata::{Driver, DriverConfig};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = DriverConfig::from_env().context("Invalid PBT_* configuration")?;
    info!(?config, "Driver configuration loaded");

    let scenarios = match std::env::args().nth(1) {
        Some(path) => load_scenarios(&path)
            .with_context(|| format!("Failed to load scenarios from {}", path))?,
        None => builtin_scenarios(),
    };

    let driver = Driver::new(config);
    let outcomes = run_all(&scenarios, &driver);
    let mut failing = 0;

    for (scenario, outcome) in scenarios.iter().zip(&outcomes) {
        match &outcome.failure {
            None => info!(
                scenario = %outcome.name,
                model = scenario.model(),
                steps = outcome.steps,
                state = %outcome.final_state,
                "✅ all checks held"
            ),
            Some(failure) => {
                failing += 1;
                warn!(
                    scenario = %outcome.name,
                    model = scenario.model(),
                    steps = outcome.steps,
                    state = %outcome.final_state,
                    %failure,
                    "❌ check failed"
                );
            }
        }
    }

    info!(
        total = scenarios.len(),
        failing,
        "Scenario replay complete"
    );

    if failing > 0 {
        bail!("{} of {} scenarios failed", failing, scenarios.len());
    }

    Ok(())
}
