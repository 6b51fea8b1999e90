//! Knight CLI - binary entry point.
//!
//! # Architecture
//!
//! stdin carries the judge's bootstrap and hints, stdout carries our jumps.
//! Logs go to stderr so they never interleave with the protocol stream.
//!
//! ```text
//! main() -> KnightConfig::load() -> init_tracing() -> play(stdin, stdout)
//!                                                        |
//!                                                        v
//!                                         SessionOutcome | GameError -> exit status
//! ```

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use knight_engine::{AxisPolicy, GameError, KnightConfig, SessionOutcome, play};

const DEFAULT_LOG_FILTER: &str = "info";

fn init_tracing(config: Option<&KnightConfig>) {
    let fallback = config
        .and_then(KnightConfig::log_filter)
        .unwrap_or(DEFAULT_LOG_FILTER);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(env_filter)
        .init();
}

fn run(policy: AxisPolicy) -> Result<SessionOutcome> {
    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());
    play(input, output, policy).context("knight session aborted")
}

fn report(outcome: SessionOutcome) {
    match outcome {
        SessionOutcome::Found { bomb, turns_used } => {
            tracing::info!(%bomb, turns_used, "Bomb defused");
        }
        // The session already warned with the remaining window.
        SessionOutcome::Exhausted { .. } => {}
        SessionOutcome::InputClosed {
            last_probe,
            turns_used,
        } => {
            tracing::info!(%last_probe, turns_used, "Input closed");
        }
    }
}

fn main() -> ExitCode {
    let loaded = KnightConfig::load();
    let config = loaded.as_ref().ok().and_then(Option::as_ref);
    init_tracing(config);

    // Config load happens before the subscriber exists, so repeat the failure here.
    if let Err(err) = &loaded {
        tracing::warn!("{err}; continuing with defaults");
    }

    let policy = KnightConfig::axis_policy(config);
    tracing::debug!(policy = policy.as_str(), "Axis policy selected");

    match run(policy) {
        Ok(outcome) => {
            report(outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let kind = err
                .downcast_ref::<GameError>()
                .map_or("internal", |game| game.kind().as_str());
            eprintln!("error[{kind}]: {err:#}");
            ExitCode::FAILURE
        }
    }
}
