//! Command-line surface for the `homing` binary.
//!
//! With no positional arguments the binary evaluates [`DEMO_SEQUENCES`] and
//! prints one `true`/`false` per line. Logs go to stderr so stdout carries
//! only results.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use homing_core::DirectivePolicy;
use homing_eval::{DisplacementEvaluator, EvalConfig, TracingObserver};

/// Sequences evaluated when none are given on the command line.
pub const DEMO_SEQUENCES: [&str; 3] = [
    "LRUDRLDU",
    "LRUDRLD",
    "LRULLRRDDRUDLLLURRLRULLRRDDRUDLLLURR",
];

/// Check whether L/R/U/D move sequences return to the origin.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "homing", version)]
pub struct Cli {
    /// Sequences to evaluate. Defaults to the built-in demo sequences.
    pub sequences: Vec<String>,
    /// Fail on characters other than L, R, U and D instead of ignoring them.
    #[arg(long)]
    pub strict: bool,
    /// Fold long sequences on this many threads.
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,
    /// Print the net displacement next to each result.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Evaluator configuration selected by the flags.
    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            policy: if self.strict {
                DirectivePolicy::Strict
            } else {
                DirectivePolicy::Lenient
            },
            workers: Some(self.workers.unwrap_or(1)),
            ..EvalConfig::default()
        }
    }

    /// The sequences to evaluate, in order.
    pub fn sequences(&self) -> Vec<&str> {
        if self.sequences.is_empty() {
            DEMO_SEQUENCES.to_vec()
        } else {
            self.sequences.iter().map(String::as_str).collect()
        }
    }
}

/// Evaluate every sequence selected by `cli`, writing one line per result.
///
/// Stops at the first invalid directive under `--strict`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let evaluator =
        DisplacementEvaluator::new(cli.eval_config()).context("invalid evaluator configuration")?;
    tracing::debug!(
        policy = ?evaluator.policy(),
        workers = evaluator.workers(),
        "evaluator ready"
    );

    for sequence in cli.sequences() {
        let result = if evaluator.workers() > 1 {
            evaluator.displacement(sequence)
        } else {
            evaluator.displacement_observed(sequence, &mut TracingObserver)
        };
        let total = result.with_context(|| format!("evaluating {sequence:?}"))?;

        if cli.verbose {
            writeln!(out, "{} {total}", total.is_origin())?;
        } else {
            writeln!(out, "{}", total.is_origin())?;
        }
    }
    Ok(())
}
