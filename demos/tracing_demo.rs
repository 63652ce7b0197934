//! Demonstrates tracing integration with aggregators
//!
//! Run with: cargo run --example tracing_demo --features tracing

use routine::aggregate::tracing::AggregatorTracingExt;
use routine::aggregate::{aggregate_split, and_then, counting, to_vec};
use routine::{grouping_to, Either};

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let lines = ["42", "oops", "7", "", "13"];
    let parsed = lines.iter().map(|raw| {
        Either::from_result(raw.parse::<i64>().map_err(|e| format!("{raw:?}: {e}")))
    });

    let agg = grouping_to(
        counting().instrument(tracing::info_span!("errors")),
        and_then(to_vec(), |values: Vec<i64>| values.iter().sum::<i64>())
            .instrument(tracing::info_span!("values")),
    )
    .instrument(tracing::info_span!("parse_batch", lines = lines.len()));

    let result = aggregate_split(parsed, 2, &agg);
    tracing::info!(
        errors = result.left(),
        total = result.right(),
        "Batch aggregated"
    );
}
