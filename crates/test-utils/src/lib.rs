pub mod builders;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=trace cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Assert that `order` is a valid topological order of `dag`.
///
/// Every node must appear exactly once and every edge must point forward.
pub fn assert_valid_order(dag: &dagx::Dag, order: &[String]) {
    use std::collections::HashMap;

    assert_eq!(order.len(), dag.node_count(), "order length != node count");

    let position: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();
    assert_eq!(position.len(), order.len(), "order contains duplicates: {order:?}");

    for id in dag.nodes() {
        assert!(position.contains_key(id), "node {id} missing from {order:?}");
    }
    for edge in dag.edges() {
        let from = position[edge.from];
        let to = position[edge.to];
        assert!(
            from < to,
            "edge {} -> {} points backwards in {order:?}",
            edge.from,
            edge.to
        );
    }
}
