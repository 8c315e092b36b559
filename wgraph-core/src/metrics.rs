//! Optional counters and histograms emitted through the `metrics` facade.
//!
//! With the `metrics` feature disabled every recorder compiles to nothing.

#[cfg(feature = "metrics")]
pub(crate) fn record_edge_mutation() {
    ::metrics::counter!("graph_edge_mutations").increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_edge_mutation() {}

#[cfg(feature = "metrics")]
#[expect(
    clippy::cast_precision_loss,
    reason = "histogram samples tolerate rounding above 2^52 edges"
)]
pub(crate) fn record_spanning_run(edges_tested: usize) {
    ::metrics::counter!("graph_mst_runs").increment(1);
    ::metrics::histogram!("graph_mst_edges_tested").record(edges_tested as f64);
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_spanning_run(_edges_tested: usize) {}
