//! Query layer: fixed business questions over catalog, customer, and order
//! snapshots.
//!
//! Every operation is a single pipeline (filter, transform, terminal
//! reduction) over immutable snapshots obtained from the repositories at call
//! start. Operations share no state and are independently testable.

pub mod service;
pub mod statistics;

pub use service::{QueryError, QueryService};
pub use statistics::PriceStatistics;
