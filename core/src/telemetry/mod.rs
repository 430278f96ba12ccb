//! telemetry/mod.rs
//! Counters, stage timers, and immutable snapshots for upload inspection.
//!
//! - Counters are plain values owned by one inspection; collaborators merge them.
//! - Snapshots are immutable and serialisable for reports and logs.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
