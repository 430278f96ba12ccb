//! telemetry/snapshot.rs
//!
//! Immutable view of counters and stage timings at the end of an inspection.

use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};
use crate::utils::reduction_percent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub counters: TelemetryCounters,
    /// Share of input bytes removed by stripping, in percent.
    pub reduction_percent: f64,
    /// Input bytes inspected per second of wall time.
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let reduction = if counters.bytes_output > 0 {
            reduction_percent(counters.bytes_input as usize, counters.bytes_output as usize)
        } else {
            0.0
        };

        let elapsed = timer.elapsed();
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_input as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            reduction_percent: reduction,
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Internal invariants: output never exceeds input, stages fit in elapsed.
    pub fn sanity_check(&self) -> bool {
        self.counters.bytes_output <= self.counters.bytes_input
            && (0.0..=100.0).contains(&self.reduction_percent)
            && self.total_stage_time() <= self.elapsed
    }
}
