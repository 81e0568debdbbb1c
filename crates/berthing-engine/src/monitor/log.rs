// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{monitor::simulation_monitor::SimulationMonitor, stats::BatchStatistics};
use berthing_model::{catalogue::Catalogue, scenario::ScenarioResult};
use std::time::Instant;

/// Reports batch progress as `tracing` events.
///
/// Each result is a `debug` event, and every `progress_interval` results an
/// `info` progress line is emitted.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    progress_interval: u64,
    start_time: Instant,
    expected_pairings: usize,
}

impl LogMonitor {
    /// Creates a monitor reporting progress every `progress_interval`
    /// results.
    ///
    /// # Panics
    ///
    /// Panics if `progress_interval` is zero.
    pub fn new(progress_interval: u64) -> Self {
        assert!(
            progress_interval > 0,
            "called `LogMonitor::new` with a zero progress interval"
        );
        Self {
            progress_interval,
            start_time: Instant::now(),
            expected_pairings: 0,
        }
    }

    #[inline]
    pub fn progress_interval(&self) -> u64 {
        self.progress_interval
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(progress_interval: {})", self.progress_interval)
    }
}

impl SimulationMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_batch(&mut self, catalogue: &Catalogue, _statistics: &BatchStatistics) {
        self.start_time = Instant::now();
        self.expected_pairings = catalogue.num_pairings();
        tracing::info!(
            vessels = catalogue.vessels().len(),
            berths = catalogue.berths().len(),
            load_cases = catalogue.load_cases().len(),
            fenders = catalogue.fenders().len(),
            pairings = self.expected_pairings,
            "berthing batch started"
        );
    }

    fn on_scenario(&mut self, result: &ScenarioResult, statistics: &BatchStatistics) {
        tracing::debug!(
            vessel = %result.vessel,
            berth = %result.berth,
            load_case = %result.load_case,
            fender = %result.fender,
            fender_energy = result.fender_energy,
            deflection = result.deflection,
            reaction = result.reaction,
            "scenario resolved"
        );
        if statistics.results_emitted % self.progress_interval == 0 {
            tracing::info!(
                results = statistics.results_emitted,
                pairings = statistics.pairings_evaluated,
                expected = self.expected_pairings,
                elapsed_s = self.start_time.elapsed().as_secs_f32(),
                "berthing batch progress"
            );
        }
    }

    fn on_exit_batch(&mut self, statistics: &BatchStatistics) {
        tracing::info!(
            pairings = statistics.pairings_evaluated,
            results = statistics.results_emitted,
            skipped = statistics.pairings_skipped,
            elapsed_s = statistics.time_total.as_secs_f32(),
            "berthing batch finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        let monitor = LogMonitor::default();
        assert_eq!(monitor.progress_interval(), 1000);
        assert_eq!(monitor.to_string(), "LogMonitor(progress_interval: 1000)");
    }

    #[test]
    #[should_panic(expected = "zero progress interval")]
    fn test_zero_interval_panics() {
        let _ = LogMonitor::new(0);
    }
}
