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

use crate::{enumerator::Pairing, stats::BatchStatistics};
use berthing_model::{catalogue::Catalogue, scenario::ScenarioResult};

/// Observer of a berthing batch.
pub trait SimulationMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called before the first pairing is evaluated.
    fn on_enter_batch(&mut self, catalogue: &Catalogue, statistics: &BatchStatistics);
    /// Called for every emitted scenario result.
    fn on_scenario(&mut self, result: &ScenarioResult, statistics: &BatchStatistics);
    /// Called for every pairing excluded by the applicability rule.
    fn on_skipped(&mut self, _pairing: &Pairing, _statistics: &BatchStatistics) {}
    /// Called after the last pairing of a completed batch.
    fn on_exit_batch(&mut self, statistics: &BatchStatistics);
}

impl std::fmt::Debug for dyn SimulationMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimulationMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn SimulationMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimulationMonitor({})", self.name())
    }
}
