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

//! Fan‑out monitor.
//!
//! `CompositeMonitor` forwards every event to its children in insertion
//! order, so logging, recording and custom hooks can be combined without
//! coupling them to the engine.

use crate::{
    enumerator::Pairing, monitor::simulation_monitor::SimulationMonitor, stats::BatchStatistics,
};
use berthing_model::{catalogue::Catalogue, scenario::ScenarioResult};

/// A monitor that forwards events to all of its children.
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn SimulationMonitor + 'a>>,
}

impl Default for CompositeMonitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeMonitor<'a> {
    /// Creates a new empty `CompositeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with space for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SimulationMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SimulationMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn SimulationMonitor + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn SimulationMonitor + 'a>> for CompositeMonitor<'a> {
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SimulationMonitor + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for CompositeMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}

impl SimulationMonitor for CompositeMonitor<'_> {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_batch(&mut self, catalogue: &Catalogue, statistics: &BatchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enter_batch(catalogue, statistics);
        }
    }

    fn on_scenario(&mut self, result: &ScenarioResult, statistics: &BatchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_scenario(result, statistics);
        }
    }

    fn on_skipped(&mut self, pairing: &Pairing, statistics: &BatchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_skipped(pairing, statistics);
        }
    }

    fn on_exit_batch(&mut self, statistics: &BatchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_batch(statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOpMonitor;
    use std::{cell::RefCell, rc::Rc};

    struct Recorder {
        tag: &'static str,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl SimulationMonitor for Recorder {
        fn name(&self) -> &str {
            self.tag
        }

        fn on_enter_batch(&mut self, _catalogue: &Catalogue, _statistics: &BatchStatistics) {
            self.events.borrow_mut().push(format!("{}:enter", self.tag));
        }

        fn on_scenario(&mut self, _result: &ScenarioResult, _statistics: &BatchStatistics) {
            self.events.borrow_mut().push(format!("{}:scenario", self.tag));
        }

        fn on_exit_batch(&mut self, _statistics: &BatchStatistics) {
            self.events.borrow_mut().push(format!("{}:exit", self.tag));
        }
    }

    #[test]
    fn test_forwards_in_insertion_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeMonitor::with_capacity(2);
        composite.add_monitor(Recorder {
            tag: "a",
            events: Rc::clone(&events),
        });
        composite.add_monitor(Recorder {
            tag: "b",
            events: Rc::clone(&events),
        });

        let catalogue = berthing_model::catalogue::CatalogueBuilder::new()
            .build()
            .unwrap();
        let stats = BatchStatistics::default();
        composite.on_enter_batch(&catalogue, &stats);
        composite.on_exit_batch(&stats);

        assert_eq!(
            *events.borrow(),
            vec!["a:enter", "b:enter", "a:exit", "b:exit"]
        );
    }

    #[test]
    fn test_from_iter_and_debug() {
        let composite: CompositeMonitor<'_> = vec![
            Box::new(NoOpMonitor::new()) as Box<dyn SimulationMonitor>,
            Box::new(NoOpMonitor::new()),
        ]
        .into_iter()
        .collect();
        assert_eq!(composite.len(), 2);
        assert!(!composite.is_empty());
        assert_eq!(format!("{composite:?}"), r#"["NoOpMonitor", "NoOpMonitor"]"#);
    }
}
