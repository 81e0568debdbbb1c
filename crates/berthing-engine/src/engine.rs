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

use crate::{
    aggregate::ResultSet,
    config::{EngineConfig, EngineConfigError},
    enumerator::ScenarioEnumerator,
    error::{BerthingError, ScenarioContext},
    monitor::{no_op::NoOpMonitor, simulation_monitor::SimulationMonitor},
    stats::BatchStatistics,
    velocity::BerthingVelocityModel,
};
use berthing_curve::{registry::CurveRegistry, resolver::FenderCurveResolver};
use berthing_model::{berth::ExposureCondition, catalogue::Catalogue};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// The results and statistics of a completed batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub results: ResultSet,
    pub statistics: BatchStatistics,
}

impl BatchOutcome {
    #[inline]
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    #[inline]
    pub fn statistics(&self) -> &BatchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_parts(self) -> (ResultSet, BatchStatistics) {
        (self.results, self.statistics)
    }
}

impl std::fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.results, self.statistics)
    }
}

/// One row of an approach velocity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityRow {
    pub vessel: String,
    /// Displacement (long tons).
    pub displacement: f64,
    /// Characteristic berthing velocity (ft/s).
    pub velocity: f64,
}

/// Computes berthing energy demand for every scenario of a catalogue and
/// resolves it against the fender curves.
///
/// The engine holds no per-batch state: one engine can run any number of
/// catalogues, and each run is a pure function of its catalogue.
///
/// # Examples
///
/// ```rust
/// # use berthing_engine::engine::BerthingEngine;
/// # use berthing_model::catalogue::CatalogueBuilder;
/// let engine = BerthingEngine::default();
/// let catalogue = CatalogueBuilder::new().build().unwrap();
/// let outcome = engine.run(&catalogue).unwrap();
/// assert!(outcome.results.is_empty());
/// ```
#[derive(Debug)]
pub struct BerthingEngine {
    config: EngineConfig,
    registry: CurveRegistry,
    velocity_model: BerthingVelocityModel,
}

impl Default for BerthingEngine {
    /// Default configuration with the built-in fender curves.
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            registry: CurveRegistry::standard(),
            velocity_model: BerthingVelocityModel::default(),
        }
    }
}

impl BerthingEngine {
    /// Creates an engine after validating `config`.
    pub fn new(config: EngineConfig, registry: CurveRegistry) -> Result<Self, EngineConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            registry,
            velocity_model: BerthingVelocityModel::default(),
        })
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn registry(&self) -> &CurveRegistry {
        &self.registry
    }

    #[inline]
    pub fn velocity_model(&self) -> &BerthingVelocityModel {
        &self.velocity_model
    }

    /// A resolver over this engine's curves and root search.
    #[inline]
    pub fn resolver(&self) -> FenderCurveResolver<'_> {
        FenderCurveResolver::new(&self.registry, self.config.root_search.to_search())
    }

    /// Runs a batch over `catalogue`.
    #[inline]
    pub fn run(&self, catalogue: &Catalogue) -> Result<BatchOutcome, BerthingError> {
        self.run_with_monitor(catalogue, &mut NoOpMonitor::new())
    }

    /// Runs a batch over `catalogue`, reporting to `monitor`.
    ///
    /// Stops at the first error; no partial results are returned.
    pub fn run_with_monitor(
        &self,
        catalogue: &Catalogue,
        monitor: &mut dyn SimulationMonitor,
    ) -> Result<BatchOutcome, BerthingError> {
        let span = tracing::info_span!(
            "berthing_batch",
            vessels = catalogue.vessels().len(),
            pairings = catalogue.num_pairings(),
            monitor = monitor.name(),
        );
        let _guard = span.enter();

        let start = Instant::now();
        let mut statistics = BatchStatistics::default();
        let mut results = ResultSet::for_catalogue(catalogue);
        let enumerator = ScenarioEnumerator::new(
            catalogue,
            self.resolver(),
            &self.velocity_model,
            &self.config,
        );

        monitor.on_enter_batch(catalogue, &statistics);

        for pairing in enumerator.pairings() {
            let pairing = pairing.inspect_err(|err| tracing::error!(%err, "batch aborted"))?;
            statistics.on_pairing();

            match enumerator.evaluate(&pairing) {
                Ok(Some(result)) => {
                    statistics.on_result();
                    monitor.on_scenario(&result, &statistics);
                    results.push(pairing.fender, result);
                }
                Ok(None) => {
                    statistics.on_skipped();
                    tracing::trace!(%pairing, "skipped by applicability rule");
                    monitor.on_skipped(&pairing, &statistics);
                }
                Err(err) => {
                    tracing::error!(%err, "batch aborted");
                    return Err(err);
                }
            }
        }

        statistics.set_total_time(start.elapsed());
        monitor.on_exit_batch(&statistics);
        tracing::debug!(
            results = statistics.results_emitted,
            skipped = statistics.pairings_skipped,
            "berthing batch complete"
        );

        Ok(BatchOutcome {
            results,
            statistics,
        })
    }

    /// Characteristic berthing velocity of every vessel at `condition`, in
    /// catalogue order.
    pub fn velocity_table(
        &self,
        catalogue: &Catalogue,
        condition: ExposureCondition,
    ) -> Result<Vec<VelocityRow>, BerthingError> {
        catalogue
            .vessels()
            .iter()
            .map(|(_, id, vessel)| {
                let velocity = self
                    .velocity_model
                    .velocity(vessel.displacement, condition)
                    .map_err(|err| {
                        BerthingError::from(err).with_context(ScenarioContext::new().with_vessel(id))
                    })?;
                Ok(VelocityRow {
                    vessel: id.to_owned(),
                    displacement: vessel.displacement,
                    velocity,
                })
            })
            .collect()
    }
}
