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

//! Error taxonomy of a berthing batch.
//!
//! Every failure aborts the batch. `BerthingError` names the kind of failure
//! and carries a `ScenarioContext` identifying the catalogue entries that
//! were being evaluated, so the faulty entry can be found and corrected.

use berthing_curve::error::CurveError;
use berthing_model::error::ConfigurationError;

/// A physical quantity outside the range the formulas are valid for.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A dimension or factor that must be strictly positive is not.
    #[error("{quantity} must be positive, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },

    /// A quantity is NaN or infinite.
    #[error("{quantity} must be finite, got {value}")]
    NotFinite { quantity: &'static str, value: f64 },

    /// The water at the berth is not deeper than the vessel's draft.
    #[error("water depth {water_depth} ft does not exceed draft {draft} ft")]
    InsufficientWaterDepth { water_depth: f64, draft: f64 },

    /// The abnormal berthing factor is below 1.0.
    #[error("abnormal berthing factor must be at least 1.0, got {0}")]
    AbnormalFactorBelowOne(f64),
}

/// Returns `value` if it is finite and strictly positive.
#[inline]
pub(crate) fn ensure_positive(quantity: &'static str, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NotFinite { quantity, value });
    }
    if value <= 0.0 {
        return Err(DomainError::NonPositive { quantity, value });
    }
    Ok(value)
}

/// Returns `value` if it is finite.
#[inline]
pub(crate) fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NotFinite { quantity, value })
    }
}

/// A catalogue cross reference that does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataConsistencyError {
    #[error("vessel references unknown berth '{0}'")]
    UnknownBerth(String),

    #[error("berth references unknown fender '{0}'")]
    UnknownFender(String),

    #[error("fender family '{0}' has no registered curve")]
    UnregisteredFamily(String),
}

/// Identifies the scenario an error occurred in. Absent parts were not yet
/// known, or do not apply, when the error was raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioContext {
    pub vessel: Option<String>,
    pub berth: Option<String>,
    pub load_case: Option<String>,
    pub fender: Option<String>,
}

impl ScenarioContext {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_vessel(mut self, id: impl Into<String>) -> Self {
        self.vessel = Some(id.into());
        self
    }

    #[inline]
    pub fn with_berth(mut self, id: impl Into<String>) -> Self {
        self.berth = Some(id.into());
        self
    }

    #[inline]
    pub fn with_load_case(mut self, id: impl Into<String>) -> Self {
        self.load_case = Some(id.into());
        self
    }

    #[inline]
    pub fn with_fender(mut self, id: impl Into<String>) -> Self {
        self.fender = Some(id.into());
        self
    }

    /// Returns `true` if no part of the scenario is known.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vessel.is_none()
            && self.berth.is_none()
            && self.load_case.is_none()
            && self.fender.is_none()
    }
}

impl std::fmt::Display for ScenarioContext {
    /// Renders as ` [vessel 'V', berth 'B', ...]`, or nothing when empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let parts = [
            ("vessel", &self.vessel),
            ("berth", &self.berth),
            ("load case", &self.load_case),
            ("fender", &self.fender),
        ];
        write!(f, " [")?;
        let mut first = true;
        for (label, value) in parts {
            if let Some(value) = value {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{label} '{value}'")?;
                first = false;
            }
        }
        write!(f, "]")
    }
}

/// The four kinds of batch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Domain,
    CurveRange,
    DataConsistency,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "ConfigurationError"),
            ErrorKind::Domain => write!(f, "DomainError"),
            ErrorKind::CurveRange => write!(f, "CurveRangeError"),
            ErrorKind::DataConsistency => write!(f, "DataConsistencyError"),
        }
    }
}

/// A failure that aborts a berthing batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BerthingError {
    #[error("configuration error{context}: {source}")]
    Configuration {
        #[source]
        source: ConfigurationError,
        context: ScenarioContext,
    },

    #[error("domain error{context}: {source}")]
    Domain {
        #[source]
        source: DomainError,
        context: ScenarioContext,
    },

    #[error("curve range error{context}: {source}")]
    CurveRange {
        #[source]
        source: CurveError,
        context: ScenarioContext,
    },

    #[error("data consistency error{context}: {source}")]
    DataConsistency {
        #[source]
        source: DataConsistencyError,
        context: ScenarioContext,
    },
}

impl BerthingError {
    /// Returns the kind of failure.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            BerthingError::Configuration { .. } => ErrorKind::Configuration,
            BerthingError::Domain { .. } => ErrorKind::Domain,
            BerthingError::CurveRange { .. } => ErrorKind::CurveRange,
            BerthingError::DataConsistency { .. } => ErrorKind::DataConsistency,
        }
    }

    /// Returns the scenario the failure occurred in.
    #[inline]
    pub fn context(&self) -> &ScenarioContext {
        match self {
            BerthingError::Configuration { context, .. }
            | BerthingError::Domain { context, .. }
            | BerthingError::CurveRange { context, .. }
            | BerthingError::DataConsistency { context, .. } => context,
        }
    }

    /// Replaces the scenario context.
    #[inline]
    pub fn with_context(mut self, scenario: ScenarioContext) -> Self {
        match &mut self {
            BerthingError::Configuration { context, .. }
            | BerthingError::Domain { context, .. }
            | BerthingError::CurveRange { context, .. }
            | BerthingError::DataConsistency { context, .. } => *context = scenario,
        }
        self
    }
}

impl From<ConfigurationError> for BerthingError {
    fn from(source: ConfigurationError) -> Self {
        BerthingError::Configuration {
            source,
            context: ScenarioContext::default(),
        }
    }
}

impl From<DomainError> for BerthingError {
    fn from(source: DomainError) -> Self {
        BerthingError::Domain {
            source,
            context: ScenarioContext::default(),
        }
    }
}

impl From<DataConsistencyError> for BerthingError {
    fn from(source: DataConsistencyError) -> Self {
        BerthingError::DataConsistency {
            source,
            context: ScenarioContext::default(),
        }
    }
}

impl From<CurveError> for BerthingError {
    /// An unregistered family is a catalogue inconsistency and an invalid
    /// rating is a domain violation; everything else is a range failure.
    fn from(source: CurveError) -> Self {
        match source {
            CurveError::UnknownFamily(family) => {
                DataConsistencyError::UnregisteredFamily(family).into()
            }
            CurveError::InvalidRating { quantity, value } => {
                DomainError::NonPositive { quantity, value }.into()
            }
            source => BerthingError::CurveRange {
                source,
                context: ScenarioContext::default(),
            },
        }
    }
}
