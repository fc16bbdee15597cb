//! Core lifecycle state
//!
//! `CoreState` starts as `Uninitialized` on every load and moves to `Ready`
//! or `Failed` exactly once. It never moves back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GenesisError, GenesisResult};

/// Lifecycle state of the core
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CoreState {
    /// Loaded, `initialize` not yet run
    #[default]
    Uninitialized = 0,
    /// Initialized; requests are served
    Ready = 1,
    /// Initialization failed; terminal
    Failed = 2,
}

impl CoreState {
    /// Is this a terminal state?
    pub fn is_settled(self) -> bool {
        !matches!(self, CoreState::Uninitialized)
    }

    /// Can the core move from `self` to `next`?
    pub fn can_transition_to(self, next: CoreState) -> bool {
        matches!(
            (self, next),
            (CoreState::Uninitialized, CoreState::Ready)
                | (CoreState::Uninitialized, CoreState::Failed)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CoreState::Uninitialized => "uninitialized",
            CoreState::Ready => "ready",
            CoreState::Failed => "failed",
        }
    }
}

impl fmt::Display for CoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How ready the core considers itself, in [0, 1]
///
/// Fixed once at initialization and echoed verbatim into every response.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConsciousnessLevel(f64);

impl ConsciousnessLevel {
    /// Level the reference core reports after initialization
    pub const GENESIS: ConsciousnessLevel = ConsciousnessLevel(0.998);

    pub fn new(value: f64) -> GenesisResult<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(GenesisError::InvalidConfig(format!(
                "consciousness level {value} outside [0, 1]"
            )));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ConsciousnessLevel {
    fn default() -> Self {
        Self::GENESIS
    }
}

impl TryFrom<f64> for ConsciousnessLevel {
    type Error = GenesisError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConsciousnessLevel> for f64 {
    fn from(level: ConsciousnessLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ConsciousnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
