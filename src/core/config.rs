//! Engine configuration.
//!
//! - `ScoringConfig`: stat weights and multiplier factors
//! - `ParserConfig`: payload acceptance policy
//!
//! Both deserialize from any serde format so a host service can load them
//! alongside its own settings. Defaults reproduce the standard rules.

use serde::{Deserialize, Serialize};

use super::card::Multiplier;
use super::error::ConfigError;

/// Stat weights and multiplier factors used by the scoring engine.
///
/// Base score is
/// `kills * kill_weight + assists * assist_weight - deaths * death_penalty
///  + floor(cs / cs_divisor) + floor(gold / gold_divisor)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub kill_weight: i64,
    pub assist_weight: i64,
    pub death_penalty: i64,

    /// Creep score needed per point.
    pub cs_divisor: i64,

    /// Gold needed per point.
    pub gold_divisor: i64,

    pub captain_factor: f64,
    pub vice_captain_factor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            kill_weight: 3,
            assist_weight: 2,
            death_penalty: 1,
            cs_divisor: 10,
            gold_divisor: 500,
            captain_factor: 2.0,
            vice_captain_factor: 1.5,
        }
    }
}

impl ScoringConfig {
    /// Factor applied for a multiplier label (1.0 when absent).
    #[must_use]
    pub fn factor(&self, multiplier: Option<Multiplier>) -> f64 {
        match multiplier {
            Some(Multiplier::Captain) => self.captain_factor,
            Some(Multiplier::ViceCaptain) => self.vice_captain_factor,
            None => 1.0,
        }
    }

    pub fn with_kill_weight(mut self, weight: i64) -> Self {
        self.kill_weight = weight;
        self
    }

    pub fn with_assist_weight(mut self, weight: i64) -> Self {
        self.assist_weight = weight;
        self
    }

    pub fn with_death_penalty(mut self, penalty: i64) -> Self {
        self.death_penalty = penalty;
        self
    }

    pub fn with_cs_divisor(mut self, divisor: i64) -> Self {
        self.cs_divisor = divisor;
        self
    }

    pub fn with_gold_divisor(mut self, divisor: i64) -> Self {
        self.gold_divisor = divisor;
        self
    }

    pub fn with_captain_factor(mut self, factor: f64) -> Self {
        self.captain_factor = factor;
        self
    }

    pub fn with_vice_captain_factor(mut self, factor: f64) -> Self {
        self.vice_captain_factor = factor;
        self
    }

    /// Reject divisors that would divide by zero and unusable factors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("cs_divisor", self.cs_divisor), ("gold_divisor", self.gold_divisor)] {
            if value <= 0 {
                return Err(ConfigError::InvalidDivisor { field, value });
            }
        }
        for (field, value) in [
            ("captain_factor", self.captain_factor),
            ("vice_captain_factor", self.vice_captain_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidFactor { field, value });
            }
        }
        Ok(())
    }
}

/// Payload acceptance policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Keep client-supplied `tournamentPoints`. When false they are stripped,
    /// leaving the field for the scoring engine alone to populate.
    pub accept_tournament_points: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            accept_tournament_points: true,
        }
    }
}

impl ParserConfig {
    pub fn with_accept_tournament_points(mut self, accept: bool) -> Self {
        self.accept_tournament_points = accept;
        self
    }
}
