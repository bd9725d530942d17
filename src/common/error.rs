use crate::common::depth::Depth;
use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A user-supplied value violated a precondition. Fatal to the caller but
/// cleanly reported; `field` names the offending input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &str, reason: &str) -> Self {
        Self {
            field: String::from(field),
            reason: String::from(reason),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.reason)
    }
}

/// Failures of the deco calculations themselves, as opposed to input
/// validation done while building a plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecoCalculationError {
    Validation(ValidationError),
    /// A compartment was queried or updated before `set` / `equilibrium`.
    UninitializedCompartment,
    /// The ascent planner hit its iteration cap without reaching the
    /// surface; the ceiling stopped converging at `stuck_depth`.
    CannotPlanAscent { stuck_depth: Depth },
}

impl From<ValidationError> for DecoCalculationError {
    fn from(err: ValidationError) -> Self {
        DecoCalculationError::Validation(err)
    }
}

impl fmt::Display for DecoCalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecoCalculationError::Validation(err) => write!(f, "{err}"),
            DecoCalculationError::UninitializedCompartment => {
                write!(f, "compartment pressure not initialized")
            }
            DecoCalculationError::CannotPlanAscent { stuck_depth } => {
                write!(f, "cannot plan ascent to the surface, stuck at {stuck_depth}")
            }
        }
    }
}
