//! Error type for the calculation pipeline.

use crate::Element;

/// Phase whose computed weight is checked against the total input weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Stein,
    Slag,
    Melt,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Stein => "stein",
            Phase::Slag => "slag",
            Phase::Melt => "melt",
        })
    }
}

/// Every way a calculation run can be rejected.
///
/// All variants are raised before any result is handed back; the pipeline
/// never returns partial output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SmeltError {
    /// Weight missing, zero, negative or not finite.
    #[error("compound weight must be a positive finite number, found {}", describe_weight(.found))]
    InvalidWeight { found: Option<f64> },

    #[error("unknown element symbol '{0}'")]
    UnknownElement(String),

    #[error("percentage for {element} must be within [0, 100], found {value}")]
    InvalidPercentage { element: Element, value: f64 },

    /// Supplied percentages of a single compound add up to more than 100.
    #[error("compound percentages sum to {total}, which exceeds 100")]
    CompositionOverflow { total: f64 },

    #[error("no compounds supplied for calculation")]
    EmptyInput,

    #[error("malformed batch input: {0}")]
    MalformedBatch(String),

    #[error("total weight is zero, element percentages are undefined")]
    DivisionByZero,

    /// A phase came out heavier than everything that went into the furnace.
    #[error("{phase} weight {weight} exceeds total input weight {total_weight}")]
    MassBalanceExceeded {
        phase: Phase,
        weight: f64,
        total_weight: f64,
    },

    #[error("process constant '{name}' has invalid value {value}")]
    InvalidConstant { name: &'static str, value: f64 },

    /// Every compound weight is finite but their sum is not.
    #[error("total input weight overflows to {total}")]
    TotalWeightOverflow { total: f64 },
}

fn describe_weight(found: &Option<f64>) -> String {
    match found {
        Some(weight) => weight.to_string(),
        None => "nothing".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, SmeltError>;
