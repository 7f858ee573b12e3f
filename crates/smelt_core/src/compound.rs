//! Input material records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Element, Result, SmeltError};

/// Slack allowed on the composition sum so that e.g. `33.3 + 33.3 + 33.4`
/// is not rejected over float rounding.
const COMPOSITION_SUM_EPSILON: f64 = 1e-9;

/// One input material: a total weight and the percentage-by-weight of each
/// tracked element it contains.
///
/// Elements that were not supplied are not stored; downstream they read as
/// zero through `ElementTotals::mass`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compound {
    weight: f64,
    percentages: BTreeMap<Element, f64>,
}

impl Compound {
    /// Validates and builds a compound.
    ///
    /// Rejects a non-positive or non-finite weight, any percentage outside
    /// `[0, 100]`, and compositions whose percentages add up past 100.
    pub fn new(weight: f64, percentages: BTreeMap<Element, f64>) -> Result<Self> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(SmeltError::InvalidWeight {
                found: Some(weight),
            });
        }
        for (&element, &value) in &percentages {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(SmeltError::InvalidPercentage { element, value });
            }
        }
        let total: f64 = percentages.values().sum();
        if total > 100.0 + COMPOSITION_SUM_EPSILON {
            return Err(SmeltError::CompositionOverflow { total });
        }
        Ok(Self {
            weight,
            percentages,
        })
    }

    /// Builds a compound from raw `(symbol, percent)` pairs, as they arrive
    /// from files and prompts.
    ///
    /// A symbol given twice keeps its last value.
    pub fn from_symbols<'a, I>(weight: Option<f64>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let weight = weight.ok_or(SmeltError::InvalidWeight { found: None })?;
        let mut percentages = BTreeMap::new();
        for (symbol, value) in pairs {
            percentages.insert(symbol.parse::<Element>()?, value);
        }
        Self::new(weight, percentages)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn percentage(&self, element: Element) -> Option<f64> {
        self.percentages.get(&element).copied()
    }

    /// Absolute weight of each supplied element: `weight * percent / 100`.
    pub fn element_weights(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        self.percentages
            .iter()
            .map(move |(&element, &pct)| (element, self.weight * pct / 100.0))
    }
}
