//! Melt / sublimate reconciliation.

use serde::Serialize;

use crate::{Phase, Result, SmeltError, SlagResult, SteinResult};

/// Where the input weight ends up: stein + slag (the melt) and the residual
/// lost as sublimates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MassBalance {
    pub total_weight: f64,
    pub stein_weight: f64,
    pub slag_weight: f64,
    pub melt_weight: f64,
    pub sublimates_weight: f64,
    pub stein_pct: f64,
    pub slag_pct: f64,
    pub melt_pct: f64,
    pub sublimates_pct: f64,
}

impl MassBalance {
    /// Stein % + slag % + sublimates %. Equals 100 up to float rounding.
    pub fn share_sum(&self) -> f64 {
        self.stein_pct + self.slag_pct + self.sublimates_pct
    }

    /// Stein + slag + sublimates, which should reproduce `total_weight`.
    pub fn weight_check(&self) -> f64 {
        self.stein_weight + self.slag_weight + self.sublimates_weight
    }
}

pub fn reconcile(total_weight: f64, stein: &SteinResult, slag: &SlagResult) -> Result<MassBalance> {
    if total_weight.abs() < crate::aggregate::MIN_MEANINGFUL_WEIGHT {
        return Err(SmeltError::DivisionByZero);
    }
    let melt_weight = stein.weight + slag.weight;
    if melt_weight > total_weight {
        return Err(SmeltError::MassBalanceExceeded {
            phase: Phase::Melt,
            weight: melt_weight,
            total_weight,
        });
    }
    let sublimates_weight = total_weight - stein.weight - slag.weight;
    let pct = |weight: f64| weight / total_weight * 100.0;

    Ok(MassBalance {
        total_weight,
        stein_weight: stein.weight,
        slag_weight: slag.weight,
        melt_weight,
        sublimates_weight,
        stein_pct: pct(stein.weight),
        slag_pct: pct(slag.weight),
        melt_pct: pct(melt_weight),
        sublimates_pct: pct(sublimates_weight),
    })
}
