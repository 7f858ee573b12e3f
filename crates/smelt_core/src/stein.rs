//! Stein (matte) phase estimate.
//!
//! Copper, iron and sulfur split between stein and the rest of the furnace by
//! fixed recovery fractions. The stein weight is the retained Cu + Fe + S;
//! gold and silver follow the stein but are reported as a concentration only.

use serde::Serialize;

use crate::{
    aggregate::MIN_MEANINGFUL_WEIGHT, Element, ElementTotals, Phase, Result, SmeltError,
    SmeltingConstants,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SteinResult {
    pub weight: f64,
    pub cu_mass: f64,
    pub fe_mass: f64,
    pub s_mass: f64,
    pub au_mass: f64,
    pub ag_mass: f64,
    pub cu_pct: f64,
    pub fe_pct: f64,
    pub s_pct: f64,
    pub au_ppm: f64,
    pub ag_ppm: f64,
}

/// Estimates what reports to the stein.
///
/// Elements absent from `totals` contribute nothing. A feed without any
/// Cu, Fe or S yields an empty stein whose percentages and ppm values are all
/// zero. A stein heavier than `total_weight` is an error, not clamped.
pub fn materials_in_stein(
    totals: &ElementTotals,
    total_weight: f64,
    constants: &SmeltingConstants,
) -> Result<SteinResult> {
    let cu_mass = totals.mass(Element::Cu) * constants.cu_to_stein;
    let fe_mass = totals.mass(Element::Fe) * constants.fe_to_stein;
    let s_mass = totals.mass(Element::S) * constants.s_to_stein;
    let au_mass = totals.mass(Element::Au) * constants.au_to_stein;
    let ag_mass = totals.mass(Element::Ag) * constants.ag_to_stein;

    let weight = cu_mass + fe_mass + s_mass;
    if weight > total_weight {
        return Err(SmeltError::MassBalanceExceeded {
            phase: Phase::Stein,
            weight,
            total_weight,
        });
    }

    let share = |mass: f64, scale: f64| {
        if weight < MIN_MEANINGFUL_WEIGHT {
            0.0
        } else {
            mass / weight * scale
        }
    };

    Ok(SteinResult {
        weight,
        cu_mass,
        fe_mass,
        s_mass,
        au_mass,
        ag_mass,
        cu_pct: share(cu_mass, 100.0),
        fe_pct: share(fe_mass, 100.0),
        s_pct: share(s_mass, 100.0),
        au_ppm: share(au_mass, 1e6),
        ag_ppm: share(ag_mass, 1e6),
    })
}
