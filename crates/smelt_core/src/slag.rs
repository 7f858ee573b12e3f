//! Slag phase estimate.

use serde::Serialize;

use crate::{
    aggregate::MIN_MEANINGFUL_WEIGHT, Element, ElementTotals, Phase, Result, SmeltError,
    SmeltingConstants, SteinResult,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlagResult {
    pub weight: f64,
    pub sio2_mass: f64,
    pub cao_mass: f64,
    pub al2o3_mass: f64,
    pub feo_mass: f64,
    pub sio2_pct: f64,
    pub cao_pct: f64,
    pub al2o3_pct: f64,
    pub feo_pct: f64,
}

/// Estimates the oxide slag.
///
/// `SiO2`, `CaO` and `Al2O3` report to slag in full. Iron not retained in the
/// stein is oxidised to `FeO` using `feo_per_fe`. Percentages are relative to
/// the slag weight; an empty slag reports all zeros.
pub fn materials_in_slag(
    totals: &ElementTotals,
    stein: &SteinResult,
    total_weight: f64,
    constants: &SmeltingConstants,
) -> Result<SlagResult> {
    let sio2_mass = totals.mass(Element::SiO2);
    let cao_mass = totals.mass(Element::CaO);
    let al2o3_mass = totals.mass(Element::Al2O3);
    let free_fe = totals.mass(Element::Fe) - stein.fe_mass;
    let feo_mass = free_fe * constants.feo_per_fe;

    let weight = sio2_mass + cao_mass + al2o3_mass + feo_mass;
    if weight > total_weight {
        return Err(SmeltError::MassBalanceExceeded {
            phase: Phase::Slag,
            weight,
            total_weight,
        });
    }

    let pct = |mass: f64| {
        if weight < MIN_MEANINGFUL_WEIGHT {
            0.0
        } else {
            mass / weight * 100.0
        }
    };

    Ok(SlagResult {
        weight,
        sio2_mass,
        cao_mass,
        al2o3_mass,
        feo_mass,
        sio2_pct: pct(sio2_mass),
        cao_pct: pct(cao_mass),
        al2o3_pct: pct(al2o3_mass),
        feo_pct: pct(feo_mass),
    })
}
