//! Shared test fixtures for `smelt_core` and downstream crates.
//!
//! `reference_constants()` mirrors `content/constants.json`. The scenario
//! builders produce the feeds used across unit and integration tests.

use crate::{Compound, SmeltingConstants};

pub fn reference_constants() -> SmeltingConstants {
    SmeltingConstants {
        cu_to_stein: 0.96,
        fe_to_stein: 0.35,
        s_to_stein: 0.40,
        au_to_stein: 0.99,
        ag_to_stein: 0.98,
        feo_per_fe: 1.2865,
    }
}

/// Builds a compound from literal pairs, panicking on invalid input.
pub fn compound(weight: f64, pairs: &[(&str, f64)]) -> Compound {
    Compound::from_symbols(Some(weight), pairs.iter().copied())
        .unwrap_or_else(|err| panic!("fixture compound is invalid: {err}"))
}

/// Single 1000-unit concentrate carrying every stein and slag former.
pub fn scenario_one() -> Compound {
    compound(
        1000.0,
        &[
            ("Cu", 20.0),
            ("Fe", 25.0),
            ("S", 30.0),
            ("SiO2", 10.0),
            ("CaO", 5.0),
            ("Al2O3", 5.0),
            ("Au", 0.001),
            ("Ag", 0.002),
        ],
    )
}

/// Sulfide concentrate plus a pure flux: stein formers in the first
/// compound only, slag oxides in the second only.
pub fn scenario_two() -> Vec<Compound> {
    vec![
        compound(600.0, &[("Cu", 25.0), ("Fe", 30.0), ("S", 32.0)]),
        compound(400.0, &[("SiO2", 60.0), ("CaO", 20.0), ("Al2O3", 10.0)]),
    ]
}
