//! `smelt_core` — copper smelting mass balance.
//!
//! No IO, no logging. Compounds in, stein/slag/sublimate split out, every
//! ratio taken from the injected `SmeltingConstants`.

mod aggregate;
mod balance;
mod compound;
mod constants;
mod element;
mod error;
mod pipeline;
mod slag;
mod stein;

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;

pub use aggregate::{
    element_percentages, total_elements, total_weight, ElementPercentages, ElementTotals,
};
pub use balance::{reconcile, MassBalance};
pub use compound::Compound;
pub use constants::SmeltingConstants;
pub use element::Element;
pub use error::{Phase, Result, SmeltError};
pub use pipeline::{calculate, SmeltReport};
pub use slag::{materials_in_slag, SlagResult};
pub use stein::{materials_in_stein, SteinResult};
