//! The closed set of elements and oxides tracked through the smelt.

use serde::{Deserialize, Serialize};

use crate::SmeltError;

/// A recognised element or oxide symbol.
///
/// Declaration order is the order used by every report and by the keys of
/// `ElementTotals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Au,
    Ag,
    SiO2,
    CaO,
    S,
    Fe,
    Cu,
    Al2O3,
    As,
}

impl Element {
    pub const ALL: [Element; 9] = [
        Element::Au,
        Element::Ag,
        Element::SiO2,
        Element::CaO,
        Element::S,
        Element::Fe,
        Element::Cu,
        Element::Al2O3,
        Element::As,
    ];

    /// Chemical symbol as written in input records.
    pub fn symbol(self) -> &'static str {
        match self {
            Element::Au => "Au",
            Element::Ag => "Ag",
            Element::SiO2 => "SiO2",
            Element::CaO => "CaO",
            Element::S => "S",
            Element::Fe => "Fe",
            Element::Cu => "Cu",
            Element::Al2O3 => "Al2O3",
            Element::As => "As",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Element {
    type Err = SmeltError;

    /// Symbols are case-sensitive: `"CU"` is not copper.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::ALL
            .into_iter()
            .find(|element| element.symbol() == s)
            .ok_or_else(|| SmeltError::UnknownElement(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_parses_back_to_itself() {
        for element in Element::ALL {
            assert_eq!(element.symbol().parse::<Element>(), Ok(element));
        }
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert_eq!(
            "Pb".parse::<Element>(),
            Err(SmeltError::UnknownElement("Pb".to_string()))
        );
    }

    #[test]
    fn symbols_are_case_sensitive() {
        assert!("cu".parse::<Element>().is_err());
        assert!("SIO2".parse::<Element>().is_err());
    }

    #[test]
    fn serializes_as_symbol() {
        let json = serde_json::to_string(&Element::Al2O3).unwrap();
        assert_eq!(json, "\"Al2O3\"");
    }
}
