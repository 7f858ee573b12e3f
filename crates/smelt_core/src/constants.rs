//! Process chemistry constants.
//!
//! Loaded from `content/constants.json` by `smelt_world` and injected into the
//! stein and slag estimators. Nothing in the pipeline hard-codes a ratio.

use serde::{Deserialize, Serialize};

use crate::{Result, SmeltError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmeltingConstants {
    /// Fraction of feed copper reporting to the stein.
    pub cu_to_stein: f64,
    /// Fraction of feed iron reporting to the stein; the rest oxidises to FeO.
    pub fe_to_stein: f64,
    /// Fraction of feed sulfur reporting to the stein; the rest leaves as off-gas.
    pub s_to_stein: f64,
    pub au_to_stein: f64,
    pub ag_to_stein: f64,
    /// Mass of `FeO` formed per unit mass of iron (71.844 / 55.845).
    pub feo_per_fe: f64,
}

impl SmeltingConstants {
    /// Recovery fractions must lie in `[0, 1]` and `feo_per_fe` must be positive.
    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("cu_to_stein", self.cu_to_stein),
            ("fe_to_stein", self.fe_to_stein),
            ("s_to_stein", self.s_to_stein),
            ("au_to_stein", self.au_to_stein),
            ("ag_to_stein", self.ag_to_stein),
        ];
        for (name, value) in fractions {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SmeltError::InvalidConstant { name, value });
            }
        }
        if !self.feo_per_fe.is_finite() || self.feo_per_fe <= 0.0 {
            return Err(SmeltError::InvalidConstant {
                name: "feo_per_fe",
                value: self.feo_per_fe,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> SmeltingConstants {
        serde_json::from_str(include_str!("../../../content/constants.json")).unwrap()
    }

    #[test]
    fn shipped_constants_are_valid() {
        assert!(reference().validate().is_ok());
    }

    #[test]
    fn recovery_above_one_is_rejected() {
        let mut constants = reference();
        constants.s_to_stein = 1.2;
        assert_eq!(
            constants.validate(),
            Err(SmeltError::InvalidConstant {
                name: "s_to_stein",
                value: 1.2
            })
        );
    }

    #[test]
    fn non_positive_feo_ratio_is_rejected() {
        let mut constants = reference();
        constants.feo_per_fe = 0.0;
        assert!(matches!(
            constants.validate(),
            Err(SmeltError::InvalidConstant {
                name: "feo_per_fe",
                ..
            })
        ));
    }

    #[test]
    fn missing_field_fails_to_parse() {
        let missing = r#"{"cu_to_stein": 0.9}"#;
        assert!(serde_json::from_str::<SmeltingConstants>(missing).is_err());
    }

    #[test]
    fn misspelled_field_fails_to_parse() {
        let mut value = serde_json::to_value(reference()).unwrap();
        value["cu_to_stien"] = serde_json::json!(0.5);
        assert!(serde_json::from_value::<SmeltingConstants>(value).is_err());
    }
}
