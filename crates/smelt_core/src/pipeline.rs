use serde::Serialize;

use crate::{
    element_percentages, materials_in_slag, materials_in_stein, reconcile, total_elements,
    total_weight, Compound, ElementPercentages, ElementTotals, MassBalance, Result, SlagResult,
    SmeltError, SmeltingConstants, SteinResult,
};

/// Everything one calculation run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmeltReport {
    pub compound_count: usize,
    pub total_weight: f64,
    pub elements: ElementTotals,
    pub element_percentages: ElementPercentages,
    pub stein: SteinResult,
    pub slag: SlagResult,
    pub balance: MassBalance,
}

/// Runs the full pipeline: aggregate, stein, slag, reconcile.
///
/// Constants are validated before anything is computed. Any failure aborts
/// the run; there is no partial report.
pub fn calculate(compounds: &[Compound], constants: &SmeltingConstants) -> Result<SmeltReport> {
    constants.validate()?;
    if compounds.is_empty() {
        return Err(SmeltError::EmptyInput);
    }

    let total_weight = total_weight(compounds);
    if !total_weight.is_finite() {
        return Err(SmeltError::TotalWeightOverflow {
            total: total_weight,
        });
    }
    let elements = total_elements(compounds);
    let element_percentages = element_percentages(&elements, total_weight)?;
    let stein = materials_in_stein(&elements, total_weight, constants)?;
    let slag = materials_in_slag(&elements, &stein, total_weight, constants)?;
    let balance = reconcile(total_weight, &stein, &slag)?;

    Ok(SmeltReport {
        compound_count: compounds.len(),
        total_weight,
        elements,
        element_percentages,
        stein,
        slag,
        balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{reference_constants, scenario_one};

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            calculate(&[], &reference_constants()),
            Err(SmeltError::EmptyInput)
        );
    }

    #[test]
    fn invalid_constants_are_rejected_before_input_checks() {
        let mut constants = reference_constants();
        constants.cu_to_stein = -0.1;
        assert!(matches!(
            calculate(&[], &constants),
            Err(SmeltError::InvalidConstant { .. })
        ));
    }

    #[test]
    fn report_carries_every_stage() {
        let report = calculate(&[scenario_one()], &reference_constants()).unwrap();

        assert_eq!(report.compound_count, 1);
        assert!((report.total_weight - 1000.0).abs() < 1e-9);
        assert_eq!(report.elements.iter().count(), 8);
        assert_eq!(report.element_percentages.len(), 8);
        assert!((report.balance.stein_weight - report.stein.weight).abs() < f64::EPSILON);
        assert!((report.balance.slag_weight - report.slag.weight).abs() < f64::EPSILON);
    }

    #[test]
    fn report_serializes_with_element_symbols_as_keys() {
        let report = calculate(&[scenario_one()], &reference_constants()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["elements"]["SiO2"].is_number());
        assert!(json["element_percentages"]["Cu"].is_number());
        assert!(json["balance"]["sublimates_pct"].is_number());
    }
}
