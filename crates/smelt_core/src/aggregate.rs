//! Element aggregation across all input compounds.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Compound, Element, Result, SmeltError};

/// Total weights below this are treated as zero when dividing.
pub(crate) const MIN_MEANINGFUL_WEIGHT: f64 = 1e-9;

/// Absolute mass per element, summed over every compound.
///
/// Only elements referenced by at least one compound are present. Every
/// estimator reads masses through [`ElementTotals::mass`], which returns
/// zero for absent elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ElementTotals(BTreeMap<Element, f64>);

impl ElementTotals {
    pub fn mass(&self, element: Element) -> f64 {
        self.0.get(&element).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        self.0.iter().map(|(&element, &mass)| (element, mass))
    }

    fn add(&mut self, element: Element, mass: f64) {
        *self.0.entry(element).or_insert(0.0) += mass;
    }
}

impl FromIterator<(Element, f64)> for ElementTotals {
    fn from_iter<I: IntoIterator<Item = (Element, f64)>>(iter: I) -> Self {
        let mut totals = ElementTotals::default();
        for (element, mass) in iter {
            totals.add(element, mass);
        }
        totals
    }
}

/// Element share of the total input weight, in percent.
pub type ElementPercentages = BTreeMap<Element, f64>;

/// Sums `weight * percent / 100` per element across all compounds.
pub fn total_elements(compounds: &[Compound]) -> ElementTotals {
    compounds
        .iter()
        .flat_map(Compound::element_weights)
        .collect()
}

pub fn total_weight(compounds: &[Compound]) -> f64 {
    compounds.iter().map(Compound::weight).sum()
}

/// Each element's mass as a percentage of `total_weight`.
///
/// Fails with `DivisionByZero` when `total_weight` is zero.
pub fn element_percentages(totals: &ElementTotals, total_weight: f64) -> Result<ElementPercentages> {
    if total_weight.abs() < MIN_MEANINGFUL_WEIGHT {
        return Err(SmeltError::DivisionByZero);
    }
    Ok(totals
        .iter()
        .map(|(element, mass)| (element, mass / total_weight * 100.0))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(weight: f64, pairs: &[(&str, f64)]) -> Compound {
        Compound::from_symbols(Some(weight), pairs.iter().copied()).unwrap()
    }

    fn listed(totals: &ElementTotals) -> Vec<Element> {
        totals.iter().map(|(element, _)| element).collect()
    }

    #[test]
    fn totals_sum_across_compounds() {
        let compounds = vec![
            compound(100.0, &[("Cu", 10.0), ("Fe", 20.0)]),
            compound(200.0, &[("Cu", 5.0), ("SiO2", 50.0)]),
        ];

        let totals = total_elements(&compounds);

        // Cu = 100*0.10 + 200*0.05 = 20
        assert!((totals.mass(Element::Cu) - 20.0).abs() < 1e-9);
        assert!((totals.mass(Element::Fe) - 20.0).abs() < 1e-9);
        assert!((totals.mass(Element::SiO2) - 100.0).abs() < 1e-9);
        assert_eq!(listed(&totals), [Element::SiO2, Element::Fe, Element::Cu]);
    }

    #[test]
    fn unreferenced_elements_are_absent_but_read_as_zero() {
        let totals = total_elements(&[compound(100.0, &[("Cu", 10.0)])]);
        assert!(!listed(&totals).contains(&Element::Au));
        assert!(totals.mass(Element::Au).abs() < f64::EPSILON);
    }

    #[test]
    fn explicit_zero_percentage_is_present() {
        let totals = total_elements(&[compound(100.0, &[("As", 0.0)])]);
        assert_eq!(listed(&totals), [Element::As]);
    }

    #[test]
    fn empty_input_gives_empty_totals() {
        assert!(listed(&total_elements(&[])).is_empty());
        assert!(total_weight(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn percentages_are_relative_to_total_weight_not_tracked_mass() {
        let compounds = vec![compound(400.0, &[("Cu", 25.0)])];
        let totals = total_elements(&compounds);

        let pct = element_percentages(&totals, total_weight(&compounds)).unwrap();

        assert!((pct[&Element::Cu] - 25.0).abs() < 1e-9);
        let tracked: f64 = totals.iter().map(|(_, mass)| mass).sum();
        assert!((tracked - 100.0).abs() < 1e-9);
    }

    #[test]
    fn percentages_with_zero_total_weight_fail() {
        let totals = total_elements(&[compound(10.0, &[("Cu", 1.0)])]);
        assert_eq!(
            element_percentages(&totals, 0.0),
            Err(SmeltError::DivisionByZero)
        );
    }
}
