/// Module to calculate the molar mass of a chemical formula from its atomic composition
///
use crate::Chemistry::formula_parser::{ParseError, ParsedFormula, parse_formula};
use log::debug;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MolarMassError {
    #[error("unknown element: {0}")]
    UnknownElement(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

// (symbol, standard atomic mass in g/mol)
const ATOMIC_MASSES: &[(&str, f64)] = &[
    ("H", 1.008),
    ("He", 4.0026),
    ("Li", 6.94),
    ("Be", 9.0122),
    ("B", 10.81),
    ("C", 12.011),
    ("N", 14.007),
    ("O", 15.999),
    ("F", 18.998),
    ("Ne", 20.18),
    ("Na", 22.99),
    ("Mg", 24.305),
    ("Al", 26.982),
    ("Si", 28.085),
    ("P", 30.974),
    ("S", 32.06),
    ("Cl", 35.45),
    ("Ar", 39.948),
    ("K", 39.098),
    ("Ca", 40.078),
    ("Sc", 44.956),
    ("Ti", 47.867),
    ("V", 50.942),
    ("Cr", 51.996),
    ("Mn", 54.938),
    ("Fe", 55.845),
    ("Co", 58.933),
    ("Ni", 58.693),
    ("Cu", 63.546),
    ("Zn", 65.38),
    ("Ga", 69.723),
    ("Ge", 72.63),
    ("As", 74.922),
    ("Se", 78.971),
    ("Br", 79.904),
    ("Kr", 83.798),
    ("Rb", 85.468),
    ("Sr", 87.62),
    ("Y", 88.906),
    ("Zr", 91.224),
    ("Nb", 92.906),
    ("Mo", 95.95),
    ("Tc", 98.0),
    ("Ru", 101.07),
    ("Rh", 102.91),
    ("Pd", 106.42),
    ("Ag", 107.87),
    ("Cd", 112.41),
    ("In", 114.82),
    ("Sn", 118.71),
    ("Sb", 121.76),
    ("Te", 127.6),
    ("I", 126.9),
    ("Xe", 131.29),
    ("Cs", 132.91),
    ("Ba", 137.33),
    ("Pt", 195.08),
    ("Au", 196.97),
    ("Hg", 200.59),
    ("Pb", 207.2),
    ("Bi", 208.98),
    ("U", 238.03),
];

/// standard atomic mass of an element, None if the symbol is not in the table
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ATOMIC_MASSES
        .iter()
        .find(|(name, _)| *name == symbol)
        .map(|(_, mass)| *mass)
}

/// molar mass of a parsed species in g/mol
pub fn molar_mass(formula: &ParsedFormula) -> Result<f64, MolarMassError> {
    let mut mass = 0.0;
    for (element, count) in formula.elements() {
        let m = atomic_mass(element)
            .ok_or_else(|| MolarMassError::UnknownElement(element.clone()))?;
        mass += m * *count as f64;
    }
    debug!("molar mass of {}: {} g/mol", formula.original_formula(), mass);
    Ok(mass)
}

/// parse the formula and return its molar mass together with the atomic composition
pub fn calculate_molar_mass(formula: &str) -> Result<(f64, BTreeMap<String, u32>), MolarMassError> {
    let parsed = parse_formula(formula)?;
    let mass = molar_mass(&parsed)?;
    Ok((mass, parsed.elements().clone()))
}

/// molar masses of a vector of formulas, in the same order
pub fn calculate_molar_mass_of_vector_of_subs(
    vec_of_formulae: &[&str],
) -> Result<Vec<f64>, MolarMassError> {
    vec_of_formulae
        .iter()
        .map(|formula| calculate_molar_mass(formula).map(|(mass, _)| mass))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_calculate_molar_mass() {
        let (mass, composition) = calculate_molar_mass("H2O(g)").unwrap();
        assert_relative_eq!(mass, 18.015, epsilon = 1e-2);
        assert_eq!(composition.get("H"), Some(&2));

        let (mass, _) = calculate_molar_mass("NaCl").unwrap();
        assert_relative_eq!(mass, 58.44, epsilon = 1e-2);

        let (mass, _) = calculate_molar_mass("C6H8O6").unwrap();
        assert_relative_eq!(mass, 176.12, epsilon = 1e-2);

        let (mass, _) = calculate_molar_mass("Ca(NO3)2").unwrap();
        assert_relative_eq!(mass, 164.09, epsilon = 1e-2);

        let (mass, _) = calculate_molar_mass("CuSO₄").unwrap();
        assert_relative_eq!(mass, 159.61, epsilon = 1e-2);
    }

    #[test]
    fn test_calculate_molar_mass_of_vector_of_substances() {
        let expected = [18.015, 58.44, 98.079, 44.01];
        let masses =
            calculate_molar_mass_of_vector_of_subs(&["H2O", "NaCl", "H2SO4", "CO2"]).unwrap();
        for (mass, expected) in masses.iter().zip(expected) {
            assert_relative_eq!(*mass, expected, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_unknown_element_and_parse_error() {
        assert!(matches!(
            calculate_molar_mass("Xx2O"),
            Err(MolarMassError::UnknownElement(e)) if e == "Xx"
        ));
        assert!(matches!(
            calculate_molar_mass("H2O("),
            Err(MolarMassError::Parse(_))
        ));
        assert_eq!(atomic_mass("Fe"), Some(55.845));
        assert_eq!(atomic_mass("fe"), None);
    }
}
