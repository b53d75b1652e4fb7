/////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
/////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Chemistry::chemical_equation::ChemicalEquation;
    use crate::Chemistry::equation_balancer::{
        BalanceBudget, CHARGE_ROW, UnbalanceReason, balance, balance_with_budget,
        element_matrix, render, verify,
    };
    use crate::Chemistry::formula_parser::parse_formula;
    use std::collections::BTreeSet;

    fn coefficients(equation: &str) -> Vec<u64> {
        let eq = ChemicalEquation::parse_equation(equation).unwrap();
        balance(&eq).unwrap().coefficients
    }

    fn reason(equation: &str) -> UnbalanceReason {
        let eq = ChemicalEquation::parse_equation(equation).unwrap();
        balance(&eq).unwrap_err().reason
    }

    #[test]
    fn test_simple_equations() {
        let eq = ChemicalEquation::from_formulas(&["Fe", "CuSO4"], &["FeSO4", "Cu"]).unwrap();
        let result = balance(&eq).unwrap();
        assert_eq!(result.coefficients, vec![1, 1, 1, 1]);
        assert!(result.is_balanced);
        assert_eq!(result.balanced, "Fe + CuSO4 \u{2192} FeSO4 + Cu");

        let eq = ChemicalEquation::from_formulas(&["H2", "O2"], &["H2O"]).unwrap();
        let result = balance(&eq).unwrap();
        assert_eq!(result.coefficients, vec![2, 1, 2]);
        assert_eq!(result.balanced, "2H2 + O2 \u{2192} 2H2O");
    }

    #[test]
    fn test_combustion_and_redox_equations() {
        assert_eq!(coefficients("CH4 + O2 -> CO2 + H2O"), vec![1, 2, 1, 2]);
        assert_eq!(coefficients("C3H8 + O2 -> CO2 + H2O"), vec![1, 5, 3, 4]);
        assert_eq!(coefficients("Fe2O3 + C -> Fe + CO2"), vec![2, 3, 4, 3]);
        assert_eq!(coefficients("Al + O2 -> Al2O3"), vec![4, 3, 2]);
        assert_eq!(coefficients("Ca(OH)₂ + H₃PO₄ → Ca₃(PO₄)₂ + H₂O"), vec![3, 2, 1, 6]);
    }

    #[test]
    fn test_coefficients_above_ten() {
        assert_eq!(
            coefficients("KMnO4 + HCl -> KCl + MnCl2 + H2O + Cl2"),
            vec![2, 16, 2, 2, 8, 5]
        );
        assert_eq!(
            coefficients(
                "K4Fe(CN)6 + KMnO4 + H2SO4 -> KHSO4 + Fe2(SO4)3 + MnSO4 + HNO3 + CO2 + H2O"
            ),
            vec![10, 122, 299, 162, 5, 122, 60, 60, 188]
        );
    }

    #[test]
    fn test_ionic_equations_conserve_charge() {
        // without the charge row this system would have two free coefficients
        assert_eq!(coefficients("Cu + Ag+ -> Cu2+ + Ag"), vec![1, 2, 1, 2]);
        assert_eq!(
            coefficients("MnO4^- + Fe2+ + H+ -> Mn2+ + Fe3+ + H2O"),
            vec![1, 5, 8, 1, 5, 4]
        );
        let eq = ChemicalEquation::parse_equation("Cu + Ag+ -> Cu2+ + Ag").unwrap();
        let (_, labels) = element_matrix(&eq);
        assert_eq!(labels.last().map(|s| s.as_str()), Some(CHARGE_ROW));
    }

    #[test]
    fn test_conservation_holds_for_every_element() {
        for equation in [
            "H2 + O2 -> H2O",
            "C2H6 + O2 -> CO2 + H2O",
            "NaOH + H2SO4 -> Na2SO4 + H2O",
            "(NH4)2Cr2O7 -> Cr2O3 + N2 + H2O",
            "Cu + HNO3 -> Cu(NO3)2 + NO + H2O",
            "C6H12O6 + O2 -> CO2 + H2O",
        ] {
            let eq = ChemicalEquation::parse_equation(equation).unwrap();
            let result = balance(&eq).unwrap();
            let n = eq.reactants.len();
            let elements: BTreeSet<String> = eq
                .species()
                .flat_map(|s| s.elements().keys().cloned())
                .collect();
            for element in elements {
                let left: u64 = eq
                    .reactants
                    .iter()
                    .zip(&result.coefficients)
                    .map(|(r, c)| r.count(&element) as u64 * c)
                    .sum();
                let right: u64 = eq
                    .products
                    .iter()
                    .zip(&result.coefficients[n..])
                    .map(|(p, c)| p.count(&element) as u64 * c)
                    .sum();
                assert_eq!(left, right, "{} in {}", element, equation);
            }
            assert!(result.coefficients.iter().all(|c| *c > 0));
        }
    }

    #[test]
    fn test_rebalancing_is_idempotent() {
        let first = coefficients("C3H8 + O2 -> CO2 + H2O");
        let eq = ChemicalEquation::parse_equation("C3H8 + 5O2 -> 3CO2 + 4H2O").unwrap();
        let second = balance(&eq).unwrap();
        assert_eq!(first, second.coefficients);
        let third = balance(&eq).unwrap();
        assert_eq!(second, third);
    }

    #[test]
    fn test_unbalanceable_equations() {
        assert_eq!(reason("H2 -> O2"), UnbalanceReason::NoSolution);
        assert_eq!(reason("NaCl -> Na"), UnbalanceReason::NoSolution);
        assert_eq!(
            reason("H2 + O2 -> H2O + H2O2"),
            UnbalanceReason::Underdetermined { free_variables: 2 }
        );
        // the only conserving direction gives H2 a zero coefficient
        assert_eq!(reason("H2O + H2 -> H2O"), UnbalanceReason::NonPositive);

        let h2 = parse_formula("H2").unwrap();
        let eq = ChemicalEquation::new(vec![h2], vec![]);
        let err = balance(&eq).unwrap_err();
        assert_eq!(err.reason, UnbalanceReason::EmptySide);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_budget_exhaustion_is_distinct_and_retryable() {
        let eq =
            ChemicalEquation::parse_equation("KMnO4 + HCl -> KCl + MnCl2 + H2O + Cl2").unwrap();
        let err = balance_with_budget(&eq, BalanceBudget { max_steps: 3 }).unwrap_err();
        assert_eq!(err.reason, UnbalanceReason::BudgetExhausted { steps: 3 });
        assert!(err.is_retryable());
        let ok = balance_with_budget(&eq, BalanceBudget { max_steps: 1_000 }).unwrap();
        assert_eq!(ok.coefficients, vec![2, 16, 2, 2, 8, 5]);
    }

    #[test]
    fn test_element_matrix() {
        let eq = ChemicalEquation::parse_equation("H2 + O2 -> H2O").unwrap();
        let (matrix, labels) = element_matrix(&eq);
        assert_eq!(labels, vec!["H".to_string(), "O".to_string()]);
        assert_eq!(matrix.nrows(), 2);
        assert_eq!(matrix.ncols(), 3);
        assert_eq!(matrix[(0, 0)], 2);
        assert_eq!(matrix[(1, 1)], 2);
        assert_eq!(matrix[(0, 2)], -2);
        assert_eq!(matrix[(1, 2)], -1);
    }

    #[test]
    fn test_verify_and_render() {
        let eq = ChemicalEquation::parse_equation("H2 + O2 -> H2O").unwrap();
        assert!(verify(&eq, &[2, 1, 2]));
        assert!(verify(&eq, &[4, 2, 4]));
        assert!(!verify(&eq, &[1, 1, 1]));
        assert!(!verify(&eq, &[2, 1]));
        assert_eq!(render(&eq, &[2, 1, 2]), "2H2 + O2 \u{2192} 2H2O");
        assert_eq!(render(&eq, &[1, 1, 1]), "H2 + O2 \u{2192} H2O");
    }
}
