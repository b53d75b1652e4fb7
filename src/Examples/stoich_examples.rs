pub fn stoich_examples(task: usize) {
    //
    match task {
        0 => {
            // PARSING OF FORMULAE
            use crate::Chemistry::formula_parser::parse_formula;
            for formula in ["H2O", "Ca(OH)2", "Fe2(SO4)3", "K4[Fe(CN)6]", "CuSO₄·", "SO4^2-(aq)"] {
                match parse_formula(formula) {
                    Ok(parsed) => println!(
                        "{:<12} elements {:?} charge {:?} state {:?} canonical {} ({})",
                        formula,
                        parsed.elements(),
                        parsed.charge(),
                        parsed.state(),
                        parsed,
                        parsed.to_subscript_string()
                    ),
                    Err(e) => println!("{:<12} {}", formula, e),
                }
            }
        }
        1 => {
            // molar masses
            use crate::Chemistry::molmass::{
                calculate_molar_mass, calculate_molar_mass_of_vector_of_subs,
            };
            match calculate_molar_mass("C6H8O6") {
                Ok((molar_mass, composition)) => {
                    println!("Element counts: {:?}", composition);
                    println!("Molar mass: {:.3} g/mol", molar_mass);
                }
                Err(e) => println!("{}", e),
            }
            let vec_of_formulae = ["H2O", "NaCl", "C6H8O6", "Ca(NO3)2"];
            match calculate_molar_mass_of_vector_of_subs(&vec_of_formulae) {
                Ok(masses) => {
                    for (formula, mass) in vec_of_formulae.iter().zip(masses) {
                        println!("{}: {:.3} g/mol", formula, mass);
                    }
                }
                Err(e) => println!("{}", e),
            }
        }
        2 => {
            // BALANCING: coefficients above 10 and ionic equations
            use crate::Chemistry::chemical_equation::ChemicalEquation;
            use crate::Chemistry::equation_balancer::{balance, element_matrix};
            let equations = [
                "H2 + O2 -> H2O",
                "C3H8 + O2 -> CO2 + H2O",
                "KMnO4 + HCl -> KCl + MnCl2 + H2O + Cl2",
                "K4Fe(CN)6 + KMnO4 + H2SO4 -> KHSO4 + Fe2(SO4)3 + MnSO4 + HNO3 + CO2 + H2O",
                "MnO4^- + Fe2+ + H+ -> Mn2+ + Fe3+ + H2O",
                "H2 + O2 -> H2O + H2O2",
            ];
            for text in equations {
                let equation = match ChemicalEquation::parse_equation(text) {
                    Ok(equation) => equation,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                match balance(&equation) {
                    Ok(result) => println!("{:?} {}", result.coefficients, result.balanced),
                    Err(e) => println!("{}", e),
                }
            }
            if let Ok(equation) = ChemicalEquation::parse_equation("CH4 + O2 -> CO2 + H2O") {
                let (matrix, labels) = element_matrix(&equation);
                println!("rows {:?} {}", labels, matrix);
            }
        }
        3 => {
            // CLASSIFICATION
            use crate::Chemistry::chemical_equation::ChemicalEquation;
            use crate::Chemistry::reaction_analyzer::analyze;
            let reactions: [(&[&str], &[&str]); 6] = [
                (&["HCl", "NaOH"], &["NaCl", "H2O"]),
                (&["CH4", "O2"], &["CO2", "H2O"]),
                (&["AgNO3", "NaCl"], &["AgCl", "NaNO3"]),
                (&["CuSO4", "NaOH"], &["Cu(OH)2", "Na2SO4"]),
                (&["Fe", "CuSO4"], &["FeSO4", "Cu"]),
                (&["CaCO3"], &["CaO", "CO2"]),
            ];
            for (reactants, products) in reactions {
                match ChemicalEquation::from_formulas(reactants, products) {
                    Ok(equation) => {
                        let analysis = analyze(&equation);
                        let json = serde_json::to_string(&analysis).unwrap_or_default();
                        println!("{}\n  {}", equation, json);
                    }
                    Err(e) => println!("{}", e),
                }
            }
        }
        4 => {
            // FULL REPORT
            use crate::Chemistry::reaction_report::{ReactionRequest, analyze_reaction};
            use crate::settings::LabSettings;
            let request = ReactionRequest::new(&["Fe2O3", "C"], &["Fe", "CO2"]);
            match analyze_reaction(&request, &LabSettings::default()) {
                Ok(report) => {
                    report.print_table();
                    if let Ok(json) = report.to_json() {
                        println!("{}", json);
                    }
                }
                Err(e) => println!("{}", e),
            }
        }
        5 => {
            // LAB MIXING
            use crate::Chemistry::lab_repository::{LabConditions, LabRepository};
            let repository = match LabRepository::builtin() {
                Ok(repository) => repository,
                Err(e) => {
                    println!("{}", e);
                    return;
                }
            };
            let cold = LabConditions::default();
            let heated = LabConditions {
                heated: true,
                stirred: false,
            };
            for (ids, conditions) in [
                (vec!["naoh", "hcl"], cold),
                (vec!["mg", "o2"], cold),
                (vec!["mg", "o2"], heated),
                (vec!["nacl", "h2o"], cold),
            ] {
                let outcome = repository.evaluate_reaction(&ids[..], conditions);
                println!("{:?} heated={}: {}", ids, conditions.heated, outcome.message);
                match outcome.reaction {
                    Some(reaction) => println!("  {} | {}", reaction.equation, reaction.explanation),
                    None => println!("  color {}", repository.blend_colors(&ids[..])),
                }
            }
        }
        _ => println!("no such example"),
    }
}
