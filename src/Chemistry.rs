/// parsing of chemical formulae into element counts, ionic charge and physical state
/// # Examples
/// ```
/// use StoichLab::Chemistry::formula_parser::parse_formula;
/// let parsed = parse_formula("Fe2(SO4)3").unwrap();
/// assert_eq!(parsed.count("O"), 12);
/// assert_eq!(parsed.to_formula_string(false), "Fe2O12S3");
/// ```
pub mod formula_parser;
/// atomic masses and molar masses of parsed formulae
pub mod molmass;
/// reactants and products of one reaction, parsing of equation text
pub mod chemical_equation;
/// exact balancing of chemical equations: rational Gaussian elimination of the composition matrix,
/// the minimal positive integer vector of its one-dimensional null space
/// # Examples
/// ```
/// use StoichLab::Chemistry::chemical_equation::ChemicalEquation;
/// use StoichLab::Chemistry::equation_balancer::balance;
/// let equation = ChemicalEquation::parse_equation("KMnO4 + HCl -> KCl + MnCl2 + H2O + Cl2").unwrap();
/// let balanced = balance(&equation).unwrap();
/// assert_eq!(balanced.coefficients, vec![2, 16, 2, 2, 8, 5]);
/// ```
pub mod equation_balancer;
mod equation_balancer_tests;
/// heuristic classification of reactions, precipitate, gas and color change prediction
pub mod reaction_analyzer;
/// catalog of lab chemicals and their known reactions
pub mod lab_repository;
/// parse + balance + analyze in one call, JSON and table output
pub mod reaction_report;
