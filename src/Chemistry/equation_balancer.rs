//! # Equation Balancer Module
//!
//! ## Purpose
//! Finds the minimal positive integer stoichiometric coefficients of a [`ChemicalEquation`].
//!
//! ## Method
//! Balancing is the search for a vector in the null space of the composition matrix `M`
//! (rows = elements, plus a `charge` row for ionic equations; columns = reactants then products,
//! products with negative sign).
//! 1. `M` is reduced to reduced row echelon form over exact rationals (`BigRational`)
//! 2. the number of free columns is the dimension of the null space: 0 means no solution, more
//!    than 1 means the equation is underdetermined; exactly 1 gives a unique direction
//! 3. the free coefficient is set to 1, pivots are read off the reduced matrix, the vector is
//!    scaled by the LCM of the denominators and divided by the GCD of the result
//! 4. the vector must be strictly positive (or strictly negative, then it is negated)
//! 5. conservation of every element (and charge) is verified with integer arithmetic
//!
//! Every row operation counts against a [`BalanceBudget`]; running out of it is reported as
//! [`UnbalanceReason::BudgetExhausted`], which is the only retryable failure.
use crate::Chemistry::chemical_equation::ChemicalEquation;
use crate::Chemistry::formula_parser::ParsedFormula;
use log::{debug, error};
use nalgebra::DMatrix;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// label of the extra matrix row used for ionic equations
pub const CHARGE_ROW: &str = "charge";

/// Maximal number of row operations allowed for one elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceBudget {
    pub max_steps: usize,
}

impl Default for BalanceBudget {
    fn default() -> Self {
        Self { max_steps: 10_000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnbalanceReason {
    /// no reactants or no products
    EmptySide,
    /// the null space is trivial, only the zero vector conserves all elements
    NoSolution,
    /// null space of dimension > 1, coefficients are not unique up to scale
    Underdetermined { free_variables: usize },
    /// the unique direction has zero or mixed-sign components
    NonPositive,
    /// a coefficient does not fit into u64
    CoefficientOverflow,
    BudgetExhausted { steps: usize },
    /// conservation check failed after elimination, a defect of the balancer itself
    VerificationFailed,
}

impl fmt::Display for UnbalanceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnbalanceReason::EmptySide => write!(f, "equation needs reactants and products"),
            UnbalanceReason::NoSolution => write!(f, "no non-trivial solution exists"),
            UnbalanceReason::Underdetermined { free_variables } => write!(
                f,
                "equation is underdetermined ({} independent solutions)",
                free_variables
            ),
            UnbalanceReason::NonPositive => {
                write!(f, "no solution with all coefficients positive")
            }
            UnbalanceReason::CoefficientOverflow => write!(f, "coefficients are too large"),
            UnbalanceReason::BudgetExhausted { steps } => {
                write!(f, "computation budget of {} steps exhausted", steps)
            }
            UnbalanceReason::VerificationFailed => {
                write!(f, "internal error: computed coefficients do not conserve atoms")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot balance '{equation}': {reason}")]
pub struct UnbalanceableError {
    pub equation: String,
    pub reason: UnbalanceReason,
}

impl UnbalanceableError {
    fn new(equation: &ChemicalEquation, reason: UnbalanceReason) -> Self {
        Self {
            equation: equation.to_string(),
            reason,
        }
    }
    /// only an exhausted budget may succeed with a larger one
    pub fn is_retryable(&self) -> bool {
        matches!(self.reason, UnbalanceReason::BudgetExhausted { .. })
    }
}

/// Result of a successful balance: coefficients of reactants then products
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancedEquation {
    pub coefficients: Vec<u64>,
    pub is_balanced: bool,
    pub balanced: String,
}

/// composition matrix with row labels: rows are sorted elements (and the charge row if any
/// species is charged), columns are reactants followed by products, products negative
pub fn element_matrix(equation: &ChemicalEquation) -> (DMatrix<i64>, Vec<String>) {
    let mut elements: BTreeSet<&str> = BTreeSet::new();
    for species in equation.species() {
        elements.extend(species.elements().keys().map(|e| e.as_str()));
    }
    let mut labels: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
    let charged = equation.species().any(|s| s.charge().unwrap_or(0) != 0);
    if charged {
        labels.push(CHARGE_ROW.to_string());
    }
    let n_reactants = equation.reactants.len();
    let columns: Vec<&ParsedFormula> = equation.species().collect();
    let matrix = DMatrix::from_fn(labels.len(), columns.len(), |row, col| {
        let species = columns[col];
        let value = if labels[row] == CHARGE_ROW {
            species.charge().unwrap_or(0) as i64
        } else {
            species.count(&labels[row]) as i64
        };
        if col < n_reactants { value } else { -value }
    });
    (matrix, labels)
}

/// balance with the default budget
pub fn balance(equation: &ChemicalEquation) -> Result<BalancedEquation, UnbalanceableError> {
    balance_with_budget(equation, BalanceBudget::default())
}

pub fn balance_with_budget(
    equation: &ChemicalEquation,
    budget: BalanceBudget,
) -> Result<BalancedEquation, UnbalanceableError> {
    if equation.reactants.is_empty() || equation.products.is_empty() {
        return Err(UnbalanceableError::new(equation, UnbalanceReason::EmptySide));
    }
    let (matrix, labels) = element_matrix(equation);
    debug!("composition matrix for {} rows {:?}: {}", equation, labels, matrix);

    let coefficients = null_space_vector(&matrix, budget)
        .map_err(|reason| UnbalanceableError::new(equation, reason))?;

    if !verify(equation, &coefficients) {
        error!(
            "balancer defect: {:?} does not conserve atoms in {}",
            coefficients, equation
        );
        return Err(UnbalanceableError::new(
            equation,
            UnbalanceReason::VerificationFailed,
        ));
    }
    let balanced = render(equation, &coefficients);
    debug!("balanced: {}", balanced);
    Ok(BalancedEquation {
        coefficients,
        is_balanced: true,
        balanced,
    })
}

struct StepCounter {
    steps: usize,
    max_steps: usize,
}

impl StepCounter {
    fn tick(&mut self) -> Result<(), UnbalanceReason> {
        if self.steps >= self.max_steps {
            return Err(UnbalanceReason::BudgetExhausted {
                steps: self.max_steps,
            });
        }
        self.steps += 1;
        Ok(())
    }
}

/// minimal positive integer vector spanning the one-dimensional null space of the matrix
fn null_space_vector(
    matrix: &DMatrix<i64>,
    budget: BalanceBudget,
) -> Result<Vec<u64>, UnbalanceReason> {
    let mut m: DMatrix<BigRational> = matrix.map(|v| BigRational::from_integer(BigInt::from(v)));
    let (rows, cols) = m.shape();
    let mut counter = StepCounter {
        steps: 0,
        max_steps: budget.max_steps,
    };
    // reduced row echelon form
    let mut pivot_columns: Vec<usize> = Vec::new();
    let mut row = 0;
    for col in 0..cols {
        if row == rows {
            break;
        }
        let Some(pivot_row) = (row..rows).find(|&r| !m[(r, col)].is_zero()) else {
            continue;
        };
        if pivot_row != row {
            counter.tick()?;
            m.swap_rows(pivot_row, row);
        }
        counter.tick()?;
        let pivot = m[(row, col)].clone();
        for c in col..cols {
            let normalized = &m[(row, c)] / &pivot;
            m[(row, c)] = normalized;
        }
        for r in 0..rows {
            if r == row || m[(r, col)].is_zero() {
                continue;
            }
            counter.tick()?;
            let factor = m[(r, col)].clone();
            for c in col..cols {
                let reduced = &m[(r, c)] - &factor * &m[(row, c)];
                m[(r, c)] = reduced;
            }
        }
        pivot_columns.push(col);
        row += 1;
    }

    let free_columns: Vec<usize> = (0..cols).filter(|c| !pivot_columns.contains(c)).collect();
    let free = match free_columns.as_slice() {
        [] => return Err(UnbalanceReason::NoSolution),
        [free] => *free,
        many => {
            return Err(UnbalanceReason::Underdetermined {
                free_variables: many.len(),
            });
        }
    };

    // free coefficient = 1, every pivot variable = -(its row entry in the free column)
    let mut solution: Vec<BigRational> = vec![BigRational::zero(); cols];
    solution[free] = BigRational::one();
    for (pivot_row, &pivot_col) in pivot_columns.iter().enumerate() {
        solution[pivot_col] = -m[(pivot_row, free)].clone();
    }

    let lcm = solution
        .iter()
        .fold(BigInt::one(), |acc, x| acc.lcm(x.denom()));
    let mut integers: Vec<BigInt> = solution
        .iter()
        .map(|x| (x * BigRational::from_integer(lcm.clone())).to_integer())
        .collect();
    let gcd = integers
        .iter()
        .fold(BigInt::zero(), |acc, x| acc.gcd(x));
    if gcd.is_zero() {
        return Err(UnbalanceReason::NonPositive);
    }
    for x in integers.iter_mut() {
        *x = &*x / &gcd;
    }
    if integers.iter().all(|x| x.is_negative()) {
        for x in integers.iter_mut() {
            *x = -&*x;
        }
    }
    if !integers.iter().all(|x| x.is_positive()) {
        return Err(UnbalanceReason::NonPositive);
    }
    integers
        .iter()
        .map(|x| x.to_u64().ok_or(UnbalanceReason::CoefficientOverflow))
        .collect()
}

/// true if the coefficients conserve every element (and the total charge)
pub fn verify(equation: &ChemicalEquation, coefficients: &[u64]) -> bool {
    if coefficients.len() != equation.number_of_species() {
        return false;
    }
    let (matrix, _) = element_matrix(equation);
    matrix.row_iter().all(|row| {
        let sum: i128 = row
            .iter()
            .zip(coefficients)
            .map(|(m, c)| *m as i128 * *c as i128)
            .sum();
        sum == 0
    })
}

/// "2H2 + O2 → 2H2O": coefficient 1 omitted, original formula text kept
pub fn render(equation: &ChemicalEquation, coefficients: &[u64]) -> String {
    let n_reactants = equation.reactants.len();
    let side = |formulas: &[ParsedFormula], offset: usize| {
        formulas
            .iter()
            .enumerate()
            .map(|(i, formula)| match coefficients.get(offset + i) {
                Some(&c) if c > 1 => format!("{}{}", c, formula.original_formula()),
                _ => formula.original_formula().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" + ")
    };
    format!(
        "{} \u{2192} {}",
        side(&equation.reactants, 0),
        side(&equation.products, n_reactants)
    )
}
