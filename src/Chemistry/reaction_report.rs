//! # Reaction Report Module
//!
//! One request in, one report out: parses the reactant and product formulas, balances the
//! equation and analyzes it. The report carries the fields an HTTP layer echoes back
//! (`balanced`, `coefficients`, `isBalanced`, `types`, `precipitate`, `gas`, ...); every error is
//! a client error of that layer.
use crate::Chemistry::chemical_equation::ChemicalEquation;
use crate::Chemistry::equation_balancer::{
    BalanceBudget, UnbalanceableError, balance_with_budget,
};
use crate::Chemistry::formula_parser::ParseError;
use crate::Chemistry::reaction_analyzer::{
    ColorChange, GasEvolution, Precipitate, ReactionRules, ReactionType, analyze_with_rules,
};
use crate::settings::LabSettings;
use log::info;
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReactionRequest {
    pub reactants: Vec<String>,
    pub products: Vec<String>,
}

impl ReactionRequest {
    pub fn new<S: AsRef<str>>(reactants: &[S], products: &[S]) -> Self {
        let owned = |items: &[S]| items.iter().map(|s| s.as_ref().to_string()).collect();
        Self {
            reactants: owned(reactants),
            products: owned(products),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("reactants and products must both be given")]
    MissingSpecies,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Unbalanceable(#[from] UnbalanceableError),
}

impl ReportError {
    /// every failure is caused by the request itself
    pub fn is_client_error(&self) -> bool {
        match self {
            ReportError::MissingSpecies | ReportError::Parse(_) | ReportError::Unbalanceable(_) => {
                true
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionReport {
    pub balanced: String,
    pub coefficients: Vec<u64>,
    pub is_balanced: bool,
    pub types: Vec<ReactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitate: Option<Precipitate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<GasEvolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_change: Option<ColorChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_exothermic: Option<bool>,
}

impl ReactionReport {
    /// balance and analyze an already parsed equation
    pub fn from_equation(
        equation: &ChemicalEquation,
        budget: BalanceBudget,
        rules: &ReactionRules,
    ) -> Result<Self, ReportError> {
        if equation.reactants.is_empty() || equation.products.is_empty() {
            return Err(ReportError::MissingSpecies);
        }
        let balanced = balance_with_budget(equation, budget)?;
        let analysis = analyze_with_rules(equation, rules);
        info!("{}", balanced.balanced);
        Ok(Self {
            balanced: balanced.balanced,
            coefficients: balanced.coefficients,
            is_balanced: balanced.is_balanced,
            types: analysis.types.into_iter().collect(),
            precipitate: analysis.precipitate,
            gas: analysis.gas,
            color_change: analysis.color_change,
            is_exothermic: analysis.is_exothermic,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Field", "Value"]);
        table.add_row(row!["Balanced", self.balanced]);
        let coefficients: Vec<String> = self.coefficients.iter().map(|c| c.to_string()).collect();
        table.add_row(row!["Coefficients", coefficients.join(", ")]);
        let types: Vec<&str> = self.types.iter().map(|t| t.as_str()).collect();
        let types = if types.is_empty() {
            "-".to_string()
        } else {
            types.join(", ")
        };
        table.add_row(row!["Types", types]);
        if let Some(precipitate) = &self.precipitate {
            table.add_row(row![
                "Precipitate",
                format!("{} ({})", precipitate.compound, precipitate.description)
            ]);
        }
        if let Some(gas) = &self.gas {
            table.add_row(row!["Gas", gas.description]);
        }
        if let Some(change) = &self.color_change {
            table.add_row(row!["Color change", format!("{} -> {}", change.from, change.to)]);
        }
        if self.is_exothermic == Some(true) {
            table.add_row(row!["Exothermic", "yes"]);
        }
        table
    }

    pub fn print_table(&self) {
        self.to_table().printstd();
    }
}

/// parse, balance and analyze with the default analyzer tables
pub fn analyze_reaction(
    request: &ReactionRequest,
    settings: &LabSettings,
) -> Result<ReactionReport, ReportError> {
    analyze_reaction_with_rules(request, settings, &ReactionRules::default())
}

pub fn analyze_reaction_with_rules(
    request: &ReactionRequest,
    settings: &LabSettings,
    rules: &ReactionRules,
) -> Result<ReactionReport, ReportError> {
    if request.reactants.is_empty() || request.products.is_empty() {
        return Err(ReportError::MissingSpecies);
    }
    let equation = ChemicalEquation::from_formulas(&request.reactants[..], &request.products[..])?;
    ReactionReport::from_equation(&equation, settings.budget(), rules)
}
