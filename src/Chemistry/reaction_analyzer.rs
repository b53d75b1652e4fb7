//! # Reaction Analyzer Module
//!
//! ## Purpose
//! Classifies a reaction by structural heuristics over the parsed formulas and predicts the
//! observable side products: a precipitate (with its color), an evolved gas and a color change.
//!
//! ## Rules
//! All rules are evaluated independently, a reaction may match several types at once:
//! | Type | Condition |
//! |------|-----------|
//! | acid-base | acid-like reactant (starts with H) + base-like reactant (OH inside or O at the end) + water among products |
//! | precipitation | a product is `(s)` or matches the insolubility table |
//! | single displacement | 2 → 2 and some reactant is elemental |
//! | double displacement | 2 → 2 and every reactant has ≥ 2 elements |
//! | decomposition | 1 → ≥ 2 |
//! | synthesis | ≥ 2 → 1 |
//! | combustion | O2 among reactants, CO2 or water among products |
//!
//! The solubility and color tables are plain substring heuristics kept in [`ReactionRules`], an
//! immutable value that can be replaced by tables loaded from a lab data file.
use crate::Chemistry::chemical_equation::ChemicalEquation;
use crate::Chemistry::formula_parser::{ParsedFormula, PhysicalState};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// declaration order is the order in which types are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReactionType {
    AcidBase,
    Precipitation,
    SingleDisplacement,
    DoubleDisplacement,
    Decomposition,
    Synthesis,
    Combustion,
    /// No rule emits it; kept so the serialized set of types stays closed.
    Redox,
}

impl ReactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionType::AcidBase => "acid-base",
            ReactionType::Precipitation => "precipitation",
            ReactionType::SingleDisplacement => "single-displacement",
            ReactionType::DoubleDisplacement => "double-displacement",
            ReactionType::Decomposition => "decomposition",
            ReactionType::Synthesis => "synthesis",
            ReactionType::Combustion => "combustion",
            ReactionType::Redox => "redox",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precipitate {
    pub compound: String,
    pub color: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasEvolution {
    pub compound: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorChange {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionAnalysis {
    pub types: BTreeSet<ReactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitate: Option<Precipitate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<GasEvolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_change: Option<ColorChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_exothermic: Option<bool>,
}

impl ReactionAnalysis {
    pub fn has_type(&self, reaction_type: ReactionType) -> bool {
        self.types.contains(&reaction_type)
    }
}

/// precipitate color for formulas containing `marker`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRule {
    pub marker: String,
    pub color: String,
}

/// a reactant containing `reactant` turning into a product containing `product` changes the
/// solution color from `from` to `to`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorChangeRule {
    pub reactant: String,
    pub product: String,
    pub from: String,
    pub to: String,
}

/// Heuristic lookup tables of the analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReactionRules {
    /// always insoluble: AgCl, PbCl
    pub insoluble_compounds: Vec<String>,
    /// anions insoluble unless paired with a soluble cation: CO3, OH
    pub insoluble_anions: Vec<String>,
    /// formula prefixes of group 1 cations: Na, K
    pub soluble_cation_prefixes: Vec<String>,
    pub precipitate_colors: Vec<ColorRule>,
    pub default_precipitate_color: String,
    pub gas_species: Vec<String>,
    pub color_changes: Vec<ColorChangeRule>,
}

impl Default for ReactionRules {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let color = |marker: &str, color: &str| ColorRule {
            marker: marker.to_string(),
            color: color.to_string(),
        };
        let change = |reactant: &str, product: &str, from: &str, to: &str| ColorChangeRule {
            reactant: reactant.to_string(),
            product: product.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        };
        Self {
            insoluble_compounds: strings(&["AgCl", "PbCl"]),
            insoluble_anions: strings(&["CO3", "OH"]),
            soluble_cation_prefixes: strings(&["Na", "K"]),
            precipitate_colors: vec![
                color("AgCl", "white"),
                color("Cu(OH)", "blue"),
                color("Fe(OH)3", "brown"),
                color("CaCO3", "white"),
                color("BaSO4", "white"),
            ],
            default_precipitate_color: "white".to_string(),
            gas_species: strings(&["CO2", "H2", "O2", "NH3", "SO2", "Cl2", "N2"]),
            color_changes: vec![
                change("CuSO4", "FeSO4", "blue", "pale green"),
                change("CuSO4", "ZnSO4", "blue", "colorless"),
            ],
        }
    }
}

impl ReactionRules {
    /// simplified solubility rules on the formula text
    pub fn is_insoluble(&self, compound: &ParsedFormula) -> bool {
        let formula = compound.normalized_formula();
        if self
            .insoluble_compounds
            .iter()
            .any(|marker| formula.contains(marker.as_str()))
        {
            return true;
        }
        let soluble_cation = self
            .soluble_cation_prefixes
            .iter()
            .any(|prefix| formula.starts_with(prefix.as_str()));
        !soluble_cation
            && self
                .insoluble_anions
                .iter()
                .any(|anion| formula.contains(anion.as_str()))
    }

    pub fn precipitate_color(&self, compound: &ParsedFormula) -> String {
        let formula = compound.normalized_formula();
        self.precipitate_colors
            .iter()
            .find(|rule| formula.contains(rule.marker.as_str()))
            .map(|rule| rule.color.clone())
            .unwrap_or_else(|| self.default_precipitate_color.clone())
    }

    pub fn is_known_gas(&self, compound: &ParsedFormula) -> bool {
        let formula = compound.normalized_formula();
        self.gas_species
            .iter()
            .any(|gas| formula.contains(gas.as_str()))
    }
}

// both tests are case-insensitive: Co, Mo and No end in "O" once upper-cased
fn is_acid(compound: &ParsedFormula) -> bool {
    let formula = compound.normalized_formula().to_uppercase();
    formula.starts_with('H') && formula.chars().count() > 1
}

fn is_base(compound: &ParsedFormula) -> bool {
    let formula = compound.normalized_formula().to_uppercase();
    formula.contains("OH") || formula.ends_with('O')
}

fn is_water(compound: &ParsedFormula) -> bool {
    compound.has_composition(&[("H", 2), ("O", 1)])
}

fn is_carbon_dioxide(compound: &ParsedFormula) -> bool {
    compound.has_composition(&[("C", 1), ("O", 2)])
}

fn is_oxygen(compound: &ParsedFormula) -> bool {
    compound.has_composition(&[("O", 2)])
}

fn is_precipitating(compound: &ParsedFormula, rules: &ReactionRules) -> bool {
    compound.state() == Some(PhysicalState::Solid) || rules.is_insoluble(compound)
}

fn two_to_two(equation: &ChemicalEquation) -> bool {
    equation.reactants.len() == 2 && equation.products.len() == 2
}

/// analyze with the built-in tables
pub fn analyze(equation: &ChemicalEquation) -> ReactionAnalysis {
    analyze_with_rules(equation, &ReactionRules::default())
}

pub fn analyze_with_rules(equation: &ChemicalEquation, rules: &ReactionRules) -> ReactionAnalysis {
    let reactants = &equation.reactants;
    let products = &equation.products;
    let mut types = BTreeSet::new();

    if reactants.iter().any(is_acid) && reactants.iter().any(is_base) && products.iter().any(is_water)
    {
        types.insert(ReactionType::AcidBase);
    }
    if products.iter().any(|p| is_precipitating(p, rules)) {
        types.insert(ReactionType::Precipitation);
    }
    if two_to_two(equation) && reactants.iter().any(|r| r.is_elemental()) {
        types.insert(ReactionType::SingleDisplacement);
    }
    if two_to_two(equation) && reactants.iter().all(|r| r.distinct_elements() >= 2) {
        types.insert(ReactionType::DoubleDisplacement);
    }
    if reactants.len() == 1 && products.len() >= 2 {
        types.insert(ReactionType::Decomposition);
    }
    if reactants.len() >= 2 && products.len() == 1 {
        types.insert(ReactionType::Synthesis);
    }
    if reactants.iter().any(is_oxygen)
        && products.iter().any(|p| is_carbon_dioxide(p) || is_water(p))
    {
        types.insert(ReactionType::Combustion);
    }

    let precipitate = products
        .iter()
        .find(|p| is_precipitating(p, rules))
        .map(|p| {
            let color = rules.precipitate_color(p);
            Precipitate {
                compound: p.original_formula().to_string(),
                description: format!("{} precipitate", color),
                color,
            }
        });

    let gas = products
        .iter()
        .find(|p| p.state() == Some(PhysicalState::Gas) || rules.is_known_gas(p))
        .map(|p| GasEvolution {
            compound: p.original_formula().to_string(),
            description: format!("{} gas evolved", p.original_formula()),
        });

    let color_change = rules
        .color_changes
        .iter()
        .find(|rule| {
            reactants
                .iter()
                .any(|r| r.normalized_formula().contains(rule.reactant.as_str()))
                && products
                    .iter()
                    .any(|p| p.normalized_formula().contains(rule.product.as_str()))
        })
        .map(|rule| ColorChange {
            from: rule.from.clone(),
            to: rule.to.clone(),
        });

    let is_exothermic = (types.contains(&ReactionType::Combustion)
        || types.contains(&ReactionType::AcidBase))
    .then_some(true);

    debug!("analysis of {}: {:?}", equation, types);
    ReactionAnalysis {
        types,
        precipitate,
        gas,
        color_change,
        is_exothermic,
    }
}
