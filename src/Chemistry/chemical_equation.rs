//! # Chemical Equation Module
//!
//! Ordered reactants and products of one reaction, plus parsing of whole equation text such as
//! `"2H2 + O2 -> 2H2O"` or `"Fe + CuSO₄ → FeSO₄ + Cu"`.
//!
//! Accepted arrows: `→`, `⟶`, `->`, `=>`, `=`. Species are separated by `+`; when the side is
//! written with spaces the separator must stand alone (`Fe3+ + Cu`), in compact notation a `+` splits
//! only when a new species follows it (`Fe3++Cu` is `Fe3+` and `Cu`). Leading integer coefficients
//! are dropped: the balancer computes its own.
use crate::Chemistry::formula_parser::{ParseError, ParseErrorKind, ParsedFormula, parse_formula};
use serde::Serialize;
use std::fmt;

const ARROWS: [&str; 5] = ["\u{2192}", "\u{27F6}", "->", "=>", "="];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChemicalEquation {
    pub reactants: Vec<ParsedFormula>,
    pub products: Vec<ParsedFormula>,
}

impl ChemicalEquation {
    pub fn new(reactants: Vec<ParsedFormula>, products: Vec<ParsedFormula>) -> Self {
        Self {
            reactants,
            products,
        }
    }

    /// parse each formula of already split reactant and product lists
    pub fn from_formulas<S: AsRef<str>>(reactants: &[S], products: &[S]) -> Result<Self, ParseError> {
        let reactants = reactants
            .iter()
            .map(|f| parse_formula(f.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let products = products
            .iter()
            .map(|f| parse_formula(f.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(reactants, products))
    }

    /// parse an equation written as text: "CH4 + 2O2 -> CO2 + 2H2O"
    pub fn parse_equation(text: &str) -> Result<Self, ParseError> {
        let malformed =
            |msg: &str| ParseError::new(text, ParseErrorKind::MalformedEquation(msg.to_string()));
        let (position, arrow) = ARROWS
            .iter()
            .filter_map(|arrow| text.find(arrow).map(|pos| (pos, *arrow)))
            // earliest arrow wins, the longer one on a tie ("=>" over "=")
            .min_by(|a, b| a.0.cmp(&b.0).then(b.1.len().cmp(&a.1.len())))
            .ok_or_else(|| malformed("no reaction arrow"))?;
        let left = &text[..position];
        let right = &text[position + arrow.len()..];
        let reactants = split_side(left).map_err(|msg| malformed(msg))?;
        let products = split_side(right).map_err(|msg| malformed(msg))?;
        if reactants.is_empty() {
            return Err(malformed("no reactants"));
        }
        if products.is_empty() {
            return Err(malformed("no products"));
        }
        Self::from_formulas(&reactants[..], &products[..])
    }

    /// reactants followed by products
    pub fn species(&self) -> impl Iterator<Item = &ParsedFormula> {
        self.reactants.iter().chain(self.products.iter())
    }

    pub fn number_of_species(&self) -> usize {
        self.reactants.len() + self.products.len()
    }
}

impl fmt::Display for ChemicalEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |formulas: &[ParsedFormula]| {
            formulas
                .iter()
                .map(|p| p.original_formula().to_string())
                .collect::<Vec<_>>()
                .join(" + ")
        };
        write!(f, "{} \u{2192} {}", side(&self.reactants), side(&self.products))
    }
}

fn split_side(side: &str) -> Result<Vec<String>, &'static str> {
    let side = side.trim();
    if side.is_empty() {
        return Ok(Vec::new());
    }
    let tokens: Vec<&str> = side.split_whitespace().collect();
    let raw: Vec<String> = if tokens.contains(&"+") {
        tokens
            .split(|t| *t == "+")
            .map(|group| group.join(" "))
            .collect()
    } else {
        split_compact(side)
    };
    raw.into_iter()
        .map(|species| {
            let species = strip_coefficient(species.trim());
            if species.is_empty() {
                Err("empty species")
            } else {
                Ok(species.to_string())
            }
        })
        .collect()
}

// "H2+O2" -> ["H2", "O2"], "Fe3++Cu" -> ["Fe3+", "Cu"]
fn split_compact(side: &str) -> Vec<String> {
    let chars: Vec<char> = side.chars().collect();
    let mut parts = Vec::new();
    let mut current = String::new();
    for (i, c) in chars.iter().enumerate() {
        let starts_species = chars
            .get(i + 1)
            .map(|n| n.is_ascii_uppercase() || n.is_ascii_digit() || *n == '(' || *n == '[')
            .unwrap_or(false);
        let after_caret = i > 0 && chars[i - 1] == '^';
        if *c == '+' && starts_species && !after_caret {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(*c);
        }
    }
    parts.push(current);
    parts
}

fn strip_coefficient(species: &str) -> &str {
    species
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_start()
}
