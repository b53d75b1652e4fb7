//! # Formula Parser Module
//!
//! ## Purpose
//! Turns the text of a chemical formula (`Ca(OH)₂`, `Fe2(SO4)3`, `Cu2+(aq)`, `K4[Fe(CN)6]`)
//! into a [`ParsedFormula`]: an ordered map {element symbol: number of atoms}, an optional ionic
//! charge and an optional physical state.
//!
//! ## Parsing stages
//! 1. **Normalization**: Unicode subscript digits become ASCII digits, superscript charges
//!    (`⁺`, `²⁻`) become the explicit caret form `^+`, `^2-`
//! 2. **State suffix**: trailing `(s)`, `(l)`, `(g)` or `(aq)`
//! 3. **Charge suffix**: trailing `^<digits><sign>` or `<digit?><sign>` (`Fe3+`, `Cl-`, `NH4^+`)
//! 4. **Element scan**: recursive descent over elements, counts and bracketed groups
//!
//! Every character that does not fit the grammar is reported as a [`ParseError`]; nothing is
//! skipped silently.
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// deepest bracket nesting accepted by the element scan
pub const MAX_GROUP_DEPTH: usize = 64;

static STATE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((s|l|g|aq)\)$").expect("valid state regex"));
// caret form carries any number of digits, bare form carries at most one digit: Fe3+ is Fe with +3
static CHARGE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\^(\d*)|(\d?))([+-])$").expect("valid charge regex"));

/// Physical state of a species, written as a trailing `(s)`, `(l)`, `(g)` or `(aq)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalState {
    Solid,
    Liquid,
    Gas,
    Aqueous,
}

impl PhysicalState {
    /// short mark used inside the state suffix
    pub fn mark(&self) -> &'static str {
        match self {
            PhysicalState::Solid => "s",
            PhysicalState::Liquid => "l",
            PhysicalState::Gas => "g",
            PhysicalState::Aqueous => "aq",
        }
    }

    pub fn from_mark(mark: &str) -> Option<Self> {
        match mark {
            "s" => Some(PhysicalState::Solid),
            "l" => Some(PhysicalState::Liquid),
            "g" => Some(PhysicalState::Gas),
            "aq" => Some(PhysicalState::Aqueous),
            _ => None,
        }
    }
}

/// What exactly went wrong while parsing a formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    Empty,
    UnmatchedParenthesis { position: usize },
    UnexpectedCharacter { character: char, position: usize },
    NoElements,
    ZeroCount { position: usize },
    CountOverflow,
    MalformedSuffix,
    MalformedEquation(String),
    NestingTooDeep { position: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Empty => write!(f, "empty formula"),
            ParseErrorKind::UnmatchedParenthesis { position } => {
                write!(f, "unmatched parenthesis at position {}", position)
            }
            ParseErrorKind::UnexpectedCharacter {
                character,
                position,
            } => write!(
                f,
                "unexpected character '{}' at position {}",
                character, position
            ),
            ParseErrorKind::NoElements => write!(f, "no element symbols found"),
            ParseErrorKind::ZeroCount { position } => {
                write!(f, "zero atom count at position {}", position)
            }
            ParseErrorKind::CountOverflow => write!(f, "atom count is too large"),
            ParseErrorKind::MalformedSuffix => write!(f, "malformed charge or state suffix"),
            ParseErrorKind::MalformedEquation(msg) => write!(f, "malformed equation: {}", msg),
            ParseErrorKind::NestingTooDeep { position } => write!(
                f,
                "groups nested deeper than {} levels at position {}",
                MAX_GROUP_DEPTH, position
            ),
        }
    }
}

/// Error returned for malformed formula (or equation) text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse '{formula}': {kind}")]
pub struct ParseError {
    pub formula: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(formula: &str, kind: ParseErrorKind) -> Self {
        Self {
            formula: formula.to_string(),
            kind,
        }
    }
}

/// Canonical representation of one chemical species.
/// Constructed only by parsing, so every element count is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFormula {
    elements: BTreeMap<String, u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    charge: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<PhysicalState>,
    original_formula: String,
}

impl ParsedFormula {
    pub fn elements(&self) -> &BTreeMap<String, u32> {
        &self.elements
    }
    pub fn charge(&self) -> Option<i32> {
        self.charge
    }
    pub fn state(&self) -> Option<PhysicalState> {
        self.state
    }
    /// the text exactly as it was given to the parser
    pub fn original_formula(&self) -> &str {
        &self.original_formula
    }
    /// number of atoms of the element, 0 if absent
    pub fn count(&self, element: &str) -> u32 {
        self.elements.get(element).copied().unwrap_or(0)
    }
    pub fn distinct_elements(&self) -> usize {
        self.elements.len()
    }
    /// true for species made of one element only: Fe, O2, Cl2
    pub fn is_elemental(&self) -> bool {
        self.elements.len() == 1
    }
    /// true if the composition is exactly the given one, e.g. [("H", 2), ("O", 1)] for water
    pub fn has_composition(&self, composition: &[(&str, u32)]) -> bool {
        self.elements.len() == composition.len()
            && composition
                .iter()
                .all(|(element, n)| self.count(element) == *n)
    }
    /// formula text with subscripts turned into ASCII digits, used for substring heuristics
    pub fn normalized_formula(&self) -> String {
        normalize_subscripts(&self.original_formula)
    }

    /// canonical text: C first, H second, then alphabetical; charge and (optionally) state appended
    pub fn to_formula_string(&self, include_state: bool) -> String {
        let mut sorted: Vec<(&String, &u32)> = self.elements.iter().collect();
        sorted.sort_by(|a, b| canonical_element_order(a.0, b.0));
        let mut result = String::new();
        for (element, count) in sorted {
            result.push_str(element);
            if *count > 1 {
                result.push_str(&count.to_string());
            }
        }
        if let Some(charge) = self.charge {
            if charge != 0 {
                let magnitude = charge.unsigned_abs();
                // caret keeps the magnitude apart from a trailing atom count
                if magnitude > 1 || result.ends_with(|c: char| c.is_ascii_digit()) {
                    result.push('^');
                }
                if magnitude > 1 {
                    result.push_str(&magnitude.to_string());
                }
                result.push(if charge > 0 { '+' } else { '-' });
            }
        }
        if include_state {
            if let Some(state) = self.state {
                result.push_str(&format!("({})", state.mark()));
            }
        }
        result
    }

    /// canonical text with Unicode subscripts for atom counts: H₂O, Fe₂O₃
    pub fn to_subscript_string(&self) -> String {
        let plain = self.to_formula_string(false);
        let mut result = String::with_capacity(plain.len());
        let mut in_charge = false;
        for c in plain.chars() {
            if c == '^' {
                in_charge = true;
                result.push(c);
                continue;
            }
            match c.to_digit(10) {
                Some(d) if !in_charge => {
                    result.push(char::from_u32(0x2080 + d).unwrap_or(c));
                }
                _ => result.push(c),
            }
        }
        result
    }
}

impl fmt::Display for ParsedFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_formula_string(true))
    }
}

impl FromStr for ParsedFormula {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}

fn canonical_element_order(a: &str, b: &str) -> Ordering {
    let rank = |e: &str| match e {
        "C" => 0,
        "H" => 1,
        _ => 2,
    };
    rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
}

/// ₀..₉ -> 0..9, every other character untouched
pub fn normalize_subscripts(formula: &str) -> String {
    formula
        .chars()
        .map(|c| match c {
            '\u{2080}'..='\u{2089}' => {
                char::from_digit(c as u32 - 0x2080, 10).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

fn superscript_digit(c: char) -> Option<char> {
    let d = match c {
        '\u{2070}' => 0,
        '\u{00B9}' => 1,
        '\u{00B2}' => 2,
        '\u{00B3}' => 3,
        '\u{2074}'..='\u{2079}' => c as u32 - 0x2070,
        _ => return None,
    };
    char::from_digit(d, 10)
}

// subscripts to digits, superscript charge (²⁺, ⁻) to caret form (^2+, ^-)
fn normalize(formula: &str) -> String {
    let mut result = String::with_capacity(formula.len());
    let mut in_superscript = false;
    for c in normalize_subscripts(formula).chars() {
        let replacement = match c {
            '\u{207A}' => Some('+'),
            '\u{207B}' => Some('-'),
            // U+2212 MINUS SIGN only counts as a charge right after superscript digits
            '\u{2212}' if in_superscript => Some('-'),
            _ => superscript_digit(c),
        };
        match replacement {
            Some(r) => {
                if !in_superscript {
                    result.push('^');
                    in_superscript = true;
                }
                result.push(r);
            }
            None => {
                in_superscript = false;
                result.push(c);
            }
        }
    }
    result
}

/// Parse a chemical formula like Ca(OH)₂, Fe₂(SO₄)₃, H₂O(l), SO₄²⁻, Cu2+(aq)
pub fn parse_formula(formula: &str) -> Result<ParsedFormula, ParseError> {
    let original = formula;
    let trimmed = formula.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new(original, ParseErrorKind::Empty));
    }
    let normalized = normalize(trimmed);

    let (body, state) = match STATE_SUFFIX.captures(&normalized) {
        Some(caps) => {
            let whole = caps.get(0).map(|m| m.start()).unwrap_or(normalized.len());
            let state = caps.get(1).and_then(|m| PhysicalState::from_mark(m.as_str()));
            (&normalized[..whole], state)
        }
        None => (normalized.as_str(), None),
    };

    let (body, charge) = extract_charge(original, body)?;

    let elements = scan_elements(original, body)?;
    if elements.is_empty() {
        return Err(ParseError::new(original, ParseErrorKind::NoElements));
    }
    debug!(
        "parsed formula '{}': {:?}, charge {:?}, state {:?}",
        original, elements, charge, state
    );
    Ok(ParsedFormula {
        elements,
        charge,
        state,
        original_formula: original.to_string(),
    })
}

fn extract_charge<'a>(
    original: &str,
    body: &'a str,
) -> Result<(&'a str, Option<i32>), ParseError> {
    let Some(caps) = CHARGE_SUFFIX.captures(body) else {
        return Ok((body, None));
    };
    let start = caps.get(0).map(|m| m.start()).unwrap_or(body.len());
    let digits = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str())
        .unwrap_or("");
    let magnitude: i32 = if digits.is_empty() {
        1
    } else {
        digits
            .parse()
            .map_err(|_| ParseError::new(original, ParseErrorKind::MalformedSuffix))?
    };
    if magnitude == 0 {
        return Err(ParseError::new(original, ParseErrorKind::MalformedSuffix));
    }
    let sign = if caps.get(3).map(|m| m.as_str()) == Some("+") {
        1
    } else {
        -1
    };
    Ok((&body[..start], Some(sign * magnitude)))
}

fn scan_elements(original: &str, body: &str) -> Result<BTreeMap<String, u32>, ParseError> {
    let chars: Vec<char> = body.chars().collect();
    let mut scanner = Scanner {
        original,
        chars: &chars,
        pos: 0,
        depth: 0,
    };
    let elements = scanner.group(None)?;
    Ok(elements)
}

struct Scanner<'a> {
    original: &'a str,
    chars: &'a [char],
    pos: usize,
    depth: usize,
}

impl<'a> Scanner<'a> {
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.original, kind)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// reads a digit run; None if there is no digit at the current position
    fn number(&mut self) -> Result<Option<u32>, ParseError> {
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(d) = self.peek().and_then(|c| c.to_digit(10)) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(d))
                .ok_or_else(|| self.error(ParseErrorKind::CountOverflow))?;
            self.pos += 1;
        }
        if self.pos == start {
            return Ok(None);
        }
        if value == 0 {
            return Err(self.error(ParseErrorKind::ZeroCount { position: start }));
        }
        Ok(Some(value))
    }

    fn add(
        &self,
        elements: &mut BTreeMap<String, u32>,
        element: String,
        count: u32,
    ) -> Result<(), ParseError> {
        let entry = elements.entry(element).or_insert(0);
        *entry = entry
            .checked_add(count)
            .ok_or_else(|| self.error(ParseErrorKind::CountOverflow))?;
        Ok(())
    }

    /// parses until the end of input (closing = None) or until the matching bracket
    fn group(&mut self, closing: Option<(char, usize)>) -> Result<BTreeMap<String, u32>, ParseError> {
        let mut elements: BTreeMap<String, u32> = BTreeMap::new();
        while let Some(c) = self.peek() {
            match c {
                'A'..='Z' => {
                    let mut symbol = c.to_string();
                    self.pos += 1;
                    if let Some(l) = self.peek().filter(|l| l.is_ascii_lowercase()) {
                        symbol.push(l);
                        self.pos += 1;
                    }
                    let count = self.number()?.unwrap_or(1);
                    self.add(&mut elements, symbol, count)?;
                }
                '(' | '[' => {
                    let open_at = self.pos;
                    if self.depth >= MAX_GROUP_DEPTH {
                        return Err(self.error(ParseErrorKind::NestingTooDeep {
                            position: open_at,
                        }));
                    }
                    let close = if c == '(' { ')' } else { ']' };
                    self.pos += 1;
                    self.depth += 1;
                    let inner = self.group(Some((close, open_at)))?;
                    self.depth -= 1;
                    if inner.is_empty() {
                        return Err(self.error(ParseErrorKind::NoElements));
                    }
                    let multiplier = self.number()?.unwrap_or(1);
                    for (element, count) in inner {
                        let total = count
                            .checked_mul(multiplier)
                            .ok_or_else(|| self.error(ParseErrorKind::CountOverflow))?;
                        self.add(&mut elements, element, total)?;
                    }
                }
                ')' | ']' => {
                    return match closing {
                        Some((expected, _)) if expected == c => {
                            self.pos += 1;
                            Ok(elements)
                        }
                        _ => Err(self.error(ParseErrorKind::UnmatchedParenthesis {
                            position: self.pos,
                        })),
                    };
                }
                '^' | '+' | '-' => return Err(self.error(ParseErrorKind::MalformedSuffix)),
                other => {
                    return Err(self.error(ParseErrorKind::UnexpectedCharacter {
                        character: other,
                        position: self.pos,
                    }));
                }
            }
        }
        match closing {
            Some((_, open_at)) => Err(self.error(ParseErrorKind::UnmatchedParenthesis {
                position: open_at,
            })),
            None => Ok(elements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composition(formula: &str) -> BTreeMap<String, u32> {
        parse_formula(formula).unwrap().elements().clone()
    }

    fn map(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
        pairs.iter().map(|(e, n)| (e.to_string(), *n)).collect()
    }

    #[test]
    fn test_parse_simple_formulas() {
        assert_eq!(composition("H2O"), map(&[("H", 2), ("O", 1)]));
        assert_eq!(composition("C6H8O6"), map(&[("C", 6), ("H", 8), ("O", 6)]));
        assert_eq!(composition("NaCl"), map(&[("Na", 1), ("Cl", 1)]));
        assert_eq!(composition("C5H6OOH"), map(&[("C", 5), ("H", 7), ("O", 2)]));
    }

    #[test]
    fn test_parse_groups() {
        assert_eq!(composition("Ca(OH)2"), map(&[("Ca", 1), ("O", 2), ("H", 2)]));
        assert_eq!(composition("Fe2(SO4)3"), map(&[("Fe", 2), ("S", 3), ("O", 12)]));
        assert_eq!(
            composition("(NH4)2SO4"),
            map(&[("N", 2), ("H", 8), ("S", 1), ("O", 4)])
        );
        assert_eq!(composition("Na(NO3)2"), map(&[("Na", 1), ("N", 2), ("O", 6)]));
        assert_eq!(
            composition("K4[Fe(CN)6]"),
            map(&[("K", 4), ("Fe", 1), ("C", 6), ("N", 6)])
        );
        assert_eq!(composition("((CH3)3C)2O"), map(&[("C", 8), ("H", 18), ("O", 1)]));
    }

    #[test]
    fn test_subscripts_and_superscripts() {
        assert_eq!(composition("H₂SO₄"), map(&[("H", 2), ("S", 1), ("O", 4)]));
        assert_eq!(composition("Ca(OH)₂"), composition("Ca(OH)2"));
        let sulfate = parse_formula("SO₄²⁻").unwrap();
        assert_eq!(sulfate.elements(), &map(&[("S", 1), ("O", 4)]));
        assert_eq!(sulfate.charge(), Some(-2));
        let ammonium = parse_formula("NH₄⁺").unwrap();
        assert_eq!(ammonium.elements(), &map(&[("N", 1), ("H", 4)]));
        assert_eq!(ammonium.charge(), Some(1));
    }

    #[test]
    fn test_state_and_charge() {
        let water = parse_formula("H2O(l)").unwrap();
        assert_eq!(water.state(), Some(PhysicalState::Liquid));
        assert_eq!(water.charge(), None);
        assert_eq!(water.original_formula(), "H2O(l)");

        let copper = parse_formula("Cu2+(aq)").unwrap();
        assert_eq!(copper.elements(), &map(&[("Cu", 1)]));
        assert_eq!(copper.charge(), Some(2));
        assert_eq!(copper.state(), Some(PhysicalState::Aqueous));

        let chloride = parse_formula("Cl-").unwrap();
        assert_eq!(chloride.charge(), Some(-1));

        // bare sign form takes one digit as the charge
        let iron = parse_formula("Fe3+").unwrap();
        assert_eq!(iron.elements(), &map(&[("Fe", 1)]));
        assert_eq!(iron.charge(), Some(3));

        let ammonium = parse_formula("NH4^+").unwrap();
        assert_eq!(ammonium.count("H"), 4);
        assert_eq!(ammonium.charge(), Some(1));

        let gas = parse_formula("CO2(g)").unwrap();
        assert_eq!(gas.state(), Some(PhysicalState::Gas));
        assert_eq!(parse_formula("AgCl(s)").unwrap().state(), Some(PhysicalState::Solid));
    }

    #[test]
    fn test_malformed_input() {
        let err = parse_formula("H2O(").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnmatchedParenthesis { .. }));
        let err = parse_formula("H2O)").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnmatchedParenthesis { position: 3 }));
        let err = parse_formula("Ca(OH]2").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnmatchedParenthesis { .. }));
        assert_eq!(parse_formula("").unwrap_err().kind, ParseErrorKind::Empty);
        assert_eq!(parse_formula("   ").unwrap_err().kind, ParseErrorKind::Empty);
        assert_eq!(parse_formula("(s)").unwrap_err().kind, ParseErrorKind::NoElements);
        assert_eq!(parse_formula("()2").unwrap_err().kind, ParseErrorKind::NoElements);
        assert!(matches!(
            parse_formula("h2o").unwrap_err().kind,
            ParseErrorKind::UnexpectedCharacter { character: 'h', position: 0 }
        ));
        assert!(matches!(
            parse_formula("H2 O").unwrap_err().kind,
            ParseErrorKind::UnexpectedCharacter { character: ' ', .. }
        ));
        assert!(matches!(
            parse_formula("2H2O").unwrap_err().kind,
            ParseErrorKind::UnexpectedCharacter { character: '2', position: 0 }
        ));
        assert!(matches!(
            parse_formula("H0").unwrap_err().kind,
            ParseErrorKind::ZeroCount { position: 1 }
        ));
        assert_eq!(
            parse_formula("H99999999999").unwrap_err().kind,
            ParseErrorKind::CountOverflow
        );
        assert_eq!(parse_formula("H2O+-").unwrap_err().kind, ParseErrorKind::MalformedSuffix);
        assert_eq!(parse_formula("Fe0+").unwrap_err().kind, ParseErrorKind::MalformedSuffix);
    }

    #[test]
    fn test_nesting_depth_is_bounded() {
        let nested = |n: usize| format!("{}H{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(composition(&nested(MAX_GROUP_DEPTH)), map(&[("H", 1)]));
        assert_eq!(
            parse_formula(&nested(MAX_GROUP_DEPTH + 1)).unwrap_err().kind,
            ParseErrorKind::NestingTooDeep {
                position: MAX_GROUP_DEPTH
            }
        );
        // must come back as an error, not exhaust the stack
        let err = parse_formula(&nested(100_000)).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::NestingTooDeep { .. }));
        let err = parse_formula(&format!("Fe{}", "[".repeat(100_000))).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::NestingTooDeep { .. }));
    }

    #[test]
    fn test_to_string_canonical_order() {
        assert_eq!(parse_formula("OH2").unwrap().to_formula_string(false), "H2O");
        assert_eq!(parse_formula("C2H5OH").unwrap().to_formula_string(false), "C2H6O");
        assert_eq!(parse_formula("NaCl").unwrap().to_formula_string(false), "ClNa");
        assert_eq!(
            parse_formula("Fe3+(aq)").unwrap().to_formula_string(true),
            "Fe^3+(aq)"
        );
        assert_eq!(parse_formula("Cl-").unwrap().to_string(), "Cl-");
        assert_eq!(parse_formula("NH4^+").unwrap().to_string(), "H4N+");
        assert_eq!(parse_formula("Fe2(SO4)3").unwrap().to_subscript_string(), "Fe₂O₁₂S₃");
    }

    #[test]
    fn test_round_trip_is_chemically_equivalent() {
        for formula in [
            "H2O",
            "Ca(OH)2",
            "Fe2(SO4)3",
            "(NH4)2SO4",
            "K4[Fe(CN)6]",
            "SO4^2-",
            "NH4^+",
            "Cu2+(aq)",
            "CH3COOH(l)",
            "Al2(SO4)3(s)",
        ] {
            let parsed = parse_formula(formula).unwrap();
            let again = parse_formula(&parsed.to_string()).unwrap();
            assert_eq!(parsed.elements(), again.elements(), "{}", formula);
            assert_eq!(parsed.charge(), again.charge(), "{}", formula);
            assert_eq!(parsed.state(), again.state(), "{}", formula);
        }
    }

    #[test]
    fn test_composition_helpers() {
        let water: ParsedFormula = "H2O".parse().unwrap();
        assert!(water.has_composition(&[("H", 2), ("O", 1)]));
        assert!(!water.has_composition(&[("H", 2)]));
        assert!(!water.is_elemental());
        assert!(parse_formula("O2").unwrap().is_elemental());
        assert_eq!(water.count("C"), 0);
        assert_eq!(parse_formula("CO₂").unwrap().normalized_formula(), "CO2");
    }
}
