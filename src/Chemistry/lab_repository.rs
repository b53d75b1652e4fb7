//! # Lab Repository Module
//!
//! ## Purpose
//! Immutable catalog of lab chemicals and the reactions known between them. The repository is a
//! plain value: the caller loads it once (bundled library, a file or any text document) and passes
//! it around by reference.
//!
//! ## Data format
//! Sectioned text document, every header line followed by a JSON value:
//! ```text
//! CHEMICALS
//! [ {"id": "hcl", "name": "Hydrochloric Acid", "formula": "HCl", "type": "acid", ...} ]
//! REACTIONS
//! [ {"id": "hcl-naoh", "reactants": ["hcl", "naoh"], "products": ["NaCl", "H2O"], "type": "neutralization", ...} ]
//! RULES
//! { "gasSpecies": ["CO2", "H2"], ... }
//! ```
//! `CHEMICALS` is required, `REACTIONS` and `RULES` are optional (`RULES` falls back to the
//! default analyzer tables).
//!
//! ## Lookup
//! Reaction lookup compares the multiset of chemical ids regardless of order; a reaction that
//! requires heating is not found unless the mixture is heated.
use crate::Chemistry::reaction_analyzer::ReactionRules;
use crate::Utils::load_from_file::{load_sections_from_file, parse_sections};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

const BUILTIN_LIBRARY: &str = include_str!("../../data/lab_library.txt");
const SECTIONS: [&str; 3] = ["CHEMICALS", "REACTIONS", "RULES"];
const WHITE: &str = "#ffffff";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chemical {
    pub id: String,
    pub name: String,
    pub formula: String,
    /// acid, base, salt, metal, gas...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub state: String,
    /// hex color of the substance as poured into the beaker
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hazard: String,
    #[serde(default)]
    pub molar_mass: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabReactionType {
    Neutralization,
    Precipitation,
    GasEvolution,
    ColorChange,
    Combustion,
    Redox,
    None,
}

impl LabReactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabReactionType::Neutralization => "neutralization",
            LabReactionType::Precipitation => "precipitation",
            LabReactionType::GasEvolution => "gas-evolution",
            LabReactionType::ColorChange => "color-change",
            LabReactionType::Combustion => "combustion",
            LabReactionType::Redox => "redox",
            LabReactionType::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bubbles {
    #[default]
    None,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecipitateEffect {
    pub color: String,
    /// light, moderate or heavy
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasEffect {
    #[serde(rename = "type")]
    pub gas: String,
    /// 0-10
    pub intensity: u8,
}

/// What the mixture looks like after the reaction
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualEffects {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_change: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bubbles: Option<Bubbles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitate: Option<PrecipitateEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<GasEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoke: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explosion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow: Option<bool>,
    /// °C, positive for exothermic reactions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_change: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabReaction {
    pub id: String,
    /// chemical ids
    pub reactants: Vec<String>,
    /// product formulas
    pub products: Vec<String>,
    #[serde(rename = "type")]
    pub kind: LabReactionType,
    pub equation: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub safety: String,
    #[serde(default)]
    pub effects: VisualEffects,
    #[serde(default)]
    pub requires_heat: bool,
    #[serde(default)]
    pub requires_stir: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabConditions {
    pub heated: bool,
    /// Carried with the mixture for callers that show it. Lookup only checks `heated`, a
    /// `requiresStir` reaction also happens unstirred.
    pub stirred: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabOutcome {
    pub reaction: Option<LabReaction>,
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabRepository {
    chemicals: Vec<Chemical>,
    reactions: Vec<LabReaction>,
    rules: ReactionRules,
}

impl LabRepository {
    pub fn new(chemicals: Vec<Chemical>, reactions: Vec<LabReaction>, rules: ReactionRules) -> Self {
        Self {
            chemicals,
            reactions,
            rules,
        }
    }

    /// the library bundled with the crate
    pub fn builtin() -> Result<Self, String> {
        Self::from_document(BUILTIN_LIBRARY)
    }

    pub fn from_document(text: &str) -> Result<Self, String> {
        let sections = parse_sections(text, &SECTIONS)?;
        Self::from_sections(sections)
    }

    pub fn load(file_name: &str) -> Result<Self, String> {
        let sections = load_sections_from_file(file_name, &SECTIONS)?;
        let repository = Self::from_sections(sections)?;
        info!(
            "lab library '{}': {} chemicals, {} reactions",
            file_name,
            repository.chemicals.len(),
            repository.reactions.len()
        );
        Ok(repository)
    }

    fn from_sections(mut sections: HashMap<String, Value>) -> Result<Self, String> {
        let chemicals: Vec<Chemical> = match sections.remove("CHEMICALS") {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| format!("Invalid CHEMICALS section: {}", e))?,
            None => return Err("No 'CHEMICALS' section found".to_string()),
        };
        let reactions: Vec<LabReaction> = match sections.remove("REACTIONS") {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| format!("Invalid REACTIONS section: {}", e))?,
            None => {
                warn!("Lab library has no REACTIONS section");
                Vec::new()
            }
        };
        let rules: ReactionRules = match sections.remove("RULES") {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| format!("Invalid RULES section: {}", e))?,
            None => ReactionRules::default(),
        };
        let repository = Self::new(chemicals, reactions, rules);
        repository.validate();
        Ok(repository)
    }

    /// warns about data that loads but cannot be used as intended
    fn validate(&self) {
        for reaction in &self.reactions {
            for id in &reaction.reactants {
                if self.chemical(id).is_none() {
                    warn!("Reaction '{}' uses unknown chemical '{}'", reaction.id, id);
                }
            }
            if reaction.reactants.len() < 2 {
                warn!(
                    "Reaction '{}' has fewer than 2 reactants and can never be mixed",
                    reaction.id
                );
            }
        }
        for chemical in &self.chemicals {
            if hex_to_rgb(&chemical.color).is_none() {
                warn!(
                    "Chemical '{}' color '{}' is not a hex color, white is used when mixing",
                    chemical.id, chemical.color
                );
            }
        }
    }

    pub fn chemicals(&self) -> &[Chemical] {
        &self.chemicals
    }

    pub fn reactions(&self) -> &[LabReaction] {
        &self.reactions
    }

    pub fn chemical(&self, id: &str) -> Option<&Chemical> {
        self.chemicals.iter().find(|c| c.id == id)
    }

    /// analyzer tables from the RULES section
    pub fn rules(&self) -> &ReactionRules {
        &self.rules
    }

    /// first reaction whose reactants equal the given ids as a multiset
    pub fn find_reaction<S: AsRef<str>>(
        &self,
        ids: &[S],
        conditions: LabConditions,
    ) -> Option<&LabReaction> {
        let mut input: Vec<&str> = ids.iter().map(|id| id.as_ref()).collect();
        input.sort_unstable();
        self.reactions.iter().find(|reaction| {
            let mut reactants: Vec<&str> = reaction.reactants.iter().map(|r| r.as_str()).collect();
            reactants.sort_unstable();
            reactants == input && (!reaction.requires_heat || conditions.heated)
        })
    }

    pub fn evaluate_reaction<S: AsRef<str>>(
        &self,
        ids: &[S],
        conditions: LabConditions,
    ) -> LabOutcome {
        if ids.len() < 2 {
            return LabOutcome {
                reaction: None,
                success: false,
                message: "Add at least 2 chemicals to create a reaction.".to_string(),
            };
        }
        match self.find_reaction(ids, conditions) {
            Some(reaction) => {
                debug!("lab reaction '{}' found", reaction.id);
                LabOutcome {
                    reaction: Some(reaction.clone()),
                    success: true,
                    message: format!("Reaction occurred: {}", reaction.kind.as_str()),
                }
            }
            None => LabOutcome {
                reaction: None,
                success: false,
                message: "No reaction occurs with these chemicals under current conditions."
                    .to_string(),
            },
        }
    }

    /// average color of the known chemicals among the ids
    pub fn blend_colors<S: AsRef<str>>(&self, ids: &[S]) -> String {
        let colors: Vec<&str> = ids
            .iter()
            .filter_map(|id| self.chemical(id.as_ref()))
            .map(|c| c.color.as_str())
            .collect();
        match colors.as_slice() {
            [] => WHITE.to_string(),
            [single] => single.to_string(),
            many => {
                let rgb: Vec<[u8; 3]> = many
                    .iter()
                    .map(|c| hex_to_rgb(c).unwrap_or([255, 255, 255]))
                    .collect();
                let n = rgb.len() as f64;
                let channel = |k: usize| {
                    let sum: f64 = rgb.iter().map(|c| c[k] as f64).sum();
                    (sum / n).round() as u8
                };
                rgb_to_hex([channel(0), channel(1), channel(2)])
            }
        }
    }

    /// effects of a mixture in which nothing reacts
    pub fn default_effects<S: AsRef<str>>(&self, ids: &[S]) -> VisualEffects {
        VisualEffects {
            color: Some(self.blend_colors(ids)),
            bubbles: Some(Bubbles::None),
            temperature_change: Some(0.0),
            ..VisualEffects::default()
        }
    }
}

/// "#rrggbb" or "rrggbb", case-insensitive
fn hex_to_rgb(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}
