use serde::{Deserialize, Serialize};

/// Structured reading signals returned by the interpretation oracle.
/// Replaced wholesale on every draw; never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsRecord {
    pub sentiment: Sentiment,
    pub scales: Scales,
    pub energy_balance: EnergyBalance,
    pub key_themes: Vec<String>,
    pub dominant_elements: DominantElements,
    pub archetype_intensity: Vec<ArchetypeIntensity>,
    pub potential_narrative: String,
    pub questions_to_ask: Vec<String>,
    pub transformation_potential: TransformationPotential,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_synergies: Option<Vec<CardSynergy>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_signals: Option<Vec<WarningSignal>>,
}

/// Each component in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub overall: f64,
    pub emotional: f64,
    pub practical: f64,
}

/// Numeric sub-scores in [0, 10].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub clarity: f64,
    pub agency: f64,
    pub timing: Timing,
    pub difficulty: f64,
    pub opportunity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timing {
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl Timing {
    pub fn as_str(self) -> &'static str {
        match self {
            Timing::Immediate => "immediate",
            Timing::ShortTerm => "short-term",
            Timing::MediumTerm => "medium-term",
            Timing::LongTerm => "long-term",
        }
    }
}

/// Percentages in [0, 100]. `active`/`receptive` are a pair of their own;
/// the four areas are compared among themselves. Nothing sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBalance {
    pub active: f64,
    pub receptive: f64,
    pub mental: f64,
    pub emotional: f64,
    pub spiritual: f64,
    pub material: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DominantElements {
    pub fire: f64,
    pub water: f64,
    pub air: f64,
    pub earth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeIntensity {
    pub archetype: String,
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningSignal {
    pub signal: String,
    pub severity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformationState {
    Stuck,
    Transitioning,
    Flowing,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformationOutlook {
    Breakthrough,
    GradualShift,
    Maintenance,
    Regression,
}

/// Passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationPotential {
    pub current: TransformationState,
    pub potential: TransformationOutlook,
    pub likelihood: f64,
}

/// Passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSynergy {
    pub cards: Vec<String>,
    pub interpretation: String,
    pub intensity: f64,
}
