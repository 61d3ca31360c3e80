use serde::Serialize;
use super::types::{ArchetypeIntensity, DominantElements, EnergyBalance, InsightsRecord, Scales, Timing};

// Presentation thresholds. Scale thresholds live on `Scale`.
pub const DOMINANT_ENERGY: f64 = 40.0;
pub const DOMINANT_ELEMENT: f64 = 40.0;
pub const HIGH_ENERGY: f64 = 70.0;
pub const ENERGY_SKEW: f64 = 30.0;
pub const HIGH_ARCHETYPE: f64 = 8.0;
pub const HIGH_SENTIMENT: f64 = 0.5;
pub const LOW_SENTIMENT: f64 = -0.5;
pub const HIGH_SEVERITY: f64 = 7.0;
pub const MEDIUM_SEVERITY: f64 = 4.0;
pub const TOP_ARCHETYPES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyArea {
    Mental,
    Emotional,
    Spiritual,
    Material,
}

impl EnergyArea {
    /// Tie-break order: earlier wins.
    pub const ORDER: [EnergyArea; 4] = [
        EnergyArea::Mental,
        EnergyArea::Emotional,
        EnergyArea::Spiritual,
        EnergyArea::Material,
    ];

    pub fn value_in(self, balance: &EnergyBalance) -> f64 {
        match self {
            EnergyArea::Mental => balance.mental,
            EnergyArea::Emotional => balance.emotional,
            EnergyArea::Spiritual => balance.spiritual,
            EnergyArea::Material => balance.material,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
}

impl Element {
    /// Tie-break order: earlier wins.
    pub const ORDER: [Element; 4] = [Element::Fire, Element::Water, Element::Air, Element::Earth];

    pub fn value_in(self, elements: &DominantElements) -> f64 {
        match self {
            Element::Fire => elements.fire,
            Element::Water => elements.water,
            Element::Air => elements.air,
            Element::Earth => elements.earth,
        }
    }
}

/// The largest energy area. `crowned` is a separate, higher bar than winning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DominantEnergy {
    pub key: EnergyArea,
    pub value: f64,
    pub crowned: bool,
}

/// The largest element. `starred` is a separate, higher bar than winning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DominantElement {
    pub key: Element,
    pub value: f64,
    pub starred: bool,
}

/// Left fold that only replaces on a strictly greater value.
fn first_max<K: Copy>(entries: [(K, f64); 4]) -> (K, f64) {
    let [first, rest @ ..] = entries;
    rest.into_iter()
        .fold(first, |max, curr| if curr.1 > max.1 { curr } else { max })
}

pub fn dominant_energy_area(record: &InsightsRecord) -> DominantEnergy {
    let balance = &record.energy_balance;
    let (key, value) = first_max(EnergyArea::ORDER.map(|a| (a, a.value_in(balance))));
    DominantEnergy { key, value, crowned: value >= DOMINANT_ENERGY }
}

pub fn dominant_element(record: &InsightsRecord) -> DominantElement {
    let elements = &record.dominant_elements;
    let (key, value) = first_max(Element::ORDER.map(|e| (e, e.value_in(elements))));
    DominantElement { key, value, starred: value >= DOMINANT_ELEMENT }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Clarity,
    Agency,
    Difficulty,
    Opportunity,
}

impl Scale {
    pub const ORDER: [Scale; 4] = [Scale::Clarity, Scale::Agency, Scale::Difficulty, Scale::Opportunity];

    /// (high if >=, low if <=). Not uniform across scales.
    pub fn thresholds(self) -> (f64, f64) {
        match self {
            Scale::Clarity => (8.0, 3.0),
            Scale::Agency => (8.0, 3.0),
            Scale::Difficulty => (8.0, 2.0),
            Scale::Opportunity => (8.0, 3.0),
        }
    }

    /// Difficulty reads the other way round: high is bad, low is good.
    pub fn high_is_favorable(self) -> bool {
        !matches!(self, Scale::Difficulty)
    }

    pub fn value_in(self, scales: &Scales) -> f64 {
        match self {
            Scale::Clarity => scales.clarity,
            Scale::Agency => scales.agency,
            Scale::Difficulty => scales.difficulty,
            Scale::Opportunity => scales.opportunity,
        }
    }

    fn glyph(self, level: ScaleLevel) -> Option<&'static str> {
        match (self, level) {
            (_, ScaleLevel::Normal) => None,
            (Scale::Clarity, ScaleLevel::High) => Some("✨"),
            (Scale::Agency, ScaleLevel::High) => Some("💪"),
            (Scale::Difficulty, ScaleLevel::High) => Some("🔥"),
            (Scale::Opportunity, ScaleLevel::High) => Some("🚀"),
            (Scale::Clarity | Scale::Agency, ScaleLevel::Low) => Some("⚠️"),
            (Scale::Difficulty, ScaleLevel::Low) => Some("✅"),
            (Scale::Opportunity, ScaleLevel::Low) => Some("💤"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleLevel {
    Normal,
    High,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Favorable,
    Unfavorable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleHighlight {
    pub scale: Scale,
    pub value: f64,
    pub level: ScaleLevel,
    /// `None` at normal level.
    pub polarity: Option<Polarity>,
    pub glyph: Option<&'static str>,
}

/// High is checked first; the low bar always sits below the high bar.
pub fn scale_highlight(scale: Scale, value: f64) -> ScaleHighlight {
    let (high, low) = scale.thresholds();
    let level = if value >= high {
        ScaleLevel::High
    } else if value <= low {
        ScaleLevel::Low
    } else {
        ScaleLevel::Normal
    };

    let polarity = match level {
        ScaleLevel::Normal => None,
        ScaleLevel::High if scale.high_is_favorable() => Some(Polarity::Favorable),
        ScaleLevel::High => Some(Polarity::Unfavorable),
        ScaleLevel::Low if scale.high_is_favorable() => Some(Polarity::Unfavorable),
        ScaleLevel::Low => Some(Polarity::Favorable),
    };

    ScaleHighlight { scale, value, level, polarity, glyph: scale.glyph(level) }
}

/// One shared bar for overall, emotional and practical.
pub fn sentiment_highlight(value: f64) -> bool {
    value.abs() > HIGH_SENTIMENT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SentimentTone {
    StrongPositive,
    Positive,
    Guarded,
    Negative,
}

pub fn sentiment_tone(value: f64) -> SentimentTone {
    if value >= HIGH_SENTIMENT {
        SentimentTone::StrongPositive
    } else if value >= 0.0 {
        SentimentTone::Positive
    } else if value >= LOW_SENTIMENT {
        SentimentTone::Guarded
    } else {
        SentimentTone::Negative
    }
}

/// [-1, 1] -> [0, 100]. `f64::round` rounds halves away from zero, which
/// matches round-half-up everywhere inside the domain.
pub fn format_sentiment_percent(value: f64) -> i64 {
    ((value + 1.0) * 50.0).round() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

pub fn severity_bucket(value: f64) -> Severity {
    if value >= HIGH_SEVERITY {
        Severity::High
    } else if value >= MEDIUM_SEVERITY {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Active vs receptive differ by at least 30 points. A 0/0 pair is never skewed.
pub fn energy_balance_skew(record: &InsightsRecord) -> bool {
    let EnergyBalance { active, receptive, .. } = record.energy_balance;
    active + receptive > 0.0 && (active - receptive).abs() >= ENERGY_SKEW
}

pub fn high_energy(value: f64) -> bool {
    value >= HIGH_ENERGY
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeHighlight {
    pub archetype: String,
    pub intensity: f64,
    pub highlighted: bool,
}

/// Strongest `n` archetypes, ties kept in received order. Empty in, empty out.
pub fn top_archetypes(archetypes: &[ArchetypeIntensity], n: usize) -> Vec<ArchetypeHighlight> {
    let mut ranked: Vec<&ArchetypeIntensity> = archetypes.iter().collect();
    ranked.sort_by(|a, b| b.intensity.total_cmp(&a.intensity));
    ranked
        .into_iter()
        .take(n)
        .map(|a| ArchetypeHighlight {
            archetype: a.archetype.clone(),
            intensity: a.intensity,
            highlighted: a.intensity >= HIGH_ARCHETYPE,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingLabel {
    pub text: String,
    pub emphasized: bool,
}

pub fn timing_label(timing: Timing) -> TimingLabel {
    TimingLabel {
        text: timing.as_str().replacen('-', " ", 1),
        emphasized: timing == Timing::Immediate,
    }
}
