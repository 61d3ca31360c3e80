use serde::Serialize;
use super::aggregator::*;
use super::types::{InsightsRecord, WarningSignal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentComponent {
    Overall,
    Emotional,
    Practical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentReading {
    pub component: SentimentComponent,
    pub percent: i64,
    pub notable: bool,
    pub tone: SentimentTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergySummary {
    pub active_high: bool,
    pub receptive_high: bool,
    pub skewed: bool,
    pub dominant: DominantEnergy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarningHighlight {
    pub signal: String,
    pub severity: f64,
    pub bucket: Severity,
}

/// Every derived fact for one record. Sections backed by optional or empty
/// fields are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsSummary {
    pub sentiment: Vec<SentimentReading>,
    pub scales: Vec<ScaleHighlight>,
    pub timing: TimingLabel,
    pub energy: EnergySummary,
    pub element: DominantElement,
    pub top_archetypes: Option<Vec<ArchetypeHighlight>>,
    pub action_points: Option<Vec<String>>,
    pub warnings: Option<Vec<WarningHighlight>>,
}

pub fn summarize(record: &InsightsRecord) -> InsightsSummary {
    let s = &record.sentiment;
    let sentiment = [
        (SentimentComponent::Overall, s.overall),
        (SentimentComponent::Emotional, s.emotional),
        (SentimentComponent::Practical, s.practical),
    ]
    .into_iter()
    .map(|(component, value)| SentimentReading {
        component,
        percent: format_sentiment_percent(value),
        notable: sentiment_highlight(value),
        tone: sentiment_tone(value),
    })
    .collect();

    let scales = Scale::ORDER
        .into_iter()
        .map(|scale| scale_highlight(scale, scale.value_in(&record.scales)))
        .collect();

    let energy = EnergySummary {
        active_high: high_energy(record.energy_balance.active),
        receptive_high: high_energy(record.energy_balance.receptive),
        skewed: energy_balance_skew(record),
        dominant: dominant_energy_area(record),
    };

    let archetypes = top_archetypes(&record.archetype_intensity, TOP_ARCHETYPES);

    InsightsSummary {
        sentiment,
        scales,
        timing: timing_label(record.scales.timing),
        energy,
        element: dominant_element(record),
        top_archetypes: non_empty(archetypes),
        action_points: record.action_points.clone().and_then(non_empty),
        warnings: record
            .warning_signals
            .as_deref()
            .map(|w| w.iter().map(warning_highlight).collect::<Vec<_>>())
            .and_then(non_empty),
    }
}

fn warning_highlight(w: &WarningSignal) -> WarningHighlight {
    WarningHighlight {
        signal: w.signal.clone(),
        severity: w.severity,
        bucket: severity_bucket(w.severity),
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

/// Text exported to session notes in one go: themes, narrative, questions,
/// then action points. Warnings are not exported.
pub fn soap_notes(record: &InsightsRecord) -> Vec<String> {
    record
        .key_themes
        .iter()
        .chain(std::iter::once(&record.potential_narrative))
        .chain(record.questions_to_ask.iter())
        .chain(record.action_points.iter().flatten())
        .cloned()
        .collect()
}
