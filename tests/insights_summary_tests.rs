use pretty_assertions::assert_eq;
use serde_json::json;
use tarot_copilot::insights::*;

#[test]
fn test_oracle_json_matches_record_contract() {
    let raw = json!({
        "sentiment": { "overall": -0.2, "emotional": 0.6, "practical": 0.0 },
        "scales": { "clarity": 2, "agency": 5, "timing": "long-term", "difficulty": 9, "opportunity": 4 },
        "energyBalance": { "active": 20, "receptive": 70, "mental": 30, "emotional": 20, "spiritual": 45, "material": 5 },
        "keyThemes": ["Letting go"],
        "dominantElements": { "fire": 10, "water": 50, "air": 25, "earth": 15 },
        "archetypeIntensity": [],
        "potentialNarrative": "An ending makes room.",
        "questionsToAsk": ["What are you holding on to?"],
        "transformationPotential": { "current": "stuck", "potential": "gradual-shift", "likelihood": 5 }
    });

    let record: InsightsRecord = serde_json::from_value(raw).expect("oracle payload decodes");
    assert_eq!(record.scales.timing, Timing::LongTerm);
    assert_eq!(record.transformation_potential.potential, TransformationOutlook::GradualShift);
    assert_eq!(record.action_points, None);
    assert_eq!(record.warning_signals, None);
    assert_eq!(record.card_synergies, None);

    let back = serde_json::to_value(&record).expect("record encodes");
    assert!(back.get("actionPoints").is_none(), "Absent optional fields stay absent on the wire");
    assert_eq!(back["energyBalance"]["receptive"], json!(70.0));
}

#[test]
fn test_demo_summary() {
    let summary = summarize(&demo_insights());

    let percents: Vec<i64> = summary.sentiment.iter().map(|s| s.percent).collect();
    assert_eq!(percents, vec![85, 90, 80]);
    assert!(summary.sentiment.iter().all(|s| s.notable));

    let levels: Vec<ScaleLevel> = summary.scales.iter().map(|s| s.level).collect();
    assert_eq!(levels, vec![ScaleLevel::High, ScaleLevel::Normal, ScaleLevel::Normal, ScaleLevel::High]);

    assert_eq!(summary.timing.text, "immediate");
    assert!(summary.energy.active_high);
    assert!(!summary.energy.receptive_high);
    assert!(!summary.energy.skewed, "80 vs 60 is only 20 apart");
    assert_eq!(summary.energy.dominant.key, EnergyArea::Emotional);
    assert_eq!(summary.element.key, Element::Fire);
    assert!(summary.element.starred);

    let archetypes = summary.top_archetypes.expect("demo has archetypes");
    assert_eq!(archetypes.len(), 3);
    assert_eq!(archetypes[0].archetype, "The Celebrant");
    assert!(archetypes[0].highlighted);

    let warnings = summary.warnings.expect("demo has warnings");
    assert_eq!(warnings[0].bucket, Severity::Medium);
    assert_eq!(warnings[1].bucket, Severity::Low);
    assert_eq!(summary.action_points.map(|a| a.len()), Some(3));
}

#[test]
fn test_missing_optional_sections_are_suppressed() {
    let mut record = demo_insights();
    record.action_points = None;
    record.warning_signals = Some(Vec::new());
    record.archetype_intensity.clear();

    let summary = summarize(&record);
    assert_eq!(summary.action_points, None);
    assert_eq!(summary.warnings, None, "An empty list hides the section too");
    assert_eq!(summary.top_archetypes, None);
}

#[test]
fn test_soap_notes_order() {
    let record = demo_insights();
    let notes = soap_notes(&record);

    // 4 themes + narrative + 3 questions + 3 action points
    assert_eq!(notes.len(), 11);
    assert_eq!(notes[0], "Swift celebration of justice");
    assert_eq!(notes[4], record.potential_narrative);
    assert_eq!(notes[5], "How can you balance swift action with fair consideration?");
    assert_eq!(notes[10], "Celebrate milestones while staying balanced");
    assert!(!notes.iter().any(|n| n.contains("Don't let speed")), "Warnings are not exported");

    let mut record = record;
    record.action_points = None;
    assert_eq!(soap_notes(&record).len(), 8);
}
