use super::types::*;

/// Fixed record served in demo mode.
pub fn demo_insights() -> InsightsRecord {
    InsightsRecord {
        sentiment: Sentiment { overall: 0.7, emotional: 0.8, practical: 0.6 },
        scales: Scales {
            clarity: 8.0,
            agency: 7.0,
            timing: Timing::Immediate,
            difficulty: 4.0,
            opportunity: 8.0,
        },
        energy_balance: EnergyBalance {
            active: 80.0,
            receptive: 60.0,
            mental: 70.0,
            emotional: 90.0,
            spiritual: 50.0,
            material: 50.0,
        },
        key_themes: strings(&[
            "Swift celebration of justice",
            "Harmonious resolution",
            "Social equilibrium",
            "Dynamic progress",
        ]),
        dominant_elements: DominantElements { fire: 40.0, water: 30.0, air: 20.0, earth: 10.0 },
        archetype_intensity: vec![
            archetype("The Celebrant", 8.0),
            archetype("The Judge", 7.0),
            archetype("The Messenger", 6.0),
        ],
        potential_narrative: "A situation is rapidly moving toward its natural resolution, carried \
            forward by the support and celebration of community. Justice arrives swiftly, bringing \
            balance and fairness, while friendship and joy act as catalysts for positive change."
            .to_string(),
        questions_to_ask: strings(&[
            "How can you balance swift action with fair consideration?",
            "What role does your community play in your success?",
            "How do you celebrate while maintaining equilibrium?",
        ]),
        transformation_potential: TransformationPotential {
            current: TransformationState::Flowing,
            potential: TransformationOutlook::Breakthrough,
            likelihood: 8.0,
        },
        card_synergies: Some(vec![
            CardSynergy {
                cards: strings(&["Eight of Wands", "Justice"]),
                interpretation: "Swift arrival of karmic balance".to_string(),
                intensity: 9.0,
            },
            CardSynergy {
                cards: strings(&["Three of Cups", "Justice"]),
                interpretation: "Community celebration of fairness".to_string(),
                intensity: 7.0,
            },
        ]),
        action_points: Some(strings(&[
            "Act decisively while maintaining fairness",
            "Engage with supportive community members",
            "Celebrate milestones while staying balanced",
        ])),
        warning_signals: Some(vec![
            WarningSignal { signal: "Don't let speed compromise fairness".to_string(), severity: 4.0 },
            WarningSignal {
                signal: "Avoid excessive celebration clouding judgment".to_string(),
                severity: 3.0,
            },
        ]),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn archetype(name: &str, intensity: f64) -> ArchetypeIntensity {
    ArchetypeIntensity { archetype: name.to_string(), intensity }
}
