//! Client profile as sent to the oracle alongside a reading.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::personality::{code_from_axes, PersonalityAxes};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    /// Stored code; may be partial if it was typed in by hand.
    pub code: Option<String>,
    #[serde(flatten)]
    pub axes: PersonalityAxes,
}

/// Each score in [-5, 5].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentProfile {
    pub anxiety: Option<f64>,
    pub avoidance: Option<f64>,
}

/// Each score in [0, 10].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityProfile {
    pub intuition: Option<f64>,
    pub empathy: Option<f64>,
    pub ambition: Option<f64>,
    pub intellect: Option<f64>,
    pub creativity: Option<f64>,
    pub self_awareness: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    pub id: Uuid,
    pub name: String,
    pub pronouns: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<PersonalityProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abilities: Option<AbilityProfile>,
}

impl ClientProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            pronouns: None,
            tags: Vec::new(),
            personality: None,
            attachment: None,
            abilities: None,
        }
    }

    /// Stored code when there is one, otherwise derived from the stored sliders.
    pub fn personality_code(&self) -> Option<String> {
        let personality = self.personality.as_ref()?;
        match personality.code.as_deref() {
            Some(code) if !code.is_empty() => Some(code.to_string()),
            _ => Some(code_from_axes(&personality.axes).to_string()),
        }
    }
}
