use serde::{Deserialize, Serialize};
use std::fmt;

/// Slider value read for an axis that was never set.
pub const AXIS_MIDPOINT: f64 = 50.0;

/// How a typed letter moves its slider.
/// `Low(c)`: the slider goes to 0 when the letter is `c`, otherwise 100.
/// `High(c)`: the slider goes to 100 when the letter is `c`, otherwise 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterAnchor {
    Low(char),
    High(char),
}

/// One bipolar dimension, in code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    IntroversionExtraversion,
    SensingIntuition,
    ThinkingFeeling,
    JudgingPerceiving,
}

impl Axis {
    pub const ORDER: [Axis; 4] = [
        Axis::IntroversionExtraversion,
        Axis::SensingIntuition,
        Axis::ThinkingFeeling,
        Axis::JudgingPerceiving,
    ];

    /// Letter for slider value 0.
    pub fn low_pole(self) -> char {
        match self {
            Axis::IntroversionExtraversion => 'I',
            Axis::SensingIntuition => 'S',
            Axis::ThinkingFeeling => 'T',
            Axis::JudgingPerceiving => 'P',
        }
    }

    /// Letter for slider value 100.
    pub fn high_pole(self) -> char {
        match self {
            Axis::IntroversionExtraversion => 'E',
            Axis::SensingIntuition => 'N',
            Axis::ThinkingFeeling => 'F',
            Axis::JudgingPerceiving => 'J',
        }
    }

    /// I/E and P/J key off their low letter, S/N and T/F off their high letter.
    pub fn anchor(self) -> LetterAnchor {
        match self {
            Axis::IntroversionExtraversion => LetterAnchor::Low('I'),
            Axis::SensingIntuition => LetterAnchor::High('N'),
            Axis::ThinkingFeeling => LetterAnchor::High('F'),
            Axis::JudgingPerceiving => LetterAnchor::Low('P'),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::IntroversionExtraversion => "Introversion / Extraversion",
            Axis::SensingIntuition => "Sensing / Intuition",
            Axis::ThinkingFeeling => "Thinking / Feeling",
            Axis::JudgingPerceiving => "Perceiving / Judging",
        }
    }
}

/// Four optional sliders. `None` means "never set", which is not the same as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityAxes {
    pub introversion_extraversion: Option<f64>,
    pub sensing_intuition: Option<f64>,
    pub thinking_feeling: Option<f64>,
    pub judging_perceiving: Option<f64>,
}

impl PersonalityAxes {
    pub fn new(ie: f64, ns: f64, ft: f64, jp: f64) -> Self {
        Self {
            introversion_extraversion: Some(ie),
            sensing_intuition: Some(ns),
            thinking_feeling: Some(ft),
            judging_perceiving: Some(jp),
        }
    }

    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::IntroversionExtraversion => self.introversion_extraversion,
            Axis::SensingIntuition => self.sensing_intuition,
            Axis::ThinkingFeeling => self.thinking_feeling,
            Axis::JudgingPerceiving => self.judging_perceiving,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        let slot = match axis {
            Axis::IntroversionExtraversion => &mut self.introversion_extraversion,
            Axis::SensingIntuition => &mut self.sensing_intuition,
            Axis::ThinkingFeeling => &mut self.thinking_feeling,
            Axis::JudgingPerceiving => &mut self.judging_perceiving,
        };
        *slot = Some(value);
    }

    /// Display-safe copy: present values clamped into [0, 100], NaN read as the midpoint.
    /// Absent axes stay absent.
    pub fn clamped(&self) -> Self {
        let clamp = |v: Option<f64>| {
            v.map(|x| if x.is_nan() { AXIS_MIDPOINT } else { x.clamp(0.0, 100.0) })
        };
        Self {
            introversion_extraversion: clamp(self.introversion_extraversion),
            sensing_intuition: clamp(self.sensing_intuition),
            thinking_feeling: clamp(self.thinking_feeling),
            judging_perceiving: clamp(self.judging_perceiving),
        }
    }
}

/// A complete 4-letter code, one letter per axis in `Axis::ORDER`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalityCode(String);

impl PersonalityCode {
    pub(crate) fn from_letters(letters: [char; 4]) -> Self {
        Self(letters.iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn letter(&self, axis: Axis) -> Option<char> {
        let idx = Axis::ORDER.iter().position(|a| *a == axis)?;
        self.0.chars().nth(idx)
    }
}

impl fmt::Display for PersonalityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of applying typed text to the sliders.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedCode {
    /// Filtered text, 0 to 4 letters. Not necessarily a valid type.
    pub code: String,
    pub axes: PersonalityAxes,
}
