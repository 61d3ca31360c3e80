use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::deck::DrawnCard;

pub const READING_TYPE: &str = "reading";

/// SOAP-style notes for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionNotes {
    pub question: String,
    pub subjective: String,
    pub assessment: String,
    pub plan: String,
}

impl SessionNotes {
    /// The subjective note tracks the question until the reader edits it.
    pub fn set_question(&mut self, question: impl Into<String>) {
        let previous = std::mem::replace(&mut self.question, question.into());
        if self.subjective.is_empty() || self.subjective == previous {
            self.subjective = self.question.clone();
        }
    }

    /// Appends exported text to the assessment, one block per entry.
    pub fn append_to_assessment(&mut self, entries: &[String]) {
        for entry in entries {
            if !self.assessment.is_empty() {
                self.assessment.push_str("\n\n");
            }
            self.assessment.push_str(entry);
        }
    }
}

/// Row handed to the persistence layer when a reading is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReading {
    pub client_id: Uuid,
    pub reading_type: String,
    pub reading_date: NaiveDate,
    pub question: String,
    pub cards: Vec<String>,
    pub subjective: String,
    pub assessment: String,
    pub plan: String,
}

impl NewReading {
    pub fn build(client_id: Uuid, date: NaiveDate, notes: &SessionNotes, cards: &[DrawnCard]) -> Self {
        Self {
            client_id,
            reading_type: READING_TYPE.to_string(),
            reading_date: date,
            question: notes.question.clone(),
            cards: cards.iter().map(DrawnCard::label).collect(),
            subjective: notes.subjective.clone(),
            assessment: notes.assessment.clone(),
            plan: notes.plan.clone(),
        }
    }
}
