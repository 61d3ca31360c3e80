use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tarot_copilot::client::ClientProfile;
use tarot_copilot::error::{CopilotError, SessionError};
use tarot_copilot::insights::{demo_insights, InsightsRecord};
use tarot_copilot::services::copilot::{DemoInsightsProvider, InsightsProvider, InterpretRequest};
use tarot_copilot::session::SessionNotes;
use tarot_copilot::{CopilotConfig, ReadingWorkspace};

/// Records requests; fails once `fail` is set.
struct ScriptedProvider {
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<InterpretRequest>>>,
    fail: Arc<AtomicUsize>,
    delay: Duration,
}

#[async_trait]
impl InsightsProvider for ScriptedProvider {
    async fn interpret(&self, request: &InterpretRequest) -> Result<InsightsRecord, CopilotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(request.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail.load(Ordering::SeqCst) > 0 {
            return Err(CopilotError::Disabled);
        }
        let mut record = demo_insights();
        record.key_themes = vec![format!("call {}", self.calls.load(Ordering::SeqCst))];
        Ok(record)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

struct Handles {
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<InterpretRequest>>>,
    fail: Arc<AtomicUsize>,
}

fn scripted(delay: Duration) -> (Box<dyn InsightsProvider>, Handles) {
    let handles = Handles {
        calls: Arc::new(AtomicUsize::new(0)),
        last: Arc::new(Mutex::new(None)),
        fail: Arc::new(AtomicUsize::new(0)),
    };
    let provider = ScriptedProvider {
        calls: handles.calls.clone(),
        last: handles.last.clone(),
        fail: handles.fail.clone(),
        delay,
    };
    (Box::new(provider), handles)
}

#[test]
fn test_subjective_follows_question_until_edited() {
    let mut notes = SessionNotes::default();
    notes.set_question("Will I move?");
    assert_eq!(notes.subjective, "Will I move?");

    notes.set_question("Will I move this year?");
    assert_eq!(notes.subjective, "Will I move this year?", "Untouched subjective keeps tracking");

    notes.subjective = "Client feels torn about leaving family.".to_string();
    notes.set_question("Should I move?");
    assert_eq!(notes.subjective, "Client feels torn about leaving family.", "Edited subjective is kept");

    notes.subjective.clear();
    notes.set_question("Should I stay?");
    assert_eq!(notes.subjective, "Should I stay?", "Cleared subjective picks the question up again");
}

#[tokio::test]
async fn test_draw_with_demo_provider() {
    let config = CopilotConfig { demo_latency: Duration::ZERO, ..CopilotConfig::default() };
    let provider: Box<dyn InsightsProvider> = Box::new(DemoInsightsProvider::new(Duration::ZERO));
    let mut workspace = ReadingWorkspace::with_provider(config, Some(provider));

    let mut rng = StdRng::seed_from_u64(3);
    let cards = workspace.draw_cards(&mut rng).await.unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(workspace.insights(), Some(&demo_insights()));
    assert!(workspace.summary().is_some());
}

#[tokio::test]
async fn test_each_draw_replaces_record_and_sends_spread() {
    let (provider, handles) = scripted(Duration::ZERO);
    let mut workspace = ReadingWorkspace::with_provider(CopilotConfig::default(), Some(provider));
    workspace.notes.set_question("What is blocking me?");
    let client = ClientProfile::new("Sam");
    let client_id = client.id;
    workspace.select_client(client);

    let mut rng = StdRng::seed_from_u64(11);
    workspace.draw_cards(&mut rng).await.unwrap();
    assert_eq!(workspace.insights().unwrap().key_themes, vec!["call 1"]);

    let sent = handles.last.lock().unwrap().clone().unwrap();
    assert_eq!(sent.question, "What is blocking me?");
    let drawn: Vec<String> = workspace.cards().iter().map(|c| c.name().to_string()).collect();
    assert_eq!(sent.cards, drawn);
    assert_eq!(sent.user.map(|u| u.id), Some(client_id));

    workspace.draw_cards(&mut rng).await.unwrap();
    assert_eq!(workspace.insights().unwrap().key_themes, vec!["call 2"], "Whole record replaced");
    assert_eq!(handles.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_oracle_failure_keeps_cards_and_previous_record() {
    let (provider, handles) = scripted(Duration::ZERO);
    let mut workspace = ReadingWorkspace::with_provider(CopilotConfig::default(), Some(provider));
    let mut rng = StdRng::seed_from_u64(5);

    workspace.draw_cards(&mut rng).await.unwrap();
    let first_cards: Vec<_> = workspace.cards().to_vec();

    handles.fail.store(1, Ordering::SeqCst);
    let err = workspace.draw_cards(&mut rng).await.unwrap_err();
    assert!(matches!(err, SessionError::Copilot(CopilotError::Disabled)));

    assert_eq!(workspace.cards().len(), 3);
    assert_ne!(workspace.cards(), first_cards.as_slice(), "New spread stays on the table");
    assert_eq!(workspace.insights().unwrap().key_themes, vec!["call 1"], "Previous record kept");
}

#[tokio::test]
async fn test_oracle_timeout() {
    let (provider, _handles) = scripted(Duration::from_millis(200));
    let config = CopilotConfig { timeout: Duration::from_millis(20), ..CopilotConfig::default() };
    let mut workspace = ReadingWorkspace::with_provider(config, Some(provider));

    let err = workspace.draw_cards(&mut StdRng::seed_from_u64(9)).await.unwrap_err();
    assert!(matches!(err, SessionError::Copilot(CopilotError::Timeout(_))));
    assert!(workspace.insights().is_none());
    assert_eq!(workspace.cards().len(), 3);
}

#[tokio::test]
async fn test_disabled_copilot_clears_insights() {
    let config = CopilotConfig { enabled: false, spread_size: 1, ..CopilotConfig::default() };
    let mut workspace = ReadingWorkspace::new(config).unwrap();

    let cards = workspace.draw_cards(&mut StdRng::seed_from_u64(1)).await.unwrap();
    assert_eq!(cards.len(), 1);
    assert!(workspace.insights().is_none());
    assert!(workspace.summary().is_none());
}

#[tokio::test]
async fn test_send_insights_and_save_draft() {
    let (provider, _handles) = scripted(Duration::ZERO);
    let mut workspace = ReadingWorkspace::with_provider(CopilotConfig::default(), Some(provider));
    workspace.notes.set_question("Where is my career heading?");
    assert_eq!(workspace.send_insights_to_notes(), 0, "Nothing to send before a draw");

    workspace.draw_cards(&mut StdRng::seed_from_u64(21)).await.unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
    assert!(workspace.save_draft(date).is_none(), "Saving requires a client");

    // 1 theme + narrative + 3 questions + 3 action points
    assert_eq!(workspace.send_insights_to_notes(), 8);
    assert!(workspace.notes.assessment.starts_with("call 1\n\n"));

    let client = ClientProfile::new("Alex");
    let client_id = client.id;
    workspace.select_client(client);

    let draft = workspace.save_draft(date).expect("client selected");
    assert_eq!(draft.client_id, client_id);
    assert_eq!(draft.reading_type, "reading");
    assert_eq!(draft.reading_date, date);
    assert_eq!(draft.question, "Where is my career heading?");
    assert_eq!(draft.subjective, "Where is my career heading?");
    assert_eq!(draft.cards.len(), 3);
    assert!(draft.cards.iter().all(|c| c.ends_with("(Upright)") || c.ends_with("(Reversed)")));
}
