use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tarot_copilot::client::{ClientProfile, PersonalityProfile};
use tarot_copilot::personality::{axes_from_typed_code, code_from_axes, PersonalityAxes};
use tarot_copilot::{CopilotConfig, CopilotMode, ReadingWorkspace};

/// Draw a spread and print the derived insights.
#[derive(Debug, Parser)]
#[command(name = "tarot-copilot", version)]
struct Cli {
    /// Question the client is asking.
    #[arg(short, long, default_value = "")]
    question: String,

    /// Cards to draw (overrides COPILOT_SPREAD_SIZE).
    #[arg(long)]
    cards: Option<usize>,

    /// demo | live (overrides COPILOT_MODE).
    #[arg(long)]
    mode: Option<String>,

    /// Seed for a reproducible draw.
    #[arg(long)]
    seed: Option<u64>,

    /// Typed personality code for the client, e.g. INFJ.
    #[arg(long)]
    code: Option<String>,

    /// Slider values IE,NS,FT,JP in [0, 100].
    #[arg(long, value_delimiter = ',')]
    axes: Option<Vec<f64>>,

    /// Client name; a profile is only sent when this is set.
    #[arg(long)]
    client: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    let cli = Cli::parse();

    let mut config = CopilotConfig::from_env().context("loading copilot configuration")?;
    if let Some(mode) = &cli.mode {
        config.mode = mode.parse::<CopilotMode>()?;
    }
    if let Some(n) = cli.cards {
        config.spread_size = n;
    }
    config.validate()?;
    tracing::info!(mode = ?config.mode, enabled = config.enabled, "Tarot copilot starting");

    let mut workspace = ReadingWorkspace::new(config)?;
    workspace.notes.set_question(cli.question.clone());

    if let Some(name) = &cli.client {
        workspace.select_client(build_client(name, &cli)?);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for card in workspace.draw_cards(&mut rng).await? {
        println!("{} {} - {}", card.card.emoji, card.label(), card.meaning());
    }

    match workspace.summary() {
        Some(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
        None => println!("Copilot disabled; no insights."),
    }

    Ok(())
}

fn build_client(name: &str, cli: &Cli) -> Result<ClientProfile> {
    let mut client = ClientProfile::new(name);

    let axes = match &cli.axes {
        Some(v) if v.len() == 4 => PersonalityAxes::new(v[0], v[1], v[2], v[3]),
        Some(v) => bail!("--axes takes 4 values, got {}", v.len()),
        None => PersonalityAxes::default(),
    };

    let personality = match &cli.code {
        Some(raw) => {
            let typed = axes_from_typed_code(raw, &axes);
            PersonalityProfile { code: Some(typed.code), axes: typed.axes }
        }
        None if cli.axes.is_some() => PersonalityProfile {
            code: Some(code_from_axes(&axes).to_string()),
            axes,
        },
        None => return Ok(client),
    };

    client.personality = Some(personality);
    Ok(client)
}
