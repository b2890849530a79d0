use adventure_rules::{
    CharacterConfig, CharacterState, ConsoleNarrator, JsonNarrator, Narrator,
};
use clap::Parser;
use std::path::PathBuf;

/// Replay the scripted adventure scenario.
#[derive(Debug, Parser)]
#[command(name = "adventure_demo", version, about)]
struct Args {
    /// TOML file with `starting_location` and `starting_scale`.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit narration as JSON lines instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => CharacterConfig::load(path)?,
        None => CharacterConfig::default(),
    };
    tracing::debug!(?cfg, "loaded character config");

    if args.json {
        run(CharacterState::with_config(&cfg, JsonNarrator::new(std::io::stdout()))?)
    } else {
        run(CharacterState::with_config(&cfg, ConsoleNarrator)?)
    }
}

fn run<N: Narrator>(mut character: CharacterState<N>) -> anyhow::Result<()> {
    tracing::info!(character = %character.id(), "starting scenario");

    character.grab("pen")?;
    character.drop("pen")?;
    character.undo();
    character.drop("pen")?;
    character.grab("water")?;
    character.examine("water")?;
    character.shrink();
    character.undo();
    character.rest();
    character.undo();
    character.fly(-10, 1)?;
    character.walk("south")?;
    character.undo();

    tracing::info!(
        character = %character.id(),
        inventory = ?character.inventory(),
        location = %character.location(),
        scale = character.scale(),
        "scenario finished"
    );
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
