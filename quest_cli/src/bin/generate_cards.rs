use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use quest_cli::{init_logging, read_to_string, DEFAULT_GRAPH_PATH, DEFAULT_PROFILE_PATH};
use quest_engine::{BuilderConfig, GraphBuilder, Profile};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "generate-cards", version)]
#[command(about = "Build the CV Quest deck graph from a career profile")]
struct Args {
    /// Career profile (YAML)
    #[arg(long, default_value = DEFAULT_PROFILE_PATH)]
    profile: PathBuf,

    /// Builder configuration (TOML); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the graph document
    #[arg(long, default_value = DEFAULT_GRAPH_PATH)]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("Generating CV cards from {}...", args.profile.display());

    let profile = Profile::from_yaml_str(&read_to_string(&args.profile)?)
        .with_context(|| format!("failed to parse {}", args.profile.display()))?;

    let config = match &args.config {
        Some(path) => BuilderConfig::from_toml_str(&read_to_string(path)?)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        None => BuilderConfig::default(),
    };

    let graph = GraphBuilder::new(config).build(&profile);

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = graph.to_json_pretty()?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "{}",
        format!("✓ CV cards generated: {}", args.output.display()).green()
    );
    println!("  - {} card decks", graph.card_decks.len());
    println!("  - {} mini-games", graph.mini_games.len());
    println!("  - {} personal cards", graph.personal_cards.len());
    Ok(())
}
