use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use quest_cli::{
    init_logging, read_to_string, write_console_report, write_json_report, write_markdown_report,
    OutputTarget, DEFAULT_GRAPH_PATH,
};
use quest_engine::{Validator, ValidatorOptions};
use quest_model::{QuestGraph, ENTRY_DECK};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    /// Coloured walkthrough of every deck followed by the findings
    Console,
    /// Findings and statistics as JSON
    Json,
    /// Findings as a Markdown summary
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "validate-deck", version)]
#[command(about = "Check the CV Quest deck graph for dangling references and unreachable decks")]
struct Args {
    /// Graph document to validate
    #[arg(long, default_value = DEFAULT_GRAPH_PATH)]
    input: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    format: ReportFormat,

    /// Deck reachability is measured from
    #[arg(long, default_value = ENTRY_DECK)]
    entry: String,

    /// Omit remediation hints
    #[arg(long)]
    no_hints: bool,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.input.exists() {
        eprintln!(
            "{}",
            format!("❌ Cards file not found: {}", args.input.display()).red()
        );
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "❌ Error:".red());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let json = read_to_string(&args.input)?;
    let graph = QuestGraph::from_json_str(&json)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;
    log::debug!(
        "loaded {} decks and {} mini-games from {}",
        graph.card_decks.len(),
        graph.mini_games.len(),
        args.input.display()
    );

    let validator = Validator::new(ValidatorOptions {
        entry_deck: args.entry.clone(),
        hints: !args.no_hints,
    });
    let report = validator.validate(&graph);

    let mut out = OutputTarget::new(args.output.clone())?;
    if out.is_file() {
        colored::control::set_override(false);
    }
    match args.format {
        ReportFormat::Console => write_console_report(&mut out, &graph, &report, !args.no_hints)?,
        ReportFormat::Json => write_json_report(&mut out, &report)?,
        ReportFormat::Markdown => write_markdown_report(&mut out, &report)?,
    }
    out.flush()?;

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
