//! Report rendering for `validate-deck`.

use anyhow::Result;
use colored::Colorize;
use quest_engine::{Finding, FindingKind, GraphStats, ValidationReport};
use quest_model::{Navigation, QuestGraph, Side};
use serde::Serialize;
use std::io::Write;

/// Longest effect text echoed in the deck walkthrough.
const EFFECT_PREVIEW_CHARS: usize = 50;

fn preview(text: &str) -> String {
    if text.chars().count() > EFFECT_PREVIEW_CHARS {
        let cut: String = text.chars().take(EFFECT_PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

fn sorted_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let mut names: Vec<_> = names.collect();
    names.sort_unstable();
    names.join(", ")
}

/// Human-readable walkthrough of the graph followed by the findings.
pub fn write_console_report(
    out: &mut impl Write,
    graph: &QuestGraph,
    report: &ValidationReport,
    show_hints: bool,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=== DECK VALIDATION REPORT ===".bright_cyan().bold())?;
    writeln!(out)?;
    writeln!(
        out,
        "Found {} decks: {}",
        graph.card_decks.len(),
        sorted_names(graph.card_decks.names())
    )?;
    writeln!(
        out,
        "Found {} mini-games: {}",
        graph.mini_games.len(),
        sorted_names(graph.mini_games.names())
    )?;
    writeln!(out, "Found {} personal cards", graph.personal_cards.len())?;

    writeln!(out)?;
    writeln!(out, "{}", "=== DECK ANALYSIS ===".bright_cyan().bold())?;
    for (deck_name, deck) in graph.card_decks.iter() {
        writeln!(out)?;
        writeln!(out, "📦 Deck: {}", deck_name.bold())?;
        writeln!(out, "  Cards: {}", deck.len())?;

        for (index, card) in deck.cards().iter().enumerate() {
            let title = if card.title.is_empty() { "Untitled" } else { &card.title };
            writeln!(out, "  Card {index}: {title}")?;

            for side in Side::BOTH {
                let choice = card.choice(side);
                if let Some(invalid) = &choice.invalid {
                    writeln!(out, "    {side}: '{}' ->", choice.label)?;
                    let line = format!("❌ Malformed action: {}", preview(&invalid.text)).red();
                    writeln!(out, "      {line}")?;
                    continue;
                }
                let Some(action) = &choice.action else {
                    writeln!(out, "    {side}: No action defined")?;
                    continue;
                };
                writeln!(out, "    {side}: '{}' ->", choice.label)?;

                let line = match action.navigation() {
                    Some(Navigation::SwitchDeck(target)) if graph.card_decks.contains(target) => {
                        format!("✓ Switch to deck: {target}").green()
                    }
                    Some(Navigation::SwitchDeck(target)) => format!("❌ Missing deck: {target}").red(),
                    Some(Navigation::ShowMiniGame(target)) if graph.mini_games.contains(target) => {
                        format!("✓ Show mini-game: {target}").green()
                    }
                    Some(Navigation::ShowMiniGame(target)) => {
                        format!("❌ Missing mini-game: {target}").red()
                    }
                    Some(Navigation::NextCard) if deck.is_last(index) => {
                        "⚠️ nextCard() but this is the last card".to_string().yellow()
                    }
                    Some(Navigation::NextCard) => "✓ Next card".to_string().green(),
                    None => format!("Actions: {}", preview(&action.to_string())).normal(),
                };
                writeln!(out, "      {line}")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "=== DECK SIZE ANALYSIS ===".bright_cyan().bold())?;
    for (deck_name, deck) in graph.card_decks.iter() {
        match deck.len() {
            0 => writeln!(out, "{}", format!("❌ {deck_name}: EMPTY").red())?,
            1 => writeln!(out, "{}", format!("⚠️ {deck_name}: Only 1 card").yellow())?,
            n => writeln!(out, "{}", format!("✓ {deck_name}: {n} cards").green())?,
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "=== MINI-GAME VALIDATION ===".bright_cyan().bold())?;
    for (game_name, game) in graph.mini_games.iter() {
        let title = if game.title.is_empty() { "Untitled" } else { &game.title };
        writeln!(out, "🎮 {game_name}: {title}")?;
        if game.buttons.is_empty() {
            writeln!(out, "  {}", "❌ No buttons defined".red())?;
        } else {
            writeln!(out, "  {}", format!("✓ {} buttons", game.buttons.len()).green())?;
            for button in &game.buttons {
                match &button.invalid {
                    Some(invalid) => writeln!(
                        out,
                        "    - {} {}",
                        button.text,
                        format!("❌ Malformed result: {}", preview(&invalid.text)).red()
                    )?,
                    None => writeln!(out, "    - {}", button.text)?,
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "=== REACHABILITY ANALYSIS ===".bright_cyan().bold())?;
    let unreachable: Vec<_> = report
        .findings
        .iter()
        .filter_map(|f| match &f.kind {
            FindingKind::UnreachableDeck { deck } => Some(deck.as_str()),
            _ => None,
        })
        .collect();
    if unreachable.is_empty() {
        let line = format!("✓ All decks are reachable from {}", report.stats.entry_deck);
        writeln!(out, "{}", line.green())?;
    } else {
        writeln!(
            out,
            "{}",
            format!("❌ Unreachable decks: {}", sorted_names(unreachable.into_iter())).red()
        )?;
    }

    write_summary(out, report)?;

    if show_hints {
        write_hints(out, report)?;
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, report: &ValidationReport) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=== SUMMARY ===".bright_cyan().bold())?;
    writeln!(out)?;

    let errors: Vec<&Finding> = report.errors().collect();
    let warnings: Vec<&Finding> = report.warnings().collect();

    if errors.is_empty() {
        writeln!(out, "{}", "✅ No issues found! All paths are valid.".green().bold())?;
    } else {
        writeln!(out, "{}", format!("❌ Found {} issues:", errors.len()).red().bold())?;
        writeln!(out)?;
        for finding in &errors {
            writeln!(out, "  • {}", finding.to_string().red())?;
        }
    }

    if !warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", format!("⚠️ {} warnings:", warnings.len()).yellow())?;
        for finding in &warnings {
            writeln!(out, "  • {}", finding.to_string().yellow())?;
        }
    }
    Ok(())
}

fn write_hints(out: &mut impl Write, report: &ValidationReport) -> Result<()> {
    let hinted: Vec<_> = report
        .findings
        .iter()
        .filter_map(|f| f.hint.as_ref().map(|hint| (f, hint)))
        .collect();
    if hinted.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", "=== SUGGESTED FIXES ===".bright_cyan().bold())?;
    writeln!(out)?;
    for (finding, hint) in hinted {
        writeln!(out, "  • {}: {}", finding.message(), hint)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    errors: usize,
    warnings: usize,
    stats: &'a GraphStats,
    findings: &'a [Finding],
}

/// Machine-readable report.
pub fn write_json_report(out: &mut impl Write, report: &ValidationReport) -> Result<()> {
    let json = JsonReport {
        passed: report.passed(),
        errors: report.error_count(),
        warnings: report.warning_count(),
        stats: &report.stats,
        findings: &report.findings,
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}

/// Markdown summary, suitable for CI job output.
pub fn write_markdown_report(out: &mut impl Write, report: &ValidationReport) -> Result<()> {
    writeln!(out, "# CV Quest Deck Validation\n")?;

    let status = if report.passed() { "✅ Passed" } else { "❌ Failed" };
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Status**: {status}")?;
    writeln!(out, "- **Decks**: {}", report.stats.decks)?;
    writeln!(out, "- **Cards**: {}", report.stats.cards)?;
    writeln!(out, "- **Mini-games**: {}", report.stats.mini_games)?;
    writeln!(
        out,
        "- **Reachable decks**: {} (from `{}`)",
        report.stats.reachable_decks, report.stats.entry_deck
    )?;
    writeln!(out, "- **Errors**: {}", report.error_count())?;
    writeln!(out, "- **Warnings**: {}\n", report.warning_count())?;

    if report.findings.is_empty() {
        return Ok(());
    }

    writeln!(out, "## Findings\n")?;
    for finding in &report.findings {
        let marker = if finding.is_error() { "❌" } else { "⚠️" };
        writeln!(out, "- {marker} {finding}")?;
        if let Some(hint) = &finding.hint {
            writeln!(out, "  - _{hint}_")?;
        }
    }
    writeln!(out)?;
    Ok(())
}
