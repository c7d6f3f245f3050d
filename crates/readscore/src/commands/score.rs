//! Score command: readability indices and reader ages for a file.

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use readscore_core::scores::SELECTOR_NAMES;
use readscore_core::{ReadabilityReport, SelectedScores, Selection, Selector, readability};

use super::read_input_file;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Scores to report (comma-separated).
    #[arg(long, value_enum, value_delimiter = ',', conflicts_with = "interactive")]
    pub scores: Option<Vec<Selector>>,

    /// Ask for the scores on stdin after printing the text statistics.
    #[arg(short, long)]
    pub interactive: bool,
}

/// JSON shape of the `score` output.
#[derive(Serialize)]
struct ScoreOutput<'a> {
    #[serde(flatten)]
    report: &'a ReadabilityReport,
    selected: SelectedScores,
}

/// Score a file and print the selected indices.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_selection: Selection,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, scores = ?args.scores, interactive = args.interactive, "executing score command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = readability::analyze(&content)
        .with_context(|| format!("failed to score readability of {}", args.file))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if global_json {
        let selection = match args.scores {
            Some(selectors) => Selection::from_selectors(selectors)?,
            None if args.interactive => prompt_selection(&mut io::stdin().lock(), &mut io::stderr())?,
            None => config_selection,
        };
        let output = ScoreOutput {
            report: &report,
            selected: report.select(&selection),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    write_statistics(&mut out, &report)?;

    let selection = match args.scores {
        Some(selectors) => Selection::from_selectors(selectors)?,
        None if args.interactive => prompt_selection(&mut io::stdin().lock(), &mut out)?,
        None => config_selection,
    };
    debug!(all = selection.is_all(), "score selection resolved");

    write_scores(&mut out, &report.select(&selection))?;
    Ok(())
}

/// Ask for a selector and read the first whitespace-delimited token.
fn prompt_selection<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> anyhow::Result<Selection> {
    writeln!(
        prompt,
        "Enter the score you want to calculate ({}):",
        SELECTOR_NAMES.join(", ")
    )?;
    prompt.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("no score selector entered");
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Selection::parse(token)?);
        }
    }
}

/// Print the analyzed text and its counts.
fn write_statistics<W: Write>(out: &mut W, report: &ReadabilityReport) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "The text is:".if_supports_color(Stream::Stdout, |t| t.bold())
    )?;
    writeln!(out, "{}\n", report.content)?;
    writeln!(out, "Words: {}", report.words)?;
    writeln!(out, "Sentences: {}", report.sentences)?;
    writeln!(out, "Characters: {}", report.characters)?;
    writeln!(out, "Syllables: {}", report.syllables)?;
    writeln!(out, "Polysyllables: {}", report.polysyllables)
}

/// Print one line per selected score, plus the average when present.
fn write_scores<W: Write>(out: &mut W, selected: &SelectedScores) -> io::Result<()> {
    for score in &selected.scores {
        writeln!(
            out,
            "{}: {:.2} (about {} year olds.)",
            score
                .kind
                .long_name()
                .if_supports_color(Stream::Stdout, |t| t.cyan()),
            score.value,
            score.age,
        )?;
    }
    if let Some(average) = selected.average_age {
        writeln!(
            out,
            "\nThis text should be understood in average by {average:.2} year olds."
        )?;
    }
    Ok(())
}
