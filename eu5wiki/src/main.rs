//! # eu5wiki
//!
//! A CLI tool for generating Europa Universalis V wiki tables from a JSON dump
//! of the game data.
//!
//! ## Overview
//!
//! eu5wiki is built on top of eu5wikilib and provides a command-line interface
//! for its generators. Each generator turns one entity collection into wiki
//! markup split into named sections, which can be printed, written to a
//! directory, or spliced into the `<section begin=.../>` markers of an existing
//! page without touching the hand-written text around them.
//!
//! ## Features
//!
//! - **One generator per table**: buildings, laws, goods, countries, ...
//! - **Section files**: `--out-dir` writes one `<key>.txt` per section
//! - **In-place splicing**: refresh the generated parts of a saved wiki page
//! - **Multiple output formats**: Text (default), JSON
//!
//! ## Usage
//!
//! ```bash
//! # List the available tables
//! eu5wiki tables
//!
//! # Print the buildings page
//! eu5wiki generate data.json --table buildings --game-version 1.0.10
//!
//! # Write every section to its own file
//! eu5wiki generate data.json --table laws --out-dir out/
//!
//! # Sections as JSON
//! eu5wiki generate data.json --table goods --output json
//!
//! # Refresh the generated sections of a saved page
//! eu5wiki splice data.json --table buildings --page Buildings.wiki
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use eu5wikilib::{
    extract_section, splice_section, GameData, Generated, Generator, GeneratorConfig, LawLayout,
    PlainFormatter, TableKind, WikiError,
};
use outstanding::cli::{App, CommandContext, HandlerResult, Output, RunResult};
use outstanding::Theme;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Include templates at compile time
const GENERATE_TEMPLATE: &str = include_str!("../templates/generate.jinja");
const SPLICE_TEMPLATE: &str = include_str!("../templates/splice.jinja");
const TABLES_TEMPLATE: &str = include_str!("../templates/tables.jinja");

/// Environment variable holding the log filter
const LOG_ENV: &str = "EU5WIKI_LOG";

/// One written section file
#[derive(Debug, Serialize)]
struct WrittenFile {
    key: String,
    path: String,
}

/// Data context for the generate template
#[derive(Debug, Serialize)]
struct GenerateContext {
    table: String,
    page: Option<String>,
    out_dir: Option<String>,
    files: Vec<WrittenFile>,
}

/// Data context for the splice template
#[derive(Debug, Serialize)]
struct SpliceContext {
    table: String,
    page: String,
    spliced: Vec<String>,
    skipped: Vec<String>,
}

/// Row of the tables listing
#[derive(Debug, Serialize)]
struct TableRow {
    name: String,
    label: String,
    description: String,
    markers: bool,
}

/// Data context for the tables template
#[derive(Debug, Serialize)]
struct TablesContext {
    tables: Vec<TableRow>,
}

/// Install the stderr subscriber once; `-v` raises the default level.
fn init_tracing(matches: &ArgMatches) {
    let default_level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Arguments shared by every command that runs a generator
fn generator_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("input")
            .required(true)
            .help("JSON dump of the game data"),
    )
    .arg(
        Arg::new("table")
            .short('t')
            .long("table")
            .required(true)
            .help("Table to generate (see `eu5wiki tables`)"),
    )
    .arg(
        Arg::new("game-version")
            .short('g')
            .long("game-version")
            .help("Game version stamped into each section header"),
    )
    .arg(
        Arg::new("law-layout")
            .long("law-layout")
            .value_parser(["tables", "sections"])
            .default_value("tables")
            .help("Layout of the laws page"),
    )
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("eu5wiki")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Generate Europa Universalis V wiki tables from a game-data dump")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .subcommand(
            generator_args(Command::new("generate").about("Generate one table")).arg(
                Arg::new("out-dir")
                    .short('o')
                    .long("out-dir")
                    .help("Write one <key>.txt file per section into this directory"),
            ),
        )
        .subcommand(
            generator_args(
                Command::new("splice").about("Regenerate the sections of a saved wiki page"),
            )
            .arg(
                Arg::new("page")
                    .short('p')
                    .long("page")
                    .required(true)
                    .help("Wiki page file to update in place"),
            ),
        )
        .subcommand(Command::new("tables").about("List the available tables"))
}

/// Build the generator config from matches
fn build_config(matches: &ArgMatches) -> GeneratorConfig {
    let mut config = GeneratorConfig::new();
    if let Some(version) = matches.get_one::<String>("game-version") {
        config = config.game_version(version);
    }
    if matches.get_one::<String>("law-layout").map(|s| s.as_str()) == Some("sections") {
        config = config.law_layout(LawLayout::Sections);
    }
    config
}

/// Load the data and run the table named in matches
fn run_generator(matches: &ArgMatches, config: &GeneratorConfig) -> Result<Generated, anyhow::Error> {
    let table: TableKind = matches
        .get_one::<String>("table")
        .map(|s| s.as_str())
        .unwrap_or_default()
        .parse()?;
    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .unwrap_or_default();

    debug!(input = %input.display(), table = %table, "loading game data");
    let data = GameData::from_json_file(&input)?;
    let formatter = PlainFormatter::new();
    let generator = Generator::new(&data, &formatter, config);
    Ok(generator.generate(table)?)
}

/// The text written for one section: wrapped when the table uses markers
fn section_text(generated: &Generated, key: &str, config: &GeneratorConfig) -> Option<String> {
    let section = generated.sections.get(key)?;
    if generated.table.uses_markers() {
        Some(config.sections.wrap(section))
    } else {
        Some(section.body.clone())
    }
}

fn write_sections(
    generated: &Generated,
    out_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<WrittenFile>, anyhow::Error> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create directory '{}'", out_dir.display()))?;
    let mut files = Vec::new();
    for key in generated.sections.keys() {
        let path = out_dir.join(format!("{}.txt", key));
        let text = section_text(generated, key, config).unwrap_or_default();
        std::fs::write(&path, text)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        files.push(WrittenFile {
            key: key.to_string(),
            path: path.to_string_lossy().to_string(),
        });
    }
    Ok(files)
}

/// Handler for generate command
fn generate_handler(
    matches: &ArgMatches,
    ctx: &CommandContext,
) -> HandlerResult<serde_json::Value> {
    init_tracing(matches);
    let config = build_config(matches);
    let generated = run_generator(matches, &config)?;

    let out_dir = matches.get_one::<String>("out-dir").map(PathBuf::from);
    let files = match &out_dir {
        Some(dir) => write_sections(&generated, dir, &config)?,
        None => Vec::new(),
    };

    // For JSON mode, return the sections map
    if ctx.output_mode.is_structured() {
        return Ok(Output::Render(serde_json::json!({
            "table": generated.table.name(),
            "sections": generated.sections.bodies(),
        })));
    }

    let context = GenerateContext {
        table: generated.table.name().to_string(),
        page: out_dir.is_none().then(|| generated.page.clone()),
        out_dir: out_dir.map(|dir| dir.to_string_lossy().to_string()),
        files,
    };
    Ok(Output::Render(serde_json::to_value(&context)?))
}

/// Handler for splice command
fn splice_handler(matches: &ArgMatches, _ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    init_tracing(matches);
    let config = build_config(matches);
    let generated = run_generator(matches, &config)?;
    if !generated.table.uses_markers() {
        return Err(anyhow::anyhow!(
            "table '{}' has no section markers to splice into",
            generated.table
        ));
    }

    let page_path = matches
        .get_one::<String>("page")
        .map(PathBuf::from)
        .unwrap_or_default();
    let original = std::fs::read_to_string(&page_path).map_err(|source| WikiError::FileRead {
        path: page_path.clone(),
        source,
    })?;

    let mut document = original.clone();
    let mut spliced = Vec::new();
    let mut skipped = Vec::new();
    for section in generated.sections.iter() {
        match extract_section(&document, &section.key, &config.sections) {
            Ok(_) => {
                document = splice_section(&document, section, &config.sections)?;
                spliced.push(section.key.clone());
            }
            Err(WikiError::SectionMarkerNotFound(key)) => {
                debug!(key = %key, "section not on page");
                skipped.push(key);
            }
            Err(e) => return Err(e.into()),
        }
    }

    if document != original {
        std::fs::write(&page_path, &document)
            .with_context(|| format!("failed to write '{}'", page_path.display()))?;
    }
    info!(spliced = spliced.len(), skipped = skipped.len(), "page updated");

    let context = SpliceContext {
        table: generated.table.name().to_string(),
        page: page_path.to_string_lossy().to_string(),
        spliced,
        skipped,
    };
    Ok(Output::Render(serde_json::to_value(&context)?))
}

/// Handler for tables command
fn tables_handler(matches: &ArgMatches, _ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    init_tracing(matches);
    let tables = TableKind::ALL
        .iter()
        .map(|kind| TableRow {
            name: kind.name().to_string(),
            label: format!("{:<28}", kind.name()),
            description: kind.description().to_string(),
            markers: kind.uses_markers(),
        })
        .collect();
    Ok(Output::Render(serde_json::to_value(&TablesContext { tables })?))
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new()
        .add("category", Style::new().bold())
        .add("muted", Style::new().dim())
}

fn main() -> ExitCode {
    let cmd = build_command();
    let theme = create_theme();

    let result = App::builder()
        .theme(theme)
        .command("generate", generate_handler, GENERATE_TEMPLATE)
        .command("splice", splice_handler, SPLICE_TEMPLATE)
        .command("tables", tables_handler, TABLES_TEMPLATE)
        .run_to_string(cmd, std::env::args());

    match result {
        RunResult::Handled(output) => {
            if !output.is_empty() {
                // Check if it's an error message from handler
                if output.starts_with("Error:") {
                    eprintln!("{}", output);
                    return ExitCode::FAILURE;
                }
                print!("{}", output);
            }
            ExitCode::SUCCESS
        }
        RunResult::Binary(_, _) => ExitCode::SUCCESS,
        RunResult::NoMatch(_) => {
            eprintln!("Error: no command given (see `eu5wiki --help`)");
            ExitCode::FAILURE
        }
    }
}
