use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use draft_cli::config::{DATA_DIR_ENV, ViewerConfig};
use draft_cli::render::{OutputFormat, TableOutput, combos_output, write_output};
use draft_core::{Session, TableView};
use draft_ingest::{DataFiles, parse_snapshot};
use draft_model::Selection;
use tracing::{debug, info_span};

use crate::cli::{ArchetypesArgs, CardsArgs, CombosArgs, DataArgs};

pub fn run_cards(args: &CardsArgs, config: &ViewerConfig) -> Result<()> {
    let format = OutputFormat::from(args.format);
    let mut session = open_session(&args.data, config)?;

    let selection = match (args.mana, args.archetype) {
        (_, Some(archetype)) => Selection::Archetype(archetype),
        (Some(color), None) => Selection::Color(color),
        (None, None) => Selection::AllColors,
    };
    if selection != Selection::AllColors
        && let Err(error) = session.select(selection)
    {
        // The baseline table stays loaded, same as a failed selection in the viewer.
        eprintln!("warning: {error}; showing all colors");
    }

    apply_sorts(session.cards_mut(), &args.sort)?;
    let output = TableOutput::from_view(session.cards(), &args.search, format)
        .with_title(session.title());
    print(&output, format)
}

pub fn run_archetypes(args: &ArchetypesArgs, config: &ViewerConfig) -> Result<()> {
    let format = OutputFormat::from(args.format);
    let mut session = open_session(&args.data, config)?;
    apply_sorts(session.archetypes_mut(), &args.sort)?;
    let output = TableOutput::from_view(session.archetypes(), &args.search, format)
        .with_title(session.stats().title(Selection::AllColors));
    print(&output, format)
}

pub fn run_combos(args: &CombosArgs) -> Result<()> {
    let format = OutputFormat::from(args.format);
    print(&combos_output(args.mana), format)
}

fn open_session(args: &DataArgs, config: &ViewerConfig) -> Result<Session> {
    let env_dir = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
    let dir = config
        .data_dir(args.data_dir.as_deref(), env_dir)
        .ok_or_else(|| anyhow!("no data directory: pass --data-dir, set [data] dir or {DATA_DIR_ENV}"))?;
    let span = info_span!("session", dir = %dir.display());
    let _guard = span.enter();

    let files = match config.snapshot_date(args.date.as_deref()) {
        Some(date) => {
            let snapshot = parse_snapshot(date).context("parse --date")?;
            DataFiles::new(&dir, snapshot)
        }
        None => DataFiles::latest(&dir)
            .with_context(|| format!("find snapshots in {}", dir.display()))?,
    };
    let options = config.ingest_options(args.empty_is_absent);
    Session::open(files, config.card_policies(), options).context("load ratings")
}

fn apply_sorts(view: &mut TableView, columns: &[String]) -> Result<()> {
    for column in columns {
        let direction = view
            .activate_column(column)
            .with_context(|| format!("sort by {column}"))?;
        debug!(%column, %direction, "applied sort");
    }
    Ok(())
}

fn print(output: &TableOutput, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    write_output(stdout.lock(), output, format)
}
