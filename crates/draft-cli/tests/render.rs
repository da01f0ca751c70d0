//! Rendering of session tables in each output format.

use std::fs;

use draft_cli::config::ViewerConfig;
use draft_cli::render::{OutputFormat, TableOutput, combos_output, render_to_string};
use draft_core::Session;
use draft_ingest::DataFiles;
use draft_model::{Color, Selection, SortDirection};
use tempfile::TempDir;

const BASELINE: &str = "\
Name,Color,Rarity,ALSA,% GP,GIH WR,IWD
Lightning Bolt,R,C,2.1,88.0%,55.2%,+3.2pp
Shock,R,C,4.5,70.5%,,-1.0pp
Zap,U,U,6.0,10%,-,
Counterspell,U,U,3.3,60%,58.1%,5pp
";

const COLORS: &str = "\
Color,Win Rate
All Decks,55.1%
Boros (RW),57.30%
Dimir (UB),54.9%
Mono-Red,52%
";

fn session(config: &ViewerConfig) -> (TempDir, Session) {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("card-ratings-2023-11-20.csv"), BASELINE).expect("write baseline");
    fs::write(dir.path().join("colors-2023-11-20.csv"), COLORS).expect("write colors");
    let files = DataFiles::latest(dir.path()).expect("snapshot");
    let session = Session::open(files, config.card_policies(), config.ingest_options(false))
        .expect("open session");
    (dir, session)
}

#[test]
fn cards_csv_sorted_by_win_rate() {
    let (_dir, mut session) = session(&ViewerConfig::default());
    session
        .cards_mut()
        .activate_column("GIH WR")
        .expect("known column");
    let output = TableOutput::from_view(session.cards(), "", OutputFormat::Csv);
    let csv = render_to_string(&output, OutputFormat::Csv).expect("render csv");
    insta::assert_snapshot!(csv, @r"
    Card Name,Avg. Pick Turn,Color,Rarity,Games Played %,WinRate In Hand (%),(% WR H - % WR not H)
    Shock,4.5,R,C,70.5,0,-1
    Lightning Bolt,2.1,R,C,88,55.2,3.2
    Counterspell,3.3,U,U,60,58.1,5
    Zap,6,U,U,10,-,0
    ");
}

#[test]
fn config_override_changes_sort_tier() {
    let config =
        ViewerConfig::parse("[columns]\n\"GIH WR\" = \"text\"\n", std::path::Path::new("inline"))
            .expect("parse config");
    let (_dir, session) = session(&config);
    let rows = session
        .cards()
        .visible_rows_sorted("", "GIH WR", SortDirection::Ascending)
        .expect("known column");
    let values: Vec<_> = rows.iter().map(|row| row.cells[5].as_str()).collect();
    assert_eq!(values, vec!["", "-", "55.2%", "58.1%"]);
}

#[test]
fn archetypes_json_sorted_descending() {
    let (_dir, mut session) = session(&ViewerConfig::default());
    let summary = session.archetypes_mut();
    summary.activate_column("Win Rate").expect("known column");
    summary.activate_column("Win Rate").expect("known column");
    let output = TableOutput::from_view(session.archetypes(), "", OutputFormat::Json)
        .with_title(session.stats().title(Selection::AllColors));
    let json = render_to_string(&output, OutputFormat::Json).expect("render json");
    insta::assert_snapshot!(json, @r#"
    {
      "title": "Overall - Avg. Win Rate: 55.1%",
      "columns": [
        "Name (Colors)",
        "Win Rate"
      ],
      "rows": [
        [
          "Boros (RW)",
          "57.3%"
        ],
        [
          "Dimir (UB)",
          "54.9%"
        ]
      ]
    }
    "#);
}

#[test]
fn terminal_table_marks_sorted_column() {
    let (_dir, mut session) = session(&ViewerConfig::default());
    session
        .cards_mut()
        .activate_column("Avg. Pick Turn")
        .expect("known column");
    let output = TableOutput::from_view(session.cards(), "bolt", OutputFormat::Table)
        .with_title(session.title());
    let table = render_to_string(&output, OutputFormat::Table).expect("render table");
    assert!(table.starts_with("Overall - Avg. Win Rate: 55.1%\n"));
    assert!(table.contains("↓Avg. Pick Turn"));
    assert!(table.contains("Lightning Bolt"));
    assert!(!table.contains("Shock"));
}

#[test]
fn combos_for_one_color_as_csv() {
    let csv = render_to_string(&combos_output(Some(Color::Red)), OutputFormat::Csv)
        .expect("render csv");
    insta::assert_snapshot!(csv, @r#"
    Code,Name (Colors),Colors
    WR,Boros (RW),"White (W), Red (R)"
    UR,Izzet (UR),"Blue (U), Red (R)"
    BR,Rakdos (BR),"Black (B), Red (R)"
    RG,Gruul (RG),"Red (R), Green (G)"
    "#);
}

#[test]
fn all_combos_listed() {
    assert_eq!(combos_output(None).rows.len(), 10);
    assert_eq!(combos_output(None).title, None);
}
