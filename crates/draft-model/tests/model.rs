//! Tests for draft-model types.

use std::collections::BTreeMap;

use draft_model::{
    Archetype, CellValue, Color, ColumnPolicy, Record, Selection, SortDirection, SortState,
    card_display_columns,
};

#[test]
fn cell_value_serializes_with_kind_tag() {
    let json = serde_json::to_string(&CellValue::Numeric(55.2)).expect("serialize cell");
    assert_eq!(json, r#"{"kind":"Numeric","value":55.2}"#);

    let missing = serde_json::to_string(&CellValue::Missing).expect("serialize missing");
    assert_eq!(missing, r#"{"kind":"Missing"}"#);

    let round: CellValue = serde_json::from_str(&json).expect("deserialize cell");
    assert_eq!(round, CellValue::Numeric(55.2));
}

#[test]
fn record_round_trips_through_json() {
    let mut cells = BTreeMap::new();
    cells.insert("Name".to_string(), CellValue::text("Shock"));
    cells.insert("GIH WR".to_string(), CellValue::Numeric(0.0));
    cells.insert("IWD".to_string(), CellValue::Missing);
    let record = Record::new(cells);

    let json = serde_json::to_string(&record).expect("serialize record");
    let round: Record = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
    assert_eq!(round.text("Name"), Some("Shock"));
    assert_eq!(round.columns().collect::<Vec<_>>(), vec!["GIH WR", "IWD", "Name"]);
}

#[test]
fn policy_deserializes_from_config_names() {
    let policy: ColumnPolicy = serde_json::from_str(r#""categorical""#).expect("policy");
    assert_eq!(policy, ColumnPolicy::CategoricalText);
    assert!(ColumnPolicy::PlainNumeric.is_numeric());
    assert!(!ColumnPolicy::CategoricalText.is_numeric());
}

#[test]
fn ten_archetypes_cover_every_pair_once() {
    let mut pairs: Vec<(Color, Color)> = Archetype::ALL.iter().map(|a| a.colors()).collect();
    pairs.sort();
    pairs.dedup();
    assert_eq!(pairs.len(), 10);
    assert!(pairs.iter().all(|(a, b)| a < b));
}

#[test]
fn selection_exposes_archetype() {
    assert_eq!(Selection::default(), Selection::AllColors);
    assert_eq!(Selection::Color(Color::Red).archetype(), None);
    assert_eq!(
        Selection::Archetype(Archetype::Izzet).archetype(),
        Some(Archetype::Izzet)
    );
}

#[test]
fn sort_state_tracks_single_active_column() {
    let mut state = SortState::new();
    state.set("ALSA", SortDirection::Descending);
    assert_eq!(state.active(), Some(("ALSA", SortDirection::Descending)));
    state.clear();
    assert_eq!(state.column(), None);
}

#[test]
fn card_table_shows_seven_columns() {
    let headings: Vec<String> = card_display_columns()
        .into_iter()
        .map(|column| column.heading)
        .collect();
    assert_eq!(headings.len(), 7);
    assert_eq!(headings[0], "Card Name");
}
