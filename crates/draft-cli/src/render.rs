//! Output of table views as terminal tables, CSV or JSON.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use draft_core::{DisplayRow, TableView};
use draft_model::{Archetype, Color as ManaColor, MISSING_GLYPH};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// A titled grid ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<DisplayRow>,
}

impl TableOutput {
    pub fn new(columns: Vec<String>, rows: Vec<DisplayRow>) -> Self {
        Self {
            title: None,
            columns,
            rows,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Visible rows of `view`. Terminal tables keep the sort arrow in the
    /// headings; machine formats get the bare headings.
    pub fn from_view(view: &TableView, query: &str, format: OutputFormat) -> Self {
        let columns = match format {
            OutputFormat::Table => view.headings(),
            OutputFormat::Csv | OutputFormat::Json => view
                .display_columns()
                .iter()
                .map(|column| column.heading.trim().to_string())
                .collect(),
        };
        Self::new(columns, view.visible_rows(query))
    }
}

/// The two-color combinations, all of them or those containing `color`.
pub fn combos_output(color: Option<ManaColor>) -> TableOutput {
    let archetypes = match color {
        Some(color) => color.archetypes(),
        None => Archetype::ALL.to_vec(),
    };
    let rows = archetypes
        .into_iter()
        .map(|archetype| {
            let (first, second) = archetype.colors();
            DisplayRow {
                cells: vec![
                    archetype.code().to_string(),
                    archetype.display_name().to_string(),
                    format!("{}, {}", first.label(), second.label()),
                ],
            }
        })
        .collect();
    let output = TableOutput::new(
        vec!["Code".to_string(), "Name (Colors)".to_string(), "Colors".to_string()],
        rows,
    );
    match color {
        Some(color) => output.with_title(format!("Combinations with {}", color.label())),
        None => output,
    }
}

pub fn write_output<W: Write>(mut writer: W, output: &TableOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if let Some(title) = &output.title {
                writeln!(writer, "{title}")?;
            }
            writeln!(writer, "{}", build_table(output))?;
        }
        OutputFormat::Csv => write_csv(writer, output)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, output).context("write json")?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

pub fn render_to_string(output: &TableOutput, format: OutputFormat) -> Result<String> {
    let mut buffer = Vec::new();
    write_output(&mut buffer, output, format)?;
    String::from_utf8(buffer).context("rendered output is not utf-8")
}

fn write_csv<W: Write>(writer: W, output: &TableOutput) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(&output.columns)
        .context("write csv header")?;
    for row in &output.rows {
        csv_writer
            .write_record(&row.cells)
            .context("write csv row")?;
    }
    csv_writer.flush().context("flush csv")?;
    Ok(())
}

pub fn build_table(output: &TableOutput) -> Table {
    let mut table = Table::new();
    table.set_header(output.columns.iter().map(|column| header_cell(column)));
    apply_table_style(&mut table);
    for row in &output.rows {
        table.add_row(row.cells.iter().map(|value| value_cell(value)));
    }
    for index in 0..output.columns.len() {
        if is_numeric_column(output, index) {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn is_numeric_column(output: &TableOutput, index: usize) -> bool {
    let mut values = output
        .rows
        .iter()
        .filter_map(|row| row.get(index))
        .filter(|value| *value != MISSING_GLYPH)
        .peekable();
    values.peek().is_some()
        && values.all(|value| value.trim_end_matches('%').parse::<f64>().is_ok())
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &str) -> Cell {
    if value == MISSING_GLYPH {
        Cell::new(value).fg(Color::DarkGrey)
    } else {
        Cell::new(value)
    }
}
