use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use drugmention_cli::pipeline::{IngestSummary, QueryOutcome, QueryResult};

pub fn print_ingest_summary(summary: &IngestSummary) {
    println!("Landing files read: {}", summary.files.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Artifact"),
        header_cell("Records"),
        header_cell("Path"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for artifact in &summary.artifacts {
        let records = if artifact.name.ends_with("errors") {
            count_cell(artifact.records, Color::Red)
        } else {
            Cell::new(artifact.records)
        };
        table.add_row(vec![
            Cell::new(&artifact.name),
            records,
            dim_cell(artifact.path.display()),
        ]);
    }
    println!("{table}");
    print_errors(&summary.errors);
}

pub fn print_query_outcome(outcome: &QueryOutcome) {
    match outcome {
        QueryOutcome::Written {
            snapshot,
            path,
            result,
        } => {
            println!("Snapshot: {}", snapshot.display());
            println!("Output: {}", path.display());
            println!("{}", result_table(result));
        }
        QueryOutcome::SnapshotMissing { silver } => {
            eprintln!("No cross reference snapshot found in {}", silver.display());
        }
        QueryOutcome::MalformedSnapshot { path, reason } => {
            eprintln!("Malformed snapshot {}: {reason}", path.display());
        }
        QueryOutcome::NoResult { reason } => {
            println!("No result: {reason}");
        }
    }
}

fn result_table(result: &QueryResult) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    match result {
        QueryResult::Journal(group) => {
            table.set_header(vec![header_cell("Journal"), header_cell("Distinct drugs")]);
            align_column(&mut table, 1, CellAlignment::Right);
            table.add_row(vec![
                Cell::new(&group.journal).add_attribute(Attribute::Bold),
                Cell::new(group.distinct_drugs),
            ]);
        }
        QueryResult::Drugs(drugs) => {
            table.set_header(vec![header_cell("Drug")]);
            for drug in drugs {
                table.add_row(vec![Cell::new(drug)]);
            }
        }
    }
    table
}

fn print_errors(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    eprintln!("Errors:");
    for error in errors {
        eprintln!("- {error}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
