//! Terminal summary tables for command results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use listing_cli::pipeline::CleanOutcome;
use listing_map::RoleSynonyms;
use listing_model::ColumnRole;
use listing_validate::{FilterReport, RejectReason};

pub fn print_clean_summary(outcome: &CleanOutcome) {
    let normalized = &outcome.normalized;
    println!("Input: {}", outcome.input.display());
    match &outcome.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: none (dry run)"),
    }

    let mut bindings = Table::new();
    bindings.set_header(vec![
        header_cell("Role"),
        header_cell("Source column"),
        header_cell("Output column"),
    ]);
    apply_table_style(&mut bindings);
    for role in ColumnRole::ALL {
        let source = match normalized.binding.source(role) {
            Some(column) => Cell::new(column),
            None => dim_cell("-"),
        };
        let output = if normalized.binding.is_bound(role) {
            Cell::new(role.canonical_name())
        } else {
            dim_cell("omitted")
        };
        bindings.add_row(vec![role_cell(role), source, output]);
    }
    println!("{bindings}");

    println!("{}", rejection_table(&normalized.report));
    println!(
        "Retained rows: {} of {}",
        normalized.report.retained_rows, normalized.report.input_rows
    );
    match normalized.max_price {
        Some(price) => println!("Max price: {price}"),
        None => println!("Max price: -"),
    }
}

pub fn print_roles(synonyms: &RoleSynonyms) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Required"),
        header_cell("Output column"),
        header_cell("Synonyms"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for (role, values) in synonyms.iter() {
        let required = if role.is_required() {
            Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            role_cell(role),
            required,
            Cell::new(role.canonical_name()),
            Cell::new(values.join(", ")),
        ]);
    }
    println!("{table}");
}

fn rejection_table(report: &FilterReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rejected"), header_cell("Rows")]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 1, CellAlignment::Right);
    for reason in [
        RejectReason::MissingPrice,
        RejectReason::PriceOutOfRange,
        RejectReason::MissingYear,
    ] {
        table.add_row(vec![
            Cell::new(reason.label()),
            count_cell(report.count(reason), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(report.rejected(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    table
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

fn role_cell(role: ColumnRole) -> Cell {
    let cell = Cell::new(role.label());
    if role.is_required() {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
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
