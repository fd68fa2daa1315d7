//! Terminal rendering of an ingest result.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ordersheet_model::{FileUploadResult, LineItem};

pub fn print_result(result: &FileUploadResult) {
    if let Some(error) = &result.error {
        eprintln!("error: {error}");
    }
    if !result.items().is_empty() {
        print_items_table(result.items());
    }
    if let Some(warnings) = &result.warnings {
        println!();
        println!("Warnings:");
        for warning in warnings {
            println!("- {warning}");
        }
    }
    if let Some(summary) = &result.summary {
        println!();
        println!(
            "Rows: {} total, {} valid, {} skipped",
            summary.total_rows, summary.valid_rows, summary.skipped_rows
        );
        println!(
            "Totals: {} units, {} cost",
            format_quantity(summary.total_units),
            format_money(summary.total_cost)
        );
    }
}

fn print_items_table(items: &[LineItem]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("SKU"),
        header_cell("Product"),
        header_cell("Variant"),
        header_cell("Size"),
        header_cell("Color"),
        header_cell("Qty"),
        header_cell("Unit Cost"),
        header_cell("Retail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for item in items {
        table.add_row(vec![
            optional_cell(item.sku.as_deref()),
            Cell::new(&item.product_name),
            optional_cell(item.variant_title.as_deref()),
            optional_cell(item.size.as_deref()),
            optional_cell(item.color.as_deref()),
            Cell::new(format_quantity(item.qty)),
            Cell::new(format_money(item.unit_cost)),
            match item.unit_retail {
                Some(retail) => Cell::new(format_money(retail)),
                None => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
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

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::DarkGrey)
}

fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn format_money(value: f64) -> String {
    format!("{value:.2}")
}
