use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gem_cli::batch::BatchResult;
use gem_map::{Crosswalk, GemEngine, IndexView, MatchOutcome, MatchPipeline, normalize};
use gem_model::CodeFamily;

pub fn print_batch_summary(results: &[BatchResult]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Root"),
        header_cell("Mode"),
        header_cell("File"),
        header_cell("Codes"),
        header_cell("Matched"),
        header_cell("Rows"),
        header_cell("Secondary"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    for index in 3..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_codes = 0usize;
    let mut total_rows = 0usize;
    for result in results {
        for file in &result.files {
            total_codes += file.codes;
            total_rows += file.rows;
            let name = file
                .source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            table.add_row(vec![
                Cell::new(result.root.display()),
                mode_cell(&result.mode),
                Cell::new(name),
                Cell::new(file.codes),
                count_cell(file.matched, file.codes),
                Cell::new(file.rows),
                dim_or_value(file.secondary_codes),
                Cell::new(file.output.display()).fg(Color::DarkGrey),
            ]);
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_codes).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    let errors: Vec<&String> = results.iter().flat_map(|r| r.errors.iter()).collect();
    if !errors.is_empty() {
        eprintln!("Errors:");
        for error in errors {
            eprintln!("- {error}");
        }
    }
}

pub fn print_query(family: CodeFamily, pipeline: MatchPipeline, outcome: &MatchOutcome) {
    println!("Family: {family}");
    println!("Pipeline: {pipeline}");
    if !outcome.secondary_codes.is_empty() {
        println!("Secondary codes: {}", outcome.secondary_codes.join(", "));
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Related"),
        header_cell("Flag"),
    ]);
    apply_table_style(&mut table);
    for row in normalize(&outcome.result) {
        let related = match row.related_code {
            Some(code) => Cell::new(code),
            None => dim_cell("-"),
        };
        let flag = match row.flag {
            Some(flag) => Cell::new(flag),
            None => dim_cell("-"),
        };
        table.add_row(vec![code_cell(&row.input_code), related, flag]);
    }
    println!("{table}");
}

pub fn print_lookup(crosswalk: &Crosswalk, code: &str) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Index"),
        header_cell("Related"),
        header_cell("Flag"),
    ]);
    apply_table_style(&mut table);
    for view in IndexView::ALL {
        let pairs = crosswalk.index(view).lookup(code);
        if pairs.is_empty() {
            table.add_row(vec![Cell::new(view.label()), dim_cell("-"), dim_cell("-")]);
            continue;
        }
        for pair in pairs {
            table.add_row(vec![
                Cell::new(view.label()),
                Cell::new(&pair.code),
                Cell::new(&pair.flag),
            ]);
        }
    }
    println!("{} ({})", code, crosswalk.family());
    println!("{table}");
}

pub fn print_tables(engine: &GemEngine) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Family"),
        header_cell("Index"),
        header_cell("Rows"),
        header_cell("Distinct keys"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for family in CodeFamily::ALL {
        let crosswalk = engine.crosswalk(family);
        for view in IndexView::ALL {
            let index = crosswalk.index(view);
            table.add_row(vec![
                mode_cell(family.as_str()),
                Cell::new(view.label()),
                Cell::new(index.row_count()),
                Cell::new(index.key_count()),
            ]);
        }
    }
    println!("{table}");
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn mode_cell(mode: &str) -> Cell {
    match CodeFamily::parse(mode) {
        Some(family) => Cell::new(family)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        None => Cell::new(mode).fg(Color::Yellow),
    }
}

fn code_cell(code: &str) -> Cell {
    Cell::new(code)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

/// Matched count, red when nothing in the file matched.
fn count_cell(matched: usize, total: usize) -> Cell {
    if total > 0 && matched == 0 {
        Cell::new(matched).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(matched)
    }
}

fn dim_or_value(value: usize) -> Cell {
    if value == 0 {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
