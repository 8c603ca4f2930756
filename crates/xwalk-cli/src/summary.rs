use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use xwalk_core::rule_for;
use xwalk_model::{MatchType, Phase};

use crate::types::LinkResult;

pub fn print_summary(result: &LinkResult) {
    let crosswalk = &result.crosswalk;
    let stats = &crosswalk.stats;
    println!("Reporting year: {}", crosswalk.year);
    match &result.outputs {
        Some(paths) => {
            println!("Crosswalk: {}", paths.crosswalk.display());
            println!("Phase summary: {}", paths.phase_summary.display());
            println!("Run summary: {}", paths.run_summary.display());
        }
        None => println!("Dry run: nothing written to {}", result.output_dir.display()),
    }
    println!(
        "Regulatory units: {} read, {} eligible for {}",
        stats.input_units, stats.eligible_units, crosswalk.year
    );
    println!(
        "Market generators: {} read, {} with corrected facility key, {} excluded by fuel",
        stats.input_generators, stats.corrected_generators, stats.excluded_generators
    );

    print_phase_table(result);
    print_match_type_table(result);

    let fan_out = crosswalk.fan_out_rows();
    if fan_out > 0 {
        eprintln!(
            "Warning: {fan_out} rows involve a record paired more than once; \
             see unit_match_count and generator_match_count"
        );
    }
}

fn print_phase_table(result: &LinkResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Phase"),
        header_cell("Rule"),
        header_cell("Pairs"),
        header_cell("Units matched"),
        header_cell("Generators matched"),
        header_cell("Units left"),
        header_cell("Generators left"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (summary, phase) in result.crosswalk.phases.iter().zip(Phase::ALL) {
        table.add_row(vec![
            Cell::new(&summary.phase)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(rule_for(phase).name),
            count_cell(summary.pairs, Color::Green),
            count_cell(summary.matched_units, Color::Green),
            count_cell(summary.matched_generators, Color::Green),
            Cell::new(summary.remaining_units),
            Cell::new(summary.remaining_generators),
        ]);
    }
    println!("{table}");
}

fn print_match_type_table(result: &LinkResult) {
    let crosswalk = &result.crosswalk;
    let total = crosswalk.len();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Match type"),
        header_cell("Rows"),
        header_cell("Share"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (match_type, rows) in crosswalk.match_type_counts() {
        let color = match match_type {
            MatchType::Matched(_) => Color::Green,
            MatchType::Terminal(_) => Color::Yellow,
        };
        table.add_row(vec![
            Cell::new(match_type.label()),
            count_cell(rows, color),
            dim_cell(share(rows, total)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn share(rows: usize, total: usize) -> String {
    if total == 0 {
        return "-".to_string();
    }
    let percent = rows as f64 * 100.0 / total as f64;
    format!("{percent:.1}%")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_formats_percent() {
        assert_eq!(share(1, 4), "25.0%");
        assert_eq!(share(0, 0), "-");
    }
}
