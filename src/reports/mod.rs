// ===== wordrank/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use wordrank::analyzer::DocumentStats;

pub fn print_document_report(stats: &DocumentStats) {
    println!("\nFile: {}", stats.source);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
    ]);

    for i in [0, 2] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, entry) in stats.top_words.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("{}", i + 1)),
            Cell::new(&entry.word).add_attribute(Attribute::Bold),
            Cell::new(entry.count.to_string()).fg(Color::Cyan),
        ]);
    }

    println!("{}", table);
    println!("Distinct words: {}", stats.word_count);
}
