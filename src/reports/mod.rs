use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use feedstats::pipeline::AnalysisReport;
use feedstats::readability::{Metric, ReadabilityMetrics};
use strum::IntoEnumIterator;

pub fn print_ranking(report: &AnalysisReport) {
    println!(
        "\n🏆 Top {} words for @{}",
        report.top_n, report.subject_label
    );

    if report.ranking.is_empty() {
        println!("   (no words survived filtering)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Usage").fg(Color::Cyan),
    ]);

    for i in [0, 2] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, wc) in report.ranking.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&wc.word),
            Cell::new(wc.count).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}

pub fn print_metrics(metrics: &ReadabilityMetrics) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    for metric in Metric::iter() {
        table.add_row(vec![
            Cell::new(metric.to_string()),
            Cell::new(metrics.display_value(metric)).fg(Color::Green),
        ]);
    }

    let s = &metrics.stats;
    table.add_row(vec![
        Cell::new("Sentences / Words"),
        Cell::new(format!("{} / {}", s.sentences, s.words)),
    ]);
    table.add_row(vec![
        Cell::new("Syllables (3+)"),
        Cell::new(format!("{} ({})", s.syllables, s.polysyllables)),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}
