pub mod analyze;
pub mod fetch;
pub mod run;

use crate::reports;
use clap::Args;
use feedstats::chart;
use feedstats::config::Config;
use feedstats::error::FsResult;
use feedstats::pipeline::AnalysisReport;
use std::path::PathBuf;
use tracing::info;

/// Where a finished report goes besides the terminal.
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Write the full report as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the ranking as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Skip rendering the SVG chart
    #[arg(long, default_value_t = false)]
    pub no_chart: bool,
}

pub fn emit(report: &AnalysisReport, config: &Config, export: &ExportArgs) -> FsResult<()> {
    reports::print_ranking(report);
    reports::print_metrics(&report.metrics);

    if !export.no_chart {
        let path = config
            .output
            .chart_path(&report.subject_label, report.top_n);
        chart::save_svg(report, &path)?;
    }
    if let Some(path) = &export.json {
        report.save_json(path)?;
        info!("Report JSON written to {}", path.display());
    }
    if let Some(path) = &export.csv {
        report.save_csv(path)?;
        info!("Ranking CSV written to {}", path.display());
    }
    Ok(())
}
