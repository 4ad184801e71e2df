//! SVG bar chart of the top words with readability overlay text.

use crate::error::FsResult;
use crate::pipeline::AnalysisReport;
use crate::readability::Metric;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::info;

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 560.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 70.0;
const MARGIN_BOTTOM: f64 = 110.0;

const BAR_FILL: &str = "#9999ff";
const OVERLAY_COLOR: &str = "grey";

/// Upper bound of the y axis: a quarter of the count spread as headroom.
pub fn y_axis_limit(counts: &[usize]) -> usize {
    let (Some(&lo), Some(&hi)) = (counts.iter().min(), counts.iter().max()) else {
        return 1;
    };
    let limit = (hi as f64 + 0.25 * (hi - lo) as f64).ceil() as usize;
    limit.max(1)
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render `report` as a standalone SVG document.
pub fn render_svg(report: &AnalysisReport) -> String {
    let mut svg = String::new();
    write_svg(&mut svg, report).expect("writing to a String cannot fail");
    svg
}

fn write_svg(svg: &mut String, report: &AnalysisReport) -> fmt::Result {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let x0 = MARGIN_LEFT;
    let y0 = MARGIN_TOP + plot_h;

    let counts: Vec<usize> = report.ranking.iter().map(|w| w.count).collect();
    let y_max = y_axis_limit(&counts) as f64;

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = WIDTH,
        h = HEIGHT
    )?;
    writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

    // Title
    writeln!(
        svg,
        r#"<text x="{}" y="28" text-anchor="middle" font-size="16">Top {} Favorite Words</text>"#,
        WIDTH / 2.0,
        report.top_n
    )?;
    writeln!(
        svg,
        r#"<text x="{}" y="48" text-anchor="middle" font-size="14">@{}</text>"#,
        WIDTH / 2.0,
        escape(&report.subject_label)
    )?;

    // Axes (top and right spines hidden)
    writeln!(
        svg,
        r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y0}" stroke="black"/>"#,
        x0 = x0,
        x1 = x0 + plot_w,
        y0 = y0
    )?;
    writeln!(
        svg,
        r#"<line x1="{x0}" y1="{top}" x2="{x0}" y2="{y0}" stroke="black"/>"#,
        x0 = x0,
        top = MARGIN_TOP,
        y0 = y0
    )?;

    let ticks = y_max as usize;
    let step = (ticks / 5).max(1);
    for t in (0..=ticks).step_by(step) {
        let y = y0 - (t as f64 / y_max) * plot_h;
        writeln!(
            svg,
            r#"<text x="{}" y="{:.1}" text-anchor="end" font-size="10">{}</text>"#,
            x0 - 6.0,
            y + 3.0,
            t
        )?;
    }

    // Bars
    if !report.ranking.is_empty() {
        let slot = plot_w / report.ranking.len() as f64;
        let bar_w = slot * 0.8;
        for (i, wc) in report.ranking.iter().enumerate() {
            let bar_h = (wc.count as f64 / y_max) * plot_h;
            let x = x0 + i as f64 * slot + (slot - bar_w) / 2.0;
            let y = y0 - bar_h;
            let cx = x + bar_w / 2.0;
            writeln!(
                svg,
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" fill-opacity="0.5" stroke="white"/>"#,
                x, y, bar_w, bar_h, BAR_FILL
            )?;
            writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="9">{}</text>"#,
                cx,
                y - 4.0,
                wc.count
            )?;
            writeln!(
                svg,
                r#"<text x="{cx:.1}" y="{ly:.1}" text-anchor="end" font-size="11" transform="rotate(-50 {cx:.1} {ly:.1})">{w}</text>"#,
                cx = cx,
                ly = y0 + 14.0,
                w = escape(&wc.word)
            )?;
        }
    }

    // Axis labels
    writeln!(
        svg,
        r#"<text x="{}" y="{}" text-anchor="middle" font-size="12">Word</text>"#,
        x0 + plot_w / 2.0,
        HEIGHT - 12.0
    )?;
    writeln!(
        svg,
        r#"<text x="18" y="{y:.1}" text-anchor="middle" font-size="12" transform="rotate(-90 18 {y:.1})">Usage</text>"#,
        y = MARGIN_TOP + plot_h / 2.0
    )?;

    // Readability overlay, top to bottom
    let overlay_x = x0 + plot_w * 0.7;
    for (i, metric) in Metric::iter().enumerate() {
        let y = MARGIN_TOP + plot_h * (0.15 + 0.05 * i as f64);
        writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="12" fill="{}">{}: {}</text>"#,
            overlay_x,
            y,
            OVERLAY_COLOR,
            metric,
            escape(&report.metrics.display_value(metric))
        )?;
    }

    svg.push_str("</svg>\n");
    Ok(())
}

/// Render and write the chart, creating parent directories as needed.
pub fn save_svg<P: AsRef<Path>>(report: &AnalysisReport, path: P) -> FsResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render_svg(report))?;
    info!("🖼  Chart written to {}", path.display());
    Ok(())
}
