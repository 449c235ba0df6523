use crate::core::summary::{SettlementSummary, format_amount};
use log::debug;
use serde_json::{Value, json};
use std::fmt::Write;

const FONT_SIZE: u32 = 14;
const CELL_PADDING: u32 = 10;
const ROW_HEIGHT: u32 = FONT_SIZE + CELL_PADDING * 2;
const CHAR_WIDTH: u32 = 9;
const MIN_COL_WIDTH: u32 = 60;
const HEADER_BG: &str = "#4a5568";
const HEADER_TEXT: &str = "#ffffff";
const ROW_BG_EVEN: &str = "#f7fafc";
const ROW_BG_ODD: &str = "#edf2f7";
const ROW_TEXT: &str = "#1a202c";
const BORDER_COLOR: &str = "#cbd5e0";

// Renders settlement summaries for the share image and chart views
pub struct Visualization;

impl Visualization {
    /// Generates a Chart.js bar chart configuration for per-participant totals.
    pub fn generate_totals_chart(summary: &SettlementSummary) -> Value {
        let labels: Vec<String> = summary.totals.iter().map(|t| t.participant.to_string()).collect();
        let data: Vec<i64> = summary.totals.iter().map(|t| t.total).collect();

        // Generate dynamic colors to support any number of participants
        let base_colors = [
            (75, 192, 192),  // Teal
            (255, 99, 132),  // Red
            (54, 162, 235),  // Blue
            (255, 206, 86),  // Yellow
            (153, 102, 255), // Purple
        ];
        let mut background_colors = Vec::with_capacity(labels.len());
        let mut border_colors = Vec::with_capacity(labels.len());
        for i in 0..labels.len() {
            let (r, g, b) = base_colors[i % base_colors.len()];
            background_colors.push(format!("rgba({}, {}, {}, 0.6)", r, g, b));
            border_colors.push(format!("rgba({}, {}, {}, 1)", r, g, b));
        }

        debug!("Generated totals chart for {} participants", labels.len());
        json!({
            "type": "bar",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "Amount due",
                    "data": data,
                    "backgroundColor": background_colors,
                    "borderColor": border_colors,
                    "borderWidth": 1
                }]
            },
            "options": {
                "scales": {
                    "y": { "beginAtZero": true, "title": { "display": true, "text": "Amount" } },
                    "x": { "title": { "display": true, "text": "Participants" } }
                },
                "plugins": {
                    "title": {
                        "display": true,
                        "text": format!("Settlement total: {}", summary.total_amount)
                    }
                }
            }
        })
    }

    /// Renders the summary as an SVG table: one row per participant, one
    /// column per round, a trailing total column and a trailing total row.
    pub fn render_svg(summary: &SettlementSummary, currency_unit: &str) -> String {
        let mut headers = vec!["Participant".to_string()];
        headers.extend(summary.rounds.iter().map(|r| r.title.clone()));
        headers.push("Total".to_string());

        let mut rows: Vec<Vec<String>> = summary
            .totals
            .iter()
            .map(|total| {
                let mut row = vec![total.participant.to_string()];
                for round in &summary.rounds {
                    let cell = round
                        .lines
                        .iter()
                        .find(|l| l.participant == total.participant)
                        .map(|l| format_amount(l.amount as i128, currency_unit))
                        .unwrap_or_else(|| "-".to_string());
                    row.push(cell);
                }
                row.push(format_amount(total.total as i128, currency_unit));
                row
            })
            .collect();

        let mut footer = vec!["Total".to_string()];
        footer.extend(
            summary
                .rounds
                .iter()
                .map(|r| format_amount(r.amount as i128, currency_unit)),
        );
        footer.push(format_amount(summary.total_amount as i128, currency_unit));
        rows.push(footer);

        build_table(&headers, &rows)
    }
}

fn build_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let col_widths: Vec<u32> = (0..headers.len())
        .map(|i| {
            std::iter::once(&headers[i])
                .chain(rows.iter().filter_map(|row| row.get(i)))
                .map(|cell| text_width(cell))
                .max()
                .unwrap_or(MIN_COL_WIDTH)
        })
        .collect();
    let width: u32 = col_widths.iter().sum();
    let height = ROW_HEIGHT * (rows.len() as u32 + 1);

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif" font-size="{FONT_SIZE}">"#
    );
    write_row(&mut svg, headers, &col_widths, 0, HEADER_BG, HEADER_TEXT);
    for (i, row) in rows.iter().enumerate() {
        let bg = if i % 2 == 0 { ROW_BG_EVEN } else { ROW_BG_ODD };
        write_row(&mut svg, row, &col_widths, ROW_HEIGHT * (i as u32 + 1), bg, ROW_TEXT);
    }
    svg.push_str("</svg>");
    svg
}

fn write_row(svg: &mut String, cells: &[String], col_widths: &[u32], y: u32, bg: &str, fg: &str) {
    let mut x = 0;
    for (cell, &w) in cells.iter().zip(col_widths) {
        let _ = write!(
            svg,
            r#"<rect x="{x}" y="{y}" width="{w}" height="{ROW_HEIGHT}" fill="{bg}" stroke="{BORDER_COLOR}"/>"#
        );
        let _ = write!(
            svg,
            r#"<text x="{}" y="{}" fill="{fg}">{}</text>"#,
            x + CELL_PADDING,
            y + CELL_PADDING + FONT_SIZE,
            escape_xml(cell)
        );
        x += w;
    }
}

fn text_width(text: &str) -> u32 {
    (text.chars().count() as u32 * CHAR_WIDTH + CELL_PADDING * 2).max(MIN_COL_WIDTH)
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
