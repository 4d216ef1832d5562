//! SVG snapshot of the wheel
//!
//! Produces a 400×400 document: wedges clockwise from 12 o'clock inside a
//! group rotated about the center, and a fixed red pointer above the group.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::Roulette;

const SIZE: f64 = 400.0;
const CENTER: f64 = 200.0;
const RADIUS: f64 = 180.0;
const LABEL_OFFSET: f64 = 100.0;

const EVEN_FILL: &str = "#f0f9ff";
const ODD_FILL: &str = "white";
const WINNER_FILL: &str = "#fef9c3";
const STROKE: &str = "#e5e7eb";

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Fill for wedge `index`
pub fn wedge_fill(index: usize, winner: Option<usize>) -> &'static str {
    if winner == Some(index) {
        WINNER_FILL
    } else if index % 2 == 0 {
        EVEN_FILL
    } else {
        ODD_FILL
    }
}

/// Point on the rim at `degrees` clockwise from the top
fn rim_point(degrees: f64) -> (f64, f64) {
    let radians = (degrees - 90.0).to_radians();
    (
        CENTER + RADIUS * radians.cos(),
        CENTER + RADIUS * radians.sin(),
    )
}

/// Path data for a pie slice
pub fn sector_path(index: usize, total: usize) -> String {
    let angle = 360.0 / total as f64;
    let (sx, sy) = rim_point(index as f64 * angle);
    let (ex, ey) = rim_point((index + 1) as f64 * angle);
    let large_arc = if angle > 180.0 { 1 } else { 0 };

    format!(
        "M {c} {c} L {sx} {sy} A {r} {r} 0 {large_arc} 1 {ex} {ey} Z",
        c = CENTER,
        r = RADIUS,
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the wheel as an SVG document
pub fn render_svg(roulette: &Roulette) -> String {
    let entries = roulette.names().entries();
    let total = entries.len();
    let winner = roulette.winner_index();

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {SIZE} {SIZE}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <g transform="rotate({} {CENTER} {CENTER})">"#,
        roulette.rotation_degrees()
    );

    for (index, entry) in entries.iter().enumerate() {
        let label_angle = (360.0 / total as f64) * index as f64 + 180.0 / total as f64;
        let _ = writeln!(svg, "    <g>");
        let _ = writeln!(
            svg,
            r#"      <path d="{}" fill="{}" stroke="{STROKE}"/>"#,
            sector_path(index, total),
            wedge_fill(index, winner),
        );
        let _ = writeln!(
            svg,
            r#"      <text x="{CENTER}" y="{CENTER}" fill="black" font-size="16" text-anchor="middle" transform="rotate({label_angle}, {CENTER}, {CENTER}) translate(0, -{LABEL_OFFSET})">{}</text>"#,
            escape(&entry.text),
        );
        let _ = writeln!(svg, "    </g>");
    }

    let _ = writeln!(
        svg,
        r#"    <circle cx="{CENTER}" cy="{CENTER}" r="5" fill="black"/>"#
    );
    let _ = writeln!(svg, "  </g>");
    let _ = writeln!(svg, r#"  <path d="M 200 30 L 190 10 L 210 10 Z" fill="red"/>"#);
    svg.push_str("</svg>\n");

    svg
}

/// Write the current wheel to `path`
pub fn export(roulette: &Roulette, path: &Path) -> Result<(), ExportError> {
    fs::write(path, render_svg(roulette)).map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })
}
