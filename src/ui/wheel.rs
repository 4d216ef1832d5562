//! Wheel rendering
//!
//! Draws the roulette on a ratatui canvas in a 400×400 coordinate space
//! centered on the origin. Angles are degrees clockwise from 12 o'clock.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line, Painter, Shape},
        Widget,
    },
};

use crate::roulette::Roulette;
use crate::theme::{symbols, wheel, Theme};

/// Half the side of the drawing space
const EXTENT: f64 = 200.0;
const RADIUS: f64 = 180.0;
const LABEL_RADIUS: f64 = 100.0;
const HUB_RADIUS: f64 = 5.0;

/// Sampling step when filling shapes, in canvas units
const FILL_STEP: f64 = 1.5;

/// Point at `radius` and `degrees` clockwise from the top
fn polar(radius: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (radius * radians.sin(), radius * radians.cos())
}

/// Filled circular sector
struct Sector {
    start: f64,
    sweep: f64,
    radius: f64,
    color: Color,
}

impl Shape for Sector {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        let mut r = FILL_STEP / 2.0;
        while r <= self.radius {
            let step = (FILL_STEP / r).to_degrees();
            let mut angle = self.start;
            while angle <= self.start + self.sweep {
                let (x, y) = polar(r, angle);
                if let Some((px, py)) = painter.get_point(x, y) {
                    painter.paint(px, py, self.color);
                }
                angle += step;
            }
            r += FILL_STEP;
        }
    }
}

/// Fixed pointer: a downward triangle with its tip just inside the rim
struct Pointer {
    color: Color,
}

impl Pointer {
    const TIP: f64 = 170.0;
    const BASE: f64 = 190.0;
    const HALF_WIDTH: f64 = 10.0;
}

impl Shape for Pointer {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        let height = Self::BASE - Self::TIP;
        let mut y = Self::TIP;
        while y <= Self::BASE {
            let half = Self::HALF_WIDTH * (y - Self::TIP) / height;
            let mut x = -half;
            while x <= half {
                if let Some((px, py)) = painter.get_point(x, y) {
                    painter.paint(px, py, self.color);
                }
                x += FILL_STEP / 2.0;
            }
            y += FILL_STEP / 2.0;
        }
    }
}

/// Fill color of wedge `index`
pub fn wedge_color(index: usize, winner: Option<usize>) -> Color {
    if winner == Some(index) {
        wheel::WINNER
    } else if index % 2 == 0 {
        wheel::EVEN
    } else {
        wheel::ODD
    }
}

/// Shorten a label to `width` characters
pub fn truncate_label(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut label: String = text.chars().take(width.saturating_sub(1)).collect();
    label.push(symbols::ELLIPSIS);
    label
}

/// Largest area with a square look, centered in `area`.
///
/// Terminal cells are about twice as tall as they are wide.
pub fn square_area(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Roulette wheel widget
pub struct WheelView<'a> {
    roulette: &'a Roulette,
    theme: &'a Theme,
    label_width: usize,
}

impl<'a> WheelView<'a> {
    pub fn new(roulette: &'a Roulette, theme: &'a Theme) -> Self {
        Self {
            roulette,
            theme,
            label_width: 12,
        }
    }

    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    fn paint(&self, ctx: &mut Context<'_>, units_per_column: f64) {
        let entries = self.roulette.names().entries();
        let rotation = self.roulette.rotation_degrees();
        let winner = self.roulette.winner_index();

        if entries.is_empty() {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RADIUS,
                color: wheel::BORDER,
            });
        } else {
            let sweep = 360.0 / entries.len() as f64;

            for index in 0..entries.len() {
                ctx.draw(&Sector {
                    start: rotation + index as f64 * sweep,
                    sweep,
                    radius: RADIUS,
                    color: wedge_color(index, winner),
                });
            }
            ctx.layer();

            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RADIUS,
                color: wheel::BORDER,
            });
            if entries.len() > 1 {
                for index in 0..entries.len() {
                    let (x, y) = polar(RADIUS, rotation + index as f64 * sweep);
                    ctx.draw(&Line::new(0.0, 0.0, x, y, wheel::BORDER));
                }
            }
            ctx.draw(&Sector {
                start: 0.0,
                sweep: 360.0,
                radius: HUB_RADIUS,
                color: wheel::INK,
            });

            for (index, entry) in entries.iter().enumerate() {
                let mid = rotation + index as f64 * sweep + sweep / 2.0;
                let (x, y) = polar(LABEL_RADIUS, mid);
                let label = truncate_label(&entry.text, self.label_width);
                let half_width = label.chars().count() as f64 * units_per_column / 2.0;
                ctx.print(
                    x - half_width,
                    y,
                    TextLine::from(Span::styled(
                        label,
                        self.theme.wedge_label(wedge_color(index, winner)),
                    )),
                );
            }
        }

        ctx.layer();
        ctx.draw(&Pointer {
            color: wheel::POINTER,
        });
    }
}

impl Widget for WheelView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = square_area(area);
        if area.width == 0 || area.height == 0 {
            return;
        }
        let units_per_column = 2.0 * EXTENT / f64::from(area.width);

        Canvas::default()
            .marker(Marker::HalfBlock)
            .background_color(self.theme.bg_dark)
            .x_bounds([-EXTENT, EXTENT])
            .y_bounds([-EXTENT, EXTENT])
            .paint(|ctx| self.paint(ctx, units_per_column))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(roulette: &Roulette, width: u16, height: u16) -> Vec<String> {
        let theme = Theme::new();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        WheelView::new(roulette, &theme).render(area, &mut buf);
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    /// Column of `needle` in a rendered row
    fn column_of(row: &str, needle: &str) -> usize {
        let byte = row.find(needle).unwrap();
        row[..byte].chars().count()
    }

    #[test]
    fn test_polar_orientation() {
        let (x, y) = polar(10.0, 0.0);
        assert!(x.abs() < 1e-9 && (y - 10.0).abs() < 1e-9);
        let (x, y) = polar(10.0, 90.0);
        assert!((x - 10.0).abs() < 1e-9 && y.abs() < 1e-9);
    }

    #[test]
    fn test_wedge_color() {
        assert_eq!(wedge_color(0, None), wheel::EVEN);
        assert_eq!(wedge_color(3, None), wheel::ODD);
        assert_eq!(wedge_color(3, Some(3)), wheel::WINNER);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Alice", 12), "Alice");
        assert_eq!(truncate_label("Bartholomew Jones", 6), "Barth…");
        assert_eq!(truncate_label("花子さん", 3), "花子…");
    }

    #[test]
    fn test_square_area() {
        assert_eq!(square_area(Rect::new(0, 0, 100, 20)), Rect::new(30, 0, 40, 20));
        assert_eq!(square_area(Rect::new(0, 0, 40, 50)), Rect::new(0, 15, 40, 20));
    }

    #[test]
    fn test_labels_drawn_on_opposite_sides() {
        let mut roulette = Roulette::new();
        roulette.add("Alice");
        roulette.add("Bob");

        let rows = render(&roulette, 60, 30);
        let alice = rows.iter().find(|r| r.contains("Alice")).expect("Alice drawn");
        let bob = rows.iter().find(|r| r.contains("Bob")).expect("Bob drawn");
        // Wedge 0 spans the right half at rest, wedge 1 the left half.
        assert!(column_of(alice, "Alice") > 30);
        assert!(column_of(bob, "Bob") < 30);
    }

    #[test]
    fn test_empty_wheel_renders() {
        let rows = render(&Roulette::new(), 40, 20);
        assert_eq!(rows.len(), 20);
    }
}
