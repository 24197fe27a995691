use canvas::{CanvasBounds, DrawCall, GradientStroke, Point};
use ratatui::{
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Context, Line, Rectangle},
};

use super::theme::Theme;
use crate::state::AppView;

/// Pieces each segment is split into so the gradient shows along it.
const SEGMENT_PIECES: usize = 8;

/// Paints the recorded draw calls. Surface coordinates grow downwards, the terminal canvas
/// grows upwards, so every y is mirrored inside the bounds.
pub fn path<'a>(view: &'a AppView) -> Canvas<'a, impl Fn(&mut Context) + 'a> {
    let bounds = view.bounds;
    let range = [bounds.min_val as f64, bounds.max_val as f64];
    let stroke = view.stroke.map(GradientStroke::new);

    Canvas::default()
        .block(Theme::panel("Path"))
        .background_color(Theme::BG)
        .marker(Marker::Braille)
        .x_bounds(range)
        .y_bounds(range)
        .paint(move |ctx| {
            for call in &view.calls {
                match *call {
                    DrawCall::Rect { x, y, color, size } => ctx.draw(&Rectangle {
                        x: x as f64,
                        y: (flip(bounds, y) - size) as f64,
                        width: size as f64,
                        height: size as f64,
                        color: Color::Rgb(color.r, color.g, color.b),
                    }),
                    DrawCall::Line { start, end } => paint_segment(ctx, bounds, stroke, start, end),
                    DrawCall::Clear { .. } | DrawCall::GradientStroke { .. } => {}
                }
            }
        })
}

fn paint_segment(
    ctx: &mut Context,
    bounds: CanvasBounds,
    stroke: Option<GradientStroke>,
    start: Point,
    end: Point,
) {
    let at = |t: f32| {
        Point::new(
            start.x + (end.x - start.x) * t,
            start.y + (end.y - start.y) * t,
        )
    };

    for i in 0..SEGMENT_PIECES {
        let from = at(i as f32 / SEGMENT_PIECES as f32);
        let to = at((i + 1) as f32 / SEGMENT_PIECES as f32);

        let color = match stroke {
            Some(stroke) => {
                let mid = at((i as f32 + 0.5) / SEGMENT_PIECES as f32);
                let c = stroke.color_at(mid);
                Color::Rgb(c.r, c.g, c.b)
            }
            None => Theme::NEON,
        };

        ctx.draw(&Line {
            x1: from.x as f64,
            y1: flip(bounds, from.y) as f64,
            x2: to.x as f64,
            y2: flip(bounds, to.y) as f64,
            color,
        });
    }
}

fn flip(bounds: CanvasBounds, y: f32) -> f32 {
    bounds.max_val - (y - bounds.min_val)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_mirrors_inside_the_bounds() {
        let bounds = CanvasBounds::square(10.);
        assert_eq!(flip(bounds, 0.), 10.);
        assert_eq!(flip(bounds, 10.), 0.);
        assert_eq!(flip(bounds, 3.), 7.);
    }
}
