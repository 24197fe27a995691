use ratatui::{widgets::Block, Frame};

use crate::state::AppView;

use super::{layout, plot, theme::Theme, widgets};

/// Draws the entire UI.
pub fn draw(f: &mut Frame, view: &AppView) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (header_area, body_area, input_area, logs_area) = layout::vertical(area);
    let (canvas_area, status_area) = layout::body(body_area);

    f.render_widget(widgets::header(view), header_area);
    f.render_widget(plot::path(view), canvas_area);
    f.render_widget(widgets::status(view), status_area);
    f.render_widget(widgets::input(view), input_area);
    f.render_widget(widgets::logs(view), logs_area);
}
