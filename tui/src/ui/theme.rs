use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};
use session::Phase;

/// Neon green on black, cyan for whatever is moving.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(0, 0, 0);
    pub const NEON: Color = Color::Rgb(57, 255, 20);

    const DIM: Color = Color::Rgb(0, 190, 0);
    const MUTED: Color = Color::Rgb(80, 90, 80);
    const ACTIVE: Color = Color::Rgb(0, 255, 255);
    const WARN: Color = Color::Rgb(255, 255, 0);
    const ERROR: Color = Color::Rgb(255, 70, 70);

    pub fn base() -> Style {
        Style::default().fg(Self::NEON).bg(Self::BG)
    }

    /// A bordered panel titled `title`.
    pub fn panel(title: &str) -> Block<'_> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Self::NEON))
            .title(Span::styled(
                title,
                Style::default().fg(Self::NEON).add_modifier(Modifier::BOLD),
            ))
    }

    pub fn label() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn value() -> Style {
        Style::default().fg(Self::NEON)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// The predicted value, the one number worth spotting at a glance.
    pub fn prediction() -> Style {
        Style::default()
            .fg(Self::ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn phase(phase: Phase) -> Style {
        match phase {
            Phase::Idle => Self::value(),
            _ => Self::prediction(),
        }
    }

    pub fn level(level: &str) -> Style {
        match level {
            "WARN" => Style::default().fg(Self::WARN),
            "ERROR" => Style::default()
                .fg(Self::ERROR)
                .add_modifier(Modifier::BOLD),
            _ => Self::label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_phases_stand_out() {
        assert_eq!(Theme::phase(Phase::Idle), Theme::value());
        assert_eq!(Theme::phase(Phase::Training), Theme::prediction());
        assert_ne!(Theme::level("ERROR"), Theme::level("INFO"));
    }
}
