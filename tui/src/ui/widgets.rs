use ratatui::{
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use session::Phase;

use super::theme::Theme;
use crate::state::AppView;

/// Amount of log lines shown in the events panel.
const LOG_TAIL: usize = 8;

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "IDLE",
        Phase::Validating => "VALIDATING",
        Phase::Training => "TRAINING",
        Phase::Predicting => "PREDICTING",
        Phase::Appending => "APPENDING",
        Phase::Rendering => "RENDERING",
    }
}

pub fn header<'a>(view: &'a AppView) -> Paragraph<'a> {
    let mut line1 = vec![
        Span::styled("Cycle: ", Theme::label()),
        Span::styled(phase_name(view.phase), Theme::phase(view.phase)),
    ];

    if view.in_flight > 1 {
        line1.push(Span::styled(
            format!("  (+{} running)", view.in_flight - 1),
            Theme::hint(),
        ));
    } else if view.busy && view.phase == Phase::Idle {
        line1.push(Span::styled("  (waiting)", Theme::hint()));
    }

    let line2 = Line::from(vec![
        Span::styled("Samples: ", Theme::label()),
        Span::styled(view.samples.to_string(), Theme::value()),
        Span::styled(
            format!(
                "  |  Canvas: [{}, {}]",
                view.bounds.min_val, view.bounds.max_val
            ),
            Theme::label(),
        ),
    ]);

    Paragraph::new(vec![Line::from(line1), line2])
        .block(Theme::panel("Linear Learner"))
        .wrap(Wrap { trim: true })
}

pub fn status<'a>(view: &'a AppView) -> Paragraph<'a> {
    let lines = match view.last {
        Some(last) => vec![
            Line::from(vec![
                Span::styled("x: ", Theme::label()),
                Span::styled(last.x.to_string(), Theme::value()),
            ]),
            Line::from(vec![
                Span::styled("y: ", Theme::label()),
                Span::styled(format!("{:.4}", last.y), Theme::prediction()),
            ]),
            Line::from(vec![
                Span::styled("time: ", Theme::label()),
                Span::styled(
                    format!("{:.3} ms", last.elapsed.as_secs_f64() * 1000.),
                    Theme::value(),
                ),
            ]),
        ],
        None => vec![Line::from(Span::styled("no prediction yet", Theme::hint()))],
    };

    Paragraph::new(lines)
        .block(Theme::panel("Prediction"))
        .wrap(Wrap { trim: true })
}

pub fn input<'a>(view: &'a AppView) -> Paragraph<'a> {
    let line = Line::from(vec![
        Span::styled("> ", Theme::label()),
        Span::styled(view.input.as_str(), Theme::value()),
        Span::styled("_", Theme::hint()),
    ]);

    let hints = Span::styled(" Enter compute | F2 random data | Esc quit ", Theme::hint());

    Paragraph::new(line).block(Theme::panel("Input").title_bottom(hints))
}

pub fn logs<'a>(view: &'a AppView) -> Paragraph<'a> {
    let skip = view.logs.len().saturating_sub(LOG_TAIL);

    let lines = view.logs[skip..]
        .iter()
        .map(|l| {
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), Theme::level(l.level)),
                Span::styled(l.message.as_str(), Theme::value()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(Theme::panel("Events"))
        .wrap(Wrap { trim: true })
}
