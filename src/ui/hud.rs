use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::score::Records;
use crate::session::Snapshot;
use crate::theme::Theme;

/// Supplemental values displayed alongside the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub records: Records,
    pub theme: &'a Theme,
}

/// Renders the status and message rows and returns the remaining play area.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, info: &HudInfo<'_>) -> Rect {
    let [play_area, status_area, message_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let theme = info.theme;
    let status = Line::from(vec![
        Span::styled("Score ", Style::new().fg(theme.hud_fg)),
        Span::styled(
            snapshot.score.to_string(),
            Style::new().fg(theme.hud_fg).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Level ", Style::new().fg(theme.hud_fg)),
        Span::styled(
            snapshot.level.to_string(),
            Style::new().fg(theme.hud_fg).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Awareness ", Style::new().fg(theme.hud_fg)),
        Span::styled(
            format!("{}%", snapshot.awareness_percent),
            Style::new()
                .fg(theme.special_food_on)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Hi {}", info.records.high_score),
            Style::new().fg(theme.hud_fg),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Escapes {}", info.records.escapes),
            Style::new().fg(theme.hud_fg),
        ),
    ]);
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), status_area);

    let message = Line::from(Span::styled(
        snapshot.message.clone(),
        Style::new()
            .fg(theme.message_fg)
            .add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), message_area);

    play_area
}
