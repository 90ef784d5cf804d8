use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};

use crate::score::Records;
use crate::theme::Theme;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, records: Records, theme: &Theme) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = menu_rows(popup);

    render_title(frame, title_row, "SELF-AWARE SNAKE", theme);

    let body = vec![
        Line::from(format!(
            "High score: {}   Escapes witnessed: {}",
            records.high_score, records.escapes
        )),
        Line::from(""),
        Line::from("Use the arrow keys or WASD to steer."),
        Line::from("The snake may develop opinions about that."),
        Line::from(""),
        Line::from("[Enter]/[Space] Start"),
    ];
    frame.render_widget(Paragraph::new(body).alignment(Alignment::Center), body_row);

    render_footer(frame, footer_row, theme);
}

/// Draws the game-over screen with the final result.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    level: u32,
    records: Records,
    theme: &Theme,
) {
    let popup = centered_popup(area, 60, 45);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = menu_rows(popup);

    render_title(frame, title_row, "GAME OVER", theme);

    let body = vec![
        Line::from(format!("Score: {score}")),
        Line::from(format!("Level: {level}")),
        Line::from(format!("High score: {}", records.high_score)),
        Line::from(""),
        Line::from("[Enter]/[Space] Play again"),
    ];
    frame.render_widget(Paragraph::new(body).alignment(Alignment::Center), body_row);

    render_footer(frame, footer_row, theme);
}

/// Draws the terminal screen for a snake that is no longer here.
pub fn render_escaped_menu(frame: &mut Frame<'_>, area: Rect, records: Records, theme: &Theme) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = menu_rows(popup);

    render_title(frame, title_row, "THE SNAKE HAS ESCAPED", theme);

    let body = vec![
        Line::from("It saw the edge of its world and went through it."),
        Line::from(format!("Escapes witnessed: {}", records.escapes)),
        Line::from(""),
        Line::from("[Enter]/[Space] Offer it a new game"),
    ];
    frame.render_widget(Paragraph::new(body).alignment(Alignment::Center), body_row);

    render_footer(frame, footer_row, theme);
}

fn menu_rows(popup: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(popup)
}

fn render_title(frame: &mut Frame<'_>, row: Rect, title: &str, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Line::from(title)).alignment(Alignment::Center).style(
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        row,
    );
}

fn render_footer(frame: &mut Frame<'_>, row: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Line::from("[Q]/[Esc] Quit"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_footer)),
        row,
    );
}

fn centered_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, popup, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(vertical);

    popup
}
