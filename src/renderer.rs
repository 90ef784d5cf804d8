use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::GridSize;
use crate::input::Direction;
use crate::session::Snapshot;
use crate::snake::Position;
use crate::theme::Theme;
use crate::ui::hud::{HudInfo, render_hud};

const GLYPH_SNAKE_BODY: &str = "█";
const GLYPH_SNAKE_HEAD_UP: &str = "▲";
const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
const GLYPH_FOOD: &str = "●";
const GLYPH_SPECIAL_FOOD: &str = "◆";
const GLYPH_CRACK: &str = "╳";

/// Awareness display percentage above which the presentation turns uneasy.
const UNEASY_AWARENESS_PERCENT: u8 = 70;

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, grid: GridSize, info: &HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, info);

    let theme = info.theme;
    let uneasy = snapshot.awareness_percent > UNEASY_AWARENESS_PERCENT;
    let border_fg = if uneasy {
        theme.border_alarm
    } else {
        theme.border_fg
    };
    let block = Block::bordered().border_style(Style::new().fg(border_fg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, snapshot, grid, theme);
    render_snake(frame, inner, snapshot, grid, theme, uneasy);

    if snapshot.breaking_free {
        render_breakout(frame, inner, play_area, theme);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, grid: GridSize, theme: &Theme) {
    let buffer = frame.buffer_mut();

    if let Some((x, y)) = logical_to_terminal(inner, grid, snapshot.food) {
        buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
    }

    if let Some(special) = snapshot.special_food {
        let color = if special.blink_on {
            theme.special_food_on
        } else {
            theme.special_food_off
        };
        if let Some((x, y)) = logical_to_terminal(inner, grid, special.position) {
            buffer.set_string(
                x,
                y,
                GLYPH_SPECIAL_FOOD,
                Style::new().fg(color).add_modifier(Modifier::BOLD),
            );
        }
    }
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    snapshot: &Snapshot,
    grid: GridSize,
    theme: &Theme,
    uneasy: bool,
) {
    let buffer = frame.buffer_mut();
    let head = snapshot.segments.first().copied();

    for (index, segment) in snapshot.segments.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, grid, *segment) else {
            continue;
        };

        if Some(*segment) == head {
            let color = if snapshot.glitch {
                theme.glitch_head
            } else {
                theme.snake_head
            };
            buffer.set_string(
                x,
                y,
                head_glyph(snapshot.direction),
                Style::new().fg(color).add_modifier(Modifier::BOLD),
            );
            continue;
        }

        // At high awareness the body flickers between two colors.
        let color = if uneasy && index % 2 == 0 {
            theme.snake_body_alt
        } else {
            theme.snake_body
        };
        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(color));
    }
}

/// Draws the shattered right edge and the segments already outside it.
fn render_breakout(frame: &mut Frame<'_>, inner: Rect, play_area: Rect, theme: &Theme) {
    let frame_right = frame.area().right();
    let buffer = frame.buffer_mut();
    let break_y = inner.y + inner.height / 2;
    let edge_x = play_area.right().saturating_sub(1);

    let crack_style = Style::new().fg(theme.crack).add_modifier(Modifier::BOLD);
    for offset in 0..3u16 {
        let y_above = break_y.saturating_sub(offset);
        let y_below = (break_y + offset).min(play_area.bottom().saturating_sub(1));
        buffer.set_string(edge_x, y_above, GLYPH_CRACK, crack_style);
        buffer.set_string(edge_x, y_below, GLYPH_CRACK, crack_style);
    }

    // Escape segments past the border, clamped to the frame.
    let body_style = Style::new().fg(theme.snake_body);
    for step in 1..=4u16 {
        let x = edge_x.saturating_add(step);
        if x >= frame_right {
            break;
        }
        buffer.set_string(x, break_y, GLYPH_SNAKE_BODY, body_style);
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, grid: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
