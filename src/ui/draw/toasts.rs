//! Toast overlay
//!
//! Toasts are stacked from the top-right corner downward, oldest first.
//! Each box grows to fit its wrapped message. If they do not all fit, the
//! oldest are left out.

use super::styling::toast_color;
use super::wrap::hard_wrap;
use crate::toast::{Toast, Toasts};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_MIN_WIDTH: u16 = 30;
const TOAST_MAX_WIDTH: u16 = 60;
const TOAST_MARGIN_TOP: u16 = 1;
const TOAST_MARGIN_RIGHT: u16 = 2;
/// Left and right border plus one column of padding on each side
const TOAST_CHROME_WIDTH: u16 = 4;
const TOAST_BORDER_HEIGHT: u16 = 2;

pub fn render_toasts(frame: &mut Frame, toasts: &Toasts) {
    if toasts.is_empty() {
        return;
    }

    let area = frame.area();

    // Lay out newest first so they win when the stack is taller than the screen
    let mut budget = area.height.saturating_sub(TOAST_MARGIN_TOP);
    let mut visible: Vec<(&Toast, Vec<String>, Rect)> = Vec::new();
    for toast in toasts.iter().rev() {
        let rect = toast_rect(area, 0, toast.message.chars().count());
        let rows = hard_wrap(&toast.message, rect.width.saturating_sub(TOAST_CHROME_WIDTH));
        let height = u16::try_from(rows.len())
            .unwrap_or(u16::MAX)
            .saturating_add(TOAST_BORDER_HEIGHT);
        if height > budget {
            break;
        }
        budget -= height;
        visible.push((toast, rows, Rect { height, ..rect }));
    }

    let mut y = area.y + TOAST_MARGIN_TOP;
    for (toast, rows, rect) in visible.into_iter().rev() {
        let toast_area = Rect { y, ..rect };
        let color = toast_color(toast.level);

        frame.render_widget(Clear, toast_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .title(format!(" {} ", toast.level.label()))
            .title_bottom(" x ");

        let lines: Vec<Line> = rows.into_iter().map(|row| Line::from(format!(" {row}"))).collect();
        let body = Paragraph::new(lines)
            .style(Style::default().fg(color))
            .block(block);

        frame.render_widget(body, toast_area);
        y += toast_area.height;
    }
}

/// Right-anchored box wide enough for the message, within the frame.
/// The height is one text row; callers grow it to fit.
fn toast_rect(area: Rect, y: u16, message_len: usize) -> Rect {
    let wanted = u16::try_from(message_len)
        .unwrap_or(u16::MAX)
        .saturating_add(TOAST_CHROME_WIDTH);
    let width = wanted
        .clamp(TOAST_MIN_WIDTH, TOAST_MAX_WIDTH)
        .min(area.width.saturating_sub(TOAST_MARGIN_RIGHT));
    let x = area.right().saturating_sub(width + TOAST_MARGIN_RIGHT).max(area.x);

    Rect {
        x,
        y,
        width,
        height: 1 + TOAST_BORDER_HEIGHT,
    }
}
