//! Toast overlay component
//!
//! Toasts stack below the top-right corner and disappear when their
//! display interval runs out (the event loop drives expiry).

use crate::notify::{Severity, Toast};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// Render all live toasts, newest at the bottom of the stack
pub fn draw_toasts(frame: &mut Frame, toasts: &[Toast]) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    if width < 10 {
        return;
    }

    let x = area.right().saturating_sub(width + 1);
    let mut y = area.y + 1;
    for toast in toasts {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        draw_toast(
            frame,
            Rect {
                x,
                y,
                width,
                height: TOAST_HEIGHT,
            },
            toast,
        );
        y += TOAST_HEIGHT + 1;
    }
}

fn draw_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let color = match toast.severity {
        Severity::Default => Color::Green,
        Severity::Destructive => Color::Red,
    };

    // Clear the area behind the toast
    frame.render_widget(Clear, area);

    let content = vec![
        Line::from(Span::styled(
            toast.title.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(toast.description.clone()),
    ];

    let widget = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(widget, area);
}
