//! UI module for rendering the TUI

mod components;
mod forms;

use crate::app::App;
use ratatui::{layout::Rect, Frame};

/// Widest the form card gets on large terminals
const CARD_MAX_WIDTH: u16 = 72;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    forms::draw(frame, card_area(area), app);

    // Toasts render last so they overlay the form
    components::draw_toasts(frame, app.state.toasts.visible());
}

/// Center the form card horizontally, capped at a readable width
fn card_area(area: Rect) -> Rect {
    let width = area.width.min(CARD_MAX_WIDTH);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
