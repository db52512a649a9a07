//! Survey form page rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::SUBMIT_ROW;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the survey form card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Survey ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // subtitle
            Constraint::Length(3),             // identity row
            Constraint::Length(3),             // question 1
            Constraint::Length(3),             // question 2
            Constraint::Min(5),                // comments
            Constraint::Length(BUTTON_HEIGHT), // submit button
            Constraint::Length(1),             // help line
        ])
        .margin(1)
        .split(area);

    let subtitle = Paragraph::new("Please fill in all fields")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(subtitle, chunks[0]);

    let form = &app.state.form;

    // Identity fields sit side by side
    let identity_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    draw_field(
        frame,
        identity_chunks[0],
        &form.first_name,
        form.active_field_index == 0,
    );
    draw_field(
        frame,
        identity_chunks[1],
        &form.last_name,
        form.active_field_index == 1,
    );

    draw_field(frame, chunks[2], &form.question1, form.active_field_index == 2);
    draw_field(frame, chunks[3], &form.question2, form.active_field_index == 3);
    draw_field(frame, chunks[4], &form.question3, form.active_field_index == 4);

    draw_submit_button(frame, chunks[5], app);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": pick option  "),
        Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[6]);
}

/// Draw the submit row, centered and greyed out while a submission runs
fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let label = if app.state.is_submitting {
        "Submitting..."
    } else {
        "Submit answers"
    };

    let width = (label.len() as u16 + 6).min(area.width);
    let button_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y,
        width,
        height: area.height.min(BUTTON_HEIGHT),
    };

    render_button(
        frame,
        button_area,
        label,
        app.state.form.active_field_index == SUBMIT_ROW,
        app.state.submit_enabled(),
    );
}
