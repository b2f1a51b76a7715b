use crate::domain::{status_text, Phase};
use crate::ui::styles::{border_style, default_style, done_style};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the one-line status under the clock
pub fn render_status_pane(
    f: &mut Frame,
    phase: Phase,
    completed_at: Option<DateTime<Local>>,
    area: Rect,
) {
    let style = if completed_at.is_some() {
        done_style()
    } else {
        default_style()
    };

    let paragraph = Paragraph::new(Span::styled(status_text(phase, completed_at), style))
        .block(Block::default().borders(Borders::ALL).border_style(border_style()));

    f.render_widget(paragraph, area);
}
