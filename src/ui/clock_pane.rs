use crate::domain::{clock_fields, progress_ratio, Phase, TimerState};
use crate::ui::styles::{border_style, clock_style, gauge_style, title_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

const GLYPH_HEIGHT: usize = 5;

/// 5-row block font for the clock
fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT] {
    match c {
        '0' => ["█████", "█   █", "█   █", "█   █", "█████"],
        '1' => ["   █ ", "  ██ ", "   █ ", "   █ ", "  ███"],
        '2' => ["█████", "    █", "█████", "█    ", "█████"],
        '3' => ["█████", "    █", " ████", "    █", "█████"],
        '4' => ["█   █", "█   █", "█████", "    █", "    █"],
        '5' => ["█████", "█    ", "█████", "    █", "█████"],
        '6' => ["█████", "█    ", "█████", "█   █", "█████"],
        '7' => ["█████", "    █", "   █ ", "  █  ", "  █  "],
        '8' => ["█████", "█   █", "█████", "█   █", "█████"],
        '9' => ["█████", "█   █", "█████", "    █", "█████"],
        ':' => ["   ", " █ ", "   ", " █ ", "   "],
        _ => ["     "; GLYPH_HEIGHT],
    }
}

/// Render "MM:SS" as rows of block glyphs
pub fn big_text(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Render the countdown pane: big clock plus a progress gauge
pub fn render_clock_pane(f: &mut Frame, state: &TimerState, phase: Phase, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(format!(" {} ", state.mode.name()), title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // Gauge
        ])
        .split(inner);

    let (minutes, seconds) = clock_fields(state.remaining_secs);
    let text = format!("{}:{}", minutes, seconds);

    // Fall back to plain digits when the pane is too short for the block font
    let lines: Vec<Line> = if chunks[0].height as usize >= GLYPH_HEIGHT {
        let padding = (chunks[0].height as usize - GLYPH_HEIGHT) / 2;
        let mut lines = vec![Line::raw(""); padding];
        lines.extend(
            big_text(&text)
                .into_iter()
                .map(|row| Line::styled(row, clock_style(phase))),
        );
        lines
    } else {
        vec![Line::styled(text, clock_style(phase))]
    };

    let clock = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(clock, chunks[0]);

    let ratio = progress_ratio(state).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));
    f.render_widget(gauge, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_text_shape() {
        let rows = big_text("25:00");
        assert_eq!(rows.len(), GLYPH_HEIGHT);
        // Four 5-wide digits, one 3-wide colon, four separators
        for row in &rows {
            assert_eq!(row.chars().count(), 4 * 5 + 3 + 4);
        }
    }

    #[test]
    fn test_glyphs_have_uniform_rows() {
        for c in "0123456789:".chars() {
            let rows = glyph(c);
            let width = rows[0].chars().count();
            assert!(rows.iter().all(|r| r.chars().count() == width), "glyph {}", c);
        }
    }
}
