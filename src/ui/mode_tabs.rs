use crate::domain::{mode_tab_label, Mode};
use crate::ui::styles::{border_style, selected_style, tab_style};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the three mode selectors, highlighting the current one
pub fn render_mode_tabs(f: &mut Frame, current: Mode, area: Rect) {
    let titles: Vec<Line> = Mode::all()
        .iter()
        .map(|mode| Line::raw(mode_tab_label(*mode)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(selected_index(current))
        .style(tab_style())
        .highlight_style(selected_style())
        .divider("│")
        .block(Block::default().borders(Borders::ALL).border_style(border_style()));

    f.render_widget(tabs, area);
}

/// Position of `mode` among the tabs
pub fn selected_index(mode: Mode) -> usize {
    Mode::all()
        .iter()
        .position(|m| *m == mode)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_index() {
        assert_eq!(selected_index(Mode::Pomodoro), 0);
        assert_eq!(selected_index(Mode::ShortBreak), 1);
        assert_eq!(selected_index(Mode::LongBreak), 2);
    }
}
