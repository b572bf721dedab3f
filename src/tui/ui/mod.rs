//! UI module: View components for the TUI.

pub mod about;
pub mod analysis;
pub mod history;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::tui::styles::CardioTheme;

/// Tab titles in display order.
pub const TAB_TITLES: [&str; 3] = ["Patient Analysis", "Patient History", "About LVNC"];

/// Render the top tab bar.
pub fn render_tab_bar(f: &mut Frame, area: Rect, selected: usize) {
    let tabs = Tabs::new(TAB_TITLES.to_vec())
        .select(selected)
        .style(CardioTheme::text_secondary())
        .highlight_style(CardioTheme::selected())
        .divider(Span::styled("│", CardioTheme::text_muted()))
        .block(
            Block::default()
                .title(Span::styled(" CardioScan LVNC Detection System ", CardioTheme::title()))
                .borders(Borders::BOTTOM)
                .border_style(CardioTheme::border()),
        );

    f.render_widget(tabs, area);
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "CardioScan LVNC Detection System | Version 1.0",
            CardioTheme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            "This tool is for research and educational purposes. \
             Always consult with healthcare professionals for clinical decisions.",
            CardioTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(CardioTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
