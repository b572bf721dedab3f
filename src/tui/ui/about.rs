//! About view: static educational content on LVNC.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::CardioTheme;

/// About tab state (scroll position only).
#[derive(Debug, Default)]
pub struct AboutState {
    pub scroll: u16,
}

impl AboutState {
    /// Upper bound on the scroll offset, roughly the content height.
    const MAX_SCROLL: u16 = 40;

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(Self::MAX_SCROLL);
    }
}

/// Render the about tab.
pub fn render_about(f: &mut Frame, area: Rect, state: &AboutState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_about_header(f, chunks[0]);
    render_about_content(f, chunks[1], state);
    render_about_footer(f, chunks[2]);
}

fn render_about_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", CardioTheme::text()),
        Span::styled(
            "About Left Ventricular Non-Compaction (LVNC)",
            CardioTheme::title(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(CardioTheme::border()),
    );

    f.render_widget(header, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, CardioTheme::subtitle()))
}

fn bullet(text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", CardioTheme::text_muted()),
        Span::styled(text, CardioTheme::text()),
    ])
}

fn body(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, CardioTheme::text_secondary()))
}

fn render_about_content(f: &mut Frame, area: Rect, state: &AboutState) {
    let lines = vec![
        heading("What is LVNC?"),
        body("Left Ventricular Non-Compaction Cardiomyopathy (LVNC) is a rare genetic"),
        body("heart disorder characterized by:"),
        bullet("Deep trabeculations in the left ventricular wall"),
        bullet("Spongy appearance of the heart muscle"),
        bullet("Arrested development of the ventricular wall during fetal growth"),
        Line::from(""),
        heading("Prevalence"),
        bullet("0.26% - 3.7% in patients referred for echocardiography"),
        bullet("Third most diagnosed cardiomyopathy"),
        bullet("35-47% mortality rate in Sub-Saharan Africa over a decade"),
        Line::from(""),
        heading("Clinical Features"),
        body("Symptoms range from:"),
        bullet("Asymptomatic"),
        bullet("Heart failure"),
        bullet("Arrhythmias"),
        bullet("Cardiac arrest"),
        bullet("Thromboembolism"),
        Line::from(""),
        heading("Diagnostic Criteria"),
        body("Traditional methods:"),
        bullet("2:1 non-compacted to compacted myocardial ratio"),
        bullet("Requires expert interpretation"),
        bullet("Cardiac MRI (expensive, limited access)"),
        bullet("Transthoracic echocardiography"),
        Line::from(""),
        heading("Risk Stratification in This System"),
        body("Parameter                 Clinical Significance                      Weight"),
        body("Ejection Fraction (EF)    EF <40% indicates systolic dysfunction     40%"),
        body("Trabeculation Density     Higher values mean complex trabeculation   35%"),
        body("Volume Metrics            Delta volume reflects contractility        25%"),
        Line::from(""),
        heading("Risk Categories"),
        bullet("< 0.50: Lower risk - Routine monitoring"),
        bullet("0.50-0.60: Moderate risk - Follow-up with cardiologist"),
        bullet("> 0.60: High risk - Urgent evaluation needed"),
        Line::from(""),
        heading("About the Device Concept"),
        body("CardioScan is designed as a frugal alternative to expensive cardiac MRI"),
        body("and conventional echocardiography, particularly for:"),
        bullet("Low-resource settings in Sub-Saharan Africa"),
        bullet("Point-of-care screening"),
        bullet("Reducing diagnostic disparities"),
        bullet("Improving early detection"),
    ];

    let content = Paragraph::new(lines)
        .scroll((state.scroll, 0))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(CardioTheme::border()),
        );

    f.render_widget(content, area);
}

fn render_about_footer(f: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled("[↑↓] ", CardioTheme::key_hint()),
        Span::styled("Scroll ", CardioTheme::key_desc()),
        Span::styled("[←→] ", CardioTheme::key_hint()),
        Span::styled("Switch Tab ", CardioTheme::key_desc()),
        Span::styled("[Q] ", CardioTheme::key_hint()),
        Span::styled("Quit", CardioTheme::key_desc()),
    ]);

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(CardioTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_clamps() {
        let mut state = AboutState::default();
        state.scroll_up();
        assert_eq!(state.scroll, 0);

        for _ in 0..100 {
            state.scroll_down();
        }
        assert_eq!(state.scroll, AboutState::MAX_SCROLL);
    }
}
