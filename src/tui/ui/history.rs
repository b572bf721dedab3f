//! Patient history view: sample prior-scan table and EF trend chart.
//!
//! All data here is synthetic and regenerated on demand; nothing is stored.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row, Table},
    Frame,
};

use crate::application::HistoryEntry;
use crate::tui::styles::CardioTheme;

/// History tab state.
#[derive(Default)]
pub struct HistoryState {
    pub entries: Option<Vec<HistoryEntry>>,
}

/// Render the history tab.
pub fn render_history(f: &mut Frame, area: Rect, state: &HistoryState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_history_header(f, chunks[0]);
    render_history_content(f, chunks[1], state);
    render_history_footer(f, chunks[2]);
}

fn render_history_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", CardioTheme::text()),
        Span::styled("Patient History & Prior Scans", CardioTheme::title()),
        Span::styled(" │ Sample Data", CardioTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(CardioTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_history_content(f: &mut Frame, area: Rect, state: &HistoryState) {
    let Some(entries) = &state.entries else {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Check patient historical data from previous visits.",
                CardioTheme::text_secondary(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press [G] to generate a sample history.",
                CardioTheme::text_muted(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(CardioTheme::border()),
        );
        f.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .margin(1)
        .split(area);

    render_history_table(f, chunks[0], entries);
    render_ef_trend(f, chunks[1], entries);
}

fn render_history_table(f: &mut Frame, area: Rect, entries: &[HistoryEntry]) {
    let header = Row::new(vec!["Date", "EF (%)", "Risk Score", "Trab."])
        .style(CardioTheme::subtitle());

    let rows: Vec<Row> = entries
        .iter()
        .map(|e| {
            Row::new(vec![
                e.recorded_at.format("%Y-%m-%d").to_string(),
                format!("{:.1}", e.ef),
                format!("{:.2}", e.risk_score),
                format!("{:.2}", e.trabeculation_density),
            ])
            .style(CardioTheme::text())
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(Span::styled(" Prior Scans ", CardioTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(CardioTheme::border()),
    );

    f.render_widget(table, area);
}

fn render_ef_trend(f: &mut Frame, area: Rect, entries: &[HistoryEntry]) {
    let points: Vec<(f64, f64)> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (i as f64, e.ef))
        .collect();

    let dataset = Dataset::default()
        .name("EF (%)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(CardioTheme::focused())
        .data(&points);

    let x_max = (entries.len().saturating_sub(1)) as f64;
    let first = entries.first().map(|e| e.recorded_at.format("%b %Y").to_string());
    let last = entries.last().map(|e| e.recorded_at.format("%b %Y").to_string());

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(Span::styled(
                    " Ejection Fraction Trend Over Time ",
                    CardioTheme::subtitle(),
                ))
                .borders(Borders::ALL)
                .border_style(CardioTheme::border()),
        )
        .x_axis(
            Axis::default()
                .style(CardioTheme::text_muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(first.unwrap_or_default(), CardioTheme::text_secondary()),
                    Span::styled(last.unwrap_or_default(), CardioTheme::text_secondary()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(CardioTheme::text_muted())
                .bounds([40.0, 70.0])
                .labels(vec![
                    Span::styled("40", CardioTheme::text_secondary()),
                    Span::styled("55", CardioTheme::text_secondary()),
                    Span::styled("70", CardioTheme::text_secondary()),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_history_footer(f: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled("[G] ", CardioTheme::key_hint()),
        Span::styled("Generate Sample History ", CardioTheme::key_desc()),
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
