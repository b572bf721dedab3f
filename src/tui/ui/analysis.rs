//! Patient analysis view: measurement entry form and scan results.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::domain::{CardiacMeasurement, RiskAssessment};
use crate::tui::styles::CardioTheme;

/// Static clinical importance weights shown in the contribution chart.
const PARAMETER_IMPORTANCE: [(&str, u64); 5] = [
    ("EF", 40),
    ("Trab", 35),
    ("Fill", 10),
    ("Empty", 8),
    ("dVol", 7),
];

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub value: String,
    pub min: f64,
    pub max: f64,
}

/// Measurement entry form state
pub struct MeasurementFormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for MeasurementFormState {
    fn default() -> Self {
        Self {
            fields: vec![
                FormField {
                    label: "End-Diastolic Volume",
                    hint: "mL (50-400, normal 100-160)",
                    value: String::new(),
                    min: 50.0,
                    max: 400.0,
                },
                FormField {
                    label: "End-Systolic Volume",
                    hint: "mL (20-300, normal 40-70)",
                    value: String::new(),
                    min: 20.0,
                    max: 300.0,
                },
                FormField {
                    label: "Ejection Fraction",
                    hint: "% (10-80, normal >50)",
                    value: String::new(),
                    min: 10.0,
                    max: 80.0,
                },
                FormField {
                    label: "Filling Rate",
                    hint: "mL/s (50-500)",
                    value: String::new(),
                    min: 50.0,
                    max: 500.0,
                },
                FormField {
                    label: "Emptying Rate",
                    hint: "mL/s (50-500)",
                    value: String::new(),
                    min: 50.0,
                    max: 500.0,
                },
                FormField {
                    label: "Trabeculation Density",
                    hint: "index (-5 to 15)",
                    value: String::new(),
                    min: -5.0,
                    max: 15.0,
                },
            ],
            selected_field: 0,
            error_message: None,
        }
    }
}

impl MeasurementFormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Add a character to the current field
    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.fields[self.selected_field].value.push(c);
            self.error_message = None;
        }
    }

    /// Delete the last character
    pub fn delete_char(&mut self) {
        self.fields[self.selected_field].value.pop();
    }

    /// Clear the current field
    pub fn clear_field(&mut self) {
        self.fields[self.selected_field].value.clear();
    }

    /// Validate and convert to a CardiacMeasurement
    pub fn to_measurement(&self) -> Result<CardiacMeasurement, String> {
        let mut values = Vec::with_capacity(6);

        for field in self.fields.iter() {
            let value: f64 = field
                .value
                .parse()
                .map_err(|_| format!("{}: Invalid number", field.label))?;

            if value < field.min || value > field.max {
                return Err(format!(
                    "{}: Value must be between {} and {}",
                    field.label, field.min, field.max
                ));
            }

            values.push(value);
        }

        CardiacMeasurement::from_vec(&values)
    }

    /// Load the default demo values (typical lower-risk patient)
    pub fn load_sample_data(&mut self) {
        let sample = [
            "150", // edv (mL)
            "60",  // esv (mL)
            "55",  // ef (%)
            "200", // filling_rate (mL/s)
            "180", // emptying_rate (mL/s)
            "0.5", // trabeculation_density
        ];
        for (i, val) in sample.iter().enumerate() {
            self.fields[i].value = val.to_string();
        }
    }
}

/// A completed scan: the entered measurement and its assessment.
#[derive(Debug, Clone, Copy)]
pub struct ScanResult {
    pub measurement: CardiacMeasurement,
    pub assessment: RiskAssessment,
}

/// Analysis tab state: the entry form and, once scored, the result.
#[derive(Default)]
pub struct AnalysisState {
    pub form: MeasurementFormState,
    pub result: Option<ScanResult>,
}

/// Render the analysis tab: the result if a scan completed, otherwise the form.
pub fn render_analysis(f: &mut Frame, area: Rect, state: &AnalysisState, scan_count: usize) {
    match &state.result {
        Some(result) => render_result(f, area, result, scan_count),
        None => render_form(f, area, &state.form),
    }
}

fn render_form(f: &mut Frame, area: Rect, state: &MeasurementFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", CardioTheme::text()),
        Span::styled("Enter Patient Cardiac Parameters", CardioTheme::title()),
        Span::styled(
            " │ Echocardiographic Features",
            CardioTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(CardioTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &MeasurementFormState) {
    // Three parameter groups, two fields each, matching the clinical grouping.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .margin(1)
        .split(area);

    let groups = [
        "Volume Measurements",
        "Functional Parameters",
        "Morphological Features",
    ];

    for (col, title) in groups.iter().enumerate() {
        let offset = col * 2;
        render_field_group(
            f,
            columns[col],
            title,
            &state.fields[offset..offset + 2],
            offset,
            state.selected_field,
        );
    }
}

fn render_field_group(
    f: &mut Frame,
    area: Rect,
    title: &str,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let group = Block::default()
        .title(Span::styled(format!(" {title} "), CardioTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(CardioTheme::border());

    let inner = group.inner(area);
    f.render_widget(group, area);

    let field_height = 3;
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let border_style = if is_selected {
            CardioTheme::border_focused()
        } else {
            CardioTheme::border()
        };

        let title_style = if is_selected {
            CardioTheme::focused()
        } else {
            CardioTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value_display = if field.value.is_empty() {
            Span::styled(field.hint, CardioTheme::text_muted())
        } else {
            Span::styled(&field.value, CardioTheme::text())
        };

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            value_display,
            if is_selected {
                Span::styled("▌", CardioTheme::focused())
            } else {
                Span::raw("")
            },
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &MeasurementFormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", CardioTheme::danger()),
            Span::styled(err.clone(), CardioTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", CardioTheme::key_hint()),
            Span::styled("Navigate ", CardioTheme::key_desc()),
            Span::styled("[Enter] ", CardioTheme::key_hint()),
            Span::styled("Start Cardiac Scan ", CardioTheme::key_desc()),
            Span::styled("[S] ", CardioTheme::key_hint()),
            Span::styled("Sample Data ", CardioTheme::key_desc()),
            Span::styled("[←→] ", CardioTheme::key_hint()),
            Span::styled("Switch Tab", CardioTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(CardioTheme::border()),
    );

    f.render_widget(footer, area);
}

fn render_result(f: &mut Frame, area: Rect, result: &ScanResult, scan_count: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_result_header(f, chunks[0], scan_count);
    render_result_content(f, chunks[1], result);
    render_result_footer(f, chunks[2]);
}

fn render_result_header(f: &mut Frame, area: Rect, scan_count: usize) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", CardioTheme::text()),
        Span::styled("Analysis Results", CardioTheme::title()),
        Span::styled(
            format!(" │ Scan {scan_count} this session"),
            CardioTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(CardioTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_result_content(f: &mut Frame, area: Rect, result: &ScanResult) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .margin(1)
        .split(area);

    render_risk_panel(f, columns[0], result);
    render_importance_chart(f, columns[1]);
}

fn render_risk_panel(f: &mut Frame, area: Rect, result: &ScanResult) {
    let assessment = &result.assessment;

    let block = Block::default()
        .title(Span::styled(" LVNC Risk Assessment ", CardioTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(CardioTheme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Category
            Constraint::Length(3), // Score gauge
            Constraint::Length(3), // Recommendation
            Constraint::Min(0),    // Detailed metrics
        ])
        .margin(1)
        .split(inner);

    // Risk category (big display)
    let category_style = CardioTheme::risk_category(assessment.category);
    let category_display = Paragraph::new(Line::from(Span::styled(
        assessment.category.to_string(),
        category_style.add_modifier(ratatui::style::Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(category_display, chunks[0]);

    // Risk score gauge
    let score_gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" LVNC Risk Score ", CardioTheme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(CardioTheme::border()),
        )
        .gauge_style(CardioTheme::risk_gauge(assessment.risk_score))
        .percent((assessment.risk_score.clamp(0.0, 1.0) * 100.0) as u16)
        .label(format!("{:.2}", assessment.risk_score));
    f.render_widget(score_gauge, chunks[1]);

    // Recommendation
    let recommendation = Paragraph::new(Line::from(Span::styled(
        assessment.recommendation(),
        CardioTheme::info(),
    )))
    .wrap(Wrap { trim: true });
    f.render_widget(recommendation, chunks[2]);

    render_detailed_metrics(f, chunks[3], result);
}

fn render_detailed_metrics(f: &mut Frame, area: Rect, result: &ScanResult) {
    let m = &result.measurement;
    let a = &result.assessment;

    let lines = vec![
        Line::from(""),
        metric_line("EDV", format!("{:.1} mL", m.edv), Some(m.edv_normal())),
        metric_line("ESV", format!("{:.1} mL", m.esv), Some(m.esv_normal())),
        metric_line("EF", format!("{:.1} %", m.ef), Some(m.ef_normal())),
        metric_line("Delta Volume", format!("{:.1} mL", a.delta_volume), None),
        metric_line(
            "Trab. Density",
            format!("{:.2}", m.trabeculation_density),
            None,
        ),
        metric_line(
            "Irregularity Index",
            format!("{:.4}", a.irregularity_index),
            None,
        ),
    ];

    let metrics = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                " Detailed Cardiac Metrics ",
                CardioTheme::text_secondary(),
            ))
            .borders(Borders::TOP)
            .border_style(CardioTheme::border()),
    );

    f.render_widget(metrics, area);
}

fn metric_line(label: &str, value: String, normal: Option<bool>) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("  {label}: "), CardioTheme::text_secondary()),
        Span::styled(value, CardioTheme::text()),
    ];

    match normal {
        Some(true) => spans.push(Span::styled("  Normal", CardioTheme::success())),
        Some(false) => spans.push(Span::styled("  Abnormal", CardioTheme::danger())),
        None => {}
    }

    Line::from(spans)
}

fn render_importance_chart(f: &mut Frame, area: Rect) {
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(Span::styled(
                    " Parameter Contribution to Risk Assessment ",
                    CardioTheme::subtitle(),
                ))
                .borders(Borders::ALL)
                .border_style(CardioTheme::border()),
        )
        .data(PARAMETER_IMPORTANCE.as_slice())
        .bar_width(7)
        .bar_gap(1)
        .bar_style(CardioTheme::danger())
        .value_style(CardioTheme::title())
        .label_style(CardioTheme::text_secondary());

    f.render_widget(chart, area);
}

fn render_result_footer(f: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled("[Esc] ", CardioTheme::key_hint()),
        Span::styled("Edit Measurements ", CardioTheme::key_desc()),
        Span::styled("[N] ", CardioTheme::key_hint()),
        Span::styled("New Scan ", CardioTheme::key_desc()),
        Span::styled("[←→] ", CardioTheme::key_hint()),
        Span::styled("Switch Tab", CardioTheme::key_desc()),
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
    fn test_form_navigation_wraps() {
        let mut form = MeasurementFormState::default();
        assert_eq!(form.selected_field, 0);

        form.prev_field();
        assert_eq!(form.selected_field, 5);

        form.next_field();
        assert_eq!(form.selected_field, 0);
    }

    #[test]
    fn test_input_filters_non_numeric() {
        let mut form = MeasurementFormState::default();
        form.input_char('1');
        form.input_char('x');
        form.input_char('.');
        form.input_char('5');
        assert_eq!(form.fields[0].value, "1.5");
    }

    #[test]
    fn test_empty_form_does_not_parse() {
        let form = MeasurementFormState::default();
        let err = form.to_measurement().expect_err("Should fail");
        assert!(err.contains("Invalid number"));
    }

    #[test]
    fn test_sample_data_parses() {
        let mut form = MeasurementFormState::default();
        form.load_sample_data();

        let m = form.to_measurement().expect("Sample should parse");
        assert!((m.edv - 150.0).abs() < f64::EPSILON);
        assert!((m.trabeculation_density - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_field_rejected() {
        let mut form = MeasurementFormState::default();
        form.load_sample_data();
        form.fields[2].value = "95".to_string(); // EF above 80

        let err = form.to_measurement().expect_err("Should fail");
        assert!(err.contains("Ejection Fraction"));
    }

    #[test]
    fn test_importance_weights_sum_to_hundred() {
        let total: u64 = PARAMETER_IMPORTANCE.iter().map(|(_, w)| w).sum();
        assert_eq!(total, 100);
    }
}
