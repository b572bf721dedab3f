//! Dashboard color palette and styles.
//!
//! Palette carried over from the original CardioScan dashboard: red primary,
//! dark background, green/amber/red risk colors.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::RiskCategory;

/// CardioScan theme color palette.
pub struct CardioTheme;

impl CardioTheme {
    // === Primary Colors ===

    /// Signal red - Primary color
    pub const PRIMARY: Color = Color::Rgb(255, 75, 75); // #FF4B4B

    /// Lighter red for highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(255, 107, 107); // #FF6B6B

    // === Secondary Colors ===

    /// Slate blue - Secondary (professionalism)
    pub const SECONDARY_LIGHT: Color = Color::Rgb(148, 163, 184); // #94A3B8

    // === Semantic Colors ===

    /// Green - Lower risk
    pub const SUCCESS: Color = Color::Rgb(0, 255, 0); // #00FF00

    /// Amber - Moderate risk
    pub const WARNING: Color = Color::Rgb(255, 165, 0); // #FFA500

    /// Red - High risk
    pub const DANGER: Color = Color::Rgb(255, 75, 75); // #FF4B4B

    /// Blue - Info
    pub const INFO: Color = Color::Rgb(59, 130, 246); // #3B82F6

    // === Background Colors ===

    /// Near-black with blue tint
    pub const BG_DARK: Color = Color::Rgb(14, 17, 23); // #0E1117

    // === Text Colors ===

    /// Primary text (white)
    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #F8FAFC

    /// Secondary text (gray)
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Muted text
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    // === Preset Styles ===

    /// Style for titles
    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for subtitles
    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text
    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    /// Style for secondary text
    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for muted text
    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    /// Style for success messages
    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    /// Style for danger/error messages
    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    /// Style for info messages
    #[must_use]
    pub fn info() -> Style {
        Style::default().fg(Self::INFO)
    }

    /// Style for the selected tab
    #[must_use]
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for focused elements
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::SECONDARY_LIGHT)
    }

    /// Style for focused borders
    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Style for key hints
    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Get risk category style
    #[must_use]
    pub fn risk_category(category: RiskCategory) -> Style {
        let (r, g, b) = category.color();
        Style::default().fg(Color::Rgb(r, g, b))
    }

    /// Get gauge style for a risk score (same thresholds as categorization)
    #[must_use]
    pub fn risk_gauge(score: f64) -> Style {
        Self::risk_category(RiskCategory::from_score(score))
    }
}
