use dazzlo_core::{ChartType, CodeLanguage, ColorScheme};
use ratatui::style::Color;

/// Catppuccin-inspired theme colors
pub struct Theme;

impl Theme {
  // Base colors
  pub const BG: Color = Color::Rgb(30, 30, 46); // Base
  pub const SURFACE: Color = Color::Rgb(49, 50, 68); // Surface0
  pub const OVERLAY: Color = Color::Rgb(69, 71, 90); // Surface1
  pub const TEXT: Color = Color::Rgb(205, 214, 244); // Text
  pub const SUBTEXT: Color = Color::Rgb(166, 173, 200); // Subtext0
  pub const MUTED: Color = Color::Rgb(108, 112, 134); // Overlay1

  // Accent colors
  pub const ACCENT: Color = Color::Rgb(137, 180, 250); // Blue
  pub const SUCCESS: Color = Color::Rgb(166, 227, 161); // Green
  pub const WARNING: Color = Color::Rgb(249, 226, 175); // Yellow
  pub const ERROR: Color = Color::Rgb(243, 139, 168); // Red
  pub const INFO: Color = Color::Rgb(148, 226, 213); // Teal

  // Feature colors
  pub const TABLE: Color = Color::Rgb(148, 226, 213); // Teal
  pub const CHART: Color = Color::Rgb(203, 166, 247); // Mauve
  pub const CODE: Color = Color::Rgb(250, 179, 135); // Peach

  /// Terminal color for a `#RRGGBB` palette entry
  pub fn palette_color(hex: &str) -> Color {
    match ColorScheme::rgb(hex) {
      Some((r, g, b)) => Color::Rgb(r, g, b),
      None => Self::TEXT,
    }
  }

  /// Accent color of a named document color scheme
  pub fn scheme_accent(name: &str) -> Color {
    ColorScheme::find(name)
      .map(|s| Self::palette_color(s.primary))
      .unwrap_or(Self::MUTED)
  }

  pub fn chart_color(chart_type: ChartType) -> Color {
    match chart_type {
      ChartType::Bar => Self::ACCENT,
      ChartType::Pie => Self::CHART,
      ChartType::Line => Self::SUCCESS,
    }
  }

  /// Get color for language type
  pub fn language_color(language: CodeLanguage) -> Color {
    match language {
      CodeLanguage::Python => Color::Rgb(249, 226, 175), // Yellow
      CodeLanguage::JavaScript => Color::Rgb(249, 226, 175),
      CodeLanguage::Java => Color::Rgb(250, 179, 135), // Peach
      CodeLanguage::Cpp => Color::Rgb(137, 180, 250),  // Blue
      CodeLanguage::Html => Color::Rgb(243, 139, 168), // Red
      CodeLanguage::Css => Color::Rgb(203, 166, 247),  // Mauve
      CodeLanguage::Sql => Color::Rgb(148, 226, 213),  // Teal
      CodeLanguage::Text => Self::TEXT,
    }
  }
}
