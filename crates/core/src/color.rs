use serde::Serialize;

pub const DEFAULT_COLOR_SCHEME: &str = "professional";

/// Palette the server applies to a generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
  pub name: &'static str,
  pub primary: &'static str,
  pub secondary: &'static str,
  pub accent: &'static str,
  pub highlight: &'static str,
  pub background: &'static str,
  pub text: &'static str,
  pub border: &'static str,
}

pub const COLOR_SCHEMES: &[ColorScheme] = &[
  ColorScheme {
    name: "professional",
    primary: "#2C3E50",
    secondary: "#34495E",
    accent: "#3498DB",
    highlight: "#ECF0F1",
    background: "#FFFFFF",
    text: "#2C3E50",
    border: "#BDC3C7",
  },
  ColorScheme {
    name: "modern",
    primary: "#34495E",
    secondary: "#5D6D7E",
    accent: "#85929E",
    highlight: "#F8F9F9",
    background: "#FFFFFF",
    text: "#2C3E50",
    border: "#D5DBDB",
  },
  ColorScheme {
    name: "classic",
    primary: "#2E4053",
    secondary: "#566573",
    accent: "#7F8C8D",
    highlight: "#F4F6F6",
    background: "#FFFFFF",
    text: "#2C3E50",
    border: "#BDC3C7",
  },
  ColorScheme {
    name: "elegant",
    primary: "#4A5568",
    secondary: "#718096",
    accent: "#A0AEC0",
    highlight: "#F7FAFC",
    background: "#FFFFFF",
    text: "#2D3748",
    border: "#E2E8F0",
  },
  ColorScheme {
    name: "tech_blue",
    primary: "#00d4ff",
    secondary: "#0099cc",
    accent: "#66e6ff",
    highlight: "#e6f9ff",
    background: "#FFFFFF",
    text: "#003366",
    border: "#b3e6ff",
  },
  ColorScheme {
    name: "cyber_purple",
    primary: "#7c3aed",
    secondary: "#5b21b6",
    accent: "#a855f7",
    highlight: "#f3e8ff",
    background: "#FFFFFF",
    text: "#2e1065",
    border: "#c4b5fd",
  },
  ColorScheme {
    name: "neon_green",
    primary: "#10b981",
    secondary: "#059669",
    accent: "#34d399",
    highlight: "#ecfdf5",
    background: "#FFFFFF",
    text: "#064e3b",
    border: "#6ee7b7",
  },
  ColorScheme {
    name: "sunset_orange",
    primary: "#f59e0b",
    secondary: "#d97706",
    accent: "#fbbf24",
    highlight: "#fffbeb",
    background: "#FFFFFF",
    text: "#78350f",
    border: "#fcd34d",
  },
  ColorScheme {
    name: "ocean_teal",
    primary: "#14b8a6",
    secondary: "#0d9488",
    accent: "#5eead4",
    highlight: "#f0fdfa",
    background: "#FFFFFF",
    text: "#134e4a",
    border: "#99f6e4",
  },
  ColorScheme {
    name: "midnight_black",
    primary: "#1f2937",
    secondary: "#374151",
    accent: "#6b7280",
    highlight: "#f9fafb",
    background: "#FFFFFF",
    text: "#111827",
    border: "#d1d5db",
  },
];

impl ColorScheme {
  pub fn find(name: &str) -> Option<&'static ColorScheme> {
    COLOR_SCHEMES.iter().find(|s| s.name == name)
  }

  /// Name of the scheme after `current`, wrapping around
  pub fn next_name(current: &str) -> &'static str {
    let index = COLOR_SCHEMES.iter().position(|s| s.name == current);
    match index {
      Some(i) => COLOR_SCHEMES[(i + 1) % COLOR_SCHEMES.len()].name,
      None => COLOR_SCHEMES[0].name,
    }
  }

  /// Parse a `#RRGGBB` palette entry
  pub fn rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
      return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
  }
}
