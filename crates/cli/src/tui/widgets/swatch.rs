use dazzlo_core::ColorScheme;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::tui::theme::Theme;

/// A strip of color blocks previewing a document color scheme
/// Example: ██████ (primary, secondary, accent, highlight, text, border)
pub struct PaletteSwatch<'a> {
  name: &'a str,
  block_width: u16,
}

impl<'a> PaletteSwatch<'a> {
  pub fn new(name: &'a str) -> Self {
    Self { name, block_width: 1 }
  }

  pub fn block_width(mut self, width: u16) -> Self {
    self.block_width = width.max(1);
    self
  }
}

impl Widget for PaletteSwatch<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
      return;
    }

    let Some(scheme) = ColorScheme::find(self.name) else {
      buf.set_string(area.x, area.y, "?", Style::default().fg(Theme::WARNING));
      return;
    };

    let colors = [
      scheme.primary,
      scheme.secondary,
      scheme.accent,
      scheme.highlight,
      scheme.text,
      scheme.border,
    ];
    let block = "█".repeat(self.block_width as usize);
    let mut x = area.x;
    for hex in colors {
      if x + self.block_width > area.x + area.width {
        break;
      }
      buf.set_string(x, area.y, &block, Style::default().fg(Theme::palette_color(hex)));
      x += self.block_width;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use ratatui::style::Color;

  #[test]
  fn test_swatch_colors() {
    let area = Rect::new(0, 0, 12, 1);
    let mut buf = Buffer::empty(area);
    PaletteSwatch::new("tech_blue").block_width(2).render(area, &mut buf);
    assert_eq!(buf[(0, 0)].fg, Color::Rgb(0x00, 0xd4, 0xff));
    assert_eq!(buf[(2, 0)].fg, Color::Rgb(0x00, 0x99, 0xcc));
    assert_eq!(buf[(0, 0)].symbol(), "█");
  }

  #[test]
  fn test_unknown_scheme() {
    let area = Rect::new(0, 0, 6, 1);
    let mut buf = Buffer::empty(area);
    PaletteSwatch::new("nope").render(area, &mut buf);
    assert_eq!(buf[(0, 0)].symbol(), "?");
  }
}
