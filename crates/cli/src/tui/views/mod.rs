pub mod details;
pub mod features;
pub mod sections;

pub use details::DetailsView;
pub use features::FeaturesView;
pub use sections::SectionsView;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shorten `text` to fit `width` terminal columns, marking the cut with "..."
pub fn truncate(text: &str, width: usize) -> String {
  if text.width() <= width {
    return text.to_string();
  }
  let budget = width.saturating_sub(3);
  let mut used = 0;
  let mut out = String::new();
  for c in text.chars() {
    let w = c.width().unwrap_or(0);
    if used + w > budget {
      break;
    }
    used += w;
    out.push(c);
  }
  if width >= 3 {
    out.push_str("...");
  }
  out
}

/// Break text into lines no wider than `width` columns, honoring embedded newlines
pub fn wrap(text: &str, width: usize) -> Vec<String> {
  let width = width.max(1);
  let mut lines = Vec::new();
  for raw in text.split('\n') {
    let mut line = String::new();
    let mut used = 0;
    for c in raw.chars() {
      let c = if c == '\t' { ' ' } else { c };
      let w = c.width().unwrap_or(0);
      if used + w > width {
        lines.push(std::mem::take(&mut line));
        used = 0;
      }
      used += w;
      line.push(c);
    }
    lines.push(line);
  }
  lines
}
