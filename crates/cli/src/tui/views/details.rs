use dazzlo_core::{Form, USER_FIELDS};
use ratatui::{
  buffer::Buffer,
  layout::Rect,
  style::Style,
  widgets::{Block, Borders, Widget},
};

use crate::tui::{theme::Theme, views::truncate, widgets::PaletteSwatch};

/// Number of rows in the details pane: user fields, then template and color scheme
pub const DETAIL_ROW_COUNT: usize = USER_FIELDS.len() + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailRow {
  /// Index into `USER_FIELDS`
  User(usize),
  Template,
  ColorScheme,
}

impl DetailRow {
  pub fn from_index(index: usize) -> Self {
    match index {
      i if i < USER_FIELDS.len() => DetailRow::User(i),
      i if i == USER_FIELDS.len() => DetailRow::Template,
      _ => DetailRow::ColorScheme,
    }
  }
}

/// Document details pane state
#[derive(Debug, Default)]
pub struct DetailsState {
  pub selected: usize,
}

impl DetailsState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn row(&self) -> DetailRow {
    DetailRow::from_index(self.selected)
  }

  pub fn select_next(&mut self) {
    self.selected = (self.selected + 1).min(DETAIL_ROW_COUNT - 1);
  }

  pub fn select_prev(&mut self) {
    self.selected = self.selected.saturating_sub(1);
  }

  pub fn select_last(&mut self) {
    self.selected = DETAIL_ROW_COUNT - 1;
  }
}

/// Document details pane widget
pub struct DetailsView<'a> {
  form: &'a Form,
  state: &'a DetailsState,
  focused: bool,
}

impl<'a> DetailsView<'a> {
  pub fn new(form: &'a Form, state: &'a DetailsState, focused: bool) -> Self {
    Self { form, state, focused }
  }

  fn value(&self, row: DetailRow) -> String {
    match row {
      DetailRow::User(i) => {
        let (key, _) = USER_FIELDS[i];
        self.form.user.field(key).unwrap_or_default().replace('\n', " ")
      }
      DetailRow::Template => match self.form.template_id() {
        Some(id) => self
          .form
          .registry()
          .get(id)
          .map(|t| t.name.clone())
          .unwrap_or_else(|| id.to_string()),
        None => "(none, press T)".to_string(),
      },
      DetailRow::ColorScheme => self.form.color_scheme.clone(),
    }
  }

  fn label(row: DetailRow) -> &'static str {
    match row {
      DetailRow::User(i) => USER_FIELDS[i].1,
      DetailRow::Template => "Template",
      DetailRow::ColorScheme => "Color Scheme",
    }
  }
}

impl Widget for DetailsView<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    let border_color = if self.focused { Theme::ACCENT } else { Theme::OVERLAY };
    let block = Block::default()
      .title("DETAILS")
      .title_style(Style::default().fg(Theme::ACCENT).bold())
      .borders(Borders::ALL)
      .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width == 0 || inner.height == 0 {
      return;
    }

    let label_width = USER_FIELDS.iter().map(|(_, l)| l.len()).max().unwrap_or(0) as u16 + 2;
    let visible_height = inner.height as usize;
    let start = if self.state.selected >= visible_height {
      self.state.selected - visible_height + 1
    } else {
      0
    };

    for index in (start..DETAIL_ROW_COUNT).take(visible_height) {
      let y = inner.y + (index - start) as u16;
      let row = DetailRow::from_index(index);
      let is_selected = self.focused && index == self.state.selected;

      let bg = if is_selected { Theme::SURFACE } else { Theme::BG };
      for x in inner.x..inner.x + inner.width {
        buf[(x, y)].set_bg(bg);
      }

      let indicator = if is_selected { "▶ " } else { "  " };
      buf.set_string(inner.x, y, indicator, Style::default().fg(Theme::ACCENT));
      buf.set_string(inner.x + 2, y, Self::label(row), Style::default().fg(Theme::SUBTEXT));

      let value_x = inner.x + 2 + label_width;
      let value_width = inner.width.saturating_sub(2 + label_width) as usize;
      if value_width == 0 {
        continue;
      }

      match row {
        DetailRow::ColorScheme => {
          let name = truncate(&self.value(row), value_width);
          buf.set_string(value_x, y, &name, Style::default().fg(Theme::TEXT));
          let swatch_x = value_x + name.len() as u16 + 1;
          let swatch_width = (inner.x + inner.width).saturating_sub(swatch_x);
          PaletteSwatch::new(&self.form.color_scheme).render(Rect::new(swatch_x, y, swatch_width, 1), buf);
        }
        _ => {
          let value = self.value(row);
          let (text, fg) = if value.is_empty() {
            ("-".to_string(), Theme::MUTED)
          } else {
            (truncate(&value, value_width), Theme::TEXT)
          };
          buf.set_string(value_x, y, &text, Style::default().fg(fg));
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use dazzlo_core::TemplateRegistry;

  #[test]
  fn test_row_mapping() {
    assert_eq!(DetailRow::from_index(0), DetailRow::User(0));
    assert_eq!(DetailRow::from_index(USER_FIELDS.len()), DetailRow::Template);
    assert_eq!(DetailRow::from_index(DETAIL_ROW_COUNT - 1), DetailRow::ColorScheme);
  }

  #[test]
  fn test_selection_bounds() {
    let mut state = DetailsState::new();
    state.select_prev();
    assert_eq!(state.selected, 0);
    for _ in 0..50 {
      state.select_next();
    }
    assert_eq!(state.row(), DetailRow::ColorScheme);
  }

  #[test]
  fn test_render_shows_values() {
    let mut form = Form::new(TemplateRegistry::builtin());
    form.render("lab_report");
    form.user.student_name = "Asha".to_string();
    let state = DetailsState::new();

    let area = Rect::new(0, 0, 60, 16);
    let mut buf = Buffer::empty(area);
    DetailsView::new(&form, &state, true).render(area, &mut buf);

    let text: String = buf.content().iter().map(|c| c.symbol()).collect();
    assert!(text.contains("Student Name"));
    assert!(text.contains("Asha"));
    assert!(text.contains("Laboratory Report"));
    assert!(text.contains("professional"));
  }
}
