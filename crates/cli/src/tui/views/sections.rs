use dazzlo_core::{Feature, Form, Section};
use ratatui::{
  buffer::Buffer,
  layout::{Constraint, Direction, Layout, Rect},
  style::Style,
  widgets::{Block, Borders, Widget},
};

use crate::tui::{
  theme::Theme,
  views::{truncate, wrap},
};

/// Section list state
#[derive(Debug, Default)]
pub struct SectionsState {
  pub selected: usize,
}

impl SectionsState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn select_next(&mut self, count: usize) {
    if count == 0 {
      return;
    }
    self.selected = (self.selected + 1).min(count - 1);
  }

  pub fn select_prev(&mut self) {
    self.selected = self.selected.saturating_sub(1);
  }

  pub fn select_last(&mut self, count: usize) {
    self.selected = count.saturating_sub(1);
  }
}

/// Counts of (tables, charts, code blocks) attached to a section
pub fn feature_counts(section: &Section) -> (usize, usize, usize) {
  section
    .features
    .iter()
    .fold((0, 0, 0), |(t, c, k), feature| match feature {
      Feature::Table(_) => (t + 1, c, k),
      Feature::Chart(_) => (t, c + 1, k),
      Feature::Code(_) => (t, c, k + 1),
    })
}

/// Section list with a content preview of the selected section
pub struct SectionsView<'a> {
  form: &'a Form,
  state: &'a SectionsState,
  focused: bool,
}

impl<'a> SectionsView<'a> {
  pub fn new(form: &'a Form, state: &'a SectionsState, focused: bool) -> Self {
    Self { form, state, focused }
  }
}

impl Widget for SectionsView<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    let list_height = (self.form.sections().len() as u16 + 2).min(area.height / 2 + 1).max(3);
    let chunks = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Length(list_height), Constraint::Min(3)])
      .split(area);

    self.render_list(chunks[0], buf);
    self.render_content(chunks[1], buf);
  }
}

impl SectionsView<'_> {
  fn render_list(&self, area: Rect, buf: &mut Buffer) {
    let sections = self.form.sections();
    let border_color = if self.focused { Theme::ACCENT } else { Theme::OVERLAY };
    let block = Block::default()
      .title(format!("SECTIONS ({})", sections.len()))
      .title_style(Style::default().fg(Theme::ACCENT).bold())
      .borders(Borders::ALL)
      .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width == 0 || inner.height == 0 {
      return;
    }

    if sections.is_empty() {
      let msg = if self.form.template_id().is_some() {
        "Template has no sections"
      } else {
        "Press T to choose a template"
      };
      buf.set_string(inner.x, inner.y, msg, Style::default().fg(Theme::MUTED));
      return;
    }

    let visible_height = inner.height as usize;
    let start = if self.state.selected >= visible_height {
      self.state.selected - visible_height + 1
    } else {
      0
    };

    for (i, section) in sections.iter().enumerate().skip(start).take(visible_height) {
      let y = inner.y + (i - start) as u16;
      let is_selected = i == self.state.selected;

      let bg = if is_selected { Theme::SURFACE } else { Theme::BG };
      let fg = if is_selected { Theme::TEXT } else { Theme::SUBTEXT };
      for x in inner.x..inner.x + inner.width {
        buf[(x, y)].set_bg(bg);
      }

      let indicator = if is_selected { "▶ " } else { "  " };
      buf.set_string(inner.x, y, indicator, Style::default().fg(Theme::ACCENT));

      let (tables, charts, code) = feature_counts(section);
      let counts = format!("{}T {}C {}K", tables, charts, code);
      let name_width = inner.width.saturating_sub(counts.len() as u16 + 4) as usize;
      buf.set_string(
        inner.x + 2,
        y,
        truncate(&section.display_name(), name_width),
        Style::default().fg(fg),
      );

      let counts_fg = if section.features.is_empty() { Theme::MUTED } else { Theme::INFO };
      let counts_x = inner.x + inner.width.saturating_sub(counts.len() as u16 + 1);
      buf.set_string(counts_x, y, &counts, Style::default().fg(counts_fg));
    }
  }

  fn render_content(&self, area: Rect, buf: &mut Buffer) {
    let section = self.form.sections().get(self.state.selected);
    let title = match section {
      Some(s) => format!("CONTENT: {}", s.display_name()),
      None => "CONTENT".to_string(),
    };
    let block = Block::default()
      .title(title)
      .title_style(Style::default().fg(Theme::ACCENT).bold())
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Theme::OVERLAY));

    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width == 0 || inner.height == 0 {
      return;
    }

    let Some(section) = section else {
      return;
    };
    if section.content.is_empty() {
      let hint = if self.focused { "Press Enter to write this section" } else { "(empty)" };
      buf.set_string(inner.x, inner.y, hint, Style::default().fg(Theme::MUTED));
      return;
    }

    for (i, line) in wrap(&section.content, inner.width as usize)
      .iter()
      .take(inner.height as usize)
      .enumerate()
    {
      buf.set_string(inner.x, inner.y + i as u16, line, Style::default().fg(Theme::TEXT));
    }
  }
}
