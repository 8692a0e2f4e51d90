use dazzlo_core::{Chart, CodeBlock, Feature, Section, Table};
use ratatui::{
  buffer::Buffer,
  layout::Rect,
  style::{Color, Style},
  widgets::{Block, Borders, Widget},
};

use crate::tui::{
  theme::Theme,
  views::{truncate, wrap},
};

const CELL_WIDTH: usize = 12;

/// An editable slot inside a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureField {
  Title,
  Header(usize),
  Cell(usize, usize),
  Label(usize),
  Value(usize),
  Code,
}

/// Editable slots of a feature in display order
pub fn fields(feature: &Feature) -> Vec<FeatureField> {
  match feature {
    Feature::Table(table) => {
      let columns = table.column_count();
      let mut fields = vec![FeatureField::Title];
      fields.extend((0..columns).map(FeatureField::Header));
      for row in 0..table.row_count() {
        fields.extend((0..columns).map(|c| FeatureField::Cell(row, c)));
      }
      fields
    }
    Feature::Chart(chart) => {
      let mut fields = vec![FeatureField::Title];
      for i in 0..chart.point_count() {
        fields.push(FeatureField::Label(i));
        fields.push(FeatureField::Value(i));
      }
      fields
    }
    Feature::Code(_) => vec![FeatureField::Code],
  }
}

/// Current text of a slot; empty when the slot does not exist
pub fn field_value(feature: &Feature, field: FeatureField) -> String {
  let value = match (feature, field) {
    (Feature::Table(t), FeatureField::Title) => Some(t.title()),
    (Feature::Chart(c), FeatureField::Title) => Some(c.title()),
    (Feature::Table(t), FeatureField::Header(c)) => t.headers().get(c).map(String::as_str),
    (Feature::Table(t), FeatureField::Cell(r, c)) => t.rows().get(r).and_then(|row| row.get(c)).map(String::as_str),
    (Feature::Chart(c), FeatureField::Label(i)) => c.labels().get(i).map(String::as_str),
    (Feature::Chart(c), FeatureField::Value(i)) => c.values().get(i).map(String::as_str),
    (Feature::Code(code), FeatureField::Code) => Some(code.code.as_str()),
    _ => None,
  };
  value.unwrap_or_default().to_string()
}

/// Human label for a slot, shown while editing
pub fn field_label(feature: &Feature, field: FeatureField) -> String {
  let kind = feature_name(feature);
  match field {
    FeatureField::Title => format!("{} title", kind),
    FeatureField::Header(c) => format!("header {}", c + 1),
    FeatureField::Cell(r, c) => format!("row {}, column {}", r + 1, c + 1),
    FeatureField::Label(i) => format!("label {}", i + 1),
    FeatureField::Value(i) => format!("value {}", i + 1),
    FeatureField::Code => "code".to_string(),
  }
}

fn feature_name(feature: &Feature) -> &'static str {
  match feature {
    Feature::Table(_) => "Table",
    Feature::Chart(_) => "Chart",
    Feature::Code(_) => "Code",
  }
}

/// Feature editor state: selected feature and slot within it
#[derive(Debug, Default)]
pub struct FeaturesState {
  pub selected: usize,
  pub field: usize,
}

impl FeaturesState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn reset(&mut self) {
    self.selected = 0;
    self.field = 0;
  }

  pub fn select_next(&mut self, count: usize) {
    if count == 0 {
      return;
    }
    let next = (self.selected + 1).min(count - 1);
    if next != self.selected {
      self.selected = next;
      self.field = 0;
    }
  }

  pub fn select_prev(&mut self) {
    if self.selected > 0 {
      self.selected -= 1;
      self.field = 0;
    }
  }

  pub fn next_field(&mut self, count: usize) {
    if count == 0 {
      return;
    }
    self.field = (self.field + 1).min(count - 1);
  }

  pub fn prev_field(&mut self) {
    self.field = self.field.saturating_sub(1);
  }

  /// Keep indices valid after features or their sizes change
  pub fn clamp(&mut self, section: Option<&Section>) {
    let features = section.map(|s| s.features.as_slice()).unwrap_or_default();
    self.selected = self.selected.min(features.len().saturating_sub(1));
    let field_count = features.get(self.selected).map(|f| fields(f).len()).unwrap_or(0);
    self.field = self.field.min(field_count.saturating_sub(1));
  }

  pub fn current<'a>(&self, section: Option<&'a Section>) -> Option<(&'a Feature, FeatureField)> {
    let feature = section?.features.get(self.selected)?;
    let field = *fields(feature).get(self.field)?;
    Some((feature, field))
  }
}

/// One rendered line: styled spans and whether it holds the focused slot
struct Row {
  spans: Vec<(String, Style)>,
  focus: bool,
}

impl Row {
  fn plain(text: impl Into<String>, fg: Color) -> Self {
    Self {
      spans: vec![(text.into(), Style::default().fg(fg))],
      focus: false,
    }
  }
}

/// Feature editor widget for the selected section
pub struct FeaturesView<'a> {
  section: Option<&'a Section>,
  state: &'a FeaturesState,
  focused: bool,
}

impl<'a> FeaturesView<'a> {
  pub fn new(section: Option<&'a Section>, state: &'a FeaturesState, focused: bool) -> Self {
    Self { section, state, focused }
  }

  fn focus_field(&self, index: usize) -> Option<FeatureField> {
    if !self.focused || index != self.state.selected {
      return None;
    }
    let feature = self.section?.features.get(index)?;
    fields(feature).get(self.state.field).copied()
  }

  fn slot_style(focused: bool, fg: Color) -> Style {
    if focused {
      Style::default().fg(Theme::BG).bg(Theme::ACCENT)
    } else {
      Style::default().fg(fg)
    }
  }

  fn cell(text: &str) -> String {
    format!("{:<width$}", truncate(text, CELL_WIDTH), width = CELL_WIDTH)
  }

  fn title_row(&self, feature: &Feature, index: usize, title: &str, summary: String, focus: Option<FeatureField>) -> Row {
    let selected = self.state.selected == index;
    let color = match feature {
      Feature::Table(_) => Theme::TABLE,
      Feature::Chart(c) => Theme::chart_color(c.chart_type()),
      Feature::Code(c) => Theme::language_color(c.language),
    };
    let indicator = if selected && self.focused { "▶ " } else { "  " };
    let title_focus = focus == Some(FeatureField::Title);
    let shown_title = if title.is_empty() { "(untitled)" } else { title };
    Row {
      spans: vec![
        (indicator.to_string(), Style::default().fg(Theme::ACCENT)),
        (format!("{} {} ", feature_name(feature), index + 1), Style::default().fg(color).bold()),
        (shown_title.to_string(), Self::slot_style(title_focus, Theme::TEXT)),
        (format!("  {}", summary), Style::default().fg(Theme::MUTED)),
      ],
      focus: title_focus,
    }
  }

  fn table_rows(&self, table: &Table, focus: Option<FeatureField>, rows: &mut Vec<Row>) {
    let mut header = Row {
      spans: vec![("    ".to_string(), Style::default())],
      focus: false,
    };
    for (c, h) in table.headers().iter().enumerate() {
      let is_focus = focus == Some(FeatureField::Header(c));
      header.focus |= is_focus;
      let text = if h.is_empty() { format!("Column {}", c + 1) } else { h.clone() };
      let fg = if h.is_empty() { Theme::MUTED } else { Theme::TABLE };
      header.spans.push((Self::cell(&text), Self::slot_style(is_focus, fg)));
      header.spans.push(("│".to_string(), Style::default().fg(Theme::OVERLAY)));
    }
    rows.push(header);

    for (r, cells) in table.rows().iter().enumerate() {
      let mut row = Row {
        spans: vec![(format!("{:>3} ", r + 1), Style::default().fg(Theme::MUTED))],
        focus: false,
      };
      for (c, value) in cells.iter().enumerate() {
        let is_focus = focus == Some(FeatureField::Cell(r, c));
        row.focus |= is_focus;
        row.spans.push((Self::cell(value), Self::slot_style(is_focus, Theme::TEXT)));
        row.spans.push(("│".to_string(), Style::default().fg(Theme::OVERLAY)));
      }
      rows.push(row);
    }
  }

  fn chart_rows(&self, chart: &Chart, focus: Option<FeatureField>, rows: &mut Vec<Row>) {
    for (i, (label, value)) in chart.labels().iter().zip(chart.values()).enumerate() {
      let label_focus = focus == Some(FeatureField::Label(i));
      let value_focus = focus == Some(FeatureField::Value(i));
      let shown_label = if label.is_empty() { format!("Point {}", i + 1) } else { label.clone() };
      let shown_value = if value.is_empty() { "0".to_string() } else { value.clone() };
      let label_fg = if label.is_empty() { Theme::MUTED } else { Theme::TEXT };
      let value_fg = if value.is_empty() { Theme::MUTED } else { Theme::WARNING };
      rows.push(Row {
        spans: vec![
          (format!("{:>3} ", i + 1), Style::default().fg(Theme::MUTED)),
          (Self::cell(&shown_label), Self::slot_style(label_focus, label_fg)),
          (" = ".to_string(), Style::default().fg(Theme::OVERLAY)),
          (Self::cell(&shown_value), Self::slot_style(value_focus, value_fg)),
        ],
        focus: label_focus || value_focus,
      });
    }
  }

  fn code_rows(&self, code: &CodeBlock, focus: Option<FeatureField>, width: usize, rows: &mut Vec<Row>) {
    let is_focus = focus == Some(FeatureField::Code);
    if code.code.is_empty() {
      rows.push(Row {
        spans: vec![
          ("    ".to_string(), Style::default()),
          ("(empty, press Enter to edit)".to_string(), Self::slot_style(is_focus, Theme::MUTED)),
        ],
        focus: is_focus,
      });
      return;
    }
    for (i, line) in wrap(&code.code, width.saturating_sub(4)).into_iter().enumerate() {
      rows.push(Row {
        spans: vec![
          (format!("{:>3} ", i + 1), Style::default().fg(Theme::CODE)),
          (line, Self::slot_style(is_focus, Theme::TEXT)),
        ],
        focus: is_focus && i == 0,
      });
    }
  }

  fn build_rows(&self, section: &Section, width: usize) -> Vec<Row> {
    let mut rows = Vec::new();
    for (index, feature) in section.features.iter().enumerate() {
      let focus = self.focus_field(index);
      match feature {
        Feature::Table(table) => {
          let summary = format!("{}x{}", table.row_count(), table.column_count());
          rows.push(self.title_row(feature, index, table.title(), summary, focus));
          self.table_rows(table, focus, &mut rows);
        }
        Feature::Chart(chart) => {
          let summary = format!("{}, {} points", chart.chart_type().label(), chart.point_count());
          rows.push(self.title_row(feature, index, chart.title(), summary, focus));
          self.chart_rows(chart, focus, &mut rows);
        }
        Feature::Code(code) => {
          rows.push(self.title_row(feature, index, code.language.label(), String::new(), focus));
          self.code_rows(code, focus, width, &mut rows);
        }
      }
      rows.push(Row::plain("", Theme::TEXT));
    }
    rows
  }
}

impl Widget for FeaturesView<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    let title = match self.section {
      Some(s) => format!("FEATURES: {} ({})", s.display_name(), s.features.len()),
      None => "FEATURES".to_string(),
    };
    let border_color = if self.focused { Theme::ACCENT } else { Theme::OVERLAY };
    let block = Block::default()
      .title(title)
      .title_style(Style::default().fg(Theme::ACCENT).bold())
      .borders(Borders::ALL)
      .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width == 0 || inner.height == 0 {
      return;
    }

    let Some(section) = self.section else {
      buf.set_string(inner.x, inner.y, "No section selected", Style::default().fg(Theme::MUTED));
      return;
    };
    if section.features.is_empty() {
      let lines = [
        "No features in this section",
        "",
        "  t  add table",
        "  c  add chart",
        "  o  add code block",
      ];
      for (i, line) in lines.iter().enumerate().take(inner.height as usize) {
        buf.set_string(inner.x, inner.y + i as u16, line, Style::default().fg(Theme::MUTED));
      }
      return;
    }

    let rows = self.build_rows(section, inner.width as usize);
    let visible = inner.height as usize;
    let focus_row = rows.iter().position(|r| r.focus).unwrap_or(0);
    let start = if focus_row >= visible { focus_row - visible + 1 } else { 0 };

    for (i, row) in rows.iter().skip(start).take(visible).enumerate() {
      let y = inner.y + i as u16;
      let mut x = inner.x;
      let right = inner.x + inner.width;
      for (text, style) in &row.spans {
        if x >= right {
          break;
        }
        let (next_x, _) = buf.set_stringn(x, y, text, (right - x) as usize, *style);
        x = next_x;
      }
    }
  }
}
