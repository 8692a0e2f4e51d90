//! Form drafts: a filled-in form described as a TOML or JSON file.
//!
//! Drafts are only ever read. Applying one drives the same builder operations
//! a user would, so sizing and defaults follow the interactive rules.

use crate::feature::{ChartType, CodeLanguage};
use crate::form::{Form, UserData};
use crate::template::TemplateRegistry;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDraft {
  pub template: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub color_scheme: Option<String>,
  pub user: UserData,
  pub sections: Vec<SectionDraft>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionDraft {
  pub name: String,
  pub content: String,
  pub tables: Vec<TableDraft>,
  pub charts: Vec<ChartDraft>,
  pub code: Vec<CodeDraft>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDraft {
  pub title: String,
  pub headers: Vec<String>,
  pub rows: Vec<Vec<String>>,
  /// Raw `{"headers": [...], "rows": [...]}` encoding; takes precedence over the grid
  #[serde(skip_serializing_if = "Option::is_none")]
  pub encoded: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDraft {
  #[serde(rename = "type")]
  pub chart_type: ChartType,
  pub title: String,
  pub labels: Vec<String>,
  pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeDraft {
  pub language: CodeLanguage,
  pub code: String,
}

impl FormDraft {
  /// Load a draft; `.toml` files are parsed as TOML, everything else as JSON
  pub fn load(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    let is_toml = path
      .extension()
      .and_then(|e| e.to_str())
      .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
    if is_toml { Self::from_toml(&content) } else { Self::from_json(&content) }
  }

  pub fn from_toml(content: &str) -> Result<Self> {
    Ok(toml::from_str(content)?)
  }

  pub fn from_json(content: &str) -> Result<Self> {
    Ok(serde_json::from_str(content)?)
  }
}

impl Form {
  /// Build a form from a draft using the given template registry
  pub fn from_draft(registry: TemplateRegistry, draft: &FormDraft) -> Result<Self> {
    let mut form = Form::new(registry);
    form.apply_draft(draft)?;
    Ok(form)
  }

  /// Render the draft's template and replay its content through the builders
  pub fn apply_draft(&mut self, draft: &FormDraft) -> Result<()> {
    if draft.template.is_empty() {
      return Err(Error::Draft("draft does not name a template".to_string()));
    }
    if !self.registry().contains(&draft.template) {
      warn!(template = %draft.template, "Draft template is not registered; form will have no sections");
    }

    self.render(&draft.template);
    self.user = draft.user.clone();
    if let Some(scheme) = &draft.color_scheme {
      self.color_scheme = scheme.clone();
    }

    for section in &draft.sections {
      if self.section(&section.name).is_none() {
        warn!(section = %section.name, template = %draft.template, "Skipping draft section not in template");
        continue;
      }
      self.set_content(&section.name, section.content.clone())?;

      for table in &section.tables {
        self.apply_table(&section.name, table)?;
      }
      for chart in &section.charts {
        self.apply_chart(&section.name, chart)?;
      }
      for code in &section.code {
        let Some(id) = self.add_code(&section.name) else {
          continue;
        };
        let block = self.code_mut(id)?;
        block.language = code.language;
        block.code = code.code.clone();
      }
    }
    Ok(())
  }

  fn apply_table(&mut self, section: &str, draft: &TableDraft) -> Result<()> {
    let Some(id) = self.add_table(section) else {
      return Ok(());
    };
    let table = self.table_mut(id)?;
    table.set_title(draft.title.clone());

    if let Some(encoded) = &draft.encoded {
      table.adopt_encoded(encoded);
      return Ok(());
    }

    let widest_row = draft.rows.iter().map(Vec::len).max().unwrap_or(0);
    let columns = draft.headers.len().max(widest_row);
    if columns > 0 || !draft.rows.is_empty() {
      table.resize(draft.rows.len(), columns);
    }

    let mut dropped = 0;
    for (column, header) in draft.headers.iter().enumerate() {
      if table.set_header(column, header.clone()).is_err() {
        dropped += 1;
      }
    }
    for (row, cells) in draft.rows.iter().enumerate() {
      for (column, cell) in cells.iter().enumerate() {
        if table.set_cell(row, column, cell.clone()).is_err() {
          dropped += 1;
        }
      }
    }
    if dropped > 0 {
      warn!(section, table = %id, dropped, "Draft table exceeds size limits; extra cells dropped");
    }
    Ok(())
  }

  fn apply_chart(&mut self, section: &str, draft: &ChartDraft) -> Result<()> {
    let Some(id) = self.add_chart(section) else {
      return Ok(());
    };
    let chart = self.chart_mut(id)?;
    chart.set_chart_type(draft.chart_type);
    chart.set_title(draft.title.clone());

    let points = draft.labels.len().max(draft.values.len());
    if points > 0 {
      chart.resize(points);
    }

    let mut dropped = 0;
    for (i, label) in draft.labels.iter().enumerate() {
      if chart.set_label(i, label.clone()).is_err() {
        dropped += 1;
      }
    }
    for (i, value) in draft.values.iter().enumerate() {
      if chart.set_value(i, value.clone()).is_err() {
        dropped += 1;
      }
    }
    if dropped > 0 {
      warn!(section, chart = %id, dropped, "Draft chart exceeds size limits; extra points dropped");
    }
    Ok(())
  }
}
