//! The JSON document posted to the generation endpoint.

use crate::feature::{ChartType, CodeLanguage, DEFAULT_CHART_TITLE, DEFAULT_TABLE_TITLE, Feature, TableData};
use crate::form::{Form, UserData};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
  pub title: String,
  pub headers: Vec<String>,
  pub data: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
  #[serde(rename = "type")]
  pub chart_type: ChartType,
  pub title: String,
  /// Comma-joined labels
  pub labels: String,
  /// Comma-joined numeric values
  pub values: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
  pub language: CodeLanguage,
  pub code: String,
}

/// Snapshot of a form at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
  pub user_data: UserData,
  pub template: String,
  pub color_scheme: String,
  pub content: BTreeMap<String, String>,
  pub tables: BTreeMap<String, Vec<TableEntry>>,
  pub charts: BTreeMap<String, Vec<ChartEntry>>,
  pub code_blocks: BTreeMap<String, Vec<CodeEntry>>,
}

fn or_default(value: &str, default: &str) -> String {
  if value.is_empty() { default.to_string() } else { value.to_string() }
}

impl SubmissionPayload {
  /// Serialize the form's sections and features.
  ///
  /// A table whose committed encoding does not decode is sent with empty
  /// headers and rows instead of failing the whole submission.
  pub fn from_form(form: &Form) -> Self {
    let mut payload = Self {
      user_data: form.user.clone(),
      template: form.template_id().unwrap_or_default().to_string(),
      color_scheme: form.color_scheme.clone(),
      ..Default::default()
    };

    for section in form.sections() {
      payload.content.insert(section.name.clone(), section.content.clone());

      for feature in &section.features {
        match feature {
          Feature::Table(table) => {
            let data = TableData::decode(table.committed()).unwrap_or_else(|e| {
              warn!(table = %table.id(), section = %section.name, "Error parsing table data: {}", e);
              TableData::default()
            });
            payload.tables.entry(section.name.clone()).or_default().push(TableEntry {
              title: or_default(table.title(), DEFAULT_TABLE_TITLE),
              headers: data.headers,
              data: data.rows,
            });
          }
          Feature::Chart(chart) => {
            payload.charts.entry(section.name.clone()).or_default().push(ChartEntry {
              chart_type: chart.chart_type(),
              title: or_default(chart.title(), DEFAULT_CHART_TITLE),
              labels: chart.committed_labels().to_string(),
              values: chart.committed_values().to_string(),
            });
          }
          Feature::Code(code) => {
            payload.code_blocks.entry(section.name.clone()).or_default().push(CodeEntry {
              language: code.language,
              code: code.code.clone(),
            });
          }
        }
      }
    }

    payload
  }

  pub fn download_filename(&self) -> String {
    download_filename(&self.user_data)
  }

  pub fn feature_count(&self) -> usize {
    self.tables.values().map(Vec::len).sum::<usize>()
      + self.charts.values().map(Vec::len).sum::<usize>()
      + self.code_blocks.values().map(Vec::len).sum::<usize>()
  }
}

/// Name the generated file is saved under: `DazzloDocs_<student>_<subject>.pdf`
pub fn download_filename(user: &UserData) -> String {
  format!("DazzloDocs_{}_{}.pdf", user.student_name, user.subject)
}
