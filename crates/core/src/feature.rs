//! Attachable section features: tables, charts and code blocks.
//!
//! Tables and charts keep a committed serialization that is recomputed on
//! every edit. The committed form is what the generation server expects:
//! a JSON `{headers, rows}` object for tables and two comma-joined strings
//! for charts.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TABLE_DEFAULT_COLUMNS: usize = 3;
pub const TABLE_DEFAULT_ROWS: usize = 3;
pub const TABLE_MAX_COLUMNS: usize = 10;
pub const TABLE_MAX_ROWS: usize = 20;

pub const CHART_DEFAULT_POINTS: usize = 5;
pub const CHART_MIN_POINTS: usize = 2;
pub const CHART_MAX_POINTS: usize = 20;

pub const DEFAULT_TABLE_TITLE: &str = "Table";
pub const DEFAULT_CHART_TITLE: &str = "Chart";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
  Table,
  Chart,
  Code,
}

impl FeatureKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      FeatureKind::Table => "table",
      FeatureKind::Chart => "chart",
      FeatureKind::Code => "code",
    }
  }
}

impl std::fmt::Display for FeatureKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Identifier of a feature within a form.
///
/// UUIDv7 keeps ids unique even when several features are added in the same
/// millisecond. The kind prefix in the display form is for humans only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureId {
  kind: FeatureKind,
  id: Uuid,
}

impl FeatureId {
  pub fn new(kind: FeatureKind) -> Self {
    Self { kind, id: Uuid::now_v7() }
  }

  pub fn kind(&self) -> FeatureKind {
    self.kind
  }

  pub fn as_uuid(&self) -> Uuid {
    self.id
  }
}

impl std::fmt::Display for FeatureId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}_{}", self.kind, self.id.simple())
  }
}

impl std::str::FromStr for FeatureId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let (prefix, rest) = s.split_once('_').ok_or_else(|| Error::InvalidFeatureId(s.to_string()))?;
    let kind = match prefix {
      "table" => FeatureKind::Table,
      "chart" => FeatureKind::Chart,
      "code" => FeatureKind::Code,
      _ => return Err(Error::InvalidFeatureId(s.to_string())),
    };
    let id = Uuid::parse_str(rest).map_err(|_| Error::InvalidFeatureId(s.to_string()))?;
    Ok(Self { kind, id })
  }
}

// ============================================================================
// Table
// ============================================================================

/// The committed table encoding: `{"headers": [...], "rows": [[...]]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
  pub headers: Vec<String>,
  pub rows: Vec<Vec<String>>,
}

impl TableData {
  pub fn encode(&self) -> String {
    serde_json::to_string(self).unwrap_or_default()
  }

  pub fn decode(raw: &str) -> Result<Self> {
    Ok(serde_json::from_str(raw)?)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
  id: FeatureId,
  title: String,
  headers: Vec<String>,
  rows: Vec<Vec<String>>,
  pub(crate) committed: String,
}

impl Table {
  /// A blank default-sized table, already committed
  pub fn new(id: FeatureId) -> Self {
    let mut table = Self {
      id,
      title: String::new(),
      headers: Vec::new(),
      rows: Vec::new(),
      committed: String::new(),
    };
    table.resize(TABLE_DEFAULT_ROWS, TABLE_DEFAULT_COLUMNS);
    table
  }

  pub fn id(&self) -> FeatureId {
    self.id
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn headers(&self) -> &[String] {
    &self.headers
  }

  pub fn rows(&self) -> &[Vec<String>] {
    &self.rows
  }

  pub fn column_count(&self) -> usize {
    self.headers.len()
  }

  pub fn row_count(&self) -> usize {
    self.rows.len()
  }

  /// The serialized form sent to the server
  pub fn committed(&self) -> &str {
    &self.committed
  }

  pub fn set_title(&mut self, title: impl Into<String>) {
    self.title = title.into();
  }

  /// Regenerate a blank grid. Counts are clamped to 1..=20 rows and 1..=10 columns;
  /// every previously entered header and cell is discarded.
  pub fn resize(&mut self, rows: usize, columns: usize) {
    let rows = rows.clamp(1, TABLE_MAX_ROWS);
    let columns = columns.clamp(1, TABLE_MAX_COLUMNS);
    self.headers = vec![String::new(); columns];
    self.rows = vec![vec![String::new(); columns]; rows];
    self.commit();
  }

  pub fn set_header(&mut self, column: usize, value: impl Into<String>) -> Result<()> {
    let size = self.headers.len();
    let header = self.headers.get_mut(column).ok_or(Error::CellOutOfRange {
      what: "column",
      index: column,
      size,
    })?;
    *header = value.into();
    self.commit();
    Ok(())
  }

  pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) -> Result<()> {
    let row_count = self.rows.len();
    let cells = self.rows.get_mut(row).ok_or(Error::CellOutOfRange {
      what: "row",
      index: row,
      size: row_count,
    })?;
    let size = cells.len();
    let cell = cells.get_mut(column).ok_or(Error::CellOutOfRange {
      what: "column",
      index: column,
      size,
    })?;
    *cell = value.into();
    self.commit();
    Ok(())
  }

  /// Current grid with defaults applied: blank headers become `Column N`
  pub fn data(&self) -> TableData {
    let headers = self
      .headers
      .iter()
      .enumerate()
      .map(|(i, h)| if h.is_empty() { format!("Column {}", i + 1) } else { h.clone() })
      .collect();
    TableData {
      headers,
      rows: self.rows.clone(),
    }
  }

  fn commit(&mut self) {
    self.committed = self.data().encode();
  }

  /// Take over an encoding produced elsewhere (e.g. a web form's hidden field).
  ///
  /// A decodable encoding replaces the grid; anything else is kept verbatim and
  /// tolerated when the payload is built.
  pub fn adopt_encoded(&mut self, raw: &str) {
    match TableData::decode(raw) {
      Ok(data) if !data.headers.is_empty() => {
        let columns = data.headers.len().min(TABLE_MAX_COLUMNS);
        let rows = data.rows.len().clamp(1, TABLE_MAX_ROWS);
        self.headers = data.headers.into_iter().take(columns).collect();
        self.rows = (0..rows)
          .map(|r| {
            let source = data.rows.get(r);
            (0..columns)
              .map(|c| source.and_then(|row| row.get(c)).cloned().unwrap_or_default())
              .collect()
          })
          .collect();
        self.commit();
      }
      _ => {
        tracing::warn!(table = %self.id, "Keeping undecodable table encoding as-is");
        self.committed = raw.to_string();
      }
    }
  }
}

// ============================================================================
// Chart
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
  #[default]
  Bar,
  Pie,
  Line,
}

impl ChartType {
  pub const ALL: [ChartType; 3] = [ChartType::Bar, ChartType::Pie, ChartType::Line];

  pub fn as_str(&self) -> &'static str {
    match self {
      ChartType::Bar => "bar",
      ChartType::Pie => "pie",
      ChartType::Line => "line",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      ChartType::Bar => "Bar Chart",
      ChartType::Pie => "Pie Chart",
      ChartType::Line => "Line Chart",
    }
  }

  pub fn next(&self) -> Self {
    match self {
      ChartType::Bar => ChartType::Pie,
      ChartType::Pie => ChartType::Line,
      ChartType::Line => ChartType::Bar,
    }
  }
}

impl std::str::FromStr for ChartType {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "bar" => Ok(ChartType::Bar),
      "pie" => Ok(ChartType::Pie),
      "line" => Ok(ChartType::Line),
      _ => Err(format!("Unknown chart type: {}", s)),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
  id: FeatureId,
  chart_type: ChartType,
  title: String,
  labels: Vec<String>,
  values: Vec<String>,
  committed_labels: String,
  committed_values: String,
}

impl Chart {
  pub fn new(id: FeatureId) -> Self {
    let mut chart = Self {
      id,
      chart_type: ChartType::default(),
      title: String::new(),
      labels: Vec::new(),
      values: Vec::new(),
      committed_labels: String::new(),
      committed_values: String::new(),
    };
    chart.resize(CHART_DEFAULT_POINTS);
    chart
  }

  pub fn id(&self) -> FeatureId {
    self.id
  }

  pub fn chart_type(&self) -> ChartType {
    self.chart_type
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn labels(&self) -> &[String] {
    &self.labels
  }

  pub fn values(&self) -> &[String] {
    &self.values
  }

  pub fn point_count(&self) -> usize {
    self.labels.len()
  }

  /// Comma-joined labels as sent to the server
  pub fn committed_labels(&self) -> &str {
    &self.committed_labels
  }

  /// Comma-joined values as sent to the server
  pub fn committed_values(&self) -> &str {
    &self.committed_values
  }

  pub fn set_chart_type(&mut self, chart_type: ChartType) {
    self.chart_type = chart_type;
  }

  pub fn set_title(&mut self, title: impl Into<String>) {
    self.title = title.into();
  }

  /// Regenerate blank label/value inputs for 2..=20 points
  pub fn resize(&mut self, points: usize) {
    let points = points.clamp(CHART_MIN_POINTS, CHART_MAX_POINTS);
    self.labels = vec![String::new(); points];
    self.values = vec![String::new(); points];
    self.commit();
  }

  pub fn set_label(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
    let size = self.labels.len();
    let label = self.labels.get_mut(index).ok_or(Error::CellOutOfRange {
      what: "point",
      index,
      size,
    })?;
    *label = value.into();
    self.commit();
    Ok(())
  }

  pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
    let size = self.values.len();
    let slot = self.values.get_mut(index).ok_or(Error::CellOutOfRange {
      what: "point",
      index,
      size,
    })?;
    *slot = value.into();
    self.commit();
    Ok(())
  }

  fn commit(&mut self) {
    // A comma inside one entry would split into two points server-side
    let clean = |s: &str| s.replace(',', " ");
    self.committed_labels = self
      .labels
      .iter()
      .enumerate()
      .map(|(i, l)| if l.is_empty() { format!("Point {}", i + 1) } else { clean(l) })
      .collect::<Vec<_>>()
      .join(",");
    self.committed_values = self
      .values
      .iter()
      .map(|v| if v.is_empty() { "0".to_string() } else { clean(v) })
      .collect::<Vec<_>>()
      .join(",");
  }
}

// ============================================================================
// Code block
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
  #[default]
  Python,
  JavaScript,
  Java,
  Cpp,
  Html,
  Css,
  Sql,
  Text,
}

impl CodeLanguage {
  pub const ALL: [CodeLanguage; 8] = [
    CodeLanguage::Python,
    CodeLanguage::JavaScript,
    CodeLanguage::Java,
    CodeLanguage::Cpp,
    CodeLanguage::Html,
    CodeLanguage::Css,
    CodeLanguage::Sql,
    CodeLanguage::Text,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      CodeLanguage::Python => "python",
      CodeLanguage::JavaScript => "javascript",
      CodeLanguage::Java => "java",
      CodeLanguage::Cpp => "cpp",
      CodeLanguage::Html => "html",
      CodeLanguage::Css => "css",
      CodeLanguage::Sql => "sql",
      CodeLanguage::Text => "text",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      CodeLanguage::Python => "Python",
      CodeLanguage::JavaScript => "JavaScript",
      CodeLanguage::Java => "Java",
      CodeLanguage::Cpp => "C++",
      CodeLanguage::Html => "HTML",
      CodeLanguage::Css => "CSS",
      CodeLanguage::Sql => "SQL",
      CodeLanguage::Text => "Text",
    }
  }

  pub fn next(&self) -> Self {
    let index = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
    Self::ALL[(index + 1) % Self::ALL.len()]
  }
}

impl std::str::FromStr for CodeLanguage {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "python" | "py" => Ok(CodeLanguage::Python),
      "javascript" | "js" => Ok(CodeLanguage::JavaScript),
      "java" => Ok(CodeLanguage::Java),
      "cpp" | "c++" => Ok(CodeLanguage::Cpp),
      "html" => Ok(CodeLanguage::Html),
      "css" => Ok(CodeLanguage::Css),
      "sql" => Ok(CodeLanguage::Sql),
      "text" | "txt" => Ok(CodeLanguage::Text),
      _ => Err(format!("Unknown code language: {}", s)),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
  id: FeatureId,
  pub language: CodeLanguage,
  pub code: String,
}

impl CodeBlock {
  pub fn new(id: FeatureId) -> Self {
    Self {
      id,
      language: CodeLanguage::default(),
      code: String::new(),
    }
  }

  pub fn id(&self) -> FeatureId {
    self.id
  }
}

// ============================================================================
// Feature
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
  Table(Table),
  Chart(Chart),
  Code(CodeBlock),
}

impl Feature {
  /// A default-configured feature of the given kind with a fresh id
  pub fn new(kind: FeatureKind) -> Self {
    let id = FeatureId::new(kind);
    match kind {
      FeatureKind::Table => Feature::Table(Table::new(id)),
      FeatureKind::Chart => Feature::Chart(Chart::new(id)),
      FeatureKind::Code => Feature::Code(CodeBlock::new(id)),
    }
  }

  pub fn id(&self) -> FeatureId {
    match self {
      Feature::Table(t) => t.id(),
      Feature::Chart(c) => c.id(),
      Feature::Code(c) => c.id(),
    }
  }

  pub fn kind(&self) -> FeatureKind {
    self.id().kind()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn table() -> Table {
    Table::new(FeatureId::new(FeatureKind::Table))
  }

  fn chart() -> Chart {
    Chart::new(FeatureId::new(FeatureKind::Chart))
  }

  #[test]
  fn test_feature_ids_are_unique() {
    let ids: std::collections::HashSet<_> = (0..1000).map(|_| FeatureId::new(FeatureKind::Table)).collect();
    assert_eq!(ids.len(), 1000);
  }

  #[test]
  fn test_feature_id_display_roundtrip() {
    let id = FeatureId::new(FeatureKind::Chart);
    let text = id.to_string();
    assert!(text.starts_with("chart_"));
    assert_eq!(text.parse::<FeatureId>().unwrap(), id);
    assert!("widget_123".parse::<FeatureId>().is_err());
    assert!("table_not-a-uuid".parse::<FeatureId>().is_err());
  }

  #[test]
  fn test_new_table_is_three_by_three() {
    let table = table();
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.row_count(), 3);
    let data = TableData::decode(table.committed()).unwrap();
    assert_eq!(data.headers, vec!["Column 1", "Column 2", "Column 3"]);
    assert_eq!(data.rows, vec![vec!["", "", ""]; 3]);
  }

  #[test]
  fn test_table_resize_shapes_grid() {
    let mut table = table();
    for (rows, columns) in [(1, 1), (5, 2), (20, 10), (7, 4)] {
      table.resize(rows, columns);
      assert_eq!(table.headers().len(), columns);
      assert_eq!(table.row_count(), rows);
      assert!(table.rows().iter().all(|r| r.len() == columns));
      let data = TableData::decode(table.committed()).unwrap();
      assert_eq!(data.headers.len(), columns);
      assert!(data.rows.iter().all(|r| r.len() == columns));
    }
  }

  #[test]
  fn test_table_resize_clamps() {
    let mut table = table();
    table.resize(0, 0);
    assert_eq!((table.row_count(), table.column_count()), (1, 1));
    table.resize(99, 99);
    assert_eq!((table.row_count(), table.column_count()), (20, 10));
  }

  #[test]
  fn test_table_resize_discards_values() {
    let mut table = table();
    table.set_header(0, "Name").unwrap();
    table.set_cell(0, 0, "x").unwrap();
    table.resize(3, 3);
    assert_eq!(table.headers()[0], "");
    assert_eq!(table.rows()[0][0], "");
  }

  #[test]
  fn test_table_commit_roundtrip() {
    let mut table = table();
    table.resize(2, 2);
    table.set_header(0, "Metal").unwrap();
    table.set_header(1, "Density").unwrap();
    table.set_cell(0, 0, "Iron").unwrap();
    table.set_cell(0, 1, "7.87").unwrap();
    table.set_cell(1, 0, "Gold").unwrap();

    let data = TableData::decode(table.committed()).unwrap();
    assert_eq!(data.headers, vec!["Metal", "Density"]);
    assert_eq!(data.rows, vec![vec!["Iron", "7.87"], vec!["Gold", ""]]);
  }

  #[test]
  fn test_table_out_of_range() {
    let mut table = table();
    assert!(matches!(
      table.set_header(3, "x"),
      Err(Error::CellOutOfRange { what: "column", index: 3, size: 3 })
    ));
    assert!(matches!(
      table.set_cell(5, 0, "x"),
      Err(Error::CellOutOfRange { what: "row", .. })
    ));
  }

  #[test]
  fn test_table_adopt_encoded() {
    let mut table = table();
    table.adopt_encoded(r#"{"headers":["A","B"],"rows":[["1","2"],["3"]]}"#);
    assert_eq!(table.headers(), ["A", "B"]);
    assert_eq!(table.rows(), [vec!["1", "2"], vec!["3", ""]]);

    table.adopt_encoded("{not json");
    assert_eq!(table.committed(), "{not json");
  }

  #[test]
  fn test_new_chart_defaults() {
    let chart = chart();
    assert_eq!(chart.chart_type(), ChartType::Bar);
    assert_eq!(chart.point_count(), 5);
    assert_eq!(chart.committed_labels(), "Point 1,Point 2,Point 3,Point 4,Point 5");
    assert_eq!(chart.committed_values(), "0,0,0,0,0");
  }

  #[test]
  fn test_chart_counts_match_after_resize() {
    let mut chart = chart();
    for points in [0, 2, 3, 11, 20, 50] {
      chart.resize(points);
      let expected = points.clamp(CHART_MIN_POINTS, CHART_MAX_POINTS);
      assert_eq!(chart.committed_labels().split(',').count(), expected);
      assert_eq!(chart.committed_values().split(',').count(), expected);
    }
  }

  #[test]
  fn test_chart_comma_in_label_keeps_count() {
    let mut chart = chart();
    chart.resize(2);
    chart.set_label(0, "Q1, 2024").unwrap();
    chart.set_value(0, "1,5").unwrap();
    assert_eq!(chart.committed_labels(), "Q1  2024,Point 2");
    assert_eq!(chart.committed_values().split(',').count(), 2);
  }

  #[test]
  fn test_chart_fill_values() {
    let mut chart = chart();
    chart.resize(3);
    for (i, (label, value)) in [("A", "1"), ("B", "2"), ("C", "3")].into_iter().enumerate() {
      chart.set_label(i, label).unwrap();
      chart.set_value(i, value).unwrap();
    }
    assert_eq!(chart.committed_labels(), "A,B,C");
    assert_eq!(chart.committed_values(), "1,2,3");
    assert!(chart.set_label(3, "D").is_err());
  }

  #[test]
  fn test_enum_cycles_and_parsing() {
    assert_eq!(ChartType::Line.next(), ChartType::Bar);
    assert_eq!(CodeLanguage::Text.next(), CodeLanguage::Python);
    assert_eq!("PIE".parse::<ChartType>(), Ok(ChartType::Pie));
    assert_eq!("c++".parse::<CodeLanguage>(), Ok(CodeLanguage::Cpp));
    assert!("cobol".parse::<CodeLanguage>().is_err());
    assert_eq!(serde_json::to_string(&CodeLanguage::JavaScript).unwrap(), "\"javascript\"");
  }
}
