//! The owned form model: user details, rendered sections and their features.
//!
//! This is the single source of truth for a submission. Builders mutate it in
//! place and the payload is serialized straight from it.

use crate::color::DEFAULT_COLOR_SCHEME;
use crate::feature::{Chart, CodeBlock, Feature, FeatureId, FeatureKind, Table};
use crate::template::{TemplateRegistry, display_name};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// User-entered document metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserData {
  pub student_name: String,
  pub college_name: String,
  pub class: String,
  pub roll_number: String,
  pub subject: String,
  pub subject_teacher: String,
  pub assignment_topic: String,
  pub project_date: String,
  pub submission_date: String,
  pub contact_number: String,
  pub self_introduction: String,
}

/// Field keys with their labels, in form order
pub const USER_FIELDS: &[(&str, &str)] = &[
  ("student_name", "Student Name"),
  ("college_name", "College Name"),
  ("class", "Class"),
  ("roll_number", "Roll Number"),
  ("subject", "Subject"),
  ("subject_teacher", "Subject Teacher"),
  ("assignment_topic", "Assignment Topic"),
  ("project_date", "Project Date"),
  ("submission_date", "Submission Date"),
  ("contact_number", "Contact Number"),
  ("self_introduction", "Self Introduction"),
];

impl UserData {
  pub fn field(&self, key: &str) -> Option<&str> {
    let value = match key {
      "student_name" => &self.student_name,
      "college_name" => &self.college_name,
      "class" => &self.class,
      "roll_number" => &self.roll_number,
      "subject" => &self.subject,
      "subject_teacher" => &self.subject_teacher,
      "assignment_topic" => &self.assignment_topic,
      "project_date" => &self.project_date,
      "submission_date" => &self.submission_date,
      "contact_number" => &self.contact_number,
      "self_introduction" => &self.self_introduction,
      _ => return None,
    };
    Some(value)
  }

  pub fn field_mut(&mut self, key: &str) -> Option<&mut String> {
    let value = match key {
      "student_name" => &mut self.student_name,
      "college_name" => &mut self.college_name,
      "class" => &mut self.class,
      "roll_number" => &mut self.roll_number,
      "subject" => &mut self.subject,
      "subject_teacher" => &mut self.subject_teacher,
      "assignment_topic" => &mut self.assignment_topic,
      "project_date" => &mut self.project_date,
      "submission_date" => &mut self.submission_date,
      "contact_number" => &mut self.contact_number,
      "self_introduction" => &mut self.self_introduction,
      _ => return None,
    };
    Some(value)
  }
}

/// A named content region with free text and attached features
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
  pub name: String,
  pub content: String,
  pub features: Vec<Feature>,
}

impl Section {
  fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      content: String::new(),
      features: Vec::new(),
    }
  }

  pub fn display_name(&self) -> String {
    display_name(&self.name)
  }

  pub fn feature(&self, id: FeatureId) -> Option<&Feature> {
    self.features.iter().find(|f| f.id() == id)
  }
}

#[derive(Debug, Clone)]
pub struct Form {
  registry: TemplateRegistry,
  template_id: Option<String>,
  pub color_scheme: String,
  pub user: UserData,
  sections: Vec<Section>,
}

impl Form {
  pub fn new(registry: TemplateRegistry) -> Self {
    Self {
      registry,
      template_id: None,
      color_scheme: DEFAULT_COLOR_SCHEME.to_string(),
      user: UserData::default(),
      sections: Vec::new(),
    }
  }

  pub fn registry(&self) -> &TemplateRegistry {
    &self.registry
  }

  pub fn template_id(&self) -> Option<&str> {
    self.template_id.as_deref()
  }

  pub fn sections(&self) -> &[Section] {
    &self.sections
  }

  pub fn section(&self, name: &str) -> Option<&Section> {
    self.sections.iter().find(|s| s.name == name)
  }

  fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
    self.sections.iter_mut().find(|s| s.name == name)
  }

  /// Rebuild all sections for a template.
  ///
  /// Existing sections and their features are dropped without confirmation.
  /// An unknown id leaves the form with no sections.
  pub fn render(&mut self, template_id: &str) {
    self.template_id = Some(template_id.to_string());
    self.sections = self
      .registry
      .sections_for(template_id)
      .iter()
      .map(|name| Section::new(name))
      .collect();
    debug!(template = template_id, sections = self.sections.len(), "Rendered sections");
  }

  pub fn set_content(&mut self, section: &str, content: impl Into<String>) -> Result<()> {
    let target = self
      .section_mut(section)
      .ok_or_else(|| Error::SectionNotFound(section.to_string()))?;
    target.content = content.into();
    Ok(())
  }

  fn add_feature(&mut self, section: &str, kind: FeatureKind) -> Option<FeatureId> {
    let Some(target) = self.section_mut(section) else {
      debug!(section, %kind, "Ignoring feature for unknown section");
      return None;
    };
    let feature = Feature::new(kind);
    let id = feature.id();
    target.features.push(feature);
    debug!(section, feature = %id, "Added feature");
    Some(id)
  }

  /// Attach a blank 3x3 table; `None` if the section does not exist
  pub fn add_table(&mut self, section: &str) -> Option<FeatureId> {
    self.add_feature(section, FeatureKind::Table)
  }

  /// Attach a 5-point bar chart; `None` if the section does not exist
  pub fn add_chart(&mut self, section: &str) -> Option<FeatureId> {
    self.add_feature(section, FeatureKind::Chart)
  }

  /// Attach an empty Python code block; `None` if the section does not exist
  pub fn add_code(&mut self, section: &str) -> Option<FeatureId> {
    self.add_feature(section, FeatureKind::Code)
  }

  pub fn feature(&self, id: FeatureId) -> Option<&Feature> {
    self.sections.iter().find_map(|s| s.feature(id))
  }

  pub fn feature_mut(&mut self, id: FeatureId) -> Option<&mut Feature> {
    self
      .sections
      .iter_mut()
      .flat_map(|s| s.features.iter_mut())
      .find(|f| f.id() == id)
  }

  pub fn table_mut(&mut self, id: FeatureId) -> Result<&mut Table> {
    match self.feature_mut(id) {
      Some(Feature::Table(table)) => Ok(table),
      _ => Err(Error::FeatureNotFound(id.to_string())),
    }
  }

  pub fn chart_mut(&mut self, id: FeatureId) -> Result<&mut Chart> {
    match self.feature_mut(id) {
      Some(Feature::Chart(chart)) => Ok(chart),
      _ => Err(Error::FeatureNotFound(id.to_string())),
    }
  }

  pub fn code_mut(&mut self, id: FeatureId) -> Result<&mut CodeBlock> {
    match self.feature_mut(id) {
      Some(Feature::Code(code)) => Ok(code),
      _ => Err(Error::FeatureNotFound(id.to_string())),
    }
  }

  pub fn resize_table(&mut self, id: FeatureId, rows: usize, columns: usize) -> Result<()> {
    self.table_mut(id)?.resize(rows, columns);
    Ok(())
  }

  pub fn resize_chart(&mut self, id: FeatureId, points: usize) -> Result<()> {
    self.chart_mut(id)?.resize(points);
    Ok(())
  }

  /// Name of the section owning a feature
  pub fn owner_of(&self, id: FeatureId) -> Option<&str> {
    self
      .sections
      .iter()
      .find(|s| s.feature(id).is_some())
      .map(|s| s.name.as_str())
  }

  /// Remove a feature; returns false when the id is not present
  pub fn remove(&mut self, id: FeatureId) -> bool {
    for section in &mut self.sections {
      if let Some(index) = section.features.iter().position(|f| f.id() == id) {
        section.features.remove(index);
        debug!(section = %section.name, feature = %id, "Removed feature");
        return true;
      }
    }
    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::template::Template;

  fn lab_form() -> Form {
    let mut form = Form::new(TemplateRegistry::builtin());
    form.render("lab_report");
    form
  }

  #[test]
  fn test_render_each_builtin_template() {
    let registry = TemplateRegistry::builtin();
    for template in registry.iter() {
      let mut form = Form::new(registry.clone());
      form.render(&template.id);
      let names: Vec<_> = form.sections().iter().map(|s| s.name.clone()).collect();
      assert_eq!(names, template.sections);
    }
  }

  #[test]
  fn test_render_lab_report() {
    let form = lab_form();
    let names: Vec<_> = form.sections().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
      names,
      [
        "objective",
        "materials",
        "procedure",
        "observations",
        "calculations",
        "results",
        "conclusion"
      ]
    );
    assert!(form.sections().iter().all(|s| s.content.is_empty() && s.features.is_empty()));
  }

  #[test]
  fn test_render_unknown_template_clears_sections() {
    let mut form = lab_form();
    form.add_table("objective").unwrap();
    form.render("no_such_template");
    assert!(form.sections().is_empty());
    assert_eq!(form.template_id(), Some("no_such_template"));
  }

  #[test]
  fn test_rerender_drops_features() {
    let mut form = lab_form();
    let id = form.add_chart("results").unwrap();
    form.set_content("results", "text").unwrap();
    form.render("lab_report");
    assert!(form.feature(id).is_none());
    assert_eq!(form.section("results").unwrap().content, "");
  }

  #[test]
  fn test_injected_registry() {
    let registry = TemplateRegistry::new(vec![Template::new("memo", "Memo", "", &["summary", "details"])]);
    let mut form = Form::new(registry);
    form.render("memo");
    assert_eq!(form.sections().len(), 2);
    form.render("lab_report");
    assert!(form.sections().is_empty());
  }

  #[test]
  fn test_add_features_to_section() {
    let mut form = lab_form();
    let table = form.add_table("observations").unwrap();
    let chart = form.add_chart("observations").unwrap();
    let code = form.add_code("calculations").unwrap();

    assert_eq!(table.kind(), FeatureKind::Table);
    assert_eq!(form.owner_of(table), Some("observations"));
    assert_eq!(form.owner_of(chart), Some("observations"));
    assert_eq!(form.owner_of(code), Some("calculations"));
    assert_eq!(form.section("observations").unwrap().features.len(), 2);

    assert!(matches!(form.feature(code), Some(Feature::Code(c)) if c.language == crate::CodeLanguage::Python));
  }

  #[test]
  fn test_add_to_unknown_section() {
    let mut form = lab_form();
    assert!(form.add_table("appendix").is_none());
    assert!(form.add_chart("").is_none());
    assert!(form.add_code("nope").is_none());
  }

  #[test]
  fn test_resize_through_form() {
    let mut form = lab_form();
    let table = form.add_table("results").unwrap();
    let chart = form.add_chart("results").unwrap();
    form.resize_table(table, 4, 6).unwrap();
    form.resize_chart(chart, 3).unwrap();

    let Some(Feature::Table(t)) = form.feature(table) else {
      panic!("expected table");
    };
    assert_eq!((t.row_count(), t.column_count()), (4, 6));
    let Some(Feature::Chart(c)) = form.feature(chart) else {
      panic!("expected chart");
    };
    assert_eq!(c.point_count(), 3);

    // kind mismatch is reported as not found
    assert!(matches!(form.resize_chart(table, 3), Err(Error::FeatureNotFound(_))));
  }

  #[test]
  fn test_remove_feature() {
    let mut form = lab_form();
    let id = form.add_code("procedure").unwrap();
    assert!(form.remove(id));
    assert!(form.feature(id).is_none());
    assert!(!form.remove(id));
  }

  #[test]
  fn test_set_content_unknown_section() {
    let mut form = lab_form();
    assert!(form.set_content("objective", "Measure g").is_ok());
    assert!(matches!(
      form.set_content("abstract", "x"),
      Err(Error::SectionNotFound(name)) if name == "abstract"
    ));
  }

  #[test]
  fn test_user_field_access() {
    let mut user = UserData::default();
    *user.field_mut("class").unwrap() = "BSc IT".to_string();
    assert_eq!(user.class, "BSc IT");
    assert_eq!(user.field("class"), Some("BSc IT"));
    assert!(user.field("unknown").is_none());
    assert!(USER_FIELDS.iter().all(|(key, _)| user.field(key).is_some()));
  }
}
