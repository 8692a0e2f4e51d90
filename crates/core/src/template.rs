//! Document templates: which sections a generated document is made of.

use serde::{Deserialize, Serialize};

/// A named, ordered list of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub description: String,
  pub sections: Vec<String>,
}

impl Template {
  pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>, sections: &[&str]) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      description: description.into(),
      sections: sections.iter().map(|s| s.to_string()).collect(),
    }
  }
}

/// Template lookup table, passed explicitly into the form.
///
/// Templates keep their registration order so listings are stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
  templates: Vec<Template>,
}

impl Default for TemplateRegistry {
  fn default() -> Self {
    Self::builtin()
  }
}

impl TemplateRegistry {
  pub fn new(templates: Vec<Template>) -> Self {
    let mut registry = Self { templates: Vec::new() };
    registry.extend(templates);
    registry
  }

  /// The templates the generation server ships with
  pub fn builtin() -> Self {
    Self::new(vec![
      Template::new(
        "assignment",
        "Academic Assignment",
        "Standard academic assignment with proper formatting and analysis",
        &["introduction", "main_content", "analysis", "conclusion", "references"],
      ),
      Template::new(
        "project_report",
        "Project Report",
        "Comprehensive project report with visual elements and analysis",
        &[
          "project_overview",
          "objectives",
          "methodology",
          "implementation",
          "results",
          "conclusion",
          "appendix",
        ],
      ),
      Template::new(
        "case_study",
        "Case Study Analysis",
        "In-depth case study analysis with solutions and visual aids",
        &[
          "case_overview",
          "problem_analysis",
          "solutions",
          "implementation",
          "results",
          "recommendations",
        ],
      ),
      Template::new(
        "research_paper",
        "Research Paper",
        "Academic research paper with proper formatting and citations",
        &[
          "abstract",
          "introduction",
          "literature_review",
          "methodology",
          "results",
          "discussion",
          "conclusion",
          "references",
        ],
      ),
      Template::new(
        "presentation_report",
        "Presentation Report",
        "Professional presentation report with key insights and recommendations",
        &["executive_summary", "key_points", "analysis", "findings", "recommendations"],
      ),
      Template::new(
        "lab_report",
        "Laboratory Report",
        "Scientific laboratory report with data analysis and observations",
        &[
          "objective",
          "materials",
          "procedure",
          "observations",
          "calculations",
          "results",
          "conclusion",
        ],
      ),
      Template::new(
        "business_plan",
        "Business Plan",
        "Comprehensive business plan with financial analysis and market research",
        &[
          "executive_summary",
          "business_overview",
          "market_analysis",
          "strategy",
          "financial_plan",
          "implementation",
        ],
      ),
      Template::new(
        "technical_documentation",
        "Technical Documentation",
        "Technical documentation with system diagrams and code examples",
        &[
          "system_overview",
          "architecture",
          "implementation",
          "testing",
          "deployment",
          "maintenance",
        ],
      ),
    ])
  }

  /// Replace templates with a matching id, append the rest
  pub fn extend(&mut self, templates: impl IntoIterator<Item = Template>) {
    for template in templates {
      match self.templates.iter_mut().find(|t| t.id == template.id) {
        Some(existing) => *existing = template,
        None => self.templates.push(template),
      }
    }
  }

  pub fn with_overrides(mut self, templates: impl IntoIterator<Item = Template>) -> Self {
    self.extend(templates);
    self
  }

  /// Ordered section names for a template; empty for an unknown id
  pub fn sections_for(&self, template_id: &str) -> &[String] {
    self.get(template_id).map(|t| t.sections.as_slice()).unwrap_or(&[])
  }

  pub fn get(&self, template_id: &str) -> Option<&Template> {
    self.templates.iter().find(|t| t.id == template_id)
  }

  pub fn contains(&self, template_id: &str) -> bool {
    self.get(template_id).is_some()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Template> {
    self.templates.iter()
  }

  pub fn len(&self) -> usize {
    self.templates.len()
  }

  pub fn is_empty(&self) -> bool {
    self.templates.is_empty()
  }

  /// Id of the template after `current` in registration order, wrapping around
  pub fn next_id(&self, current: Option<&str>) -> Option<&str> {
    let first = self.templates.first().map(|t| t.id.as_str());
    let Some(current) = current else {
      return first;
    };
    match self.templates.iter().position(|t| t.id == current) {
      Some(index) => self.templates.get((index + 1) % self.templates.len()).map(|t| t.id.as_str()),
      None => first,
    }
  }
}

/// Human-readable section heading: `main_content` -> `Main Content`
pub fn display_name(section: &str) -> String {
  section
    .split('_')
    .filter(|word| !word.is_empty())
    .map(|word| {
      let mut chars = word.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_builtin_has_eight_templates() {
    let registry = TemplateRegistry::builtin();
    assert_eq!(registry.len(), 8);
    assert!(registry.contains("assignment"));
    assert!(registry.contains("technical_documentation"));
  }

  #[test]
  fn test_lab_report_sections_in_order() {
    let registry = TemplateRegistry::builtin();
    assert_eq!(
      registry.sections_for("lab_report"),
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
  }

  #[test]
  fn test_unknown_template_has_no_sections() {
    let registry = TemplateRegistry::builtin();
    assert!(registry.sections_for("nope").is_empty());
    assert!(registry.sections_for("").is_empty());
  }

  #[test]
  fn test_overrides_replace_and_append() {
    let registry = TemplateRegistry::builtin().with_overrides([
      Template::new("assignment", "Short Assignment", "", &["body"]),
      Template::new("memo", "Memo", "", &["summary", "details"]),
    ]);
    assert_eq!(registry.len(), 9);
    assert_eq!(registry.sections_for("assignment"), ["body"]);
    assert_eq!(registry.iter().next().map(|t| t.name.as_str()), Some("Short Assignment"));
    assert_eq!(registry.iter().last().map(|t| t.id.as_str()), Some("memo"));
  }

  #[test]
  fn test_next_id_wraps() {
    let registry = TemplateRegistry::new(vec![
      Template::new("a", "A", "", &["x"]),
      Template::new("b", "B", "", &["y"]),
    ]);
    assert_eq!(registry.next_id(None), Some("a"));
    assert_eq!(registry.next_id(Some("a")), Some("b"));
    assert_eq!(registry.next_id(Some("b")), Some("a"));
    assert_eq!(registry.next_id(Some("unknown")), Some("a"));
  }

  #[test]
  fn test_display_name() {
    assert_eq!(display_name("main_content"), "Main Content");
    assert_eq!(display_name("abstract"), "Abstract");
    assert_eq!(display_name("literature_review"), "Literature Review");
  }
}
