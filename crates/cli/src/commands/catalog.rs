//! Listing commands (templates, colors, features)

use anyhow::{Context, Result};
use client::RemoteCatalog;
use dazzlo_core::{COLOR_SCHEMES, ChartType, CodeLanguage, Config, Template, display_name};
use serde::Serialize;

/// List document templates, from config or from the server
pub async fn cmd_templates(config: &Config, remote: bool, json: bool) -> Result<()> {
  let registry = if remote {
    RemoteCatalog::new(&config.server.base_url)
      .registry()
      .await
      .context("Failed to fetch templates from server")?
  } else {
    config.registry()
  };
  let templates: Vec<&Template> = registry.iter().collect();

  if json {
    println!("{}", serde_json::to_string_pretty(&templates)?);
    return Ok(());
  }

  if templates.is_empty() {
    println!("No templates available.");
    return Ok(());
  }

  println!("Templates ({}):\n", templates.len());
  for template in templates {
    println!("{:<24} {}", template.id, template.name);
    if !template.description.is_empty() {
      println!("{:<24} {}", "", template.description);
    }
    let sections: Vec<String> = template.sections.iter().map(|s| display_name(s)).collect();
    println!("{:<24} Sections: {}", "", sections.join(", "));
    println!();
  }

  Ok(())
}

/// List color schemes
pub async fn cmd_colors(config: &Config, remote: bool, json: bool) -> Result<()> {
  if remote {
    let schemes = RemoteCatalog::new(&config.server.base_url)
      .color_schemes()
      .await
      .context("Failed to fetch color schemes from server")?;
    if json {
      println!("{}", serde_json::to_string_pretty(&schemes)?);
      return Ok(());
    }
    for (name, palette) in &schemes {
      let primary = palette.get("primary").map(String::as_str).unwrap_or("-");
      let accent = palette.get("accent").map(String::as_str).unwrap_or("-");
      println!("{:<16} primary {}  accent {}", name, primary, accent);
    }
    return Ok(());
  }

  if json {
    println!("{}", serde_json::to_string_pretty(COLOR_SCHEMES)?);
    return Ok(());
  }

  for scheme in COLOR_SCHEMES {
    let marker = if scheme.name == config.defaults.color_scheme { "*" } else { " " };
    println!(
      "{} {:<16} primary {}  secondary {}  accent {}  background {}",
      marker, scheme.name, scheme.primary, scheme.secondary, scheme.accent, scheme.background
    );
  }

  Ok(())
}

#[derive(Serialize)]
struct FeatureKinds {
  chart_types: Vec<String>,
  code_languages: Vec<String>,
}

impl FeatureKinds {
  fn local() -> Self {
    Self {
      chart_types: ChartType::ALL.iter().map(|t| t.as_str().to_string()).collect(),
      code_languages: CodeLanguage::ALL.iter().map(|l| l.as_str().to_string()).collect(),
    }
  }
}

/// List chart types and code languages
pub async fn cmd_features(config: &Config, remote: bool, json: bool) -> Result<()> {
  let kinds = if remote {
    let catalog = RemoteCatalog::new(&config.server.base_url);
    FeatureKinds {
      chart_types: catalog
        .chart_types()
        .await
        .context("Failed to fetch chart types from server")?,
      code_languages: catalog
        .code_languages()
        .await
        .context("Failed to fetch code languages from server")?,
    }
  } else {
    FeatureKinds::local()
  };

  if json {
    println!("{}", serde_json::to_string_pretty(&kinds)?);
    return Ok(());
  }

  println!("Chart types:    {}", kinds.chart_types.join(", "));
  println!("Code languages: {}", kinds.code_languages.join(", "));
  Ok(())
}
