pub mod color;
pub mod config;
pub mod draft;
pub mod error;
pub mod feature;
pub mod form;
pub mod payload;
pub mod template;

pub use color::{COLOR_SCHEMES, ColorScheme, DEFAULT_COLOR_SCHEME};
pub use config::{Config, DefaultsConfig, LoggingConfig, OutputConfig, ServerConfig, TemplateConfig};
pub use draft::{ChartDraft, CodeDraft, FormDraft, SectionDraft, TableDraft};
pub use error::{Error, Result};
pub use feature::{
  Chart, ChartType, CodeBlock, CodeLanguage, Feature, FeatureId, FeatureKind, Table, TableData,
};
pub use form::{Form, Section, USER_FIELDS, UserData};
pub use payload::{ChartEntry, CodeEntry, SubmissionPayload, TableEntry, download_filename};
pub use template::{Template, TemplateRegistry, display_name};
