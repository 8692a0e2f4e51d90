pub mod catalog;
pub mod download;
pub mod error;
pub mod generator;
pub mod orchestrator;

pub use catalog::{CatalogError, RemoteCatalog, RemotePalette, RemoteTemplate};
pub use download::GeneratedDocument;
pub use error::{FALLBACK_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE, SubmitError};
pub use generator::{Generator, HttpGenerator};
pub use orchestrator::{SUBMIT_LABEL, SUBMITTING_LABEL, SubmitControl, SubmitOrchestrator, SubmitState};
