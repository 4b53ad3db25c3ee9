//! Validation rule engine for the import studio.
//!
//! The flow: build (or take the built-in) [`TemplateRegistry`], wrap it in
//! an [`Engine`], and call [`Engine::validate_named`] with a mapped table.
//! Every data problem becomes a [`tis_model::Violation`] in the returned
//! report; only configuration mistakes (an unknown template name) surface
//! as errors.

mod checks;
mod engine;
mod registry;
mod report;
mod templates;

pub mod error;

pub use engine::{Engine, validate};
pub use error::{Result, ValidateError};
pub use registry::TemplateRegistry;
pub use report::{ReportPayload, write_report_json};
pub use templates::{customer_template, vendor_template};
