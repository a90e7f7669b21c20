//! Workflow model for the ML Algorithms Platform desktop shell.
//!
//! The GUI crate renders a [`Session`] and forwards clicks to it. Algorithms
//! are not implemented yet; running one produces a placeholder report.

mod catalog;
mod config;
mod error;
mod io;
mod report;
mod session;

pub use catalog::{Catalog, Category};
pub use config::{AppConfig, DialogConfig, FileFilter};
pub use error::{PlatformError, Result};
pub use io::{DatasetReference, with_default_extension, write_results};
pub use report::{RESULTS_PLACEHOLDER, ResultRecord};
pub use session::{Notification, NotificationKind, ParametersView, Session, Tab};
