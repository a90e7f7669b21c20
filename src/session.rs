//! The application controller.
//!
//! `Session` owns every piece of state the window displays. The GUI reads it
//! each frame and forwards user actions to the methods below; nothing else
//! mutates it.

use std::collections::VecDeque;
use std::path::Path;

use chrono::{DateTime, Local};
use log::{debug, error, info};

use crate::catalog::Catalog;
use crate::error::{PlatformError, Result};
use crate::io::{self, DatasetReference};
use crate::report::{RESULTS_PLACEHOLDER, ResultRecord};

/// The tabs of the work area, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Data,
    Parameters,
    Results,
    Visualization,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Data, Tab::Parameters, Tab::Results, Tab::Visualization];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Data => "Data",
            Tab::Parameters => "Parameters",
            Tab::Results => "Results",
            Tab::Visualization => "Visualization",
        }
    }
}

/// What the Parameters tab currently shows. Only one view exists at a time;
/// selecting a new algorithm replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParametersView {
    Prompt,
    Algorithm { name: String },
}

impl ParametersView {
    pub const PROMPT: &'static str = "Select an algorithm to configure parameters";
    pub const PLACEHOLDER: &'static str = "Parameters will be added here";

    pub fn title(&self) -> Option<String> {
        match self {
            ParametersView::Prompt => None,
            ParametersView::Algorithm { name } => Some(format!("{name} Parameters")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// A modal message box waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

pub struct Session {
    catalog: Catalog,
    selection: Option<String>,
    active_tab: Tab,
    parameters: ParametersView,
    dataset: Option<DatasetReference>,
    /// Editable preview text of the Data tab.
    pub data_preview: String,
    /// Editable text of the Results tab; this is what gets saved.
    pub results_text: String,
    status: String,
    started_at: DateTime<Local>,
    notifications: VecDeque<Notification>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: None,
            active_tab: Tab::Data,
            parameters: ParametersView::Prompt,
            dataset: None,
            data_preview: String::new(),
            results_text: RESULTS_PLACEHOLDER.to_string(),
            status: "Ready".to_string(),
            started_at: Local::now(),
            notifications: VecDeque::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn parameters(&self) -> &ParametersView {
        &self.parameters
    }

    pub fn dataset(&self) -> Option<&DatasetReference> {
        self.dataset.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Catalog category of the current selection.
    pub fn selected_category(&self) -> Option<&str> {
        self.selection
            .as_deref()
            .and_then(|name| self.catalog.category_of(name))
    }

    /// The Run control is usable once something has been selected.
    pub fn run_enabled(&self) -> bool {
        self.selection.is_some()
    }

    /// Handles a sidebar click.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::UnknownAlgorithm` if `name` is not in the
    /// catalog; the session is left unchanged.
    pub fn select_algorithm(&mut self, name: &str) -> Result<()> {
        if !self.catalog.contains(name) {
            return Err(PlatformError::UnknownAlgorithm {
                name: name.to_string(),
            });
        }
        info!("Selected algorithm: {name}");
        self.selection = Some(name.to_string());
        self.status = format!("Selected: {name}");
        self.parameters = ParametersView::Algorithm {
            name: name.to_string(),
        };
        self.active_tab = Tab::Parameters;
        Ok(())
    }

    /// Runs the placeholder execution for the current selection.
    ///
    /// Returns `None` and changes nothing when no algorithm is selected.
    pub fn run(&mut self) -> Option<ResultRecord> {
        let Some(name) = self.selection.clone() else {
            debug!("Run requested with no algorithm selected");
            return None;
        };
        self.status = format!("Running {name}...");
        info!("Running {name}");

        let record = ResultRecord::now(name.as_str());
        self.results_text = record.render();
        self.active_tab = Tab::Results;
        self.status = format!("Completed: {name}");
        self.notifications.push_back(Notification::info(
            "Complete",
            format!("{name} executed successfully!"),
        ));
        Some(record)
    }

    /// Records a user-chosen dataset path. The file is not read.
    pub fn load_dataset(&mut self, path: &Path) {
        let dataset = DatasetReference::new(path);
        info!("Dataset selected: {}", dataset.path.display());
        self.status = format!("Loaded: {}", dataset.base_name());
        self.data_preview = dataset.preview_text();
        self.dataset = Some(dataset);
        self.notifications.push_back(Notification::info(
            "Success",
            "Dataset loaded successfully!",
        ));
    }

    /// Writes the Results text verbatim to `path`.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Save` if the file cannot be written.
    pub fn save_results(&mut self, path: &Path) -> Result<()> {
        io::write_results(path, &self.results_text)?;
        info!("Results saved to {}", path.display());
        self.notifications.push_back(Notification::info(
            "Success",
            "Results saved successfully!",
        ));
        Ok(())
    }

    /// Queues the Help > About message box.
    pub fn show_about(&mut self) {
        self.notifications.push_back(Notification::info(
            "About",
            format!(
                "ML Algorithms Platform\nVersion {}\n\n\
                 A cross-platform desktop application for machine learning algorithms.\n\n\
                 Built with Rust and egui",
                env!("CARGO_PKG_VERSION")
            ),
        ));
    }

    /// Logs `err` and queues it as an error message box.
    pub fn report_error(&mut self, err: &PlatformError) {
        error!("{err}");
        self.notifications.push_back(Notification::error(err.to_string()));
    }

    /// The message box currently on screen, if any.
    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.pop_front();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_initial_state() {
        let session = Session::default();
        assert_eq!(session.selection(), None);
        assert!(!session.run_enabled());
        assert_eq!(session.active_tab(), Tab::Data);
        assert_eq!(session.parameters(), &ParametersView::Prompt);
        assert_eq!(session.results_text, RESULTS_PLACEHOLDER);
        assert_eq!(session.status(), "Ready");
        assert!(session.current_notification().is_none());
    }

    #[test]
    fn test_every_selection_enables_run_and_shows_parameters() {
        let catalog = Catalog::builtin();
        for name in catalog.algorithms() {
            let mut session = Session::new(catalog.clone());
            session.select_algorithm(name).unwrap();
            assert!(session.run_enabled(), "{name}");
            assert_eq!(session.active_tab(), Tab::Parameters, "{name}");
            assert_eq!(session.selection(), Some(name));
            assert_eq!(session.status(), format!("Selected: {name}"));
        }
    }

    #[test]
    fn test_reselection_replaces_parameters_view() {
        let mut session = Session::default();
        session.select_algorithm("K-Means").unwrap();
        session.select_algorithm("PCA").unwrap();
        assert_eq!(
            session.parameters(),
            &ParametersView::Algorithm {
                name: "PCA".to_string()
            }
        );
        assert_eq!(session.parameters().title().as_deref(), Some("PCA Parameters"));

        session.select_algorithm("PCA").unwrap();
        assert_eq!(session.parameters().title().as_deref(), Some("PCA Parameters"));
    }

    #[test]
    fn test_selected_category_follows_selection() {
        let mut session = Session::default();
        assert_eq!(session.selected_category(), None);
        session.select_algorithm("Gradient Boosting").unwrap();
        assert_eq!(session.selected_category(), Some("Ensemble Methods"));
        session.select_algorithm("CNN").unwrap();
        assert_eq!(session.selected_category(), Some("Neural Networks"));
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let mut session = Session::default();
        let err = session.select_algorithm("Transformer").unwrap_err();
        assert!(matches!(err, PlatformError::UnknownAlgorithm { .. }));
        assert_eq!(session.selection(), None);
        assert_eq!(session.active_tab(), Tab::Data);
    }

    #[test]
    fn test_run_writes_report_and_switches_tab() {
        let mut session = Session::default();
        session.select_algorithm("Linear Regression").unwrap();
        let record = session.run().unwrap();

        assert_eq!(record.algorithm, "Linear Regression");
        assert!(session.results_text.contains("Linear Regression"));
        assert_eq!(session.results_text, record.render());
        assert_eq!(session.active_tab(), Tab::Results);
        assert_eq!(session.status(), "Completed: Linear Regression");
        assert_eq!(
            session.current_notification(),
            Some(&Notification::info(
                "Complete",
                "Linear Regression executed successfully!"
            ))
        );
    }

    #[test]
    fn test_run_without_selection_is_noop() {
        let mut session = Session::default();
        session.results_text = "kept".to_string();
        assert!(session.run().is_none());
        assert_eq!(session.results_text, "kept");
        assert_eq!(session.active_tab(), Tab::Data);
        assert_eq!(session.status(), "Ready");
        assert!(session.current_notification().is_none());
    }

    #[test]
    fn test_load_dataset_accepts_missing_file() {
        let mut session = Session::default();
        session.load_dataset(Path::new("/definitely/not/here/train.xlsx"));
        assert!(session.data_preview.contains("train.xlsx"));
        assert_eq!(session.status(), "Loaded: train.xlsx");
        assert_eq!(
            session.dataset().map(|d| d.base_name()),
            Some("train.xlsx".to_string())
        );
        assert_eq!(
            session.current_notification().map(|n| n.message.as_str()),
            Some("Dataset loaded successfully!")
        );
    }

    #[test]
    fn test_save_after_run_matches_display() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut session = Session::default();
        session.select_algorithm("DBSCAN").unwrap();
        session.run();
        session.save_results(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), session.results_text);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");

        let mut session = Session::default();
        let before = session.results_text.clone();
        let err = session.save_results(&path).unwrap_err();
        assert!(matches!(err, PlatformError::Save { .. }));
        assert_eq!(session.results_text, before);
        assert!(session.current_notification().is_none());

        session.report_error(&err);
        let shown = session.current_notification().unwrap();
        assert_eq!(shown.kind, NotificationKind::Error);
        assert_eq!(shown.title, "Error");
    }

    #[test]
    fn test_about_mentions_version() {
        let mut session = Session::default();
        session.show_about();
        let about = session.current_notification().unwrap();
        assert_eq!(about.title, "About");
        assert!(about.message.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_notifications_shown_in_order() {
        let mut session = Session::default();
        session.load_dataset(Path::new("a.csv"));
        session.select_algorithm("SVM").unwrap();
        session.run();

        assert_eq!(session.current_notification().unwrap().title, "Success");
        session.dismiss_notification();
        assert_eq!(session.current_notification().unwrap().title, "Complete");
        session.dismiss_notification();
        assert!(session.current_notification().is_none());
        session.dismiss_notification();
        assert!(session.current_notification().is_none());
    }
}
