/// One entry of a file dialog's type filter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    /// Extensions without the leading dot. `*` matches everything, but only
    /// the Windows dialogs honor it: rfd's Linux backends turn it into `*.*`,
    /// which hides files without an extension.
    pub extensions: &'static [&'static str],
}

impl FileFilter {
    pub const fn new(name: &'static str, extensions: &'static [&'static str]) -> Self {
        Self { name, extensions }
    }

    pub fn is_catch_all(&self) -> bool {
        self.extensions.contains(&"*")
    }
}

/// Settings for a file-open or file-save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogConfig {
    pub title: &'static str,
    pub filters: Vec<FileFilter>,
    /// Appended to a chosen save path that has no extension.
    pub default_extension: Option<&'static str>,
}

impl DialogConfig {
    /// Filters to hand to the native dialog.
    ///
    /// When the list has an "All files" entry but the platform cannot express
    /// one, no filters are applied at all so every file stays pickable.
    pub fn native_filters(&self, catch_all_supported: bool) -> &[FileFilter] {
        if catch_all_supported || !self.filters.iter().any(FileFilter::is_catch_all) {
            &self.filters
        } else {
            &[]
        }
    }
}

/// Application settings. All values are compiled in.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub sidebar_width: f32,
    pub open_dataset: DialogConfig,
    pub save_results: DialogConfig,
}

const ALL_FILES: FileFilter = FileFilter::new("All files", &["*"]);

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "ML Algorithms Platform".to_string(),
            window_size: [1000.0, 700.0],
            sidebar_width: 200.0,
            open_dataset: DialogConfig {
                title: "Select Dataset",
                filters: vec![
                    FileFilter::new("CSV files", &["csv"]),
                    FileFilter::new("Excel files", &["xlsx"]),
                    ALL_FILES,
                ],
                default_extension: None,
            },
            save_results: DialogConfig {
                title: "Save Results",
                filters: vec![
                    FileFilter::new("Text files", &["txt"]),
                    FileFilter::new("JSON files", &["json"]),
                    ALL_FILES,
                ],
                default_extension: Some("txt"),
            },
        }
    }
}
