//! Native file pickers. These block the UI thread until the user answers.

use std::path::PathBuf;

use ml_platform::{DialogConfig, with_default_extension};
use rfd::FileDialog;

fn build(config: &DialogConfig) -> FileDialog {
    config
        .native_filters(cfg!(windows))
        .iter()
        .fold(FileDialog::new().set_title(config.title), |dialog, filter| {
            dialog.add_filter(filter.name, filter.extensions)
        })
}

/// Asks for a dataset to open. `None` if the user cancelled.
pub fn pick_dataset(config: &DialogConfig) -> Option<PathBuf> {
    let path = build(config).pick_file();
    if path.is_none() {
        log::debug!("Dataset dialog cancelled");
    }
    path
}

/// Asks where to save results, applying the default extension.
pub fn pick_save_path(config: &DialogConfig) -> Option<PathBuf> {
    let Some(path) = build(config).save_file() else {
        log::debug!("Save dialog cancelled");
        return None;
    };
    Some(with_default_extension(&path, config.default_extension))
}
