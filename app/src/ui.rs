use crate::app::MlPlatformApp;

use eframe::egui::{self, Color32, RichText, Ui, ecolor::hex_color};
use ml_platform::{NotificationKind, ParametersView, Tab};

fn accent() -> Color32 {
    hex_color!("#2f6fab")
}

fn error_red() -> Color32 {
    hex_color!("#c0392b")
}

const STATUS_CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Global look: slightly roomier buttons than the egui default.
pub fn configure_style(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    });
}

/// File and Help menus.
pub fn draw_menu_bar(app: &mut MlPlatformApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Load Dataset").clicked() {
                    ui.close_menu();
                    app.load_dataset();
                }
                if ui.button("Save Results").clicked() {
                    ui.close_menu();
                    app.save_results();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ui.close_menu();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close_menu();
                    app.session.show_about();
                }
            });
        });
    });
}

pub fn draw_status_bar(app: &MlPlatformApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(app.session.status());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    app.session
                        .started_at()
                        .format(STATUS_CLOCK_FORMAT)
                        .to_string(),
                );
            });
        });
    });
}

/// Draws the catalog as one framed group of buttons per category.
pub fn draw_side_panel(app: &mut MlPlatformApp, ctx: &egui::Context) {
    let mut clicked: Option<String> = None;

    egui::SidePanel::left("algorithm_sidebar")
        .resizable(false)
        .exact_width(app.config.sidebar_width)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("ML Algorithms").size(15.0).strong());
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for category in app.session.catalog().categories() {
                    ui.group(|ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(&category.name).color(accent()));
                        for algo in &category.algorithms {
                            let selected = app.session.selection() == Some(algo.as_str());
                            let button = egui::Button::new(algo.as_str())
                                .selected(selected)
                                .min_size(egui::vec2(ui.available_width(), 0.0));
                            if ui.add(button).clicked() {
                                clicked = Some(algo.clone());
                            }
                        }
                    });
                }
            });
        });

    if let Some(name) = clicked {
        app.select_algorithm(&name);
    }
}

/// Header, tab strip and the active tab's content.
pub fn draw_central_panel(app: &mut MlPlatformApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Select an Algorithm to Begin")
                    .size(18.0)
                    .strong(),
            );
        });
        ui.add_space(4.0);

        let mut active_tab = app.session.active_tab();
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                ui.selectable_value(&mut active_tab, tab, tab.title());
            }
        });
        if active_tab != app.session.active_tab() {
            app.session.set_active_tab(active_tab);
        }
        ui.separator();

        match active_tab {
            Tab::Data => draw_data_tab(app, ui),
            Tab::Parameters => draw_parameters_tab(app, ui),
            Tab::Results => draw_results_tab(app, ui),
            Tab::Visualization => draw_visualization_tab(ui),
        }
    });
}

fn draw_data_tab(app: &mut MlPlatformApp, ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.label("Load your dataset to begin analysis");
        if ui.button("Load Dataset").clicked() {
            app.load_dataset();
        }
        if let Some(dataset) = app.session.dataset() {
            ui.label(format!("Current dataset: {}", dataset.base_name()));
        }
    });
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.label(RichText::new("Data Preview").strong());
        egui::ScrollArea::both()
            .id_salt("data_preview")
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut app.session.data_preview)
                        .code_editor()
                        .desired_rows(15)
                        .desired_width(f32::INFINITY),
                );
            });
    });
}

fn draw_parameters_tab(app: &mut MlPlatformApp, ui: &mut Ui) {
    // The view is rebuilt from session state every frame, so a new selection
    // fully replaces whatever the previous one drew.
    match app.session.parameters().title() {
        None => {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(ParametersView::PROMPT);
            });
        }
        Some(title) => {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(RichText::new(title).size(15.0).strong());
                if let Some(category) = app.session.selected_category() {
                    ui.label(RichText::new(category).color(accent()));
                }
                ui.add_space(10.0);
                ui.label(ParametersView::PLACEHOLDER);
            });
        }
    }

    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        let run = ui.add_enabled(
            app.session.run_enabled(),
            egui::Button::new("Run Algorithm"),
        );
        if run.clicked() {
            app.run_algorithm();
        }
    });
}

fn draw_results_tab(app: &mut MlPlatformApp, ui: &mut Ui) {
    egui::ScrollArea::vertical()
        .id_salt("results")
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut app.session.results_text)
                    .desired_rows(20)
                    .desired_width(f32::INFINITY),
            );
        });
}

fn draw_visualization_tab(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.label("Visualization area");
        ui.label("(plotting integration pending)");
    });
}

/// Shows the oldest queued message box, if any.
pub fn draw_notification(app: &mut MlPlatformApp, ctx: &egui::Context) {
    let Some(notification) = app.session.current_notification() else {
        return;
    };
    let mut dismissed = false;

    egui::Window::new(notification.title.as_str())
        .id(egui::Id::new("notification"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            match notification.kind {
                NotificationKind::Info => ui.label(notification.message.as_str()),
                NotificationKind::Error => {
                    ui.colored_label(error_red(), notification.message.as_str())
                }
            };
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        app.session.dismiss_notification();
    }
}
