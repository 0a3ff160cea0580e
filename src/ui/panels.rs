use eframe::egui::{self, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – feature selectors
// ---------------------------------------------------------------------------

/// Render the left "User Input" panel with both feature selectors.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("User Input");
    ui.separator();

    let names = state.feature_names();

    let mut first = state.selection.first.clone();
    feature_selector(ui, "select_feature", "Select Feature", &names, &mut first);
    state.select_first(&first);

    let mut second = state.selection.second.clone();
    feature_selector(
        ui,
        "select_another_feature",
        "Select Another Feature",
        &names,
        &mut second,
    );
    state.select_second(&second);
}

/// A labelled combo box offering exactly `names`.
fn feature_selector(ui: &mut Ui, id: &str, label: &str, names: &[String], current: &mut String) {
    ui.strong(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for name in names {
                ui.selectable_value(current, name.clone(), name.as_str());
            }
        });
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.separator();

        let [benign, malignant] = state.table.class_counts();
        ui.label(format!(
            "{} rows, {} features ({benign} benign, {malignant} malignant)",
            state.table.len(),
            state.table.columns().len(),
        ));
    });
}
