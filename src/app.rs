use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot, table};

const VIDEO_URL: &str = "https://youtu.be/Ig1-n4X8pCY?si=Imi41_o1KKrB5VbC";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: feature selectors ----
        egui::SidePanel::left("user_input")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: data table and every view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.label(RichText::new("Breast Cancer Detection").size(28.0).strong());
                    ui.add_space(8.0);

                    ui.label("Breast Cancer Database: ");
                    table::data_table(ui, &self.state.table);
                    ui.add_space(8.0);

                    ui.hyperlink_to("Watch the introduction video", VIDEO_URL);
                    ui.separator();

                    match self.state.render() {
                        Ok(views) => {
                            for view in &views {
                                plot::rendered_view(ui, view);
                            }
                        }
                        Err(e) => {
                            ui.label(RichText::new(format!("Error: {e}")).color(Color32::RED));
                        }
                    }
                });
        });
    }
}
