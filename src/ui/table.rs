use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use super::{label_cell, LABEL_HEADER};
use crate::data::model::FeatureTable;

const ROW_HEIGHT: f32 = 18.0;
const TABLE_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Raw data grid
// ---------------------------------------------------------------------------

/// Every row of the table: index, feature columns, then the normalised label.
pub fn data_table(ui: &mut Ui, table: &FeatureTable) {
    let columns = table.columns();
    let labels = table.labels();

    ScrollArea::horizontal()
        .id_salt("data_table_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .vscroll(true)
                .max_scroll_height(TABLE_HEIGHT)
                .column(Column::auto().at_least(40.0))
                .columns(Column::initial(110.0).at_least(60.0), columns.len())
                .column(Column::auto().at_least(50.0))
                .header(ROW_HEIGHT, |mut header| {
                    header.col(|_ui| {});
                    for col in columns {
                        header.col(|ui| {
                            ui.strong(col.name.as_str());
                        });
                    }
                    header.col(|ui| {
                        ui.strong(LABEL_HEADER);
                    });
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, table.len(), |mut row| {
                        let i = row.index();
                        row.col(|ui| {
                            ui.label(i.to_string());
                        });
                        for col in columns {
                            row.col(|ui| {
                                ui.label(col.values[i].to_string());
                            });
                        }
                        row.col(|ui| {
                            ui.label(label_cell(labels[i]));
                        });
                    });
                });
        });
}
