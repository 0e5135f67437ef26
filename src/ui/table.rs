use eframe::egui::{Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Dataset, Record, REQUIRED_COLUMNS};

const ROW_HEIGHT: f32 = 20.0;

/// Scrollable grid of every record in the dataset, ignoring filters.
pub fn raw_data_table(ui: &mut Ui, dataset: &Dataset) {
    let records = dataset.records();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(90.0), REQUIRED_COLUMNS.len())
        .max_scroll_height(360.0)
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for name in REQUIRED_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let record = &records[row.index()];
                for cell in record_cells(record) {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

/// Cell texts in [`REQUIRED_COLUMNS`] order.
fn record_cells(record: &Record) -> [String; 8] {
    [
        record.gender.clone(),
        record.check_in_period.clone(),
        record.attendance_status.clone(),
        record.subscription_type.clone(),
        record.age.to_string(),
        record.calories_burned.to_string(),
        record.training_minutes.to_string(),
        record.training_type.clone(),
    ]
}
