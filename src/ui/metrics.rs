use eframe::egui::{self, RichText, Ui};

use crate::data::aggregate::Metrics;

/// Four metric cards side by side.
pub fn metrics_row(ui: &mut Ui, metrics: &Metrics) {
    let cards = [
        ("Total de visitas", metrics.total_visits_text()),
        ("Taxa de comparecimento", metrics.attendance_rate_text()),
        ("Média de tempo de treino", metrics.avg_duration_text()),
        ("Média de calorias queimadas", metrics.avg_calories_text()),
    ];

    ui.columns(cards.len(), |cols: &mut [Ui]| {
        for (col, (title, value)) in cols.iter_mut().zip(cards) {
            metric_card(col, title, &value);
        }
    });
}

fn metric_card(ui: &mut Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).weak());
        ui.label(RichText::new(value).size(28.0).strong());
    });
}
