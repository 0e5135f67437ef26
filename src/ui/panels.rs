use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::FilterColumn;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔍 Filtros");
    ui.separator();

    if state.dataset.is_empty() {
        ui.label("Nenhum registro carregado.");
        return;
    }

    // Clone what we need so we can mutate state inside the loop.
    let options = state.dataset.options().clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for column in FilterColumn::ALL {
                let all_values = options.values(column);

                // Show count of selected / total in the header
                let n_selected = state.selection.values(column).len();
                let n_total = all_values.len();
                let header_text = format!("{column}  ({n_selected}/{n_total})");

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(column.csv_name())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("Todos").clicked() {
                                state.select_all(column);
                            }
                            if ui.small_button("Nenhum").clicked() {
                                state.select_none(column);
                            }
                        });

                        for value in all_values {
                            let mut checked = state.selection.values(column).contains(value);
                            if ui.checkbox(&mut checked, value.as_str()).changed() {
                                state.toggle_filter_value(column, value);
                            }
                        }
                    });
            }

            ui.separator();
            let is_default = state.selection.is_default(state.dataset.options());
            if ui
                .add_enabled(!is_default, egui::Button::new("Limpar filtros"))
                .clicked()
            {
                state.reset_filters();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Arquivo", |ui: &mut Ui| {
            if ui.button("Abrir…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Exportar resumo…").clicked() {
                export_summary_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{}: {} registros carregados, {} visíveis",
            state.data_path.display(),
            state.dataset.len(),
            state.summary.metrics.total_visits
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Abrir dados de treino")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_file(&path);
    }
}

pub fn export_summary_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Exportar resumo")
        .add_filter("JSON", &["json"])
        .set_file_name("resumo.json")
        .save_file();

    if let Some(path) = file {
        match state.export_summary(&path) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to export summary: {e:#}");
                state.status_message = Some(format!("Erro: {e:#}"));
            }
        }
    }
}
