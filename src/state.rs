use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::color::ColorMap;
use crate::data::aggregate::{summarize, Summary};
use crate::data::filter::{apply, FilterSelection};
use crate::data::model::{Dataset, FilterColumn};

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// One colour map per chart, keyed on the unfiltered dataset.
#[derive(Debug, Clone, Default)]
pub struct ChartColors {
    pub gender: ColorMap,
    pub age: ColorMap,
    pub subscription: ColorMap,
    pub period: ColorMap,
    pub training: ColorMap,
}

impl ChartColors {
    fn from_summary(full: &Summary) -> Self {
        Self {
            gender: ColorMap::from_table(&full.by_gender),
            age: ColorMap::from_table(&full.by_age),
            subscription: ColorMap::from_table(&full.by_subscription),
            period: ColorMap::from_table(&full.by_period),
            training: ColorMap::from_table(&full.by_training),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, immutable until another file is opened.
    pub dataset: Dataset,

    /// Where `dataset` was read from.
    pub data_path: PathBuf,

    /// Per-column filter selections.
    pub selection: FilterSelection,

    /// Metrics and frequency tables for the current selection.
    pub summary: Summary,

    pub colors: ChartColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Dataset, data_path: PathBuf) -> Self {
        let mut state = Self {
            dataset: Dataset::default(),
            data_path: PathBuf::new(),
            selection: FilterSelection::default(),
            summary: Summary::default(),
            colors: ChartColors::default(),
            status_message: None,
        };
        state.set_dataset(dataset, data_path);
        state
    }

    /// Ingest a newly loaded dataset, reset filters and colours.
    pub fn set_dataset(&mut self, dataset: Dataset, data_path: PathBuf) {
        self.selection = FilterSelection::all(dataset.options());
        self.dataset = dataset;
        self.data_path = data_path;
        self.refilter();
        self.colors = ChartColors::from_summary(&self.summary);
        self.status_message = None;
    }

    /// Replace the dataset with the contents of another file. On failure
    /// the current dataset is kept and the error goes to the status line.
    pub fn open_file(&mut self, path: &Path) {
        match crate::data::loader::load_file(path) {
            Ok(dataset) => self.set_dataset(dataset, path.to_path_buf()),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Erro: {e}"));
            }
        }
    }

    /// Recompute the summary after a filter change.
    pub fn refilter(&mut self) {
        let view = apply(&self.dataset, &self.selection);
        self.summary = summarize(&view);
        log::debug!(
            "{} of {} records visible",
            self.summary.metrics.total_visits,
            self.dataset.len()
        );
        if self.summary.is_empty() && !self.dataset.is_empty() {
            log::warn!("Current filters match no records");
        }
    }

    /// Toggle a single value in a column's filter.
    pub fn toggle_filter_value(&mut self, column: FilterColumn, value: &str) {
        self.selection.toggle(column, value);
        self.refilter();
    }

    /// Select all values in a column.
    pub fn select_all(&mut self, column: FilterColumn) {
        self.selection.select_all(column, self.dataset.options());
        self.refilter();
    }

    /// Deselect all values in a column.
    pub fn select_none(&mut self, column: FilterColumn) {
        self.selection.select_none(column);
        self.refilter();
    }

    /// Restore the default "everything selected" filters.
    pub fn reset_filters(&mut self) {
        self.selection = FilterSelection::all(self.dataset.options());
        self.refilter();
    }

    pub fn summary_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.summary).context("serializing summary")
    }

    /// Write the current summary as pretty JSON.
    pub fn export_summary(&self, path: &Path) -> Result<()> {
        let json = self.summary_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        log::info!("Exported summary to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn state() -> AppState {
        let dataset = Dataset::from_records(vec![
            record("Masculino", "Manhã", "Presente", "Mensal"),
            record("Feminino", "Noite", "Ausente", "Anual"),
            record("Masculino", "Tarde", "Presente", "Anual"),
        ]);
        AppState::new(dataset, PathBuf::from("teste.csv"))
    }

    #[test]
    fn starts_with_everything_selected() {
        let state = state();
        assert_eq!(state.summary.metrics.total_visits, 3);
        assert!(state.selection.is_default(state.dataset.options()));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn filter_changes_recompute_summary() {
        let mut state = state();
        state.toggle_filter_value(FilterColumn::Gender, "Feminino");
        assert_eq!(state.summary.metrics.total_visits, 2);
        assert!((state.summary.metrics.attendance_rate - 100.0).abs() < 1e-9);

        state.select_none(FilterColumn::Period);
        assert!(state.summary.is_empty());

        state.select_all(FilterColumn::Period);
        assert_eq!(state.summary.metrics.total_visits, 2);

        state.reset_filters();
        assert_eq!(state.summary.metrics.total_visits, 3);
    }

    #[test]
    fn colors_survive_filtering() {
        let mut state = state();
        let before = state.colors.gender.color_for("Feminino");
        state.toggle_filter_value(FilterColumn::Gender, "Masculino");
        assert_eq!(state.colors.gender.color_for("Feminino"), before);
    }

    #[test]
    fn failed_open_keeps_current_dataset() {
        let mut state = state();
        state.open_file(Path::new("does/not/exist.csv"));

        assert_eq!(state.dataset.len(), 3);
        assert_eq!(state.data_path, PathBuf::from("teste.csv"));
        assert!(state.status_message.is_some());
    }

    #[test]
    fn summary_json_reflects_current_filters() {
        let mut state = state();
        state.select_none(FilterColumn::Status);
        let json: serde_json::Value = serde_json::from_str(&state.summary_json().unwrap()).unwrap();

        assert_eq!(json["metrics"]["total_visits"], 0);
        assert_eq!(json["by_gender"]["entries"].as_array().map(Vec::len), Some(0));
    }
}
