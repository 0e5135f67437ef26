use std::collections::BTreeMap;

use serde::Serialize;

use super::filter::FilteredView;

// ---------------------------------------------------------------------------
// Scalar metrics
// ---------------------------------------------------------------------------

/// Headline numbers for the metric cards. All zero for an empty view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub total_visits: usize,
    /// Percentage of visits with status "Presente", 0–100.
    pub attendance_rate: f64,
    pub avg_calories: f64,
    pub avg_duration: f64,
}

impl Metrics {
    pub fn from_view(view: &FilteredView<'_>) -> Self {
        if view.is_empty() {
            return Metrics::default();
        }

        let mut present = 0usize;
        let mut calories = 0.0;
        let mut minutes = 0.0;
        for record in view.iter() {
            if record.is_present() {
                present += 1;
            }
            calories += record.calories_burned;
            minutes += record.training_minutes;
        }

        let total = view.len();
        Metrics {
            total_visits: total,
            attendance_rate: 100.0 * present as f64 / total as f64,
            avg_calories: calories / total as f64,
            avg_duration: minutes / total as f64,
        }
    }

    pub fn total_visits_text(&self) -> String {
        self.total_visits.to_string()
    }

    pub fn attendance_rate_text(&self) -> String {
        format!("%{:.2}", self.attendance_rate)
    }

    pub fn avg_duration_text(&self) -> String {
        format!("{:.2}", self.avg_duration)
    }

    pub fn avg_calories_text(&self) -> String {
        format!("{:.2}", self.avg_calories)
    }
}

// ---------------------------------------------------------------------------
// Frequency tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub category: String,
    pub count: usize,
}

/// `(category, count)` pairs, most frequent first.
///
/// Equal counts keep the category's natural ascending order, which is
/// numeric for ages and lexicographic for text columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    pub entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Count occurrences of each key and sort by count descending.
    pub fn count<K, I>(keys: I) -> Self
    where
        K: Ord + ToString,
        I: IntoIterator<Item = K>,
    {
        let mut counts: BTreeMap<K, usize> = BTreeMap::new();
        for key in keys {
            *counts.entry(key).or_default() += 1;
        }

        let mut entries: Vec<FrequencyEntry> = counts
            .into_iter()
            .map(|(key, count)| FrequencyEntry {
                category: key.to_string(),
                count,
            })
            .collect();
        // Stable sort: ties stay in key order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        FrequencyTable { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Summary – everything the dashboard draws from a filtered view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub metrics: Metrics,
    pub by_gender: FrequencyTable,
    pub by_age: FrequencyTable,
    pub by_subscription: FrequencyTable,
    pub by_period: FrequencyTable,
    pub by_training: FrequencyTable,
}

/// Compute metrics and frequency tables for a filtered view.
pub fn summarize(view: &FilteredView<'_>) -> Summary {
    Summary {
        metrics: Metrics::from_view(view),
        by_gender: FrequencyTable::count(view.iter().map(|r| r.gender.as_str())),
        by_age: FrequencyTable::count(view.iter().map(|r| r.age)),
        by_subscription: FrequencyTable::count(view.iter().map(|r| r.subscription_type.as_str())),
        by_period: FrequencyTable::count(view.iter().map(|r| r.check_in_period.as_str())),
        by_training: FrequencyTable::count(view.iter().map(|r| r.training_type.as_str())),
    }
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.metrics.total_visits == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, FilterSelection};
    use crate::data::model::tests::record;
    use crate::data::model::{Dataset, FilterColumn, Record};

    fn with_numbers(mut r: Record, age: u32, calories: f64, minutes: f64) -> Record {
        r.age = age;
        r.calories_burned = calories;
        r.training_minutes = minutes;
        r
    }

    fn five_visits() -> Dataset {
        Dataset::from_records(vec![
            with_numbers(record("Masculino", "Manhã", "Presente", "Mensal"), 25, 500.0, 60.0),
            with_numbers(record("Feminino", "Noite", "Ausente", "Anual"), 32, 0.0, 0.0),
            with_numbers(record("Masculino", "Tarde", "Presente", "Anual"), 25, 350.0, 45.0),
            with_numbers(record("Feminino", "Manhã", "Presente", "Trimestral"), 41, 420.0, 50.0),
            with_numbers(record("Masculino", "Noite", "Ausente", "Mensal"), 32, 0.0, 0.0),
        ])
    }

    fn tables(summary: &Summary) -> [&FrequencyTable; 5] {
        [
            &summary.by_gender,
            &summary.by_age,
            &summary.by_subscription,
            &summary.by_period,
            &summary.by_training,
        ]
    }

    fn pairs(table: &FrequencyTable) -> Vec<(&str, usize)> {
        table.iter().map(|e| (e.category.as_str(), e.count)).collect()
    }

    #[test]
    fn default_selection_end_to_end() {
        let ds = five_visits();
        let view = apply(&ds, &FilterSelection::all(ds.options()));
        let summary = summarize(&view);

        assert_eq!(summary.metrics.total_visits, 5);
        assert!((summary.metrics.attendance_rate - 60.0).abs() < 1e-9);
        assert_eq!(summary.metrics.attendance_rate_text(), "%60.00");
        assert!((summary.metrics.avg_calories - 254.0).abs() < 1e-9);
        assert!((summary.metrics.avg_duration - 31.0).abs() < 1e-9);
        assert_eq!(pairs(&summary.by_gender), vec![("Masculino", 3), ("Feminino", 2)]);
    }

    #[test]
    fn excluded_subscriptions_zero_everything() {
        let ds = five_visits();
        let mut selection = FilterSelection::all(ds.options());
        selection.select_none(FilterColumn::Subscription);

        let summary = summarize(&apply(&ds, &selection));
        assert!(summary.is_empty());
        assert_eq!(summary.metrics, Metrics::default());
        assert!(tables(&summary).iter().all(|t| t.is_empty()));
        assert_eq!(summary.metrics.attendance_rate_text(), "%0.00");
        assert_eq!(summary.metrics.avg_calories_text(), "0.00");
    }

    #[test]
    fn tables_sum_to_total() {
        let ds = five_visits();
        let mut selection = FilterSelection::all(ds.options());
        selection.toggle(FilterColumn::Period, "Noite");

        let summary = summarize(&apply(&ds, &selection));
        assert_eq!(summary.metrics.total_visits, 3);
        for table in tables(&summary) {
            assert_eq!(table.total(), 3);
        }
    }

    #[test]
    fn sorted_descending_with_ordered_ties() {
        let table = FrequencyTable::count(["b", "a", "c", "a", "c", "a"]);
        assert_eq!(pairs(&table), vec![("a", 3), ("c", 2), ("b", 1)]);

        let tied = FrequencyTable::count(["Noite", "Manhã", "Tarde"]);
        assert_eq!(pairs(&tied), vec![("Manhã", 1), ("Noite", 1), ("Tarde", 1)]);
    }

    #[test]
    fn ages_tie_break_numerically() {
        let table = FrequencyTable::count([9u32, 100, 25, 100, 9, 25]);
        assert_eq!(pairs(&table), vec![("9", 2), ("25", 2), ("100", 2)]);
    }

    #[test]
    fn age_table_counts_by_value() {
        let ds = five_visits();
        let summary = summarize(&apply(&ds, &FilterSelection::all(ds.options())));
        assert_eq!(pairs(&summary.by_age), vec![("25", 2), ("32", 2), ("41", 1)]);
    }

    #[test]
    fn attendance_rate_stays_in_range() {
        let ds = five_visits();
        let mut selection = FilterSelection::all(ds.options());
        selection.toggle(FilterColumn::Status, "Ausente");

        let metrics = summarize(&apply(&ds, &selection)).metrics;
        assert_eq!(metrics.total_visits, 3);
        assert!((metrics.attendance_rate - 100.0).abs() < 1e-9);

        selection.toggle(FilterColumn::Status, "Ausente");
        selection.toggle(FilterColumn::Status, "Presente");
        let metrics = summarize(&apply(&ds, &selection)).metrics;
        assert_eq!(metrics.total_visits, 2);
        assert_eq!(metrics.attendance_rate, 0.0);
    }

    #[test]
    fn attendance_rate_is_scaled_before_dividing() {
        let ds = Dataset::from_records(vec![
            record("Masculino", "Manhã", "Presente", "Mensal"),
            record("Feminino", "Noite", "Ausente", "Anual"),
            record("Masculino", "Tarde", "Ausente", "Anual"),
        ]);
        let metrics = summarize(&apply(&ds, &FilterSelection::all(ds.options()))).metrics;

        assert_eq!(metrics.attendance_rate, 100.0 * 1.0 / 3.0);
        assert_eq!(metrics.attendance_rate_text(), "%33.33");
    }

    #[test]
    fn summarize_is_idempotent() {
        let ds = five_visits();
        let view = apply(&ds, &FilterSelection::all(ds.options()));
        assert_eq!(summarize(&view), summarize(&view));
    }

    #[test]
    fn summary_serializes_to_json() {
        let ds = five_visits();
        let summary = summarize(&apply(&ds, &FilterSelection::all(ds.options())));
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["metrics"]["total_visits"], 5);
        assert_eq!(json["by_gender"]["entries"][0]["category"], "Masculino");
        assert_eq!(json["by_gender"]["entries"][0]["count"], 3);
    }
}
