use std::collections::BTreeSet;

use super::model::{Dataset, FilterColumn, FilterOptions, Record};

// ---------------------------------------------------------------------------
// Filter predicate: which values are selected per column
// ---------------------------------------------------------------------------

/// Allowed values for each of the four filterable columns.
///
/// A record passes when its value in every column is in that column's set.
/// An empty set therefore matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub gender: BTreeSet<String>,
    pub period: BTreeSet<String>,
    pub status: BTreeSet<String>,
    pub subscription: BTreeSet<String>,
}

impl FilterSelection {
    /// Everything selected, i.e. show the whole dataset.
    pub fn all(options: &FilterOptions) -> Self {
        FilterSelection {
            gender: options.gender.clone(),
            period: options.period.clone(),
            status: options.status.clone(),
            subscription: options.subscription.clone(),
        }
    }

    pub fn values(&self, column: FilterColumn) -> &BTreeSet<String> {
        match column {
            FilterColumn::Gender => &self.gender,
            FilterColumn::Period => &self.period,
            FilterColumn::Status => &self.status,
            FilterColumn::Subscription => &self.subscription,
        }
    }

    pub fn values_mut(&mut self, column: FilterColumn) -> &mut BTreeSet<String> {
        match column {
            FilterColumn::Gender => &mut self.gender,
            FilterColumn::Period => &mut self.period,
            FilterColumn::Status => &mut self.status,
            FilterColumn::Subscription => &mut self.subscription,
        }
    }

    /// Flip a single value in one column's set.
    pub fn toggle(&mut self, column: FilterColumn, value: &str) {
        let selected = self.values_mut(column);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
    }

    pub fn select_all(&mut self, column: FilterColumn, options: &FilterOptions) {
        *self.values_mut(column) = options.values(column).clone();
    }

    pub fn select_none(&mut self, column: FilterColumn) {
        self.values_mut(column).clear();
    }

    /// True when every available value is selected in every column.
    pub fn is_default(&self, options: &FilterOptions) -> bool {
        FilterColumn::ALL
            .iter()
            .all(|&col| self.values(col) == options.values(col))
    }

    pub fn matches(&self, record: &Record) -> bool {
        FilterColumn::ALL
            .iter()
            .all(|&col| self.values(col).contains(col.value_of(record)))
    }
}

// ---------------------------------------------------------------------------
// FilteredView – records passing the current selection
// ---------------------------------------------------------------------------

/// Borrowed subset of a [`Dataset`], in dataset order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    records: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    pub fn from_records(records: Vec<&'a Record>) -> Self {
        FilteredView { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }
}

/// Return the records that pass all four column filters.
pub fn apply<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    FilteredView::from_records(
        dataset
            .records()
            .iter()
            .filter(|record| selection.matches(record))
            .collect(),
    )
}
