use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

/// Attendance status value that counts a visit as attended.
pub const PRESENT: &str = "Presente";

// ---------------------------------------------------------------------------
// Record – one row of the training CSV
// ---------------------------------------------------------------------------

/// A single gym check-in / training event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "genero")]
    pub gender: String,
    #[serde(rename = "periodo_check_in")]
    pub check_in_period: String,
    #[serde(rename = "status_presenca")]
    pub attendance_status: String,
    #[serde(rename = "tipo_inscricao")]
    pub subscription_type: String,
    #[serde(rename = "idade")]
    pub age: u32,
    #[serde(rename = "calorias_queimadas")]
    pub calories_burned: f64,
    #[serde(rename = "tempo_treino_minutos")]
    pub training_minutes: f64,
    #[serde(rename = "tipo_treino")]
    pub training_type: String,
}

impl Record {
    pub fn is_present(&self) -> bool {
        self.attendance_status == PRESENT
    }
}

/// Header names every data file must carry.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "genero",
    "periodo_check_in",
    "status_presenca",
    "tipo_inscricao",
    "idade",
    "calorias_queimadas",
    "tempo_treino_minutos",
    "tipo_treino",
];

// ---------------------------------------------------------------------------
// FilterColumn – the four categorical columns exposed as sidebar filters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterColumn {
    Gender,
    Period,
    Status,
    Subscription,
}

impl FilterColumn {
    /// Sidebar order.
    pub const ALL: [FilterColumn; 4] = [
        FilterColumn::Gender,
        FilterColumn::Period,
        FilterColumn::Status,
        FilterColumn::Subscription,
    ];

    /// Label shown above the column's filter widget.
    pub fn label(self) -> &'static str {
        match self {
            FilterColumn::Gender => "Gênero",
            FilterColumn::Period => "Período",
            FilterColumn::Status => "Status",
            FilterColumn::Subscription => "Tipo de inscrição",
        }
    }

    /// Name of the backing CSV column.
    pub fn csv_name(self) -> &'static str {
        match self {
            FilterColumn::Gender => "genero",
            FilterColumn::Period => "periodo_check_in",
            FilterColumn::Status => "status_presenca",
            FilterColumn::Subscription => "tipo_inscricao",
        }
    }

    pub fn value_of(self, record: &Record) -> &str {
        match self {
            FilterColumn::Gender => &record.gender,
            FilterColumn::Period => &record.check_in_period,
            FilterColumn::Status => &record.attendance_status,
            FilterColumn::Subscription => &record.subscription_type,
        }
    }
}

impl fmt::Display for FilterColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// FilterOptions – sorted distinct values per filterable column
// ---------------------------------------------------------------------------

/// The values a user can pick from, discovered once at load time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub gender: BTreeSet<String>,
    pub period: BTreeSet<String>,
    pub status: BTreeSet<String>,
    pub subscription: BTreeSet<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[Record]) -> Self {
        let mut options = FilterOptions::default();
        for record in records {
            for column in FilterColumn::ALL {
                options
                    .values_mut(column)
                    .insert(column.value_of(record).to_string());
            }
        }
        options
    }

    pub fn values(&self, column: FilterColumn) -> &BTreeSet<String> {
        match column {
            FilterColumn::Gender => &self.gender,
            FilterColumn::Period => &self.period,
            FilterColumn::Status => &self.status,
            FilterColumn::Subscription => &self.subscription,
        }
    }

    fn values_mut(&mut self, column: FilterColumn) -> &mut BTreeSet<String> {
        match column {
            FilterColumn::Gender => &mut self.gender,
            FilterColumn::Period => &mut self.period,
            FilterColumn::Status => &mut self.status,
            FilterColumn::Subscription => &mut self.subscription,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All records of the session plus the pre-computed filter options.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    options: FilterOptions,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        let options = FilterOptions::from_records(&records);
        Dataset { records, options }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
