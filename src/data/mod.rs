/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  dados-treino-final.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate header → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, distinct values per filter column
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSelection membership → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  metrics + frequency tables → Summary
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
