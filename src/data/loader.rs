use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Record, REQUIRED_COLUMNS};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("data row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the training dataset from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    log::info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Load the training dataset from any CSV source.
///
/// Layout: one header row naming at least the columns in
/// [`REQUIRED_COLUMNS`]; extra columns are ignored. Every cell is decoded
/// into a typed [`Record`] here, so a malformed number fails the load with
/// the offending row instead of surfacing later in the aggregates.
pub fn load_reader<R: Read>(source: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    check_columns(&headers)?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<Record>().enumerate() {
        let record = result.map_err(|source| LoadError::Row {
            row: row_no + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(Dataset::from_records(records))
}

fn check_columns(headers: &csv::StringRecord) -> Result<(), LoadError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingColumns(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "genero,periodo_check_in,status_presenca,tipo_inscricao,idade,calorias_queimadas,tempo_treino_minutos,tipo_treino";

    #[test]
    fn loads_typed_records() {
        let csv = format!(
            "{HEADER}\n\
             Masculino,Manhã,Presente,Mensal,28,512.5,65,Musculação\n\
             Feminino,Noite,Ausente,Anual,41,0,0,Funcional\n"
        );
        let dataset = load_reader(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        let first = &dataset.records()[0];
        assert_eq!(first.gender, "Masculino");
        assert_eq!(first.check_in_period, "Manhã");
        assert_eq!(first.age, 28);
        assert!((first.calories_burned - 512.5).abs() < 1e-9);
        assert!((first.training_minutes - 65.0).abs() < 1e-9);
        assert_eq!(dataset.records()[1].training_type, "Funcional");
    }

    #[test]
    fn extra_columns_and_reordering_are_tolerated() {
        let csv = "id,tipo_treino,genero,periodo_check_in,status_presenca,tipo_inscricao,idade,calorias_queimadas,tempo_treino_minutos,data\n\
                   7,Cardio,Feminino,Tarde,Presente,Anual,35,300,45,2024-05-01\n";
        let dataset = load_reader(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].training_type, "Cardio");
        assert_eq!(dataset.records()[0].gender, "Feminino");
    }

    #[test]
    fn whitespace_around_cells_is_trimmed() {
        let csv = format!("{HEADER}\n Masculino , Manhã ,Presente,Mensal, 28 ,512.5,65,Musculação\n");
        let dataset = load_reader(csv.as_bytes()).unwrap();

        assert_eq!(dataset.records()[0].gender, "Masculino");
        assert_eq!(dataset.records()[0].age, 28);
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let dataset = load_reader(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn reports_every_missing_column() {
        let csv = "genero,periodo_check_in,status_presenca,idade,calorias_queimadas,tempo_treino_minutos\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();

        match err {
            LoadError::MissingColumns(cols) => {
                assert_eq!(cols, vec!["tipo_inscricao".to_string(), "tipo_treino".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_number_names_the_row() {
        let csv = format!(
            "{HEADER}\n\
             Masculino,Manhã,Presente,Mensal,28,512.5,65,Musculação\n\
             Feminino,Noite,Ausente,Anual,quarenta,0,0,Funcional\n"
        );
        let err = load_reader(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, LoadError::Row { row: 2, .. }));
        assert!(err.to_string().starts_with("data row 2"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("exist.csv"));
    }
}
