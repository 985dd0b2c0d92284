use csv::ReaderBuilder;
use ndarray::{Array1, Array2, Axis};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

const DIAGNOSIS_COLUMN: &str = "diagnosis";

#[derive(Debug)]
pub struct CsvEntry {
    pub diagnosis: Diagnosis,
    /// Values of the requested feature columns, in request order.
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnosis {
    Malignant,
    Benign,
}

impl Diagnosis {
    /// Binary target: malignant is `0`, benign is `1`.
    pub fn target(self) -> usize {
        match self {
            Diagnosis::Malignant => 0,
            Diagnosis::Benign => 1,
        }
    }
}

pub fn to_diagnosis(diagnosis: &str) -> Result<Diagnosis> {
    match diagnosis.trim() {
        "M" => Ok(Diagnosis::Malignant),
        "B" => Ok(Diagnosis::Benign),
        val => Err(Error::UnknownDiagnosis(val.to_string())),
    }
}

/// Per-column z-score: `(x - mean) / std`, using the population standard
/// deviation. Constant columns turn into `NaN`.
pub fn z_standard(data: &Array2<f64>) -> Result<Array2<f64>> {
    let mean = data.mean_axis(Axis(0)).ok_or(Error::EmptyDataset)?;
    let std_dev = data.std_axis(Axis(0), 0.0);

    Ok((data - &mean) / &std_dev)
}

pub fn parse<P: AsRef<Path>, C: AsRef<str>>(file_path: P, columns: &[C]) -> Result<Vec<CsvEntry>> {
    let file = File::open(file_path.as_ref())?;
    log::info!("reading dataset from {}", file_path.as_ref().display());

    parse_reader(BufReader::new(file), columns)
}

pub fn parse_reader<R: Read, C: AsRef<str>>(reader: R, columns: &[C]) -> Result<Vec<CsvEntry>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader.headers()?.clone();
    let position = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    };

    let diagnosis_index = position(DIAGNOSIS_COLUMN)?;
    let feature_indices = columns
        .iter()
        .map(|column| position(column.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let mut entries = Vec::new();

    for result in reader.records() {
        let record = result?;

        let diagnosis = to_diagnosis(record.get(diagnosis_index).unwrap_or_default())?;

        let values = feature_indices
            .iter()
            .map(|&index| {
                let value = record.get(index).unwrap_or_default().trim();
                value.parse::<f64>().map_err(|_| Error::InvalidValue {
                    column: headers[index].to_string(),
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        entries.push(CsvEntry { diagnosis, values });
    }

    log::debug!(
        "parsed {} entries with {} feature columns",
        entries.len(),
        feature_indices.len()
    );

    Ok(entries)
}

pub fn csv_entries_to_dataset(entries: &[CsvEntry]) -> Result<(Array2<f64>, Array1<usize>)> {
    let first = entries.first().ok_or(Error::EmptyDataset)?;

    let data: Vec<f64> = entries
        .iter()
        .flat_map(|entry| entry.values.iter().copied())
        .collect();
    let features = Array2::from_shape_vec((entries.len(), first.values.len()), data)?;
    let targets = entries
        .iter()
        .map(|entry| entry.diagnosis.target())
        .collect();

    Ok((features, targets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    const CSV: &str = "\
id,diagnosis,radius_mean,radius_worst,perimeter_worst,concave points_worst
842302,M,17.99,25.38,184.6,0.2654
8510426,B,13.54,15.11,99.7,0.1288
8510653,B,13.08,14.5,96.09,0.07283
";

    #[test]
    fn selects_named_columns_in_order() {
        let entries = parse_reader(
            CSV.as_bytes(),
            &["concave points_worst", "perimeter_worst", "radius_worst"],
        )
        .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].diagnosis, Diagnosis::Malignant);
        assert_eq!(entries[0].values, vec![0.2654, 184.6, 25.38]);
        assert_eq!(entries[2].values, vec![0.07283, 96.09, 14.5]);
    }

    #[test]
    fn malignant_is_negative_class() {
        let entries = parse_reader(CSV.as_bytes(), &["radius_mean"]).unwrap();
        let (x, y) = csv_entries_to_dataset(&entries).unwrap();

        assert_eq!(x.dim(), (3, 1));
        assert_eq!(y, array![0, 1, 1]);
    }

    #[test]
    fn reports_missing_column() {
        let err = parse_reader(CSV.as_bytes(), &["texture_worst"]).unwrap_err();

        assert!(matches!(err, Error::MissingColumn(name) if name == "texture_worst"));
    }

    #[test]
    fn reports_bad_rows() {
        let unknown = "id,diagnosis,radius_mean\n1,X,1.0\n";
        let garbled = "id,diagnosis,radius_mean\n1,M,abc\n";

        assert!(matches!(
            parse_reader(unknown.as_bytes(), &["radius_mean"]),
            Err(Error::UnknownDiagnosis(value)) if value == "X"
        ));
        assert!(matches!(
            parse_reader(garbled.as_bytes(), &["radius_mean"]),
            Err(Error::InvalidValue { .. })
        ));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let entries = parse_reader("id,diagnosis,radius_mean\n".as_bytes(), &["radius_mean"]).unwrap();

        assert!(matches!(
            csv_entries_to_dataset(&entries),
            Err(Error::EmptyDataset)
        ));
    }

    #[test]
    fn z_standard_centers_and_scales_columns() {
        let x = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]];

        let z = z_standard(&x).unwrap();

        assert_abs_diff_eq!(z[[0, 0]], -1.5 / 1.25_f64.sqrt(), epsilon = 1e-12);
        for column in z.axis_iter(Axis(1)) {
            assert_abs_diff_eq!(column.sum(), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(column.std(0.0), 1.0, epsilon = 1e-12);
        }
        assert!(z.column(0).abs_diff_eq(&z.column(1), 1e-12));
    }

    #[test]
    fn z_standard_leaves_constant_columns_unguarded() {
        let z = z_standard(&array![[1.0], [1.0]]).unwrap();

        assert!(z.iter().all(|value| value.is_nan()));
    }
}
