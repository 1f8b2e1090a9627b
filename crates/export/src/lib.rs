//! # BusinessGraph Export
//!
//! Serializes a sampled curve table to CSV: one header row
//! (`quantity,revenue,cost,profit`) followed by one row per sample point.
//! Floats are written by the `csv` serializer, which never consults the
//! process locale, so the decimal separator is always `.`.

use core_types::Sample;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod error;

pub use error::ExportError;

/// Column order of every exported table.
pub const HEADERS: [&str; 4] = ["quantity", "revenue", "cost", "profit"];

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Writes `sample` as CSV into any writer.
    pub fn write<W: Write>(&self, sample: &Sample, writer: W) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        if sample.is_empty() {
            // serde only emits headers alongside the first record.
            csv_writer.write_record(HEADERS)?;
        }
        for point in sample {
            csv_writer.serialize(point)?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Renders `sample` as an in-memory CSV document.
    pub fn to_csv_string(&self, sample: &Sample) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write(sample, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Writes `sample` to `file_name` inside `dir` and returns the full path.
    ///
    /// `file_name` must be a bare name; directory components are rejected so
    /// the caller always controls the target directory.
    pub fn export(
        &self,
        sample: &Sample,
        dir: &Path,
        file_name: &str,
    ) -> Result<PathBuf, ExportError> {
        validate_file_name(file_name)?;
        let path = dir.join(file_name);

        let file = File::create(&path).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        self.write(sample, file)?;

        tracing::info!(path = %path.display(), rows = sample.len(), "Exported sample table.");
        Ok(path)
    }
}

fn validate_file_name(file_name: &str) -> Result<(), ExportError> {
    let trimmed = file_name.trim();
    let is_plain = !trimmed.is_empty()
        && trimmed == file_name
        && trimmed != "."
        && trimmed != ".."
        && !trimmed.contains(['/', '\\']);
    if is_plain {
        Ok(())
    } else {
        Err(ExportError::InvalidFileName(file_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{SamplePoint, UnitEconomics};

    fn small_sample() -> Sample {
        let econ = UnitEconomics::new(2.5, 1.0, 10.0).unwrap();
        Sample::from_points(vec![
            SamplePoint::at(&econ, 0.0),
            SamplePoint::at(&econ, 5.0),
            SamplePoint::at(&econ, 10.0),
        ])
    }

    #[test]
    fn writes_header_and_one_row_per_point() {
        let csv = CsvExporter::new().to_csv_string(&small_sample()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "quantity,revenue,cost,profit",
                "0.0,0.0,10.0,-10.0",
                "5.0,12.5,15.0,-2.5",
                "10.0,25.0,20.0,5.0",
            ]
        );
    }

    #[test]
    fn empty_sample_still_has_headers() {
        let csv = CsvExporter::new().to_csv_string(&Sample::default()).unwrap();
        assert_eq!(csv, "quantity,revenue,cost,profit\n");
    }

    #[test]
    fn values_round_trip_through_a_reader() {
        let sample = small_sample();
        let csv = CsvExporter::new().to_csv_string(&sample).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let parsed: Vec<SamplePoint> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(parsed, sample.points());
    }

    #[test]
    fn export_writes_into_the_chosen_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = CsvExporter::new()
            .export(&small_sample(), dir.path(), "businessgraph_data.csv")
            .unwrap();

        assert_eq!(path, dir.path().join("businessgraph_data.csv"));
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("quantity,revenue,cost,profit\n"));
        assert_eq!(contents.lines().count(), 4);
    }

    #[test]
    fn rejects_names_with_directories() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["", " ", "../escape.csv", "nested/data.csv", "..", " padded.csv"] {
            assert!(matches!(
                CsvExporter::new().export(&small_sample(), dir.path(), name),
                Err(ExportError::InvalidFileName(_))
            ));
        }
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(matches!(
            CsvExporter::new().export(&small_sample(), &missing, "data.csv"),
            Err(ExportError::Io { .. })
        ));
    }
}
