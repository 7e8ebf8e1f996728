//! Decision-curve table writer: CSV table plus JSON summary.

use std::fs;
use std::path::{Path, PathBuf};

use correa_dca::NetBenefitTable;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::IoError;
use crate::domain::CohortName;

/// Writes decision-curve results for one cohort.
///
/// Creates the output directory on construction if it does not exist.
/// Output files are named `{cohort}_dca.csv` and `{cohort}_dca.json`.
pub struct TableWriter {
    output_dir: PathBuf,
    cohort: CohortName,
}

impl TableWriter {
    /// Create a new writer targeting the given directory and cohort name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputDirCreate`] if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %output_dir.display(), cohort = %cohort))]
    pub fn new(output_dir: &Path, cohort: CohortName) -> Result<Self, IoError> {
        fs::create_dir_all(output_dir).map_err(|e| IoError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!("output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            cohort,
        })
    }

    /// Write the table to `{cohort}_dca.csv`.
    ///
    /// One header row `Threshold,NetBenefit_Model,NetBenefit_All,NetBenefit_None`
    /// followed by one row per threshold in ascending order.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`IoError::WriteFile`] | The file cannot be created or flushed |
    /// | [`IoError::CsvWrite`] | A row cannot be encoded |
    #[instrument(skip_all)]
    pub fn write_csv(&self, table: &NetBenefitTable) -> Result<PathBuf, IoError> {
        let path = self.csv_path();
        let file = fs::File::create(&path).map_err(|e| IoError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        let mut wtr = csv::Writer::from_writer(file);
        for row in table.rows() {
            wtr.serialize(row).map_err(|e| IoError::CsvWrite {
                path: path.clone(),
                source: e,
            })?;
        }
        wtr.flush().map_err(|e| IoError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), n_rows = table.len(), "decision curve table written");
        Ok(path)
    }

    /// Write a summary of the table to `{cohort}_dca.json`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`IoError::JsonEncode`] | The summary cannot be encoded |
    /// | [`IoError::WriteFile`] | The file cannot be written |
    #[instrument(skip_all)]
    pub fn write_summary(&self, table: &NetBenefitTable) -> Result<PathBuf, IoError> {
        let path = self.summary_path();

        let useful = table.useful_thresholds();
        let best = table.max_model_net_benefit();
        let artifact = SummaryArtifact {
            cohort: self.cohort.as_str(),
            n_cases: table.n_cases(),
            positive_class: table.positive_class(),
            prevalence: table.prevalence(),
            n_thresholds: table.len(),
            n_useful_thresholds: useful.len(),
            useful_threshold_min: useful.first().copied(),
            useful_threshold_max: useful.last().copied(),
            best_threshold: best.map(|r| r.threshold),
            best_net_benefit_model: best.map(|r| r.net_benefit_model),
        };

        let json = serde_json::to_string_pretty(&artifact).map_err(|e| IoError::JsonEncode {
            path: path.clone(),
            source: e,
        })?;
        fs::write(&path, &json).map_err(|e| IoError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), "decision curve summary written");
        Ok(path)
    }

    /// Return the path of the CSV table. Does not write anything.
    #[must_use]
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_dca.csv", self.cohort.as_str()))
    }

    /// Return the path of the JSON summary. Does not write anything.
    #[must_use]
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_dca.json", self.cohort.as_str()))
    }
}

// --- Shadow struct for JSON serialization ---

#[derive(Serialize)]
struct SummaryArtifact<'a> {
    cohort: &'a str,
    n_cases: usize,
    positive_class: usize,
    prevalence: f64,
    n_thresholds: usize,
    n_useful_thresholds: usize,
    useful_threshold_min: Option<f64>,
    useful_threshold_max: Option<f64>,
    best_threshold: Option<f64>,
    best_net_benefit_model: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use correa_dca::{DcaConfig, NetBenefitRow, ProbabilityMatrix, ThresholdGrid};
    use tempfile::TempDir;

    fn test_table() -> NetBenefitTable {
        let labels = vec![1, 1, 0, 0];
        let probs = ProbabilityMatrix::new(vec![
            vec![0.1, 0.9],
            vec![0.4, 0.6],
            vec![0.4, 0.6],
            vec![0.9, 0.1],
        ])
        .unwrap();
        let grid = ThresholdGrid::from_values(vec![0.25, 0.5, 0.75]).unwrap();
        DcaConfig::new(1)
            .with_grid(grid)
            .build_table(&labels, &probs)
            .unwrap()
    }

    #[test]
    fn write_csv_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let cohort = CohortName::new("shengyi".into()).unwrap();
        let writer = TableWriter::new(dir.path(), cohort).unwrap();

        let path = writer.write_csv(&test_table()).unwrap();
        assert_eq!(path, dir.path().join("shengyi_dca.csv"));

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Threshold,NetBenefit_Model,NetBenefit_All,NetBenefit_None"
        );
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn write_csv_values_read_back() {
        let dir = TempDir::new().unwrap();
        let cohort = CohortName::new("readback".into()).unwrap();
        let writer = TableWriter::new(dir.path(), cohort).unwrap();
        let table = test_table();
        let path = writer.write_csv(&table).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<NetBenefitRow> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert!((rows[1].threshold - 0.5).abs() < 1e-12);
        assert!((rows[1].net_benefit_model - 0.25).abs() < 1e-12);
        assert!(rows.iter().all(|r| r.net_benefit_none == 0.0));
    }

    #[test]
    fn write_summary_json_structure() {
        let dir = TempDir::new().unwrap();
        let cohort = CohortName::new("dongying".into()).unwrap();
        let writer = TableWriter::new(dir.path(), cohort).unwrap();
        let path = writer.write_summary(&test_table()).unwrap();

        let content: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(content["cohort"], "dongying");
        assert_eq!(content["n_cases"], 4);
        assert_eq!(content["positive_class"], 1);
        assert_eq!(content["n_thresholds"], 3);
        assert!(content["prevalence"].is_number());
        assert!(content["best_threshold"].is_number());
        assert!(content.get("useful_threshold_min").is_some());
    }

    #[test]
    fn writer_creates_nested_output_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("results").join("dca");
        let cohort = CohortName::new("nested".into()).unwrap();
        let writer = TableWriter::new(&nested, cohort).unwrap();
        writer.write_csv(&test_table()).unwrap();
        assert!(nested.join("nested_dca.csv").exists());
    }

    #[test]
    fn paths_follow_cohort_name() {
        let dir = TempDir::new().unwrap();
        let cohort = CohortName::new("c1".into()).unwrap();
        let writer = TableWriter::new(dir.path(), cohort).unwrap();
        assert_eq!(writer.csv_path(), dir.path().join("c1_dca.csv"));
        assert_eq!(writer.summary_path(), dir.path().join("c1_dca.json"));
    }
}
