// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset loading and the typed record model.
//!
//! Parsing is strict: a measurement field that does not coerce to a finite
//! number fails the whole load. Dropping the bad row instead would silently
//! skew the per-species aggregates.

use tracing::{debug, info};

use crate::error::StoryError;

/// The canonical iris CSV location.
pub const IRIS_CSV_URL: &str =
    "https://raw.githubusercontent.com/uiuc-cse/data-fa14/gh-pages/data/iris.csv";

/// One of the four numeric measurements of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Measure {
    /// Sepal length in cm.
    SepalLength,
    /// Sepal width in cm.
    SepalWidth,
    /// Petal length in cm.
    PetalLength,
    /// Petal width in cm.
    PetalWidth,
}

impl Measure {
    /// All four measures, in column order.
    pub const ALL: [Self; 4] = [
        Self::SepalLength,
        Self::SepalWidth,
        Self::PetalLength,
        Self::PetalWidth,
    ];

    /// The CSV column name.
    pub fn column(self) -> &'static str {
        match self {
            Self::SepalLength => "sepal_length",
            Self::SepalWidth => "sepal_width",
            Self::PetalLength => "petal_length",
            Self::PetalWidth => "petal_width",
        }
    }

    /// The human-readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            Self::SepalLength => "Sepal Length",
            Self::SepalWidth => "Sepal Width",
            Self::PetalLength => "Petal Length",
            Self::PetalWidth => "Petal Width",
        }
    }

    /// Reads this measure out of a record.
    pub fn get(self, record: &Record) -> f64 {
        match self {
            Self::SepalLength => record.sepal_length,
            Self::SepalWidth => record.sepal_width,
            Self::PetalLength => record.petal_length,
            Self::PetalWidth => record.petal_width,
        }
    }
}

/// One dataset row. Immutable after load.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Sepal length in cm.
    pub sepal_length: f64,
    /// Sepal width in cm.
    pub sepal_width: f64,
    /// Petal length in cm.
    pub petal_length: f64,
    /// Petal width in cm.
    pub petal_width: f64,
    /// Species label.
    pub species: String,
}

/// A source of raw dataset text.
///
/// The transport is the only suspending operation in the system; everything
/// downstream of the fetched text is synchronous.
pub trait DataSource {
    /// Fetches the raw text behind `uri`.
    fn fetch(&self, uri: &str) -> Result<String, StoryError>;
}

/// Fetches over HTTP(S) with a blocking client.
#[cfg(feature = "http")]
#[derive(Debug, Default)]
pub struct HttpSource;

#[cfg(feature = "http")]
impl DataSource for HttpSource {
    fn fetch(&self, uri: &str) -> Result<String, StoryError> {
        let load_err = |e: reqwest::Error| StoryError::Load {
            uri: uri.to_string(),
            message: e.to_string(),
        };
        let response = reqwest::blocking::get(uri)
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(load_err)?;
        response.text().map_err(load_err)
    }
}

/// Serves fixed in-memory text, for tests and offline demos.
#[derive(Debug)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    /// Creates a source that returns `text` for every URI.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DataSource for StaticSource {
    fn fetch(&self, _uri: &str) -> Result<String, StoryError> {
        Ok(self.text.clone())
    }
}

/// The loaded dataset: records plus the species list in first-seen order.
#[derive(Clone, Debug)]
pub struct Dataset {
    records: Vec<Record>,
    species: Vec<String>,
}

impl Dataset {
    /// Fetches and parses the dataset behind `uri`.
    pub fn load(source: &dyn DataSource, uri: &str) -> Result<Self, StoryError> {
        debug!(uri, "fetching dataset");
        let text = source.fetch(uri)?;
        let dataset = Self::from_csv(&text)?;
        info!(
            records = dataset.records.len(),
            species = dataset.species.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parses CSV text with a header row naming the five columns.
    ///
    /// Column order is taken from the header, so reordered CSVs parse fine.
    /// Any measurement field that is not a finite number fails the whole
    /// load.
    pub fn from_csv(text: &str) -> Result<Self, StoryError> {
        let mut lines = text.lines();
        let header = lines.next().unwrap_or("");
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();

        let col_index = |name: &str| {
            columns
                .iter()
                .position(|c| *c == name)
                .ok_or_else(|| StoryError::MissingColumn {
                    column: name.to_string(),
                })
        };
        let measure_cols: Vec<(Measure, usize)> = Measure::ALL
            .iter()
            .map(|m| col_index(m.column()).map(|i| (*m, i)))
            .collect::<Result<_, _>>()?;
        let species_col = col_index("species")?;

        let mut records = Vec::new();
        for (i, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            // Header is line 1.
            let line_no = i + 2;
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();

            let field = |idx: usize| fields.get(idx).copied().unwrap_or("");
            let mut values = [0.0_f64; 4];
            for (slot, (measure, idx)) in values.iter_mut().zip(&measure_cols) {
                let raw = field(*idx);
                let parsed = raw.parse::<f64>().ok().filter(|v| v.is_finite());
                match parsed {
                    Some(v) => *slot = v,
                    None => {
                        return Err(StoryError::Parse {
                            line: line_no,
                            column: measure.column().to_string(),
                            value: raw.to_string(),
                        });
                    }
                }
            }
            records.push(Record {
                sepal_length: values[0],
                sepal_width: values[1],
                petal_length: values[2],
                petal_width: values[3],
                species: field(species_col).to_string(),
            });
        }

        let mut species: Vec<String> = Vec::new();
        for r in &records {
            if !species.contains(&r.species) {
                species.push(r.species.clone());
            }
        }

        Ok(Self { records, species })
    }

    /// Returns the records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the distinct species labels in first-seen order.
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// Returns the mean of `measure` over all records of `species`, or
    /// `None` when no record carries that label.
    pub fn mean(&self, measure: Measure, species: &str) -> Option<f64> {
        let mut sum = 0.0;
        let mut n = 0_usize;
        for r in &self.records {
            if r.species == species {
                sum += measure.get(r);
                n += 1;
            }
        }
        if n == 0 { None } else { Some(sum / n as f64) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
sepal_length,sepal_width,petal_length,petal_width,species
5.1,3.5,1.4,0.2,setosa
7.0,3.2,4.7,1.4,versicolor
6.3,3.3,6.0,2.5,virginica
4.9,3.0,1.4,0.2,setosa
";

    #[test]
    fn parses_records_and_first_seen_species_order() {
        let dataset = Dataset::from_csv(SAMPLE).expect("sample parses");
        assert_eq!(dataset.records().len(), 4);
        assert_eq!(dataset.species(), ["setosa", "versicolor", "virginica"]);
        assert_eq!(dataset.records()[0].sepal_length, 5.1);
        assert_eq!(dataset.records()[2].petal_width, 2.5);
    }

    #[test]
    fn reordered_columns_parse_by_header() {
        let text = "\
species,petal_width,sepal_length,sepal_width,petal_length
setosa,0.2,5.1,3.5,1.4
";
        let dataset = Dataset::from_csv(text).expect("reordered sample parses");
        let r = &dataset.records()[0];
        assert_eq!(r.species, "setosa");
        assert_eq!(r.sepal_length, 5.1);
        assert_eq!(r.petal_width, 0.2);
    }

    #[test]
    fn non_numeric_field_fails_the_whole_load() {
        let text = "\
sepal_length,sepal_width,petal_length,petal_width,species
5.1,3.5,1.4,0.2,setosa
oops,3.2,4.7,1.4,versicolor
";
        let err = Dataset::from_csv(text).unwrap_err();
        match err {
            StoryError::Parse {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "sepal_length");
                assert_eq!(value, "oops");
            }
            other => panic!("expected a parse error, got {other}"),
        }
    }

    #[test]
    fn nan_is_rejected_like_any_other_bad_field() {
        let text = "\
sepal_length,sepal_width,petal_length,petal_width,species
NaN,3.5,1.4,0.2,setosa
";
        assert!(matches!(
            Dataset::from_csv(text),
            Err(StoryError::Parse { .. })
        ));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let text = "sepal_length,sepal_width,petal_length,petal_width\n5.1,3.5,1.4,0.2\n";
        assert!(matches!(
            Dataset::from_csv(text),
            Err(StoryError::MissingColumn { column }) if column == "species"
        ));
    }

    #[test]
    fn mean_groups_by_species() {
        let dataset = Dataset::from_csv(SAMPLE).expect("sample parses");
        let m = dataset
            .mean(Measure::SepalLength, "setosa")
            .expect("setosa exists");
        assert!((m - 5.0).abs() < 1e-9);
        assert!(dataset.mean(Measure::SepalLength, "nonesuch").is_none());
    }

    #[test]
    fn single_species_mean_has_no_degenerate_division() {
        let text = "\
sepal_length,sepal_width,petal_length,petal_width,species
5.0,3.0,1.0,0.5,setosa
";
        let dataset = Dataset::from_csv(text).expect("single row parses");
        let m = dataset
            .mean(Measure::SepalLength, "setosa")
            .expect("one record is enough");
        assert_eq!(m, 5.0);
    }

    #[test]
    fn static_source_round_trips_through_load() {
        let source = StaticSource::new(SAMPLE);
        let dataset = Dataset::load(&source, "memory:iris").expect("load succeeds");
        assert_eq!(dataset.records().len(), 4);
    }
}
