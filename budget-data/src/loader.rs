use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use budget_core::{Bracket, BracketTableError, Jurisdiction, JurisdictionTable, TaxEngine};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading bracket table data.
#[derive(Debug, Error)]
pub enum BracketTableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognised jurisdiction '{jurisdiction}' on row {row}")]
    InvalidJurisdiction { jurisdiction: String, row: usize },

    #[error("Invalid bracket table: {0}")]
    InvalidTable(#[from] BracketTableError),
}

impl From<csv::Error> for BracketTableLoaderError {
    fn from(err: csv::Error) -> Self {
        BracketTableLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a bracket table CSV file.
///
/// - `jurisdiction`: `federal`, `state` or `local`
/// - `upper_bound`: width of the income layer (empty for the unbounded top layer)
/// - `rate`: the marginal tax rate as a decimal (e.g., 0.10 for 10%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub jurisdiction: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for jurisdiction bracket tables stored as CSV.
///
/// Rows for the same jurisdiction must appear lowest layer first; rows for
/// different jurisdictions may be interleaved. Jurisdictions that do not
/// appear in the file keep their built-in tables.
pub struct BracketTableLoader;

impl BracketTableLoader {
    /// Parse bracket records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or a
    /// byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, BracketTableLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Group records by jurisdiction and validate each group as a table.
    ///
    /// Tables are returned in the order their jurisdiction first appears.
    pub fn build_tables(
        records: &[BracketRecord]
    ) -> Result<Vec<JurisdictionTable>, BracketTableLoaderError> {
        let mut order: Vec<Jurisdiction> = Vec::new();
        let mut groups: HashMap<Jurisdiction, Vec<Bracket>> = HashMap::new();

        for (index, record) in records.iter().enumerate() {
            let jurisdiction = Jurisdiction::parse(&record.jurisdiction).ok_or_else(|| {
                BracketTableLoaderError::InvalidJurisdiction {
                    jurisdiction: record.jurisdiction.clone(),
                    row: index + 1,
                }
            })?;

            if !groups.contains_key(&jurisdiction) {
                order.push(jurisdiction);
            }
            groups.entry(jurisdiction).or_default().push(Bracket {
                upper_bound: record.upper_bound,
                rate: record.rate,
            });
        }

        order
            .into_iter()
            .map(|jurisdiction| {
                let brackets = groups.remove(&jurisdiction).unwrap_or_default();
                debug!(%jurisdiction, brackets = brackets.len(), "validating table");
                JurisdictionTable::new(jurisdiction, brackets).map_err(Into::into)
            })
            .collect()
    }

    /// Build a [`TaxEngine`] from CSV records, starting from the built-in
    /// tables and replacing each jurisdiction present in the records.
    pub fn load_engine(records: &[BracketRecord]) -> Result<TaxEngine, BracketTableLoaderError> {
        let tables = Self::build_tables(records)?;
        info!(tables = tables.len(), "loaded bracket tables");

        Ok(tables
            .into_iter()
            .fold(TaxEngine::default(), TaxEngine::with_table))
    }

    /// Read, parse and build a [`TaxEngine`] from a CSV file on disk.
    pub fn load_engine_from_path(path: &Path) -> Result<TaxEngine, BracketTableLoaderError> {
        let file = File::open(path).map_err(|source| BracketTableLoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let records = Self::parse(file)?;
        Self::load_engine(&records)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const TEST_CSV: &str = r#"jurisdiction,upper_bound,rate
local,10000,0.02
local,,0.04
"#;

    #[test]
    fn test_parse_records() {
        let records = BracketTableLoader::parse(TEST_CSV.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                BracketRecord {
                    jurisdiction: "local".to_string(),
                    upper_bound: Some(dec!(10000)),
                    rate: dec!(0.02),
                },
                BracketRecord {
                    jurisdiction: "local".to_string(),
                    upper_bound: None,
                    rate: dec!(0.04),
                },
            ]
        );
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let csv = "jurisdiction,upper_bound,rate\n state , 5000 , 0.03 \n";

        let records = BracketTableLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(records[0].jurisdiction, "state");
        assert_eq!(records[0].upper_bound, Some(dec!(5000)));
    }

    #[test]
    fn test_parse_rejects_bad_rate() {
        let csv = "jurisdiction,upper_bound,rate\nlocal,,abc\n";

        let result = BracketTableLoader::parse(csv.as_bytes());

        assert!(matches!(result, Err(BracketTableLoaderError::CsvParse(_))));
    }

    #[test]
    fn test_build_tables_groups_by_jurisdiction() {
        let csv = "jurisdiction,upper_bound,rate\n\
                   state,5000,0.03\n\
                   local,,0.01\n\
                   state,,0.05\n";
        let records = BracketTableLoader::parse(csv.as_bytes()).unwrap();

        let tables = BracketTableLoader::build_tables(&records).unwrap();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].jurisdiction(), Jurisdiction::State);
        assert_eq!(
            tables[0].brackets(),
            &[
                Bracket::new(dec!(5000), dec!(0.03)),
                Bracket::unbounded(dec!(0.05)),
            ]
        );
        assert_eq!(tables[1].jurisdiction(), Jurisdiction::Local);
    }

    #[test]
    fn test_build_tables_rejects_unknown_jurisdiction() {
        let csv = "jurisdiction,upper_bound,rate\nlocal,,0.01\ncounty,,0.01\n";
        let records = BracketTableLoader::parse(csv.as_bytes()).unwrap();

        let result = BracketTableLoader::build_tables(&records);

        match result {
            Err(BracketTableLoaderError::InvalidJurisdiction { jurisdiction, row }) => {
                assert_eq!(jurisdiction, "county");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidJurisdiction, got {other:?}"),
        }
    }

    #[test]
    fn test_build_tables_rejects_invalid_table() {
        let csv = "jurisdiction,upper_bound,rate\nlocal,10000,0.02\n";
        let records = BracketTableLoader::parse(csv.as_bytes()).unwrap();

        let result = BracketTableLoader::build_tables(&records);

        assert!(matches!(
            result,
            Err(BracketTableLoaderError::InvalidTable(
                BracketTableError::MissingUnboundedBracket(Jurisdiction::Local)
            ))
        ));
    }

    #[test]
    fn test_load_engine_keeps_built_in_tables_for_missing_jurisdictions() {
        let records = BracketTableLoader::parse(TEST_CSV.as_bytes()).unwrap();

        let engine = BracketTableLoader::load_engine(&records).unwrap();
        let result = engine.compute_tax(dec!(100000));

        // 10000 * 0.02 + 90000 * 0.04
        assert_eq!(result.local_tax, dec!(3800.00));
        assert_eq!(result.federal_tax, dec!(16207.50));
        assert_eq!(result.state_tax, dec!(5451.40));
    }
}
