//! CSV-based multiplier table loader
//!
//! Expects a header row followed by `duration,multiplier` records, e.g.
//!
//! ```text
//! duration,multiplier
//! 3,0.20
//! 4,0.30
//! 5,0.50
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};

use super::DurationMultipliers;
use crate::error::{CommissionError, Result};

/// Load a duration multiplier table from a CSV file
pub fn load_duration_multipliers(path: &Path) -> Result<DurationMultipliers> {
    let file = File::open(path)?;
    let table = load_duration_multipliers_from_reader(file)?;
    info!(
        "Loaded {} duration multiplier(s) from {}",
        table.len(),
        path.display()
    );
    if table.is_empty() {
        warn!("{} has no multipliers; every deal will pay zero commission", path.display());
    }
    Ok(table)
}

/// Load a duration multiplier table from any reader (e.g., string buffer)
pub fn load_duration_multipliers_from_reader<R: Read>(reader: R) -> Result<DurationMultipliers> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut multipliers = BTreeMap::new();

    for result in reader.records() {
        let record = result?;
        if record.len() < 2 {
            return Err(CommissionError::Parse(format!(
                "expected duration,multiplier but got {} field(s)",
                record.len()
            )));
        }

        let duration: i64 = record[0]
            .parse()
            .map_err(|e| CommissionError::Parse(format!("duration '{}': {}", &record[0], e)))?;
        let multiplier: f64 = record[1]
            .parse()
            .map_err(|e| CommissionError::Parse(format!("multiplier '{}': {}", &record[1], e)))?;

        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(CommissionError::invalid(
                "multiplier",
                format!("{} for duration {} must be a non-negative number", multiplier, duration),
            ));
        }

        if multipliers.insert(duration, multiplier).is_some() {
            return Err(CommissionError::invalid(
                "duration",
                format!("{} appears more than once", duration),
            ));
        }
    }

    Ok(DurationMultipliers::from_pairs(multipliers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let data = "duration,multiplier\n1,0.05\n3, 0.25\n5,0.6\n";
        let table = load_duration_multipliers_from_reader(data.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(1), 0.05);
        assert_eq!(table.get(3), 0.25);
        assert_eq!(table.get(5), 0.6);
        // Not in the file, still zero
        assert_eq!(table.get(4), 0.0);
    }

    #[test]
    fn test_header_only_table_pays_nothing() {
        let table = load_duration_multipliers_from_reader("duration,multiplier\n".as_bytes()).unwrap();
        assert!(table.is_empty());
        for duration in crate::deal::SELECTABLE_DURATIONS {
            assert_eq!(table.get(duration), 0.0);
        }
        assert_eq!(
            table.unpaid_durations(&crate::deal::SELECTABLE_DURATIONS),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        let data = "duration,multiplier\n3,0.2\n3,0.3\n";
        let err = load_duration_multipliers_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CommissionError::InvalidInput { field: "duration", .. }));
    }

    #[test]
    fn test_rejects_negative_multiplier() {
        let data = "duration,multiplier\n3,-0.2\n";
        let err = load_duration_multipliers_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CommissionError::InvalidInput { field: "multiplier", .. }));
    }

    #[test]
    fn test_rejects_unparseable_values() {
        let data = "duration,multiplier\nthree,0.2\n";
        let err = load_duration_multipliers_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CommissionError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_duration_multipliers(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, CommissionError::Io(_)));
    }
}
