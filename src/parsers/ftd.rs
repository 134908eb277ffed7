use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::api::inventory::FtdCreateOrUpdateInput;
use crate::types::Uuid;

/// Columns every onboarding CSV must carry. `performance_tier` is optional
/// and only read for virtual devices.
pub const REQUIRED_COLUMNS: &[&str] = &["name", "licenses", "virtual"];

#[derive(Debug, Error)]
pub enum FtdCsvError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("row {row}: {field} must not be empty")]
    EmptyField { row: usize, field: &'static str },
}

/*
    name,licenses,virtual,performance_tier
    fw1,BASE;THREAT,true,FTDv5
    fw2,BASE,false,
*/
#[derive(Deserialize, Debug)]
struct FtdRecord {
    name: String,
    licenses: String,
    r#virtual: String,
    #[serde(default)]
    performance_tier: Option<String>,
}

/// One validated row of the onboarding CSV, not yet bound to an access
/// policy (the policy may be discovered over the network after parsing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtdRow {
    pub name: String,
    pub licenses: Vec<String>,
    pub virtual_device: bool,
    pub performance_tier: Option<String>,
}

impl FtdRow {
    pub fn into_input(self, fmc_access_policy_uid: Uuid) -> FtdCreateOrUpdateInput {
        FtdCreateOrUpdateInput::new(
            self.name,
            fmc_access_policy_uid,
            self.licenses,
            self.virtual_device,
            self.performance_tier,
        )
    }
}

pub fn parse_file(path: &Path) -> Result<Vec<FtdRow>, FtdCsvError> {
    let file = File::open(path).map_err(|source| FtdCsvError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_rows(file)
}

/// Parse and validate the onboarding CSV.
///
/// Fails on the first malformed row so no device is onboarded from a file
/// that is only partially usable.
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<FtdRow>, FtdCsvError> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS.iter().copied() {
        if !headers.iter().any(|header| header == column) {
            return Err(FtdCsvError::MissingColumn(column));
        }
    }

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        let record: FtdRecord = record?;
        // header occupies the first line
        let row = index + 2;

        if record.name.is_empty() {
            return Err(FtdCsvError::EmptyField { row, field: "name" });
        }
        if record.licenses.is_empty() {
            return Err(FtdCsvError::EmptyField {
                row,
                field: "licenses",
            });
        }

        let virtual_device = record.r#virtual.eq_ignore_ascii_case("true");
        let performance_tier = record.performance_tier.filter(|tier| !tier.is_empty());

        rows.push(FtdRow {
            name: record.name,
            licenses: record.licenses.split(';').map(str::to_owned).collect(),
            virtual_device,
            performance_tier,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;

    const POLICY_UID: &str = "59f8e7ca-50c1-4bfa-b74c-399fbb8bd25c";

    #[test]
    fn test_row_parses_licenses_and_tier() {
        let csv = indoc! {"
            name,licenses,virtual,performance_tier
            fw1,BASE;THREAT,true,FTDv5
        "};
        let rows = parse_rows(csv.as_bytes()).unwrap();

        assert_eq!(
            rows,
            vec![FtdRow {
                name: "fw1".to_owned(),
                licenses: vec!["BASE".to_owned(), "THREAT".to_owned()],
                virtual_device: true,
                performance_tier: Some("FTDv5".to_owned()),
            }]
        );
    }

    #[test]
    fn test_hardware_row_loses_tier_in_request() {
        let csv = indoc! {"
            name,licenses,virtual,performance_tier
            fw2,BASE,false,FTDv5
        "};
        let rows = parse_rows(csv.as_bytes()).unwrap();
        let input = rows[0].clone().into_input(POLICY_UID.parse().unwrap());

        assert!(!input.r#virtual);
        assert_eq!(input.performance_tier, None);
    }

    #[test]
    fn test_tier_column_may_be_absent() {
        let csv = indoc! {"
            name,licenses,virtual
            fw3,BASE,true
        "};
        let rows = parse_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows[0].performance_tier, None);
        assert!(rows[0].virtual_device);
    }

    #[test]
    fn test_virtual_is_case_insensitive_and_defaults_false() {
        let csv = indoc! {"
            name,licenses,virtual
            fw1,BASE,True
            fw2,BASE,yes
            fw3,BASE,
        "};
        let rows = parse_rows(csv.as_bytes()).unwrap();

        assert!(rows[0].virtual_device);
        assert!(!rows[1].virtual_device);
        assert!(!rows[2].virtual_device);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = indoc! {"
            name,virtual
            fw1,true
        "};
        let result = parse_rows(csv.as_bytes());

        assert!(matches!(result, Err(FtdCsvError::MissingColumn("licenses"))));
    }

    #[test]
    fn test_empty_name_is_rejected_with_row_number() {
        let csv = indoc! {"
            name,licenses,virtual
            fw1,BASE,true
            ,BASE,true
        "};
        let result = parse_rows(csv.as_bytes());

        assert!(matches!(
            result,
            Err(FtdCsvError::EmptyField { row: 3, field: "name" })
        ));
    }

    #[test]
    fn test_parse_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "name,licenses,virtual,performance_tier\nfw1,BASE;THREAT,true,FTDv10\n"
        )
        .unwrap();

        let rows = parse_file(file.path()).unwrap();
        assert_eq!(rows[0].name, "fw1");
        assert_eq!(rows[0].performance_tier.as_deref(), Some("FTDv10"));
    }

    #[test]
    fn test_parse_file_reports_missing_file() {
        let result = parse_file(Path::new("/nonexistent/ftds.csv"));
        assert!(matches!(result, Err(FtdCsvError::Io { .. })));
    }
}
