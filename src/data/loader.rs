use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{format_voltage_levels, SubstationDataset, SubstationRecord, TierFlags};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Anything that makes the source file unusable. Fatal at startup; a partially
/// loaded dataset is never served.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("substation record {index}: missing required attribute '{attr}'")]
    MissingAttribute { index: usize, attr: &'static str },

    #[error("substation record {index}: attribute '{attr}' value '{value}' is not a number")]
    InvalidNumber {
        index: usize,
        attr: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a substation dataset from an XML file.
pub fn load_file(path: &Path) -> Result<SubstationDataset, DataFormatError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataFormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text)
}

/// Parse an XML document. Records are `sst` elements at any nesting depth,
/// collected in document order.
pub fn parse_document(text: &str) -> Result<SubstationDataset, DataFormatError> {
    let doc = roxmltree::Document::parse(text)?;

    let mut records = Vec::new();
    for (index, node) in doc
        .descendants()
        .filter(|n| n.has_tag_name("sst"))
        .enumerate()
    {
        records.push(parse_record(index, node)?);
    }

    Ok(SubstationDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Per-record parsing
// ---------------------------------------------------------------------------

fn parse_record(
    index: usize,
    node: roxmltree::Node<'_, '_>,
) -> Result<SubstationRecord, DataFormatError> {
    let latitude = parse_number(index, "lat", require(index, node, "lat")?)?;
    let longitude = parse_number(index, "lon", require(index, node, "lon")?)?;

    let mut voltage_levels = parse_voltage_list(index, require(index, node, "vls")?)?;
    // Stable descending sort keeps duplicate values adjacent and in order.
    voltage_levels.sort_by(|a, b| b.total_cmp(a));

    let voltage_display = format_voltage_levels(&voltage_levels);
    let tier_flags = TierFlags::from_levels(&voltage_levels);

    Ok(SubstationRecord {
        description: require(index, node, "desc")?.to_string(),
        geography: require(index, node, "geo")?.to_string(),
        name: require(index, node, "name")?.to_string(),
        latitude,
        longitude,
        path: require(index, node, "path")?.to_string(),
        voltage_levels,
        voltage_display,
        tier_flags,
    })
}

fn require<'a>(
    index: usize,
    node: roxmltree::Node<'a, '_>,
    attr: &'static str,
) -> Result<&'a str, DataFormatError> {
    node.attribute(attr)
        .ok_or(DataFormatError::MissingAttribute { index, attr })
}

fn parse_number(index: usize, attr: &'static str, value: &str) -> Result<f64, DataFormatError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| DataFormatError::InvalidNumber {
            index,
            attr,
            value: value.to_string(),
        })
}

/// Split a comma-separated voltage list. Empty tokens are discarded, so
/// leading/trailing/doubled commas are tolerated.
fn parse_voltage_list(index: usize, value: &str) -> Result<Vec<f64>, DataFormatError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| DataFormatError::InvalidNumber {
                    index,
                    attr: "vls",
                    value: tok.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::VoltageTier;

    fn single(vls: &str) -> Result<SubstationDataset, DataFormatError> {
        parse_document(&format!(
            r#"<net><sst desc="330 kV substation" geo="north" name="Alpha"
                    lat="52.10" lon="19.30" path="lines/alpha" vls="{vls}"/></net>"#
        ))
    }

    #[test]
    fn parses_records_at_any_depth() {
        let dataset = parse_document(
            r#"<net>
                 <region name="north">
                   <area>
                     <sst desc="a" geo="n" name="Alpha" lat="54.3" lon="18.6"
                          path="p/a" vls="400,110"/>
                   </area>
                 </region>
                 <sst desc="b" geo="s" name="Beta" lat="50.0" lon="19.9"
                      path="p/b" vls="220"/>
               </net>"#,
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        // Document order, not depth order.
        assert_eq!(dataset.records[0].name, "Alpha");
        assert_eq!(dataset.records[1].name, "Beta");
    }

    #[test]
    fn voltage_levels_sorted_descending_with_duplicates() {
        let dataset = single("110,400,750,400").unwrap();
        let rec = &dataset.records[0];
        assert_eq!(rec.voltage_levels, vec![750.0, 400.0, 400.0, 110.0]);
        assert_eq!(rec.voltage_display, "750, 400, 400, 110");
        assert!(rec.tier_flags.contains(VoltageTier::Kv750));
        assert!(rec.tier_flags.contains(VoltageTier::Kv400));
        assert!(!rec.tier_flags.contains(VoltageTier::Kv220));
        assert!(rec.tier_flags.contains(VoltageTier::Kv110));
    }

    #[test]
    fn empty_tokens_are_discarded() {
        let dataset = single(",400,,110,").unwrap();
        assert_eq!(dataset.records[0].voltage_levels, vec![400.0, 110.0]);
        assert_eq!(dataset.records[0].voltage_display, "400, 110");
    }

    #[test]
    fn empty_voltage_list_yields_no_flags() {
        let dataset = single("").unwrap();
        let rec = &dataset.records[0];
        assert!(rec.voltage_levels.is_empty());
        assert_eq!(rec.voltage_display, "");
        for tier in VoltageTier::ALL {
            assert!(!rec.tier_flags.contains(tier));
        }
    }

    #[test]
    fn tier_match_is_numeric_not_textual() {
        // "10.0" and "10" parse to the same float and must both match.
        let dataset = single("10.0").unwrap();
        assert!(dataset.records[0].tier_flags.contains(VoltageTier::Kv10));
    }

    #[test]
    fn fractional_levels_keep_their_decimals() {
        let dataset = single("15.75,110").unwrap();
        assert_eq!(dataset.records[0].voltage_display, "110, 15.75");
    }

    #[test]
    fn attributes_are_copied_through() {
        let dataset = single("400").unwrap();
        let rec = &dataset.records[0];
        assert_eq!(rec.description, "330 kV substation");
        assert_eq!(rec.geography, "north");
        assert_eq!(rec.name, "Alpha");
        assert_eq!(rec.latitude, 52.10);
        assert_eq!(rec.longitude, 19.30);
        assert_eq!(rec.path, "lines/alpha");
    }

    #[test]
    fn missing_attribute_is_rejected() {
        let err = parse_document(
            r#"<net><sst desc="a" geo="n" name="Alpha" lat="52" lon="19" path="p"/></net>"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::MissingAttribute { index: 0, attr: "vls" }
        ));
    }

    #[test]
    fn non_numeric_latitude_is_rejected() {
        let err = parse_document(
            r#"<net><sst desc="a" geo="n" name="Alpha" lat="fifty-two" lon="19"
                    path="p" vls="400"/></net>"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::InvalidNumber { attr: "lat", .. }
        ));
    }

    #[test]
    fn non_numeric_voltage_token_is_rejected() {
        let err = single("400,abc").unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::InvalidNumber { attr: "vls", .. }
        ));
    }

    #[test]
    fn malformed_xml_is_rejected() {
        assert!(matches!(
            parse_document("<net><sst").unwrap_err(),
            DataFormatError::Xml(_)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("db/does-not-exist.xml")).unwrap_err();
        assert!(matches!(err, DataFormatError::Io { .. }));
    }
}
