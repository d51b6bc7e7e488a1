use serde::Serialize;

use super::domain::Partition;

// Spreadsheet tools will not sniff UTF-8 without the BOM.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

#[derive(Debug, Serialize)]
struct GroupRow<'a> {
    #[serde(rename = "Group")]
    group: usize,
    #[serde(rename = "Name")]
    name: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode grouping as CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to finalize CSV buffer: {0}")]
    Buffer(String),
}

/// Renders the grouping as the two-column spreadsheet artifact: a header row,
/// then one `Group,Name` row per member, ordered by group and placement.
pub fn csv_bytes(partition: &Partition) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (index, group) in partition.groups.iter().enumerate() {
        for member in &group.members {
            writer.serialize(GroupRow {
                group: index + 1,
                name: member,
            })?;
        }
    }

    let encoded = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + encoded.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(&encoded);
    Ok(bytes)
}
