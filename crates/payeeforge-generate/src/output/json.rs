use std::io::Write;

use payeeforge_core::BeneficiaryRecord;

/// Write records as a pretty-printed JSON array.
pub fn write_records<W: Write>(
    writer: W,
    records: &[BeneficiaryRecord],
) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, records)
}
