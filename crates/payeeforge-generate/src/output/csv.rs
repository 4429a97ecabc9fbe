use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};
use payeeforge_core::BeneficiaryRecord;

const HEADER: &[&str] = &[
    "full_name",
    "bank_name",
    "primary_identifier",
    "secondary_identifier",
    "currency_code",
    "street1",
    "street2",
    "city",
    "region",
    "postal_code",
    "country",
    "country_code",
];

/// Write records as CSV with every field quoted.
pub fn write_records<W: Write>(
    writer: W,
    records: &[BeneficiaryRecord],
) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([
            record.full_name.as_str(),
            record.bank_name.as_str(),
            record.primary_identifier.as_str(),
            record.secondary_identifier.as_str(),
            record.currency_code.as_str(),
            record.street1.as_str(),
            record.street2.as_str(),
            record.city.as_str(),
            record.region.as_str(),
            record.postal_code.as_str(),
            record.country_display_name.as_str(),
            record.country_code.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
