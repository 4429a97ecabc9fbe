use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use payeeforge_core::{BeneficiaryRecord, GenerationRequest};
use payeeforge_generate::{GenerationEngine, output};

fn sample_records(count: u32) -> Vec<BeneficiaryRecord> {
    let request = GenerationRequest::new("IRL", count);
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    GenerationEngine::new()
        .generate(&request, &mut rng)
        .expect("generate sample records")
}

#[test]
fn csv_quotes_every_field() {
    let records = sample_records(4);
    let mut buffer = Vec::new();
    output::csv::write_records(&mut buffer, &records).expect("write csv");
    let text = String::from_utf8(buffer).expect("utf8 csv");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5, "header plus one line per record");
    assert!(lines[0].starts_with("\"full_name\""));
    for line in &lines {
        for field in line.split(',') {
            assert!(field.starts_with('"') && field.ends_with('"'), "unquoted field in {line}");
        }
    }
}

#[test]
fn csv_of_no_records_is_just_the_header() {
    let mut buffer = Vec::new();
    output::csv::write_records(&mut buffer, &[]).expect("write csv");
    let text = String::from_utf8(buffer).expect("utf8 csv");
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn json_round_trips_through_serde() {
    let records = sample_records(3);
    let mut buffer = Vec::new();
    output::json::write_records(&mut buffer, &records).expect("write json");
    let back: Vec<BeneficiaryRecord> =
        serde_json::from_slice(&buffer).expect("parse written json");
    assert_eq!(back, records);
}

#[test]
fn json_output_is_pretty_printed() {
    let records = sample_records(1);
    let mut buffer = Vec::new();
    output::json::write_records(&mut buffer, &records).expect("write json");
    let text = String::from_utf8(buffer).expect("utf8 json");
    assert!(text.contains("\n  "));
    assert!(text.trim_start().starts_with('['));
}
