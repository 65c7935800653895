//! Shared helpers for the e2e tests

use std::fs;
use std::path::Path;

/// Write `content` to `dir/name`, creating `dir` if needed.
pub fn write_fixture(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).expect("Failed to create fixture directory");
    fs::write(dir.join(name), content).expect("Failed to write fixture file");
}

/// Write `count` well-formed NGSI-LD entity documents.
pub fn write_ngsi_entities(dir: &Path, count: usize) {
    for i in 0..count {
        write_fixture(
            dir,
            &format!("entity_{i:03}.jsonld"),
            &format!(
                r#"{{"id": "urn:ngsi-ld:Room:A1-{i}", "type": "Room", "@context": "https://uri.etsi.org/ngsi-ld/v1/ngsi-ld-core-context.jsonld"}}"#
            ),
        );
    }
}

/// A datastream document shaped like the SensorThings CO2 stream.
pub const DATASTREAM_DOC: &str = r#"{
  "@iot.id": 1001,
  "name": "CO2 A1-1.01",
  "description": "CO2 ppm",
  "unitOfMeasurement": {"name": "ppm", "symbol": "ppm", "definition": "parts per million"}
}"#;

pub const OBSERVATIONS_DOC: &str = r#"[
  {"phenomenonTime": "2025-10-31T09:00:00Z", "result": 650},
  {"phenomenonTime": "2025-10-31T09:15:00Z", "result": 980}
]"#;

/// Split a CSV file into its header and data lines.
pub fn read_csv_lines(path: &Path) -> (String, Vec<String>) {
    let content = fs::read_to_string(path).expect("Failed to read CSV");
    let mut lines = content.lines().map(str::to_string);
    let header = lines.next().expect("CSV has no header");
    (header, lines.collect())
}
