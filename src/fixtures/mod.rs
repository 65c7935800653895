//! Fixture discovery and syntactic validation
//!
//! Two fixture families are recognised:
//! - NGSI-LD entity documents: `*.jsonld`
//! - SensorThings API documents: `datastream_*.json` and `observations_*.json`
//!
//! Validation is a stub. A small sample of each family is parsed as JSON and
//! the parsed value is discarded; fields, types and references are never
//! inspected.

mod discover;

pub use discover::discover;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::IgnoredAny;

use crate::error::{EvalError, Result};

/// Number of NGSI-LD documents parsed per scan.
pub const NGSI_SAMPLE_LIMIT: usize = 3;

/// Number of STA datastream documents parsed per scan.
pub const DATASTREAM_SAMPLE_LIMIT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    NgsiLd,
    StaDatastream,
    StaObservations,
}

impl FixtureFormat {
    /// Glob matched against file names in the fixture directory.
    pub fn pattern(self) -> &'static str {
        match self {
            FixtureFormat::NgsiLd => "*.jsonld",
            FixtureFormat::StaDatastream => "datastream_*.json",
            FixtureFormat::StaObservations => "observations_*.json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureFile {
    pub path: PathBuf,
    pub format: FixtureFormat,
}

/// Parse a fixture as JSON, failing on malformed content.
pub fn parse_fixture(fixture: &FixtureFile) -> Result<()> {
    let file = File::open(&fixture.path).map_err(|e| EvalError::io(&fixture.path, e))?;
    serde_json::from_reader::<_, IgnoredAny>(BufReader::new(file))
        .map_err(|e| EvalError::parse(&fixture.path, e))?;
    tracing::debug!(path = %fixture.path.display(), format = ?fixture.format, "fixture parsed");
    Ok(())
}

fn parse_sample(files: &[FixtureFile], limit: usize) -> Result<usize> {
    let sample = &files[..files.len().min(limit)];
    for fixture in sample {
        parse_fixture(fixture)?;
    }
    Ok(sample.len())
}

/// NGSI-LD documents found in one directory. Nothing is parsed until
/// [`NgsiScan::check_sample`] runs.
#[derive(Debug, Clone)]
pub struct NgsiScan {
    pub entities: Vec<FixtureFile>,
    pub parsed: usize,
}

impl NgsiScan {
    pub fn count(&self) -> usize {
        self.entities.len()
    }

    /// Parse the first [`NGSI_SAMPLE_LIMIT`] entities.
    pub fn check_sample(&mut self) -> Result<usize> {
        self.parsed = parse_sample(&self.entities, NGSI_SAMPLE_LIMIT)?;
        Ok(self.parsed)
    }
}

/// STA documents found in one directory. Observation files are only counted.
#[derive(Debug, Clone)]
pub struct StaScan {
    pub datastreams: Vec<FixtureFile>,
    pub observations: Vec<FixtureFile>,
    pub parsed: usize,
}

impl StaScan {
    /// Parse the first [`DATASTREAM_SAMPLE_LIMIT`] datastreams.
    pub fn check_sample(&mut self) -> Result<usize> {
        self.parsed = parse_sample(&self.datastreams, DATASTREAM_SAMPLE_LIMIT)?;
        Ok(self.parsed)
    }
}

/// List NGSI-LD documents in `dir`.
pub fn scan_ngsi(dir: &Path) -> Result<NgsiScan> {
    let entities = discover(dir, FixtureFormat::NgsiLd)?;
    tracing::info!(dir = %dir.display(), count = entities.len(), "NGSI-LD scan");
    Ok(NgsiScan {
        entities,
        parsed: 0,
    })
}

/// List STA datastream and observation documents in `dir`.
pub fn scan_sta(dir: &Path) -> Result<StaScan> {
    let datastreams = discover(dir, FixtureFormat::StaDatastream)?;
    let observations = discover(dir, FixtureFormat::StaObservations)?;
    tracing::info!(
        dir = %dir.display(),
        datastreams = datastreams.len(),
        observations = observations.len(),
        "STA scan"
    );
    Ok(StaScan {
        datastreams,
        observations,
        parsed: 0,
    })
}
