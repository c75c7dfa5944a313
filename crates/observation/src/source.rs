//! Record sources: CSV files and in-memory fixtures

use crate::record::{parse_int_lenient, parse_text_lenient, Observation};
use crate::SourceError;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Source of observations, pulled one at a time in row order
pub trait RecordSource {
    /// Next observation, or `None` when the source is drained
    fn next_observation(&mut self) -> Result<Option<Observation>, SourceError>;
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Default)]
struct ColumnMap {
    hr: Option<usize>,
    hrv: Option<usize>,
    rr: Option<usize>,
    spo2: Option<usize>,
    drowsy: Option<usize>,
    age: Option<usize>,
    sex: Option<usize>,
    accessories: Option<usize>,
    characteristics: Option<usize>,
    demographic: Option<usize>,
}

impl ColumnMap {
    /// Match recognized column names case-insensitively; anything else is
    /// ignored. A recognized column missing from the header simply leaves
    /// its field absent on every row.
    fn from_header(fields: &[String]) -> Self {
        let mut map = Self::default();
        for (pos, name) in fields.iter().enumerate() {
            match name.trim().to_ascii_uppercase().as_str() {
                "HR" => map.hr = Some(pos),
                "HRV" => map.hrv = Some(pos),
                "RR" => map.rr = Some(pos),
                "SPO2" => map.spo2 = Some(pos),
                "DROWSY" => map.drowsy = Some(pos),
                "AGE" => map.age = Some(pos),
                "SEX" => map.sex = Some(pos),
                "ACCESSORIES" => map.accessories = Some(pos),
                "CHARACTERISTICS" => map.characteristics = Some(pos),
                "DEMOGRAPHIC" => map.demographic = Some(pos),
                other => debug!("Ignoring unrecognized column '{}'", other),
            }
        }
        map
    }
}

/// CSV-backed record source.
///
/// Parsing is lenient per field: a malformed cell or a column missing from
/// the header yields an absent field, never a row failure. Quoted fields
/// with embedded commas are supported. Blank lines are skipped without
/// consuming a row index.
pub struct CsvReader<R: BufRead> {
    reader: R,
    columns: ColumnMap,
    next_index: u64,
    line: String,
}

impl CsvReader<BufReader<File>> {
    /// Open a CSV file and consume its header row
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let file = File::open(path.as_ref())?;
        info!("Opened record source {}", path.as_ref().display());
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: BufRead> CsvReader<R> {
    /// Build a reader over any buffered input, consuming the header row
    pub fn from_reader(mut reader: R) -> Result<Self, SourceError> {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 {
            return Err(SourceError::MissingHeader);
        }
        let fields = split_record(header.trim_end_matches(['\r', '\n']));
        let columns = ColumnMap::from_header(&fields);
        Ok(Self {
            reader,
            columns,
            next_index: 0,
            line: String::new(),
        })
    }

    fn field<'a>(fields: &'a [String], pos: Option<usize>) -> Option<&'a str> {
        pos.and_then(|p| fields.get(p)).map(|s| s.as_str())
    }
}

impl<R: BufRead> RecordSource for CsvReader<R> {
    fn next_observation(&mut self) -> Result<Option<Observation>, SourceError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            let raw = self.line.trim_end_matches(['\r', '\n']);
            if raw.trim().is_empty() {
                continue;
            }

            let fields = split_record(raw);
            let mut obs = Observation::new(self.next_index);
            self.next_index += 1;

            obs.hr = Self::field(&fields, self.columns.hr).and_then(parse_int_lenient);
            obs.hrv = Self::field(&fields, self.columns.hrv).and_then(parse_int_lenient);
            obs.rr = Self::field(&fields, self.columns.rr).and_then(parse_int_lenient);
            obs.spo2 = Self::field(&fields, self.columns.spo2).and_then(parse_int_lenient);
            obs.drowsiness = Self::field(&fields, self.columns.drowsy).and_then(parse_int_lenient);
            obs.age = Self::field(&fields, self.columns.age).and_then(parse_int_lenient);
            obs.sex = Self::field(&fields, self.columns.sex).and_then(parse_text_lenient);
            obs.accessories =
                Self::field(&fields, self.columns.accessories).and_then(parse_text_lenient);
            obs.face_characteristics =
                Self::field(&fields, self.columns.characteristics).and_then(parse_text_lenient);
            obs.demographic =
                Self::field(&fields, self.columns.demographic).and_then(parse_text_lenient);

            return Ok(Some(obs));
        }
    }
}

/// Split one CSV record, honoring double-quoted fields with embedded commas
/// and doubled-quote escapes
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// In-memory record source for tests and fixtures
pub struct MemorySource {
    rows: VecDeque<Observation>,
}

impl MemorySource {
    /// Wrap a fixed set of observations
    pub fn new(rows: Vec<Observation>) -> Self {
        Self { rows: rows.into() }
    }
}

impl RecordSource for MemorySource {
    fn next_observation(&mut self) -> Result<Option<Observation>, SourceError> {
        Ok(self.rows.pop_front())
    }
}
