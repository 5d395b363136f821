//! File loaders for the population, meeting-log and parameter inputs.
//!
//! # Responsibility
//! - Validate and convert text records before they reach the graph.
//! - Abort on the first bad record, reporting its 1-based line number.
//!
//! Line formats follow the legacy files: `name id age status` for people
//! (status `SICK` marks infection, any other token means healthy) and
//! `id1 id2 distance duration` for meetings. Note that the graph API takes
//! duration before distance.

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use spreadtrace_core::{ConfigError, ContactGraph, GraphError, Person, PersonId, TraceConfig};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

static PEOPLE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\S+)\s+(\d+)\s+(\d+)\s+(\S+)\s*$").expect("people line pattern is valid")
});
static MEETING_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)\s+(\d+)\s+(\S+)\s+(\S+)\s*$").expect("meeting line pattern is valid")
});

/// Status token that marks a person as infected; anything else is healthy.
const SICK_STATUS: &str = "SICK";

/// Loading failures; every record-level variant carries the 1-based line.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    MalformedLine { line: usize, content: String },
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
    Graph { line: usize, source: GraphError },
    Toml(toml::de::Error),
    Config(ConfigError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::MalformedLine { line, content } => {
                write!(f, "line {line}: malformed record `{content}`")
            }
            Self::InvalidNumber { line, field, value } => {
                write!(f, "line {line}: invalid {field} value `{value}`")
            }
            Self::Graph { line, source } => write!(f, "line {line}: {source}"),
            Self::Toml(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Graph { source, .. } => Some(source),
            Self::Toml(err) => Some(err),
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(value: toml::de::Error) -> Self {
        Self::Toml(value)
    }
}

impl From<ConfigError> for LoadError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Loads the population file into the graph.
///
/// Blank lines are skipped; everything else must match the record shape.
///
/// # Errors
/// Stops at the first unreadable, malformed or rejected record.
pub fn load_people(graph: &mut ContactGraph, path: &Path) -> Result<usize, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let mut loaded = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let captures = PEOPLE_LINE
            .captures(&line)
            .ok_or_else(|| LoadError::MalformedLine {
                line: line_no,
                content: line.clone(),
            })?;

        let name = &captures[1];
        let id: PersonId = parse_field(&captures[2], line_no, "id")?;
        let age: u32 = parse_field(&captures[3], line_no, "age")?;
        let is_sick = &captures[4] == SICK_STATUS;

        graph
            .add_person(Person::new(id, name, age, is_sick))
            .map_err(|source| LoadError::Graph {
                line: line_no,
                source,
            })?;
        loaded += 1;
    }

    info!(
        "event=people_loaded status=ok count={loaded} path={}",
        path.display()
    );
    Ok(loaded)
}

/// Loads the meeting log into the graph.
///
/// The file stores `id1 id2 distance duration`; the graph API takes the
/// duration first.
///
/// # Errors
/// Stops at the first unreadable, malformed or rejected record; graph
/// rejections (`UnknownPerson`, `DuplicateMeeting`, `InvalidMeeting`) keep
/// their line context.
pub fn load_meetings(graph: &mut ContactGraph, path: &Path) -> Result<usize, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let mut loaded = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let captures = MEETING_LINE
            .captures(&line)
            .ok_or_else(|| LoadError::MalformedLine {
                line: line_no,
                content: line.clone(),
            })?;

        let from: PersonId = parse_field(&captures[1], line_no, "id")?;
        let to: PersonId = parse_field(&captures[2], line_no, "id")?;
        let distance: f64 = parse_field(&captures[3], line_no, "distance")?;
        let duration: f64 = parse_field(&captures[4], line_no, "duration")?;

        graph
            .add_meeting(from, to, duration, distance)
            .map_err(|source| LoadError::Graph {
                line: line_no,
                source,
            })?;
        loaded += 1;
    }

    info!(
        "event=meetings_loaded status=ok count={loaded} path={}",
        path.display()
    );
    Ok(loaded)
}

/// Loads and validates a calibration override file.
///
/// # Errors
/// Surfaces I/O, TOML and validation failures unchanged.
pub fn load_params(path: &Path) -> Result<TraceConfig, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let config: TraceConfig = toml::from_str(&text)?;
    config.validate()?;
    info!("event=params_loaded status=ok path={}", path.display());
    Ok(config)
}

fn parse_field<T: FromStr>(
    value: &str,
    line: usize,
    field: &'static str,
) -> Result<T, LoadError> {
    value.parse::<T>().map_err(|_| LoadError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}
