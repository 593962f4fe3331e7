use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::clause::{parse_clause, Clause};
use super::config::{HeaderRule, ParserConfig};
use super::error::ParseError;
use super::formula::{ClauseList, Formula};

/// Progress of a read. Each line consumes the state and yields the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParseState {
    /// Clause data has not started yet.
    #[default]
    Uninitialized,
    Populated(ClauseList),
}

impl ParseState {
    pub fn step(self, line_no: usize, line: &str, rule: HeaderRule) -> Result<Self, ParseError> {
        match rule {
            HeaderRule::NumericTrigger => self.step_numeric(line_no, line),
            HeaderRule::Conventional => self.step_conventional(line_no, line),
        }
    }

    fn step_numeric(self, line_no: usize, line: &str) -> Result<Self, ParseError> {
        match self {
            ParseState::Uninitialized if is_numeric(line) => {
                log::debug!("Line {line_no} starts clause data");
                let mut list = ClauseList::new();
                list.append(parse_line(line_no, line)?);
                Ok(ParseState::Populated(list))
            }
            ParseState::Uninitialized => {
                log::debug!("Skipping line {line_no} before clause data");
                Ok(ParseState::Uninitialized)
            }
            ParseState::Populated(mut list) => {
                list.append(parse_line(line_no, line)?);
                Ok(ParseState::Populated(list))
            }
        }
    }

    fn step_conventional(self, line_no: usize, line: &str) -> Result<Self, ParseError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('c') {
            log::trace!("Skipping comment line {line_no}");
            return Ok(self);
        }
        match self {
            ParseState::Uninitialized if trimmed.split_whitespace().next() == Some("p") => {
                // counts are informational only
                log::debug!("Problem line {line_no}: {trimmed}");
                Ok(ParseState::Populated(ClauseList::new()))
            }
            ParseState::Uninitialized => {
                log::debug!("Skipping line {line_no} before problem line");
                Ok(ParseState::Uninitialized)
            }
            ParseState::Populated(mut list) => {
                list.append(parse_line(line_no, line)?);
                Ok(ParseState::Populated(list))
            }
        }
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, ParseState::Populated(_))
    }

    pub fn clause_list(&self) -> Option<&ClauseList> {
        match self {
            ParseState::Uninitialized => None,
            ParseState::Populated(list) => Some(list),
        }
    }

    /// The accumulated clauses; empty if clause data never started.
    pub fn into_clause_list(self) -> ClauseList {
        match self {
            ParseState::Uninitialized => ClauseList::new(),
            ParseState::Populated(list) => list,
        }
    }

    pub fn formula(&self) -> Result<Formula, ParseError> {
        match self {
            ParseState::Uninitialized => Err(ParseError::NotYetParsed),
            ParseState::Populated(list) => Formula::build(list),
        }
    }
}

fn is_numeric(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

fn parse_line(line_no: usize, line: &str) -> Result<Clause, ParseError> {
    log::trace!("Line {line_no}: {line:?}");
    parse_clause(line).map_err(|e| e.at_line(line_no))
}

/// Reads DIMACS text into clauses, one clause per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimacsParser {
    config: ParserConfig,
}

impl DimacsParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn read(&self, reader: impl BufRead) -> Result<ParseState, ParseError> {
        let mut state = ParseState::Uninitialized;
        let mut line_count = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ParseError::Read {
                line: idx + 1,
                source,
            })?;
            line_count = idx + 1;
            state = state.step(line_count, &line, self.config.header)?;
        }
        log::info!(
            "Read {line_count} lines, {} clauses",
            state.clause_list().map_or(0, |list| list.len())
        );
        Ok(state)
    }

    /// The file is closed before this returns, on success or failure.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<ParseState, ParseError> {
        let path = path.as_ref();
        log::debug!("Opening {}", path.display());
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    pub fn get_clause_list(&self, path: impl AsRef<Path>) -> Result<ClauseList, ParseError> {
        Ok(self.read_path(path)?.into_clause_list())
    }

    pub fn get_formula(&self, path: impl AsRef<Path>) -> Result<Formula, ParseError> {
        self.read_path(path)?.formula()
    }
}

pub fn parse_formula_from_dimacs_str(lines: &str) -> Result<Formula, ParseError> {
    DimacsParser::default().read(lines.as_bytes())?.formula()
}
