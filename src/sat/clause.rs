use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use super::error::MalformedToken;
use super::lit::{Lit, VarId};

/// Marks the end of a clause on a line. Compared by value.
const TERMINATOR: &str = "0";

/// A disjunction of literals in the order they were read. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clause {
    pub vars: Vec<Lit>,
}

impl Clause {
    pub fn new(vars: Vec<Lit>) -> Self {
        Self { vars }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lit> {
        self.vars.iter()
    }

    pub fn is_satisfied(&self, assignments: &HashMap<VarId, bool>) -> bool {
        self.vars.iter().any(|lit| {
            assignments
                .get(&lit.var())
                .is_some_and(|assn| lit.eval(*assn))
        })
    }
}

/// Parses a single clause line. Tokens after the first `0` are discarded.
pub fn parse_clause(line: &str) -> Result<Clause, MalformedToken> {
    let mut vars = Vec::new();
    for token in line.split_whitespace() {
        if token == TERMINATOR {
            break;
        }
        let lit = parse_lit(token)?;
        log::trace!("Token {token:?} -> {lit:?}");
        vars.push(lit);
    }
    Ok(Clause::new(vars))
}

fn parse_lit(token: &str) -> Result<Lit, MalformedToken> {
    match token.strip_prefix('-') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            parse_var(digits, token).map(Lit::neg)
        }
        _ => parse_var(token, token).map(Lit::pos),
    }
}

fn parse_var(digits: &str, token: &str) -> Result<VarId, MalformedToken> {
    match digits.parse::<VarId>() {
        Ok(var) if var > 0 => Ok(var),
        _ => Err(MalformedToken::new(token)),
    }
}

impl FromStr for Clause {
    type Err = MalformedToken;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_clause(line)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vars.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{} 0", self.vars.iter().join(" "))
        }
    }
}
