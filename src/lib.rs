pub mod sat;

pub use sat::clause::{parse_clause, Clause};
pub use sat::config::{HeaderRule, ParserConfig};
pub use sat::dimacs::{parse_formula_from_dimacs_str, DimacsParser, ParseState};
pub use sat::error::{MalformedToken, ParseError};
pub use sat::formula::{ClauseList, Formula};
pub use sat::lit::{Lit, VarId};
