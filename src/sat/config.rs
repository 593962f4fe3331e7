/// How the parser finds the start of clause data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderRule {
    /// The first line made only of digits starts clause data and is itself
    /// read as the first clause. Lines before it are skipped.
    #[default]
    NumericTrigger,
    /// Standard DIMACS: `c` comment lines and blank lines are skipped,
    /// the `p cnf` line starts clause data without producing a clause.
    Conventional,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub header: HeaderRule,
}

impl ParserConfig {
    pub fn conventional() -> Self {
        Self {
            header: HeaderRule::Conventional,
        }
    }
}
