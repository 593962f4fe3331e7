use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;

use super::clause::Clause;
use super::error::ParseError;
use super::lit::VarId;

/// Clauses in the order their lines appeared. Grows by `append` only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseList {
    clauses: Vec<Clause>,
}

impl ClauseList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.clauses.iter()
    }
}

impl<'a> IntoIterator for &'a ClauseList {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ClauseList {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl fmt::Display for ClauseList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clauses.iter().join("\n"))
    }
}

/// A conjunction of clauses, ready to hand to a solver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    /// Folds the list left to right, conjoining one clause per step.
    pub fn build(list: &ClauseList) -> Result<Self, ParseError> {
        if list.is_empty() {
            return Err(ParseError::NotYetParsed);
        }
        let formula = list
            .iter()
            .cloned()
            .fold(Formula::default(), Formula::and);
        log::debug!("Built formula with {} clauses", formula.len());
        Ok(formula)
    }

    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Largest variable index mentioned, or 0 for a formula without literals.
    pub fn num_vars(&self) -> VarId {
        self.clauses
            .iter()
            .flat_map(|c| c.iter())
            .map(|lit| lit.var())
            .max()
            .unwrap_or(0)
    }

    pub fn is_satisfied(&self, assignments: &HashMap<VarId, bool>) -> bool {
        self.clauses.iter().all(|c| c.is_satisfied(assignments))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "p cnf {} {}", self.num_vars(), self.len())?;
        for clause in self.clauses.iter() {
            writeln!(f, "{clause}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod formula_test {
    use std::collections::HashMap;

    use super::{ClauseList, Formula};
    use crate::sat::clause::{parse_clause, Clause};
    use crate::sat::error::ParseError;
    use crate::sat::lit::Lit;

    fn list_of(lines: &[&str]) -> ClauseList {
        let mut list = ClauseList::new();
        for line in lines {
            list.append(parse_clause(line).unwrap());
        }
        list
    }

    #[test]
    fn append_keeps_order() {
        let list = list_of(&["1 0", "2 0", "3 0"]);
        assert_eq!(list.len(), 3);
        let firsts: Vec<_> = list.iter().map(|c| c.vars[0]).collect();
        assert_eq!(firsts, vec![Lit::pos(1), Lit::pos(2), Lit::pos(3)]);
    }

    #[test]
    fn duplicates_are_kept() {
        let list = list_of(&["1 0", "1 0"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn iterates_by_ref_and_by_value() {
        let list = list_of(&["1 0", "-2 3 0"]);
        let mut lens = Vec::new();
        for clause in &list {
            lens.push(clause.len());
        }
        assert_eq!(lens, vec![1, 2]);
        let owned: Vec<Clause> = list.clone().into_iter().collect();
        assert_eq!(owned, list.iter().cloned().collect::<Vec<_>>());
        assert_eq!(owned[1].vars, vec![Lit::neg(2), Lit::pos(3)]);
    }

    #[test]
    fn list_display_one_clause_per_line() {
        let list = list_of(&["1", "+5 5 0"]);
        assert_eq!(list.to_string(), "1 0\n5 5 0");
        assert_eq!(ClauseList::new().to_string(), "");
    }

    #[test]
    fn built_formula_is_never_empty() {
        let formula = Formula::build(&list_of(&["0"])).unwrap();
        assert!(!formula.is_empty());
        assert!(Formula::default().is_empty());
    }

    #[test]
    fn build_empty_list_is_not_yet_parsed() {
        assert!(matches!(
            Formula::build(&ClauseList::new()),
            Err(ParseError::NotYetParsed)
        ));
    }

    #[test]
    fn build_preserves_order() {
        let list = list_of(&["1 -2 0", "-3 0", "2 3 0"]);
        let formula = Formula::build(&list).unwrap();
        assert_eq!(formula.len(), 3);
        assert_eq!(
            formula.clauses(),
            list.iter().cloned().collect::<Vec<Clause>>().as_slice()
        );
    }

    #[test]
    fn build_is_deterministic() {
        let list = list_of(&["1 -2 0", "2 0"]);
        assert_eq!(Formula::build(&list).unwrap(), Formula::build(&list).unwrap());
    }

    #[test]
    fn num_vars_is_largest_index() {
        let formula = Formula::build(&list_of(&["1 -9 0", "4 0"])).unwrap();
        assert_eq!(formula.num_vars(), 9);
        assert_eq!(Formula::default().num_vars(), 0);
    }

    #[test]
    fn satisfied() {
        // (a | !b) & b
        let formula = Formula::build(&list_of(&["1 -2 0", "2 0"])).unwrap();
        let mut assignments = HashMap::new();
        assignments.insert(1, true);
        assignments.insert(2, true);
        assert!(formula.is_satisfied(&assignments));
        assignments.insert(1, false);
        assert!(!formula.is_satisfied(&assignments));
    }

    #[test]
    fn display_is_dimacs_document() {
        let formula = Formula::build(&list_of(&["1 -2 0", "3 0"])).unwrap();
        assert_eq!(formula.to_string(), "p cnf 3 2\n1 -2 0\n3 0\n");
    }
}
