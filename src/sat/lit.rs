use std::fmt;
use std::ops::Not;

/// Index of a propositional variable. Always positive.
pub type VarId = u32;

/// A variable together with its polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lit {
    Pos(VarId),
    Neg(VarId),
}

impl Lit {
    pub fn pos(var: VarId) -> Self {
        Self::Pos(var)
    }

    pub fn neg(var: VarId) -> Self {
        Self::Neg(var)
    }

    pub fn var(&self) -> VarId {
        match self {
            Lit::Pos(var) | Lit::Neg(var) => *var,
        }
    }

    pub fn is_negated(&self) -> bool {
        matches!(self, Lit::Neg(_))
    }

    /// Value of the literal under an assignment of its variable.
    pub fn eval(&self, assn: bool) -> bool {
        if self.is_negated() {
            !assn
        } else {
            assn
        }
    }
}

impl Not for Lit {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Lit::Pos(var) => Lit::Neg(var),
            Lit::Neg(var) => Lit::Pos(var),
        }
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lit::Pos(var) => write!(f, "{var}"),
            Lit::Neg(var) => write!(f, "-{var}"),
        }
    }
}
