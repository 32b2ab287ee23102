// src/noyau/operation.rs

use std::fmt;
use std::str::FromStr;

/// Les huit opérations reconnues (ensemble fermé).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percentage,
    Average,
    SquareRoot,
    Power,
}

/// Politique d’arité : nombre exact ou minimum d’opérandes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Exacte(usize),
    Minimum(usize),
}

impl Arite {
    /// Plus petit nombre d’opérandes acceptable.
    pub fn minimum(self) -> usize {
        match self {
            Arite::Exacte(n) | Arite::Minimum(n) => n,
        }
    }

    pub fn admet(self, n: usize) -> bool {
        match self {
            Arite::Exacte(k) => n == k,
            Arite::Minimum(k) => n >= k,
        }
    }
}

impl OperationKind {
    /// Ordre de priorité du classifieur (le premier qui réussit gagne).
    pub const TOUTES: [OperationKind; 8] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
        OperationKind::Percentage,
        OperationKind::Average,
        OperationKind::SquareRoot,
        OperationKind::Power,
    ];

    /// Arité partagée par le classifieur (souple) et l’évaluateur (stricte).
    pub fn arite(self) -> Arite {
        use OperationKind::*;

        match self {
            Add | Multiply | Average => Arite::Minimum(2),
            Subtract | Divide | Percentage | Power => Arite::Exacte(2),
            SquareRoot => Arite::Exacte(1),
        }
    }

    /// Message affiché quand l’arité n’est pas respectée.
    pub fn message_arite(self) -> &'static str {
        use OperationKind::*;

        match self {
            Add => "Addition requires at least two numbers",
            Subtract => "Subtraction requires exactly two numbers",
            Multiply => "Multiplication requires at least two numbers",
            Divide => "Division requires exactly two numbers",
            Percentage => "Percentage calculation requires exactly two numbers",
            Average => "I need at least two numbers to calculate an average",
            SquareRoot => "Square root requires exactly one number",
            Power => "Exponentiation requires exactly two numbers",
        }
    }

    /// Étiquette textuelle historique (ex: "sqrt" pour SquareRoot).
    pub fn etiquette(self) -> &'static str {
        use OperationKind::*;

        match self {
            Add => "add",
            Subtract => "subtract",
            Multiply => "multiply",
            Divide => "divide",
            Percentage => "percentage",
            Average => "average",
            SquareRoot => "sqrt",
            Power => "power",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.etiquette())
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::TOUTES
            .into_iter()
            .find(|op| op.etiquette() == s)
            .ok_or_else(|| s.to_string())
    }
}
