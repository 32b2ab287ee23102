// src/noyau/erreurs.rs
//
// Erreurs du noyau. Les messages sont fixes : l’interface les affiche tels quels
// et les tests les comparent au caractère près.

use thiserror::Error;

use super::operation::OperationKind;

/// Échec de lecture d’une requête.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Please enter a query")]
    EmptyQuery,

    #[error("I couldn't understand that query. Try something like 'add 5 and 10'")]
    UnrecognizedQuery,
}

/// Échec d’évaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Invalid operands provided")]
    InvalidOperands,

    #[error("All operands must be valid numbers")]
    NonNumericOperand,

    #[error("{}", .0.message_arite())]
    WrongArity(OperationKind),

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Cannot calculate square root of a negative number")]
    NegativeSquareRootOperand,

    /// Seulement via `evaluate_tagged` (étiquette inconnue).
    #[error("Unknown operation")]
    UnknownOperation(String),
}

/// Erreur du pipeline complet (lecture puis calcul).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurRequete {
    #[error(transparent)]
    Lecture(#[from] ParseError),

    #[error(transparent)]
    Calcul(#[from] EvalError),
}
