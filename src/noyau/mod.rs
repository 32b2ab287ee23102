//! Noyau calculatrice en langage naturel
//!
//! Organisation interne :
//! - requete.rs   : normalisation (trim + minuscules)
//! - nombres.rs   : extraction des nombres (gauche → droite)
//! - operation.rs : les huit opérations + politique d’arité
//! - intention.rs : classifieur (table ordonnée de matcheurs)
//! - calcul.rs    : évaluateur (arité, domaine, formule f64)
//! - erreurs.rs   : erreurs typées, messages fixes
//! - format.rs    : affichage d’un résultat (pour l’interface)
//! - eval.rs      : pipeline complet
//!
//! Tout est pur et sans état : aucun verrou, aucun cache mutable.

pub mod calcul;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod intention;
pub mod nombres;
pub mod operation;
pub mod requete;

#[cfg(test)]
mod tests_comportement;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calcul::{evaluate, evaluate_tagged, EvalOutcome};
pub use erreurs::{ErreurRequete, EvalError, ParseError};
pub use eval::{eval_requete, Reponse};
pub use intention::{classify, classify_bytes, ParseOutcome, RequeteAnalysee};
pub use nombres::extract_numbers;
pub use operation::{Arite, OperationKind};
pub use requete::{normalize, RequeteNormalisee};
