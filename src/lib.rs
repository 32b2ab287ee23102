//! Calculatrice en langage naturel.
//!
//! - `noyau`    : texte -> opération + opérandes -> résultat (pur, sans état)
//! - `reglages` : réglages de l’interface (TOML optionnel)

pub mod noyau;
pub mod reglages;
