// src/noyau/requete.rs

use std::fmt;
use std::ops::Deref;

use super::erreurs::ParseError;

/// Requête nettoyée : sans espaces aux bords, en minuscules.
///
/// Invariant : jamais vide, jamais d’espace en tête ou en queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequeteNormalisee(String);

impl RequeteNormalisee {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for RequeteNormalisee {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequeteNormalisee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// trim + minuscules ; vide => EmptyQuery.
pub fn normalize(brut: &str) -> Result<RequeteNormalisee, ParseError> {
    // lower-case puis trim : certaines minuscules Unicode changent la longueur,
    // on retrim après pour garder l’invariant.
    let s = brut.trim().to_lowercase();
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::EmptyQuery);
    }
    Ok(RequeteNormalisee(s.to_string()))
}

/// Entrée binaire : non UTF-8 => pas du texte => EmptyQuery.
pub fn normalize_bytes(octets: &[u8]) -> Result<RequeteNormalisee, ParseError> {
    let s = std::str::from_utf8(octets).map_err(|_| ParseError::EmptyQuery)?;
    normalize(s)
}
