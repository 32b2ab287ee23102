// src/noyau/nombres.rs

use std::sync::OnceLock;

use regex::Regex;

/// Entier ou décimal, signe `-` optionnel : `12`, `-3`, `5.5`, `7.`
const MOTIF_NOMBRE: &str = r"-?[0-9]+\.?[0-9]*";

static NOMBRE: OnceLock<Regex> = OnceLock::new();

fn regex_nombre() -> &'static Regex {
    NOMBRE.get_or_init(|| Regex::new(MOTIF_NOMBRE).expect("motif nombre"))
}

/// Tous les nombres du texte, de gauche à droite.
///
/// Les jetons non convertibles sont ignorés (n’arrive pas avec ce motif).
pub fn extract_numbers(texte: &str) -> Vec<f64> {
    regex_nombre()
        .find_iter(texte)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// Premier nombre du texte, s’il existe.
pub fn premier_nombre(texte: &str) -> Option<f64> {
    regex_nombre()
        .find(texte)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
