// src/noyau/format.rs
//
// Affichage d’un résultat pour l’interface : au plus N décimales, sans zéros
// inutiles. Le noyau, lui, rend toujours la valeur brute.

/// Décimales par défaut à l’affichage.
pub const DECIMALES_DEFAUT: usize = 10;

/// À partir de ce seuil, l’affichage passe en notation exposant.
const SEUIL_EXPOSANT_HAUT: f64 = 1e21;

/// En dessous de ce seuil (en valeur absolue), notation exposant aussi.
const SEUIL_EXPOSANT_BAS: f64 = 1e-6;

/// "1.5e21" -> "1.5e+21" ; "1e-7" inchangé.
fn exposant_signe(s: String) -> String {
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

/// Formate `valeur` avec au plus `decimales` chiffres après la virgule.
///
/// Arrondi à `decimales`, puis écriture la plus courte qui relit le même f64
/// (même rendu que `Number(v.toFixed(n)).toString()` côté navigateur).
///
/// - 0.1 + 0.2      -> "0.3"
/// - 1/3            -> "0.3333333333"
/// - -0.00000000001 -> "0" (jamais "-0")
/// - 1.5e-7         -> "1.5e-7"
/// - ∞ / NaN        -> "Infinity" / "-Infinity" / "NaN"
pub fn formater_resultat(valeur: f64, decimales: usize) -> String {
    if valeur.is_nan() {
        return "NaN".to_string();
    }
    if valeur.is_infinite() {
        return if valeur > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // pas d’arrondi au-delà du seuil : la valeur est déjà entière
    let arrondi = if valeur.abs() >= SEUIL_EXPOSANT_HAUT {
        valeur
    } else {
        format!("{valeur:.decimales$}").parse::<f64>().unwrap_or(valeur)
    };

    // couvre aussi -0 et les petites valeurs négatives arrondies à zéro
    if arrondi == 0.0 {
        return "0".to_string();
    }

    let abs = arrondi.abs();
    if !(SEUIL_EXPOSANT_BAS..SEUIL_EXPOSANT_HAUT).contains(&abs) {
        return exposant_signe(format!("{arrondi:e}"));
    }
    format!("{arrondi}")
}
