//! Noyau — pipeline complet
//!
//! texte -> normalize -> classify -> evaluate -> valeur f64 (non arrondie)
//!
//! Chaque appel est indépendant : rien n’est conservé entre deux requêtes.

use super::calcul::evaluate;
use super::erreurs::ErreurRequete;
use super::intention::{classify_normalized, RequeteAnalysee};
use super::requete::normalize;

/// Résultat d’une requête réussie : ce qui a été compris + la valeur.
#[derive(Clone, Debug, PartialEq)]
pub struct Reponse {
    pub requete: RequeteAnalysee,
    pub valeur: f64,
}

/// API publique : évalue une requête en langage naturel.
pub fn eval_requete(texte: &str) -> Result<Reponse, ErreurRequete> {
    let normalisee = normalize(texte)?;
    let requete = classify_normalized(&normalisee)?;
    let valeur = evaluate(requete.operation, &requete.operandes)?;

    Ok(Reponse { requete, valeur })
}
