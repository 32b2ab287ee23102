// src/reglages.rs
//
// Réglages de l’interface (le noyau n’en a aucun).
//
// Source : fichier TOML optionnel
// - chemin donné par CALCULATRICE_REGLAGES, sinon ./calculatrice.toml
// - fichier absent => valeurs par défaut
//
// Exemple :
//   decimales_max = 6
//   exemples = ["add 1 and 2", "sqrt of 2"]

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::format::DECIMALES_DEFAUT;

/// Variable d’environnement pointant vers le fichier de réglages.
pub const VAR_REGLAGES: &str = "CALCULATRICE_REGLAGES";

/// Fichier cherché dans le répertoire courant à défaut.
const FICHIER_DEFAUT: &str = "calculatrice.toml";

/// Garde-fou : au-delà, f64 n’a plus de chiffres significatifs à montrer.
const DECIMALES_MAX: usize = 15;

#[derive(Debug, Error)]
pub enum ReglagesError {
    #[error("lecture de {}: {source}", chemin.display())]
    Lecture {
        chemin: PathBuf,
        source: std::io::Error,
    },

    #[error("réglages invalides dans {}: {source}", chemin.display())]
    Toml {
        chemin: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    /// Décimales affichées au plus (0..=15).
    pub decimales_max: usize,

    /// Requêtes proposées en un clic (par défaut : une par opération).
    pub exemples: Vec<String>,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales_max: DECIMALES_DEFAUT,
            exemples: [
                "add 15 and 27",
                "subtract 8 from 20",
                "multiply 6 by 7",
                "divide 100 by 4",
                "20 percent of 150",
                "average of 10, 20, 30",
                "square root of 144",
                "5 to the power of 3",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl Reglages {
    /// Lit un texte TOML ; les champs absents gardent leur valeur par défaut.
    pub fn depuis_toml(texte: &str, chemin: &Path) -> Result<Self, ReglagesError> {
        let mut r: Reglages = toml::from_str(texte).map_err(|source| ReglagesError::Toml {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        r.decimales_max = r.decimales_max.min(DECIMALES_MAX);
        Ok(r)
    }

    /// Charge un fichier donné ; absent => défauts.
    pub fn depuis_fichier(chemin: &Path) -> Result<Self, ReglagesError> {
        match std::fs::read_to_string(chemin) {
            Ok(texte) => Self::depuis_toml(&texte, chemin),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ReglagesError::Lecture {
                chemin: chemin.to_path_buf(),
                source,
            }),
        }
    }

    /// Chemin effectif : variable d’environnement, sinon fichier par défaut.
    pub fn chemin() -> PathBuf {
        std::env::var_os(VAR_REGLAGES)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(FICHIER_DEFAUT))
    }

    pub fn charger() -> Result<Self, ReglagesError> {
        Self::depuis_fichier(&Self::chemin())
    }
}
