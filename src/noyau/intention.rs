// src/noyau/intention.rs
//
// Classifieur d’intention
// -----------------------
// Table ordonnée de matcheurs (Add → Power). Chaque matcheur essaie ses motifs
// dans l’ordre ; sur correspondance syntaxique, il extrait les opérandes dans
// l’ordre canonique. Trop peu d’opérandes => on passe au suivant (pas d’erreur).
// Le premier matcheur qui réussit gagne.
//
// Les motifs cherchent une sous-chaîne (non ancrés) : des mots en trop autour
// de la formule sont tolérés.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use super::erreurs::ParseError;
use super::nombres::{extract_numbers, premier_nombre};
use super::operation::OperationKind;
use super::requete::{normalize, normalize_bytes, RequeteNormalisee};

/// Requête reconnue : opération + opérandes en ordre canonique.
#[derive(Clone, Debug, PartialEq)]
pub struct RequeteAnalysee {
    pub operation: OperationKind,
    pub operandes: Vec<f64>,
}

pub type ParseOutcome = Result<RequeteAnalysee, ParseError>;

/// Règle d’extraction des opérandes après correspondance d’un motif.
#[derive(Clone, Copy, Debug)]
enum Extraction {
    /// Tous les nombres du texte complet.
    Tous,
    /// Les deux premiers nombres du texte complet, dans l’ordre d’apparition.
    DeuxPremiers,
    /// Le premier nombre du texte complet.
    Premier,
    /// Premier nombre de chaque capture, ordre [capture 2, capture 1].
    /// "subtract A from B" => [B, A]
    CapturesInversees,
    /// Premier nombre de chaque capture, ordre [capture 1, capture 2].
    /// "B minus A" => [B, A]
    Captures,
    /// Nombre pris dans la capture 1 seulement, exposant constant 2.
    Carre,
}

struct Motif {
    source: &'static str,
    extraction: Extraction,
}

struct Matcheur {
    operation: OperationKind,
    motifs: &'static [Motif],
}

const fn motif(source: &'static str, extraction: Extraction) -> Motif {
    Motif { source, extraction }
}

/// Grammaire effective du classifieur (ordre = priorité).
static TABLE: [Matcheur; 8] = [
    Matcheur {
        operation: OperationKind::Add,
        motifs: &[
            motif(r"add\s+(.+)", Extraction::Tous),
            motif(r"sum\s+of\s+(.+)", Extraction::Tous),
            motif(r"(.+)\s+plus\s+(.+)", Extraction::Tous),
        ],
    },
    Matcheur {
        operation: OperationKind::Subtract,
        motifs: &[
            motif(r"subtract\s+(.+?)\s+from\s+(.+)", Extraction::CapturesInversees),
            motif(r"(.+?)\s+minus\s+(.+)", Extraction::Captures),
        ],
    },
    Matcheur {
        operation: OperationKind::Multiply,
        motifs: &[
            motif(r"multiply\s+(.+?)\s+by\s+(.+)", Extraction::DeuxPremiers),
            motif(r"(.+?)\s+times\s+(.+)", Extraction::DeuxPremiers),
        ],
    },
    Matcheur {
        operation: OperationKind::Divide,
        motifs: &[
            motif(r"divide\s+(.+?)\s+by\s+(.+)", Extraction::DeuxPremiers),
            motif(r"(.+?)\s+divided\s+by\s+(.+)", Extraction::DeuxPremiers),
        ],
    },
    Matcheur {
        operation: OperationKind::Percentage,
        motifs: &[
            motif(r"(.+?)\s*%?\s*percent\s+of\s+(.+)", Extraction::DeuxPremiers),
            motif(r"(.+?)%\s+of\s+(.+)", Extraction::DeuxPremiers),
        ],
    },
    Matcheur {
        operation: OperationKind::Average,
        motifs: &[
            motif(r"average\s+of\s+(.+)", Extraction::Tous),
            motif(r"find\s+the\s+average\s+of\s+(.+)", Extraction::Tous),
        ],
    },
    Matcheur {
        operation: OperationKind::SquareRoot,
        motifs: &[
            motif(r"square\s+root\s+of\s+(.+)", Extraction::Premier),
            motif(r"sqrt\s+of\s+(.+)", Extraction::Premier),
        ],
    },
    Matcheur {
        operation: OperationKind::Power,
        motifs: &[
            motif(r"(.+?)\s+squared", Extraction::Carre),
            motif(r"(.+?)\s+to\s+the\s+power\s+of\s+(.+)", Extraction::DeuxPremiers),
        ],
    },
];

/// Table compilée, parallèle à `TABLE` (même ordre, mêmes indices).
static COMPILEE: OnceLock<Vec<Vec<Regex>>> = OnceLock::new();

fn table_compilee() -> &'static [Vec<Regex>] {
    COMPILEE.get_or_init(|| {
        TABLE
            .iter()
            .map(|m| {
                m.motifs
                    .iter()
                    .map(|p| Regex::new(p.source).expect("motif de requête"))
                    .collect()
            })
            .collect()
    })
}

fn capture<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

impl Extraction {
    /// Opérandes canoniques, ou None si le texte n’en fournit pas assez.
    fn extraire(self, texte: &str, caps: &Captures<'_>, minimum: usize) -> Option<Vec<f64>> {
        let operandes = match self {
            Extraction::Tous => extract_numbers(texte),
            Extraction::DeuxPremiers => {
                let mut n = extract_numbers(texte);
                if n.len() < 2 {
                    return None;
                }
                n.truncate(2);
                n
            }
            Extraction::Premier => vec![premier_nombre(texte)?],
            Extraction::CapturesInversees => {
                let a = premier_nombre(capture(caps, 1))?;
                let b = premier_nombre(capture(caps, 2))?;
                vec![b, a]
            }
            Extraction::Captures => {
                let b = premier_nombre(capture(caps, 1))?;
                let a = premier_nombre(capture(caps, 2))?;
                vec![b, a]
            }
            Extraction::Carre => vec![premier_nombre(capture(caps, 1))?, 2.0],
        };

        (operandes.len() >= minimum).then_some(operandes)
    }
}

impl Matcheur {
    /// Essaie chaque motif ; None = pas de correspondance exploitable.
    fn essayer(&self, regexes: &[Regex], texte: &str) -> Option<RequeteAnalysee> {
        let minimum = self.operation.arite().minimum();

        for (motif, re) in self.motifs.iter().zip(regexes) {
            let Some(caps) = re.captures(texte) else {
                continue;
            };

            match motif.extraction.extraire(texte, &caps, minimum) {
                Some(operandes) => {
                    return Some(RequeteAnalysee {
                        operation: self.operation,
                        operandes,
                    });
                }
                None => trace!(
                    operation = %self.operation,
                    motif = motif.source,
                    "motif reconnu mais opérandes insuffisants"
                ),
            }
        }

        None
    }
}

/// Classe une requête déjà normalisée.
pub fn classify_normalized(requete: &RequeteNormalisee) -> ParseOutcome {
    let texte = requete.as_str();

    let trouve = TABLE
        .iter()
        .zip(table_compilee())
        .find_map(|(m, regexes)| m.essayer(regexes, texte));

    match trouve {
        Some(r) => {
            debug!(operation = %r.operation, operandes = ?r.operandes, "requête reconnue");
            Ok(r)
        }
        None => {
            debug!(requete = texte, "requête non reconnue");
            Err(ParseError::UnrecognizedQuery)
        }
    }
}

/// Texte libre => opération + opérandes canoniques.
pub fn classify(texte: &str) -> ParseOutcome {
    classify_normalized(&normalize(texte)?)
}

/// Variante binaire : un contenu non UTF-8 compte comme une requête vide.
pub fn classify_bytes(octets: &[u8]) -> ParseOutcome {
    classify_normalized(&normalize_bytes(octets)?)
}
