//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, dernier affichage, style)
//! et offrir des opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Une erreur ne touche JAMAIS à l’entrée : l’utilisateur corrige et relance.
//! - Chaque nouvel affichage remplace le précédent.

use calculatrice_naturelle::reglages::Reglages;

/// Style du dernier affichage (succès vs erreur).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Aucun,
    Succes,
    Erreur,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sortie (résultat formaté OU message d’erreur) ---
    pub affichage: String,
    pub style: Style,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            entree: String::new(),
            affichage: String::new(),
            style: Style::Aucun,
            reglages,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions (état seulement) ------------------------ */

    /// Clic sur un exemple : remplace l’entrée, redonne le focus.
    pub fn choisir_exemple(&mut self, exemple: &str) {
        self.entree = exemple.to_string();
        self.focus_entree = true;
    }

    /// Échap : effacer seulement l’entrée (sans toucher à l’affichage).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur (l’entrée reste intacte).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.affichage = msg.into();
        self.style = Style::Erreur;
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat déjà formaté.
    pub fn set_resultat(&mut self, texte: impl Into<String>) {
        self.affichage = texte.into();
        self.style = Style::Succes;
        self.focus_entree = true;
    }
}
