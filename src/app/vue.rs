// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter calcule (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Exemples cliquables : remplissent l’entrée sans calculer
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)
// - Enter suffit (clavier PC + “Enter” virtuel mobile selon navigateur)

use eframe::egui;

use calculatrice_naturelle::noyau::eval_requete;
use calculatrice_naturelle::noyau::format::formater_resultat;

use super::etat::{AppCalc, Style};

/// Vert lisible sur fond clair comme sombre.
const VERT_SUCCES: egui::Color32 = egui::Color32::from_rgb(0x2e, 0x9d, 0x4f);

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Natural Language Calculator");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_exemples(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: add 5 and 10, square root of 144, 20% of 150")
                .id_salt("entree_requete"),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter : seulement si le champ a le focus (ou vient de le perdre par Enter)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter && (resp.has_focus() || resp.lost_focus()) {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        let calc = ui.add_sized([120.0, 32.0], egui::Button::new("Calculate"));
        if calc.clicked() {
            self.eval_via_noyau();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        let couleur = match self.style {
            Style::Aucun => return,
            Style::Succes => VERT_SUCCES,
            Style::Erreur => ui.visuals().error_fg_color,
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                let texte = egui::RichText::new(&self.affichage).color(couleur);
                let texte = if self.style == Style::Succes {
                    texte.monospace().size(22.0)
                } else {
                    texte
                };
                ui.label(texte);
            });
    }

    fn ui_exemples(&mut self, ui: &mut egui::Ui) {
        ui.label("Try:");

        // clone : la closure emprunte self en mutable
        let exemples = self.reglages.exemples.clone();
        ui.horizontal_wrapped(|ui| {
            for ex in &exemples {
                let resp = ui.add(egui::Button::new(ex.as_str()).small());
                if resp.clicked() {
                    self.choisir_exemple(ex);
                }
            }
        });
    }

    /// Évalue l’entrée via le noyau, puis dépose le résultat ou l’erreur dans l’état UI.
    /// L’entrée n’est jamais modifiée ici.
    pub(crate) fn eval_via_noyau(&mut self) {
        match eval_requete(&self.entree) {
            Ok(rep) => {
                let texte = formater_resultat(rep.valeur, self.reglages.decimales_max);
                tracing::info!(
                    operation = %rep.requete.operation,
                    resultat = %texte,
                    "calcul affiché"
                );
                self.set_resultat(texte);
            }
            Err(e) => {
                tracing::info!(erreur = %e, "erreur affichée");
                self.set_erreur(e.to_string());
            }
        }
    }
}
