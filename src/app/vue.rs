// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter convertit + évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Mode f64 / exact, précision de lecture réglable

use eframe::egui;
use log::debug;

use calculatrice_prefixe::noyau;

use super::etat::{AppCalc, Demarche, ModeEval};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice préfixe");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée (infixe) :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, 8-4-2, 2^3^2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Actions + réglages
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            let mut mode = self.mode;
            ui.radio_value(&mut mode, ModeEval::Flottant, "f64");
            ui.radio_value(&mut mode, ModeEval::Exact, "exact");
            if mode != self.mode {
                self.set_mode(mode);
            }

            if self.mode == ModeEval::Exact {
                let mut d = self.digits as u32;
                let resp = ui.add(
                    egui::DragValue::new(&mut d)
                        .speed(1)
                        .range(0..=200)
                        .suffix(" chiffres"),
                );
                if resp.changed() {
                    self.set_digits(d as usize);
                }
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", InsertKind::Paren);
            self.bouton_insert(ui, ")", InsertKind::Paren);

            self.bouton_insert(ui, "+", InsertKind::Op);
            self.bouton_insert(ui, "-", InsertKind::Op);
            self.bouton_insert(ui, "*", InsertKind::Op);
            self.bouton_insert(ui, "/", InsertKind::Op);
            self.bouton_insert(ui, "^", InsertKind::Op);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_prefixe")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for chiffre in ligne {
                        self.bouton_insert(ui, chiffre, InsertKind::Digit);
                    }
                    if ligne[0] == "7" {
                        self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                    } else {
                        ui.label("");
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0", InsertKind::Digit);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Préfixe :");
        Self::champ_monospace(ui, "prefixe_out", &self.prefixe, 2);

        ui.add_space(6.0);

        ui.label("Valeur :");
        Self::champ_monospace(ui, "valeur_out", &self.valeur, 1);

        if self.mode == ModeEval::Exact {
            ui.add_space(6.0);
            ui.label("Lecture décimale :");
            if self.lecture_dispo {
                Self::champ_monospace(ui, "lecture_out", &self.lecture, 2);
            } else {
                ui.monospace("indisponible");
            }
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Sans espaces", "demarche_nettoyee", &self.demarche.nettoyee);
                Self::champ_demarche(
                    ui,
                    "Inversée, parenthèses permutées",
                    "demarche_inversee",
                    &self.demarche.inversee,
                );
                Self::champ_demarche(ui, "Préfixe", "demarche_prefixe", &self.demarche.prefixe);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(symbole);
                self.entree.push(' ');
            }
            // chiffres et parenthèses : pas d’espaces auto
            InsertKind::Digit | InsertKind::Paren => self.entree.push_str(symbole),
        }

        self.focus_entree = true;
    }

    /// Convertit l’entrée, évalue la forme préfixe, puis dépose le tout dans l’état UI.
    fn eval_via_noyau(&mut self) {
        self.focus_entree = true;

        let s = self.entree.trim().to_owned();
        if s.is_empty() {
            self.clear_resultats();
            self.set_erreur("Entrée vide");
            return;
        }

        let d = match noyau::trace(&s) {
            Ok(d) => d,
            Err(e) => {
                debug!("conversion refusée: {e}");
                self.clear_resultats();
                self.set_erreur(e.to_string());
                return;
            }
        };

        let demarche = Demarche {
            nettoyee: d.nettoyee,
            inversee: d.inversee,
            prefixe: d.prefixe.clone(),
            note: "Pipeline: validation → inversion → permutation ( ) → pile d’opérateurs → inversion de la sortie → évaluation.".into(),
        };

        let resultat = match self.mode {
            ModeEval::Flottant => noyau::evaluate_prefix(&d.prefixe).map(|v| (format!("{v}"), None)),
            ModeEval::Exact => noyau::evaluate_prefix_exact(&d.prefixe).map(|r| {
                (
                    noyau::format_rat(&r),
                    Some(noyau::lecture_decimale(&r, self.digits)),
                )
            }),
        };

        match resultat {
            Ok((valeur, lecture)) => self.set_resultats(d.prefixe, valeur, lecture, demarche),
            Err(e) => {
                // la conversion a réussi : on garde préfixe + démarche
                self.prefixe = d.prefixe;
                self.demarche = demarche;
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    Paren,
}
