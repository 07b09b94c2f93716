//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, forme préfixe, valeur,
//! erreur, démarche, réglages) et offrir des opérations simples (C/CLR/AC)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucune conversion ni évaluation ici.
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur la précision de lecture (digits).

/// Précision de la lecture décimale par défaut (mode exact).
const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
const DIGITS_MAX: usize = calculatrice_prefixe::noyau::lecture::DIGITS_MAX;

/// Mode d’évaluation de la forme préfixe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeEval {
    #[default]
    Flottant,
    Exact,
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub nettoyee: String,
    pub inversee: String,
    pub prefixe: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub prefixe: String,     // notation polonaise
    pub valeur: String,      // f64, ou fraction exacte en mode Exact
    pub lecture: String,     // décimal tronqué (mode Exact seulement)
    pub erreur: String,      // message d’erreur (validation / évaluation)
    pub lecture_dispo: bool, // false hors mode Exact ou en cas d’erreur

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- réglages ---
    pub mode: ModeEval,
    pub digits: usize,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            prefixe: String::new(),
            valeur: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            lecture_dispo: false,
            demarche: Demarche::default(),
            mode: ModeEval::default(),
            digits: DIGITS_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + réglages par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
        self.mode = ModeEval::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.prefixe.clear();
        self.valeur.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.lecture_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur.
    ///
    /// On CONSERVE la forme préfixe si elle a déjà été produite (erreur d’évaluation),
    /// mais la valeur et la lecture ne sont plus fiables.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.valeur.clear();
        self.lecture.clear();
        self.lecture_dispo = false;
        self.focus_entree = true;
    }

    /// Dépose un résultat complet (préfixe + valeur + lecture optionnelle + démarche).
    pub fn set_resultats(
        &mut self,
        prefixe: impl Into<String>,
        valeur: impl Into<String>,
        lecture: Option<String>,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.prefixe = prefixe.into();
        self.valeur = valeur.into();
        self.demarche = demarche;

        if let Some(v) = lecture {
            self.lecture_dispo = true;
            self.lecture = v;
        } else {
            self.lecture_dispo = false;
            self.lecture.clear();
        }

        self.focus_entree = true;
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        self.focus_entree = true;
    }

    pub fn set_mode(&mut self, mode: ModeEval) {
        self.mode = mode;
        self.focus_entree = true;
    }
}
