//! Noyau infixe -> préfixe
//!
//! Organisation interne :
//! - precedence.rs : table de précédence partagée
//! - validation.rs : garde du convertisseur (balayage unique)
//! - conversion.rs : infixe -> préfixe (flux inversé + pile d’opérateurs)
//! - evaluation.rs : préfixe -> valeur (f64 ou rationnel exact)
//! - lecture.rs    : affichage d’un rationnel (fraction + décimal tronqué)
//! - erreur.rs     : erreurs typées
//!
//! Aucun état entre deux appels : tout est fonction pure de l’entrée.

pub mod conversion;
pub mod erreur;
pub mod evaluation;
pub mod lecture;
pub mod precedence;
pub mod validation;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use conversion::{convert_to_prefix, to_prefix, trace, Demarche};
pub use erreur::{ConversionError, Defaut, EvaluationError};
pub use evaluation::{evaluate_prefix, evaluate_prefix_exact};
pub use lecture::{format_rat, lecture_decimale};
pub use precedence::precedence;
pub use validation::{check, validate};

#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}
