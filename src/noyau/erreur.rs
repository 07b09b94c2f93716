// src/noyau/erreur.rs
//
// Erreurs du noyau (valeurs explicites, jamais de panique).
// - ConversionError : entrée absente / infixe mal formée
// - EvaluationError : division par zéro / préfixe mal formée / exposant refusé

use thiserror::Error;

/// Raison précise d’un rejet par le validateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Defaut {
    Vide,
    OperateurEnBord,
    ParentheseOuvranteFinale,
    ParentheseFermanteInitiale,
    ParenthesesDesequilibrees,
    OperateurMalPlace,
    GroupeVide,
    CaractereInattendu(char),
}

impl std::fmt::Display for Defaut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vide => write!(f, "entrée vide"),
            Self::OperateurEnBord => write!(f, "opérateur en début ou en fin"),
            Self::ParentheseOuvranteFinale => write!(f, "'(' en dernière position"),
            Self::ParentheseFermanteInitiale => write!(f, "')' en première position"),
            Self::ParenthesesDesequilibrees => write!(f, "parenthèses déséquilibrées"),
            Self::OperateurMalPlace => write!(f, "opérateur mal placé"),
            Self::GroupeVide => write!(f, "groupe vide '()'"),
            Self::CaractereInattendu(c) => write!(f, "caractère inattendu: '{c}'"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Aucune expression fournie (distinct de la chaîne vide).
    #[error("aucune expression fournie")]
    MissingInput,

    /// `position` : index dans l’expression sans espaces.
    #[error("expression invalide: {defaut} (position {position})")]
    InvalidExpression { defaut: Defaut, position: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("division par zéro")]
    DivisionByZero,

    #[error("expression préfixe mal formée: {raison}")]
    MalformedExpression { raison: String },

    #[error("exposant non supporté: {exposant}")]
    UnsupportedExponent { exposant: String },
}

impl EvaluationError {
    pub(crate) fn malformee(raison: impl Into<String>) -> Self {
        Self::MalformedExpression {
            raison: raison.into(),
        }
    }
}
