// src/noyau/precedence.rs
//
// Table de précédence partagée (validateur + convertisseur + évaluateur).

/// Rang d’un opérateur : `+ -` = 1, `* /` = 2, `^` = 3.
/// Tout autre caractère n’est pas un opérateur.
pub fn precedence(c: char) -> Option<u8> {
    match c {
        '+' | '-' => Some(1),
        '*' | '/' => Some(2),
        '^' => Some(3),
        _ => None,
    }
}

/// Opérateur au sens du validateur (`^` exclu).
pub fn is_operateur_binaire(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

pub fn is_operateur(c: char) -> bool {
    precedence(c).is_some()
}

pub(crate) fn is_right_associative(c: char) -> bool {
    c == '^'
}
