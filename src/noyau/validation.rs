// src/noyau/validation.rs
//
// Validateur d’expression infixe (garde du convertisseur).
// Un seul balayage gauche -> droite, sans retour arrière.
//
// Règles (expression sans espaces) :
// - ni début ni fin par + - * /   (^ n’entre pas dans ce test)
// - '(' jamais en dernier, ')' jamais en premier
// - compteur de parenthèses jamais négatif, nul à la fin
// - un opérateur + - * / n’est ni précédé de '(', ni suivi de ')' ou d’un autre opérateur
// - pas de groupe vide "()", pas de caractère hors chiffres / opérateurs / parenthèses

use log::debug;

use super::erreur::{ConversionError, Defaut};
use super::precedence::{is_operateur, is_operateur_binaire};

/// Retire tous les espaces (séparateurs, jamais significatifs).
pub(crate) fn sans_espaces(expression: &str) -> Vec<char> {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Vrai si l’expression infixe est bien formée.
pub fn validate(expression: &str) -> bool {
    check(expression).is_ok()
}

/// Variante “fail-fast” : donne la raison et la position du premier défaut.
pub fn check(expression: &str) -> Result<(), ConversionError> {
    let chars = sans_espaces(expression);
    let res = check_chars(&chars);
    if let Err(e) = &res {
        debug!("validation refusée pour {expression:?}: {e}");
    }
    res
}

fn rejet(defaut: Defaut, position: usize) -> Result<(), ConversionError> {
    Err(ConversionError::InvalidExpression { defaut, position })
}

fn check_chars(chars: &[char]) -> Result<(), ConversionError> {
    let (Some(&premier), Some(&dernier)) = (chars.first(), chars.last()) else {
        return rejet(Defaut::Vide, 0);
    };
    let fin = chars.len() - 1;

    if is_operateur_binaire(premier) {
        return rejet(Defaut::OperateurEnBord, 0);
    }
    if is_operateur_binaire(dernier) {
        return rejet(Defaut::OperateurEnBord, fin);
    }

    let mut ouvertes: i64 = 0;

    for (i, &c) in chars.iter().enumerate() {
        let suivant = chars.get(i + 1).copied();

        match c {
            '(' => {
                ouvertes += 1;
                if i == fin {
                    return rejet(Defaut::ParentheseOuvranteFinale, i);
                }
                if suivant == Some(')') {
                    return rejet(Defaut::GroupeVide, i);
                }
            }
            ')' => {
                ouvertes -= 1;
                if i == 0 {
                    return rejet(Defaut::ParentheseFermanteInitiale, i);
                }
                if ouvertes < 0 {
                    return rejet(Defaut::ParenthesesDesequilibrees, i);
                }
            }
            _ if is_operateur_binaire(c) => {
                // ni en bord (testé plus haut) : i-1 et i+1 existent
                let precedent = chars[i - 1];
                let mal_place = precedent == '('
                    || suivant == Some(')')
                    || suivant.is_some_and(is_operateur_binaire);
                if mal_place {
                    return rejet(Defaut::OperateurMalPlace, i);
                }
            }
            _ if c.is_ascii_digit() || is_operateur(c) => {}
            _ => return rejet(Defaut::CaractereInattendu(c), i),
        }
    }

    if ouvertes != 0 {
        return rejet(Defaut::ParenthesesDesequilibrees, chars.len());
    }
    Ok(())
}
