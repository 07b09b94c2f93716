// src/noyau/conversion.rs
//
// Infixe -> préfixe (notation polonaise)
// Principe : balayage de l’expression INVERSÉE, parenthèses permutées,
// pile d’opérateurs à précédence, puis inversion de la sortie.
//
// Règles de dépilement (sur le flux inversé) :
// - + - * / (associatifs à gauche) : on dépile les opérateurs de précédence STRICTEMENT supérieure
// - ^ (associatif à droite)        : on dépile les opérateurs de précédence supérieure OU égale
// => "8-4-2" donne "- - 8 4 2" (= (8-4)-2) et "2^3^2" donne "^ 2 ^ 3 2" (= 2^(3^2)).
//
// Sortie : jetons séparés par un espace, les nombres à plusieurs chiffres restent lisibles.

use log::{debug, trace as log_trace};

use super::erreur::{ConversionError, Defaut};
use super::precedence::{is_operateur, is_right_associative, precedence};
use super::validation::{check, sans_espaces};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Jeton {
    Nombre(String),
    Op(char),
}

/// Étapes d’une conversion, pour l’affichage “démarche”.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demarche {
    /// Expression sans espaces.
    pub nettoyee: String,
    /// Flux inversé, parenthèses permutées (ce que lit la boucle).
    pub inversee: String,
    pub prefixe: String,
}

/// API publique : `None` = aucune expression (≠ chaîne vide).
pub fn convert_to_prefix(expression: Option<&str>) -> Result<String, ConversionError> {
    let expression = expression.ok_or(ConversionError::MissingInput)?;
    to_prefix(expression)
}

/// Conversion d’une expression infixe présente.
pub fn to_prefix(expression: &str) -> Result<String, ConversionError> {
    convertir(expression).map(|d| d.prefixe)
}

/// Conversion + étapes intermédiaires.
pub fn trace(expression: &str) -> Result<Demarche, ConversionError> {
    convertir(expression)
}

fn permute_parenthese(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        _ => c,
    }
}

/// Faut-il sortir `sommet` de la pile avant d’empiler `op` ?
fn doit_depiler(sommet: char, op: char) -> bool {
    let (Some(p_sommet), Some(p_op)) = (precedence(sommet), precedence(op)) else {
        // '(' bloque
        return false;
    };
    if is_right_associative(op) {
        p_sommet >= p_op
    } else {
        p_sommet > p_op
    }
}

/// Pousse le nombre en cours (lu à l’envers) dans la sortie, remis à l’endroit.
fn vider_nombre(chiffres: &mut String, sortie: &mut Vec<Jeton>) {
    if chiffres.is_empty() {
        return;
    }
    let nombre: String = chiffres.chars().rev().collect();
    chiffres.clear();
    sortie.push(Jeton::Nombre(nombre));
}

fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(jetons.len());
    for j in jetons {
        match j {
            Jeton::Nombre(n) => out.push(n.clone()),
            Jeton::Op(c) => out.push(c.to_string()),
        }
    }
    out.join(" ")
}

fn convertir(expression: &str) -> Result<Demarche, ConversionError> {
    debug!("conversion préfixe: {expression:?}");

    // 0) Garde : aucune sortie partielle si l’expression est refusée
    check(expression)?;

    // 1) Nettoyage + inversion + permutation des parenthèses
    let nettoyee = sans_espaces(expression);
    let inversee: Vec<char> = nettoyee
        .iter()
        .rev()
        .map(|&c| permute_parenthese(c))
        .collect();
    let fin = nettoyee.len();

    // 2) Balayage
    let mut sortie: Vec<Jeton> = Vec::with_capacity(inversee.len());
    let mut pile: Vec<char> = Vec::new();
    let mut chiffres = String::new();

    for (i, &c) in inversee.iter().enumerate() {
        log_trace!("pas {i}: {c:?} pile={pile:?}");

        if c.is_ascii_digit() {
            chiffres.push(c);
            continue;
        }
        vider_nombre(&mut chiffres, &mut sortie);

        match c {
            '(' => pile.push(c),
            ')' => loop {
                match pile.pop() {
                    Some('(') => break,
                    Some(op) => sortie.push(Jeton::Op(op)),
                    None => {
                        return Err(ConversionError::InvalidExpression {
                            defaut: Defaut::ParenthesesDesequilibrees,
                            position: fin - 1 - i,
                        })
                    }
                }
            },
            _ if is_operateur(c) => {
                while let Some(&sommet) = pile.last() {
                    if !doit_depiler(sommet, c) {
                        break;
                    }
                    sortie.push(Jeton::Op(sommet));
                    pile.pop();
                }
                pile.push(c);
            }
            _ => {
                return Err(ConversionError::InvalidExpression {
                    defaut: Defaut::CaractereInattendu(c),
                    position: fin - 1 - i,
                })
            }
        }
    }
    vider_nombre(&mut chiffres, &mut sortie);

    // 3) Vide la pile (ordre LIFO)
    while let Some(op) = pile.pop() {
        if op == '(' {
            return Err(ConversionError::InvalidExpression {
                defaut: Defaut::ParenthesesDesequilibrees,
                position: fin,
            });
        }
        sortie.push(Jeton::Op(op));
    }

    // 4) Sortie remise à l’endroit
    sortie.reverse();
    let prefixe = format_jetons(&sortie);
    debug!("préfixe obtenue: {prefixe:?}");

    Ok(Demarche {
        nettoyee: nettoyee.iter().collect(),
        inversee: inversee.iter().collect(),
        prefixe,
    })
}
