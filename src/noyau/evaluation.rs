//! Noyau — évaluation d’une expression préfixe.
//!
//! Le flux est lu À L’ENVERS : chaque nombre est empilé, chaque opérateur
//! dépile deux valeurs. La première dépilée est l’opérande de GAUCHE
//! (c’est la plus à gauche dans la forme préfixe), la seconde celle de droite.
//!
//! Deux lectures, même réducteur :
//! - `evaluate_prefix`       : f64
//! - `evaluate_prefix_exact` : rationnel exact (BigRational)
//!
//! L’évaluateur ne revalide pas l’entrée : il détecte seulement les défauts
//! de structure (pile vide, valeurs en trop, caractère inconnu).

use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::erreur::EvaluationError;
use super::precedence::is_operateur;

/// Garde-fou : borne de l’exposant en mode exact (anti-gel).
pub const EXPOSANT_MAX: i32 = 4096;

/// Garde-fou : taille estimée (en bits, numérateur + dénominateur) d’une puissance exacte.
pub const PUISSANCE_BITS_MAX: u64 = 1 << 20;

/// API publique : valeur flottante d’une expression préfixe.
pub fn evaluate_prefix(expression: &str) -> Result<f64, EvaluationError> {
    debug!("évaluation préfixe (f64): {expression:?}");
    let v = reduire(expression, lire_flottant, appliquer_flottant)?;
    debug!("résultat: {v}");
    Ok(v)
}

/// Valeur exacte (rationnelle) d’une expression préfixe.
pub fn evaluate_prefix_exact(expression: &str) -> Result<BigRational, EvaluationError> {
    debug!("évaluation préfixe (exacte): {expression:?}");
    let v = reduire(expression, lire_rationnel, appliquer_rationnel)?;
    debug!("résultat: {v}");
    Ok(v)
}

/* ------------------------ Réducteur commun ------------------------ */

fn reduire<V, L, A>(expression: &str, lire: L, appliquer: A) -> Result<V, EvaluationError>
where
    L: Fn(&str) -> Result<V, EvaluationError>,
    A: Fn(char, V, V) -> Result<V, EvaluationError>,
{
    let inversee: Vec<char> = expression.chars().rev().collect();
    let mut pile: Vec<V> = Vec::new();
    let mut i: usize = 0;

    while i < inversee.len() {
        let c = inversee[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if is_operateur(c) {
            let manque = || EvaluationError::malformee(format!("opérande manquante pour '{c}'"));
            let gauche = pile.pop().ok_or_else(manque)?;
            let droite = pile.pop().ok_or_else(manque)?;
            pile.push(appliquer(c, gauche, droite)?);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            // suite de chiffres (à l’envers) -> remise à l’endroit
            let debut = i;
            while i < inversee.len() && inversee[i].is_ascii_digit() {
                i += 1;
            }
            let nombre: String = inversee[debut..i].iter().rev().collect();
            pile.push(lire(&nombre)?);
            continue;
        }

        return Err(EvaluationError::malformee(format!(
            "caractère inattendu: '{c}'"
        )));
    }

    let resultat = pile
        .pop()
        .ok_or_else(|| EvaluationError::malformee("aucune valeur"))?;
    if !pile.is_empty() {
        return Err(EvaluationError::malformee(format!(
            "{} valeur(s) en trop",
            pile.len()
        )));
    }
    Ok(resultat)
}

/* ------------------------ f64 ------------------------ */

fn lire_flottant(nombre: &str) -> Result<f64, EvaluationError> {
    nombre
        .parse::<f64>()
        .map_err(|_| EvaluationError::malformee(format!("nombre invalide: {nombre}")))
}

fn appliquer_flottant(op: char, gauche: f64, droite: f64) -> Result<f64, EvaluationError> {
    match op {
        '+' => Ok(gauche + droite),
        '-' => Ok(gauche - droite),
        '*' => Ok(gauche * droite),
        '/' => {
            if droite == 0.0 {
                return Err(EvaluationError::DivisionByZero);
            }
            Ok(gauche / droite)
        }
        '^' => Ok(puissance_flottante(gauche, droite)),
        _ => Err(EvaluationError::malformee(format!("opérateur inconnu: '{op}'"))),
    }
}

/// Exposant entier => multiplications répétées (résultat exact sur les petits entiers).
///
/// Base négative + exposant non entier : pas de valeur réelle, le résultat est NaN
/// (sémantique IEEE de `powf`, pas d’erreur).
fn puissance_flottante(base: f64, exposant: f64) -> f64 {
    if exposant.fract() == 0.0 && exposant.abs() <= f64::from(i32::MAX) {
        base.powi(exposant as i32)
    } else {
        base.powf(exposant)
    }
}

/* ------------------------ Rationnel exact ------------------------ */

fn lire_rationnel(nombre: &str) -> Result<BigRational, EvaluationError> {
    let n = BigInt::parse_bytes(nombre.as_bytes(), 10)
        .ok_or_else(|| EvaluationError::malformee(format!("nombre invalide: {nombre}")))?;
    Ok(BigRational::from_integer(n))
}

fn appliquer_rationnel(
    op: char,
    gauche: BigRational,
    droite: BigRational,
) -> Result<BigRational, EvaluationError> {
    match op {
        '+' => Ok(gauche + droite),
        '-' => Ok(gauche - droite),
        '*' => Ok(gauche * droite),
        '/' => {
            if droite.is_zero() {
                return Err(EvaluationError::DivisionByZero);
            }
            Ok(gauche / droite)
        }
        '^' => puissance_exacte(&gauche, &droite),
        _ => Err(EvaluationError::malformee(format!("opérateur inconnu: '{op}'"))),
    }
}

fn puissance_exacte(
    base: &BigRational,
    exposant: &BigRational,
) -> Result<BigRational, EvaluationError> {
    let refus = || EvaluationError::UnsupportedExponent {
        exposant: exposant.to_string(),
    };

    if !exposant.is_integer() {
        return Err(refus());
    }
    let n = exposant
        .to_integer()
        .to_i32()
        .filter(|n| n.abs() <= EXPOSANT_MAX)
        .ok_or_else(refus)?;

    if base.is_zero() && n < 0 {
        return Err(EvaluationError::DivisionByZero);
    }

    // taille du résultat ≈ (bits(numer) + bits(denom)) * |n|
    let bits = base.numer().bits() + base.denom().bits();
    if bits.saturating_mul(u64::from(n.unsigned_abs())) > PUISSANCE_BITS_MAX {
        return Err(refus());
    }
    Ok(base.pow(n))
}
