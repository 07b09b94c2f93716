//! Tests scientifiques (campagne) : propriétés du pipeline infixe -> préfixe -> valeur.
//!
//! But : vérifier les propriétés annoncées sur des cas nommés.
//! - précédence + associativité (gauche pour + - * /, droite pour ^)
//! - erreurs distinctes (entrée absente, invalide, division par zéro)
//! - déterminisme + idempotence
//! - budget temps global sur une expression longue

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use pretty_assertions::assert_eq;

use super::{
    convert_to_prefix, evaluate_prefix, evaluate_prefix_exact, format_rat, init_test_logger,
    to_prefix, validate, ConversionError, EvaluationError,
};

fn eval_ok(expr: &str) -> f64 {
    init_test_logger();
    let p = to_prefix(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    evaluate_prefix(&p).unwrap_or_else(|e| panic!("expr={expr:?} prefixe={p:?} err={e}"))
}

fn exact_ok(expr: &str) -> String {
    let p = to_prefix(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    let r = evaluate_prefix_exact(&p).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    format_rat(&r)
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Exemples de référence ------------------------ */

#[test]
fn sci_precedence_multiplication() {
    assert_eq!(to_prefix("2+3*4").unwrap(), "+ 2 * 3 4");
    assert_eq!(eval_ok("2+3*4"), 14.0);
}

#[test]
fn sci_parentheses() {
    assert_eq!(to_prefix("(2+3)*4").unwrap(), "* + 2 3 4");
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
}

#[test]
fn sci_associativite_gauche() {
    assert_eq!(eval_ok("8-4-2"), 2.0);
    assert_eq!(eval_ok("100/10/5"), 2.0);
    assert_eq!(eval_ok("2-3+4"), 3.0);
    assert_eq!(eval_ok("12/2*3"), 18.0);
}

#[test]
fn sci_puissance() {
    assert_eq!(eval_ok("2^3^2"), 512.0);
    assert_eq!(eval_ok("(2^3)^2"), 64.0);
    assert_eq!(eval_ok("2*3^2"), 18.0);
    assert_eq!(eval_ok("2^3*2"), 16.0);
    assert_eq!(exact_ok("2^(0-3)"), "1/8");
}

#[test]
fn sci_expressions_mixtes() {
    assert_eq!(exact_ok("1 + 2 * (3 - 4) / 5"), "3/5");
    assert_eq!(eval_ok("((15/(7-(1+1)))*3)-(2+(1+1))"), 5.0);
    assert_eq!(exact_ok("1/3+1/6"), "1/2");
    assert_eq!(exact_ok("10/4"), "5/2");
}

/* ------------------------ Erreurs distinctes ------------------------ */

#[test]
fn sci_invalide() {
    assert!(!validate("(3+2))"));
    assert!(matches!(
        convert_to_prefix(Some("( 3 + 2 ) )")),
        Err(ConversionError::InvalidExpression { .. })
    ));
}

#[test]
fn sci_division_par_zero() {
    let p = to_prefix("2 + 10 / 0").unwrap();
    assert_eq!(evaluate_prefix(&p), Err(EvaluationError::DivisionByZero));
    assert_eq!(evaluate_prefix_exact(&p), Err(EvaluationError::DivisionByZero));

    let p = to_prefix("5/(3-3)").unwrap();
    assert_eq!(evaluate_prefix(&p), Err(EvaluationError::DivisionByZero));
}

#[test]
fn sci_entree_absente() {
    assert_eq!(convert_to_prefix(None), Err(ConversionError::MissingInput));
    assert_ne!(convert_to_prefix(Some("")), Err(ConversionError::MissingInput));
}

#[test]
fn sci_puissance_incomplete() {
    // "^" n’est pas vérifié en bord par le validateur : l’évaluation le signale
    assert!(validate("2^"));
    let p = to_prefix("2^").unwrap();
    assert!(matches!(
        evaluate_prefix(&p),
        Err(EvaluationError::MalformedExpression { .. })
    ));
}

/* ------------------------ Déterminisme / idempotence ------------------------ */

#[test]
fn sci_deterministe_et_idempotent() {
    let exprs = ["2+3*4", "(1+2)*(3+4)", "9-8-7-6", "2^2^2", " 4 / ( 1 + 1 ) "];
    for e in exprs {
        assert!(validate(e));
        assert!(validate(e), "revalidation expr={e:?}");
        let a = to_prefix(e).unwrap();
        let b = to_prefix(e).unwrap();
        assert_eq!(a, b, "expr={e:?}");
    }
}

#[test]
fn sci_sortie_reevaluable() {
    // la forme préfixe produite est elle-même stable : deux évaluations identiques
    let p = to_prefix("(7+8)*(9-3)/5").unwrap();
    assert_eq!(evaluate_prefix(&p), evaluate_prefix(&p));
    assert_eq!(evaluate_prefix(&p), Ok(18.0));
}

/* ------------------------ Limites contrôlées ------------------------ */

#[test]
fn sci_chaine_longue() {
    let start = Instant::now();
    let max = Duration::from_secs(2);

    // 1+1+...+1 (2000 termes) et ((((...1...))))
    let somme = vec!["1"; 2000].join("+");
    assert_eq!(eval_ok(&somme), 2000.0);
    budget(start, max);

    let profond = format!("{}1{}", "(".repeat(500), ")".repeat(500));
    assert_eq!(eval_ok(&profond), 1.0);
    budget(start, max);

    let differences = vec!["1"; 1001].join("-");
    let attendu = BigRational::from_integer(BigInt::from(-999));
    let p = to_prefix(&differences).unwrap();
    assert_eq!(evaluate_prefix_exact(&p), Ok(attendu));
    budget(start, max);
}
