//! Tests fuzz safe : aller-retour infixe -> préfixe -> valeur sur expressions aléatoires.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - valeur attendue calculée en rationnel exact pendant la génération
//! - parenthèses minimales : seules celles exigées par précédence/associativité

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::{evaluate_prefix, evaluate_prefix_exact, to_prefix, validate, EvaluationError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Texte infixe + rang de l’opérateur racine (4 = atome) + valeur exacte
/// (`None` si une division par zéro apparaît).
struct Genere {
    texte: String,
    rang: u8,
    valeur: Option<BigRational>,
}

fn atome(n: u32) -> Genere {
    Genere {
        texte: n.to_string(),
        rang: 4,
        valeur: Some(BigRational::from_integer(BigInt::from(n))),
    }
}

/// Petite puissance a^b (a, b <= 3) : reste exacte en f64.
fn gen_puissance(rng: &mut Rng) -> Genere {
    let a = rng.pick(4);
    let b = rng.pick(4);
    Genere {
        texte: format!("{a}^{b}"),
        rang: 3,
        valeur: Some(BigRational::from_integer(BigInt::from(a.pow(b)))),
    }
}

fn entoure(g: Genere, besoin: bool) -> String {
    if besoin {
        format!("({})", g.texte)
    } else {
        g.texte
    }
}

fn gen_expr(rng: &mut Rng, profondeur: u32, avec_division: bool) -> Genere {
    if profondeur == 0 || rng.pick(4) == 0 {
        return match rng.pick(5) {
            0 => gen_puissance(rng),
            // 10..=12 : nombres à plusieurs chiffres
            _ => atome(rng.pick(13)),
        };
    }

    let ops: &[(char, u8)] = if avec_division {
        &[('+', 1), ('-', 1), ('*', 2), ('/', 2)]
    } else {
        &[('+', 1), ('-', 1), ('*', 2)]
    };
    let (op, rang) = ops[rng.pick(ops.len() as u32) as usize];

    let g = gen_expr(rng, profondeur - 1, avec_division);
    let d = gen_expr(rng, profondeur - 1, avec_division);

    let valeur = match (g.valeur.clone(), d.valeur.clone()) {
        (Some(a), Some(b)) => match op {
            '+' => Some(a + b),
            '-' => Some(a - b),
            '*' => Some(a * b),
            _ if b.is_zero() => None,
            _ => Some(a / b),
        },
        _ => None,
    };

    // gauche : parenthèses si rang plus faible
    // droite : parenthèses si rang plus faible OU égal (associativité gauche)
    let besoin_g = g.rang < rang;
    let besoin_d = d.rang <= rang;
    let texte = format!("{}{op}{}", entoure(g, besoin_g), entoure(d, besoin_d));

    Genere {
        texte,
        rang,
        valeur,
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_exact_toutes_operations() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0x5eed_cafe);

    for _ in 0..1500 {
        budget(start, max);

        let g = gen_expr(&mut rng, 4, true);
        assert!(validate(&g.texte), "expr={:?}", g.texte);

        let p = to_prefix(&g.texte).unwrap_or_else(|e| panic!("expr={:?} err={e}", g.texte));
        let obtenu = evaluate_prefix_exact(&p);

        match g.valeur {
            Some(v) => assert_eq!(obtenu, Ok(v), "expr={:?} prefixe={p:?}", g.texte),
            None => assert_eq!(
                obtenu,
                Err(EvaluationError::DivisionByZero),
                "expr={:?} prefixe={p:?}",
                g.texte
            ),
        }
    }
}

#[test]
fn fuzz_flottant_sans_division() {
    // Sans division, profondeur 3 : valeurs entières bornées, donc exactes en f64.
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..1500 {
        budget(start, max);

        let g = gen_expr(&mut rng, 3, false);
        let attendu = g
            .valeur
            .as_ref()
            .and_then(ToPrimitive::to_f64)
            .unwrap_or_else(|| panic!("valeur attendue absente: {:?}", g.texte));

        let p = to_prefix(&g.texte).unwrap_or_else(|e| panic!("expr={:?} err={e}", g.texte));
        let obtenu = evaluate_prefix(&p);
        assert_eq!(obtenu, Ok(attendu), "expr={:?} prefixe={p:?}", g.texte);
    }
}

#[test]
fn fuzz_conversion_deterministe() {
    let mut rng = Rng::new(7);
    for _ in 0..300 {
        let g = gen_expr(&mut rng, 4, true);
        assert_eq!(to_prefix(&g.texte), to_prefix(&g.texte), "expr={:?}", g.texte);
    }
}
