// src/noyau/lecture.rs
//
// Lecture d’un résultat exact : fraction "n/d" + décimal tronqué.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

/// Garde-fou : nombre maximal de décimales d’une lecture.
pub const DIGITS_MAX: usize = 200;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// "n" si entier, sinon "n/d".
pub fn format_rat(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
fn scaled_to_decimal(mut scaled: BigInt, digits: u32) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;
    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits as usize {
        frac.insert(0, '0');
    }
    format!("{signe}{int_part}.{frac}")
}

/// Lecture décimale tronquée (vers zéro) avec exactement `digits` décimales,
/// `digits` ramené à `DIGITS_MAX` au plus.
pub fn lecture_decimale(r: &BigRational, digits: usize) -> String {
    // <= DIGITS_MAX : tient dans un u32
    let digits = digits.min(DIGITS_MAX) as u32;

    // r * 10^digits, tronqué vers zéro
    let scaled = (r.numer() * pow10(digits)) / r.denom();
    scaled_to_decimal(scaled, digits)
}
