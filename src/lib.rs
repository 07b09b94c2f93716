//! Calculatrice préfixe : conversion infixe -> notation polonaise (préfixe)
//! et évaluation d’expressions préfixes.
//!
//! Le noyau est indépendant de l’interface (voir `noyau`).

pub mod noyau;
