//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler classify/evaluate sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariants clés :
//!   * aucune panique, quel que soit le texte
//!   * deux appels identiques => même résultat
//!   * casse et espaces aux bords ne changent rien
//!   * une requête reconnue respecte toujours l’arité exigée par l’évaluateur

use std::time::{Duration, Instant};

use super::{classify, evaluate, EvalError, OperationKind};

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
    fn choisir<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[self.pick(options.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de requêtes (bornée) ------------------------ */

const MOTS_CLES: &[&str] = &[
    "add", "sum of", "plus", "subtract", "from", "minus", "multiply", "by", "times", "divide",
    "divided by", "percent of", "% of", "%", "average of", "find the average of", "square root of",
    "sqrt of", "squared", "to the power of", "and", ",", "what is", "the", "hello",
];

fn gen_nombre(rng: &mut Rng) -> String {
    let signe = if rng.pick(4) == 0 { "-" } else { "" };
    let entier = rng.pick(1000);
    match rng.pick(3) {
        0 => format!("{signe}{entier}"),
        1 => format!("{signe}{entier}.{}", rng.pick(100)),
        _ => format!("{signe}{entier}."),
    }
}

fn gen_requete(rng: &mut Rng) -> String {
    let n = 1 + rng.pick(7);
    let mut morceaux = Vec::with_capacity(n as usize);
    for _ in 0..n {
        if rng.coin() {
            morceaux.push(gen_nombre(rng));
        } else {
            morceaux.push(rng.choisir(MOTS_CLES).to_string());
        }
    }

    let sep = rng.choisir(&[" ", "  ", "\t", " \n "]);
    morceaux.join(sep)
}

/// Texte arbitraire (y compris Unicode et caractères de contrôle).
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        'a', 'd', 's', 'q', 'r', 't', 'o', 'f', ' ', '\t', '-', '.', '%', '0', '7', '9', 'É', 'ß',
        'İ', '√', '\u{0}', '\u{a0}',
    ];
    let len = rng.pick(24);
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Invariants ------------------------ */

fn verifier_invariants(texte: &str) {
    let a = classify(texte);
    let b = classify(texte);
    assert_eq!(a, b, "classify non idempotent pour {texte:?}");

    let Ok(r) = a else {
        return;
    };

    // l’arité de la requête reconnue est celle que l’évaluateur exige
    assert!(
        r.operation.arite().admet(r.operandes.len()),
        "arité violée: {texte:?} => {r:?}"
    );

    let e1 = evaluate(r.operation, &r.operandes);
    let e2 = evaluate(r.operation, &r.operandes);
    match (&e1, &e2) {
        (Ok(x), Ok(y)) => assert!(x == y || (x.is_nan() && y.is_nan()), "{texte:?}"),
        _ => assert_eq!(e1, e2, "{texte:?}"),
    }

    // seules les erreurs de domaine sont possibles après une lecture réussie
    if let Err(e) = e1 {
        assert!(
            matches!(
                e,
                EvalError::DivisionByZero
                    | EvalError::NegativeSquareRootOperand
                    | EvalError::NonNumericOperand
            ),
            "erreur inattendue pour {texte:?}: {e}"
        );
    }
}

#[test]
fn fuzz_requetes_generees() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..4000 {
        budget(start, max);
        let q = gen_requete(&mut rng);
        verifier_invariants(&q);
    }
}

#[test]
fn fuzz_bruit_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..4000 {
        budget(start, max);
        let q = gen_bruit(&mut rng);
        verifier_invariants(&q);
    }
}

#[test]
fn fuzz_casse_et_bords() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(7);

    for _ in 0..2000 {
        budget(start, max);
        let q = gen_requete(&mut rng);
        let base = classify(&q);

        let maj = q.to_uppercase();
        // certaines majuscules Unicode ne reviennent pas à l’identique : ASCII seulement
        if maj.is_ascii() {
            assert_eq!(classify(&maj), base, "casse: {q:?}");
        }

        let bords = format!("  \t{q} \n ");
        assert_eq!(classify(&bords), base, "bords: {q:?}");
    }
}

#[test]
fn fuzz_chaque_operation_reconnue() {
    // chaque opération doit être atteinte au moins une fois par le générateur
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(1234);
    let mut vues = std::collections::HashSet::new();

    for _ in 0..6000 {
        budget(start, max);
        if let Ok(r) = classify(&gen_requete(&mut rng)) {
            vues.insert(r.operation);
        }
    }

    for op in OperationKind::TOUTES {
        assert!(vues.contains(&op), "jamais reconnue: {op}");
    }
}
