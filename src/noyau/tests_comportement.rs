//! Tests de comportement : scénarios complets requête → résultat affiché.
//!
//! Chaque scénario passe par classify puis evaluate, comme l’interface,
//! et vérifie l’ordre canonique des opérandes (pas seulement l’ensemble).

use super::format::{formater_resultat, DECIMALES_DEFAUT};
use super::{classify, evaluate, OperationKind, RequeteAnalysee};

use super::OperationKind::*;

fn parse_ok(s: &str) -> RequeteAnalysee {
    classify(s).unwrap_or_else(|e| panic!("requête={s:?} err={e}"))
}

fn scenario(s: &str, op: OperationKind, operandes: &[f64], affiche: &str) {
    let r = parse_ok(s);
    assert_eq!(r.operation, op, "requête={s:?}");
    assert_eq!(r.operandes, operandes, "requête={s:?}");

    let v = evaluate(r.operation, &r.operandes)
        .unwrap_or_else(|e| panic!("requête={s:?} calcul err={e}"));
    assert_eq!(formater_resultat(v, DECIMALES_DEFAUT), affiche, "requête={s:?}");
}

fn echec_calcul(s: &str, message: &str) {
    let r = parse_ok(s);
    let e = evaluate(r.operation, &r.operandes).expect_err(s);
    assert_eq!(e.to_string(), message, "requête={s:?}");
}

/* ------------------------ Les huit opérations ------------------------ */

#[test]
fn comp_scenarios_de_reference() {
    scenario("add 15 and 27", Add, &[15.0, 27.0], "42");
    scenario("subtract 8 from 20", Subtract, &[20.0, 8.0], "12");
    scenario("multiply 6 by 7", Multiply, &[6.0, 7.0], "42");
    scenario("divide 100 by 4", Divide, &[100.0, 4.0], "25");
    scenario("what is 20 percent of 150", Percentage, &[20.0, 150.0], "30");
    scenario("average of 10, 20, 30", Average, &[10.0, 20.0, 30.0], "20");
    scenario("square root of 144", SquareRoot, &[144.0], "12");
    scenario("5 to the power of 3", Power, &[5.0, 3.0], "125");
}

#[test]
fn comp_variantes() {
    scenario("sum of 1, 2, 3, 4, 5", Add, &[1.0, 2.0, 3.0, 4.0, 5.0], "15");
    scenario("add 5.5 and 10.2", Add, &[5.5, 10.2], "15.7");
    scenario("add -5 and 10", Add, &[-5.0, 10.0], "5");
    scenario("20 minus 8", Subtract, &[20.0, 8.0], "12");
    scenario("3 times 4", Multiply, &[3.0, 4.0], "12");
    scenario("1 divided by 3", Divide, &[1.0, 3.0], "0.3333333333");
    scenario("25% of 80", Percentage, &[25.0, 80.0], "20");
    scenario("find the average of 2 and 3", Average, &[2.0, 3.0], "2.5");
    scenario("sqrt of 2", SquareRoot, &[2.0], "1.4142135624");
    scenario("12 squared", Power, &[12.0, 2.0], "144");
    scenario("2 to the power of -2", Power, &[2.0, -2.0], "0.25");
}

#[test]
fn comp_ordre_non_commutatif() {
    // les deux tournures donnent B - A
    scenario("subtract 20 from 8", Subtract, &[8.0, 20.0], "-12");
    scenario("8 minus 20", Subtract, &[8.0, 20.0], "-12");
    scenario("divide 3 by 12", Divide, &[3.0, 12.0], "0.25");
    scenario("3 to the power of 2", Power, &[3.0, 2.0], "9");
    scenario("2 to the power of 3", Power, &[2.0, 3.0], "8");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn comp_erreurs_de_domaine() {
    echec_calcul("divide 10 by 0", "Division by zero is not allowed");
    echec_calcul("10 divided by 0.0", "Division by zero is not allowed");
    echec_calcul(
        "square root of -4",
        "Cannot calculate square root of a negative number",
    );
}

#[test]
fn comp_erreurs_de_lecture() {
    assert_eq!(classify("").unwrap_err().to_string(), "Please enter a query");
    assert_eq!(classify(" \t ").unwrap_err().to_string(), "Please enter a query");

    let msg = classify("hello world").unwrap_err().to_string();
    assert!(msg.contains("couldn't understand"));
    assert_eq!(
        msg,
        "I couldn't understand that query. Try something like 'add 5 and 10'"
    );
}

/* ------------------------ Robustesse de surface ------------------------ */

#[test]
fn comp_casse_et_espaces() {
    let base = classify("add 5 and 10");
    assert_eq!(classify("ADD 5 AND 10"), base);
    assert_eq!(classify("  add   5   and   10  "), base);
    assert_eq!(classify("Add\t5\nand 10"), base);
}

#[test]
fn comp_mots_en_trop_toleres() {
    // recherche non ancrée : le bruit autour de la formule est accepté
    scenario("please add 2 and 3 thanks", Add, &[2.0, 3.0], "5");
    scenario("hey, what's the square root of 81?", SquareRoot, &[81.0], "9");
}
