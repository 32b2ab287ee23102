// src/noyau/calcul.rs
//
// Évaluateur : arité + domaine, puis formule en f64 (aucun arrondi intermédiaire).

use tracing::debug;

use super::erreurs::EvalError;
use super::operation::OperationKind;

pub type EvalOutcome = Result<f64, EvalError>;

/// Préconditions communes : liste non vide, valeurs finies.
fn verifier_operandes(operandes: &[f64]) -> Result<(), EvalError> {
    if operandes.is_empty() {
        return Err(EvalError::InvalidOperands);
    }
    if !operandes.iter().all(|x| x.is_finite()) {
        return Err(EvalError::NonNumericOperand);
    }
    Ok(())
}

fn somme(operandes: &[f64]) -> f64 {
    operandes.iter().fold(0.0, |acc, x| acc + x)
}

fn produit(operandes: &[f64]) -> f64 {
    operandes.iter().fold(1.0, |acc, x| acc * x)
}

/// Formule seule ; l’arité est déjà vérifiée.
fn appliquer(operation: OperationKind, o: &[f64]) -> EvalOutcome {
    use OperationKind::*;

    match operation {
        Add => Ok(somme(o)),
        Subtract => Ok(o[0] - o[1]),
        Multiply => Ok(produit(o)),
        Divide => {
            if o[1] == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(o[0] / o[1])
        }
        Percentage => Ok((o[0] / 100.0) * o[1]),
        Average => Ok(somme(o) / o.len() as f64),
        SquareRoot => {
            if o[0] < 0.0 {
                return Err(EvalError::NegativeSquareRootOperand);
            }
            Ok(o[0].sqrt())
        }
        Power => Ok(o[0].powf(o[1])),
    }
}

fn evaluer_verifie(operation: OperationKind, operandes: &[f64]) -> EvalOutcome {
    if !operation.arite().admet(operandes.len()) {
        return Err(EvalError::WrongArity(operation));
    }
    appliquer(operation, operandes)
}

/// API publique : calcule `operation` sur `operandes` (ordre canonique).
pub fn evaluate(operation: OperationKind, operandes: &[f64]) -> EvalOutcome {
    let r = verifier_operandes(operandes).and_then(|()| evaluer_verifie(operation, operandes));

    if let Err(e) = &r {
        debug!(%operation, ?operandes, erreur = %e, "évaluation refusée");
    }
    r
}

/// Variante par étiquette ("add", "sqrt", ...). Les opérandes sont vérifiés
/// avant l’étiquette : une liste vide l’emporte sur une opération inconnue.
pub fn evaluate_tagged(etiquette: &str, operandes: &[f64]) -> EvalOutcome {
    verifier_operandes(operandes)?;

    let operation = etiquette
        .parse::<OperationKind>()
        .map_err(EvalError::UnknownOperation)?;

    evaluate(operation, operandes)
}
