use std::io::Cursor;

use super::common::*;
use crate::applications::domain::CardApplication;
use crate::applications::evaluation::Decision;
use crate::applications::intake::{ApplicationBatch, IntakeError};

const BATCH_CSV: &str = "age,gross_annual_income,frequent_flyer_number,last_name
45, 25000 ,FF-1,Jones
19,0,,
50,19999,x,Brown
";

#[test]
fn parses_rows_in_file_order() {
    let batch = ApplicationBatch::from_reader(Cursor::new(BATCH_CSV)).expect("batch parses");

    assert_eq!(batch.len(), 3);
    assert_eq!(
        batch.applications()[0],
        CardApplication {
            age: 45,
            gross_annual_income: 25_000,
            frequent_flyer_number: Some("FF-1".to_string()),
            last_name: Some("Jones".to_string()),
        }
    );
    assert_eq!(batch.applications()[1].frequent_flyer_number, None);
    assert_eq!(batch.applications()[1].last_name, None);
}

#[test]
fn evaluates_each_row_with_shared_evaluator() {
    let (evaluator, validator) = evaluator_with(ScriptedValidator::answering(true));
    let batch = ApplicationBatch::from_reader(Cursor::new(BATCH_CSV)).expect("batch parses");

    let decisions: Vec<Decision> = batch
        .evaluate(&evaluator)
        .into_iter()
        .map(|outcome| outcome.decision)
        .collect();

    assert_eq!(
        decisions,
        vec![
            Decision::AutoAccepted,
            Decision::ReferredToHuman,
            Decision::AutoDeclined,
        ]
    );
    assert_eq!(evaluator.lookup_count(), 2);
    assert_eq!(
        validator.numbers_seen(),
        vec![None, Some("x".to_string())]
    );
}

#[test]
fn rejects_non_numeric_income() {
    let csv = "age,gross_annual_income,frequent_flyer_number,last_name\n30,lots,,\n";

    let result = ApplicationBatch::from_reader(Cursor::new(csv));

    assert!(matches!(result, Err(IntakeError::Csv(_))));
}

#[test]
fn header_only_batch_is_empty() {
    let csv = "age,gross_annual_income,frequent_flyer_number,last_name\n";

    let batch = ApplicationBatch::from_reader(Cursor::new(csv)).expect("batch parses");

    assert!(batch.is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let result = ApplicationBatch::from_path("/nonexistent/card-applications.csv");

    assert!(matches!(result, Err(IntakeError::Io(_))));
}
