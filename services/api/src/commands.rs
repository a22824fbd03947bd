use crate::infra::build_evaluator;
use card_decisions::applications::{ApplicationBatch, CardApplication, EvaluationOutcome};
use card_decisions::config::AppConfig;
use card_decisions::error::AppError;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Applicant age in years
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) age: i32,
    /// Gross annual income
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) income: i32,
    /// Frequent flyer number to validate
    #[arg(long)]
    pub(crate) frequent_flyer_number: Option<String>,
    /// Applicant last name, used by the fraud screen
    #[arg(long)]
    pub(crate) last_name: Option<String>,
    /// Skip the fraud screen even when it is enabled in configuration
    #[arg(long)]
    pub(crate) skip_fraud_check: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with age,gross_annual_income,frequent_flyer_number,last_name columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Skip the fraud screen even when it is enabled in configuration
    #[arg(long)]
    pub(crate) skip_fraud_check: bool,
}

#[derive(Debug, Serialize)]
struct BatchLine<'a> {
    row: usize,
    #[serde(flatten)]
    outcome: &'a EvaluationOutcome,
}

#[derive(Debug, Serialize)]
struct BatchSummary {
    evaluated: usize,
    referred: usize,
    lookup_count: u64,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        age,
        income,
        frequent_flyer_number,
        last_name,
        skip_fraud_check,
    } = args;

    let config = AppConfig::load()?;
    let evaluator = build_evaluator(&config.validator, !skip_fraud_check)?;

    let application = CardApplication {
        age,
        gross_annual_income: income,
        frequent_flyer_number,
        last_name,
    };
    let outcome = evaluator.assess(&application);

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs {
        input,
        skip_fraud_check,
    } = args;

    let config = AppConfig::load()?;
    let evaluator = build_evaluator(&config.validator, !skip_fraud_check)?;
    let batch = ApplicationBatch::from_path(&input)?;

    let outcomes = batch.evaluate(&evaluator);
    for line in render_batch(&outcomes)? {
        println!("{line}");
    }

    let summary = BatchSummary {
        evaluated: outcomes.len(),
        referred: outcomes
            .iter()
            .filter(|outcome| outcome.decision.requires_review())
            .count(),
        lookup_count: evaluator.lookup_count(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn render_batch(outcomes: &[EvaluationOutcome]) -> Result<Vec<String>, serde_json::Error> {
    outcomes
        .iter()
        .enumerate()
        .map(|(index, outcome)| {
            serde_json::to_string(&BatchLine {
                row: index + 1,
                outcome,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_decisions::applications::{Decision, DecisionReason};
    use serde_json::Value;

    #[test]
    fn batch_lines_are_numbered_from_one() {
        let outcomes = vec![
            EvaluationOutcome {
                decision: Decision::AutoAccepted,
                reason: DecisionReason::IncomeAtOrAboveThreshold { threshold: 20_000 },
                summary: "accepted".to_string(),
            },
            EvaluationOutcome {
                decision: Decision::ReferredToHuman,
                reason: DecisionReason::LicenseExpired,
                summary: "referred".to_string(),
            },
        ];

        let lines = render_batch(&outcomes).expect("lines render");

        assert_eq!(lines.len(), 2);
        let second: Value = serde_json::from_str(&lines[1]).expect("valid json");
        assert_eq!(second["row"], 2);
        assert_eq!(second["decision"], "referred_to_human");
        assert_eq!(second["reason"], "license_expired");
    }
}
