use card_decisions::applications::{
    CardApplicationEvaluator, EvaluatorError, FraudLookup, RegistryValidator, SurnameFraudLookup,
};
use card_decisions::config::ValidatorConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wire the configured registry validator and optional fraud screen.
pub(crate) fn build_evaluator(
    config: &ValidatorConfig,
    fraud_check: bool,
) -> Result<CardApplicationEvaluator, EvaluatorError> {
    let validator = Arc::new(RegistryValidator::new(
        config.license.clone(),
        &config.known_numbers,
    ));
    debug!(
        known_numbers = validator.known_numbers(),
        license = %config.license,
        "frequent flyer registry loaded"
    );

    let fraud_lookup: Option<Arc<dyn FraudLookup>> = if config.fraud_check && fraud_check {
        Some(Arc::new(SurnameFraudLookup))
    } else {
        None
    };

    CardApplicationEvaluator::builder()
        .validator(validator)
        .fraud_lookup(fraud_lookup)
        .build()
}
