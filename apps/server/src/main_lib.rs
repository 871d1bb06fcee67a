use std::sync::Arc;

use crate::config::Config;
use anyhow::Context;
use assetmarket_core::{
    valuation::{ValuationEngine, ValuationRules, ValuationServiceTrait},
    verification::{VerificationConfig, VerificationEngine, VerificationServiceTrait},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub valuation_service: Arc<dyn ValuationServiceTrait>,
    pub verification_service: Arc<dyn VerificationServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let valuation_engine = match &config.valuation_rules_path {
        Some(path) => {
            let rules = ValuationRules::from_json_file(path)
                .with_context(|| format!("Loading valuation rules from {}", path.display()))?;
            tracing::info!("Valuation rules loaded from {}", path.display());
            ValuationEngine::with_rules(rules)?
        }
        None => ValuationEngine::new(),
    };

    let verification_engine = match &config.verification_config_path {
        Some(path) => {
            let verification_config = VerificationConfig::from_json_file(path).with_context(|| {
                format!("Loading verification config from {}", path.display())
            })?;
            tracing::info!("Verification thresholds loaded from {}", path.display());
            VerificationEngine::with_config(verification_config)?
        }
        None => VerificationEngine::new(),
    };

    Ok(Arc::new(AppState {
        valuation_service: Arc::new(valuation_engine),
        verification_service: Arc::new(verification_engine),
    }))
}
