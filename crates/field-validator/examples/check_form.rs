//! Validate a urlencoded form body against validator.toml
//!
//! ```text
//! cargo run -p field-validator --example check_form -- "meta=meta&amount=12.5" [validator.toml]
//! ```

use anyhow::{Context, Result};
use field_validator::{validate_form, UrlEncoded, ValidatorConfig};

/// Sample config shipped next to this crate's manifest
const BUNDLED_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/validator.toml");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "field_validator=debug".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let body = args.next().context("usage: check_form <urlencoded body> [config path]")?;
    let path = args.next().unwrap_or_else(|| BUNDLED_CONFIG.to_string());
    anyhow::ensure!(
        std::path::Path::new(&path).exists(),
        "config file not found: {}",
        path
    );
    let config = ValidatorConfig::load(&path)?;

    let rules = config.form_rules()?;
    let form = config.extract(&UrlEncoded(&body));
    let report = validate_form(&form, &rules);

    if report.is_valid() {
        println!("✅ {} field(s) valid", form.len());
        return Ok(());
    }

    for (field, errors) in report.into_inner() {
        for error in errors {
            println!("❌ {}: {}", field, error);
        }
    }
    std::process::exit(1);
}
