use crate::OutputFormat;
use crate::config::Config;
use crate::duration::{Validity, classify, format_canonical, format_suggestion};
use anyhow::{Context, Result};
use serde_json::json;

/// Classify one input the way a bound field would on submit.
pub fn check(config: &Config, input: &str, required: bool, format: OutputFormat) -> Result<()> {
    let validity = classify(input, required);

    match format {
        OutputFormat::Json => {
            let value = match &validity {
                Validity::Empty => json!({ "status": "empty" }),
                Validity::Valid(d) => json!({
                    "status": "valid",
                    "duration": d,
                    "suggestion": format_suggestion(d),
                    "canonical": format_canonical(d),
                }),
                Validity::Invalid(e) => json!({
                    "status": "invalid",
                    "error": e.to_string(),
                    "message": config.widget.invalid_message,
                }),
            };
            let json = serde_json::to_string_pretty(&value).context("Failed to serialize result")?;
            println!("{}", json);
        }
        OutputFormat::Text => match &validity {
            Validity::Empty => println!("empty"),
            Validity::Valid(d) => println!("valid {} ({})", format_canonical(d), format_suggestion(d)),
            Validity::Invalid(_) => println!("invalid: {}", config.widget.invalid_message),
        },
    }

    if let Validity::Invalid(e) = validity {
        anyhow::bail!("Invalid duration: {}", e);
    }

    Ok(())
}
