use crate::OutputFormat;
use crate::duration::{Grammar, format_canonical, format_suggestion, parse_with_grammar};
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ParseReport {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar: Option<Grammar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseReport {
    pub fn new(input: &str) -> Self {
        match parse_with_grammar(input) {
            Ok((d, grammar)) => Self {
                input: input.to_string(),
                grammar: Some(grammar),
                hours: Some(d.hours),
                minutes: Some(d.minutes),
                seconds: Some(d.seconds),
                suggestion: Some(format_suggestion(&d)),
                canonical: Some(format_canonical(&d)),
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                grammar: None,
                hours: None,
                minutes: None,
                seconds: None,
                suggestion: None,
                canonical: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}

/// Parse each input and print its suggestion and canonical value.
pub fn parse(inputs: &[String], format: OutputFormat) -> Result<()> {
    let reports: Vec<ParseReport> = inputs.iter().map(|i| ParseReport::new(i)).collect();

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for report in &reports {
                match (&report.suggestion, &report.canonical, &report.error) {
                    (Some(suggestion), Some(canonical), _) => {
                        println!("{:<16} {:<12} {}", report.input, suggestion, canonical)
                    }
                    (_, _, Some(error)) => println!("{:<16} invalid: {}", report.input, error),
                    _ => {}
                }
            }
        }
    }

    let rejected = reports.iter().filter(|r| r.is_rejected()).count();
    if rejected > 0 {
        anyhow::bail!("{} of {} inputs rejected", rejected, reports.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_valid_input() {
        let report = ParseReport::new("3h15");
        assert_eq!(report.grammar, Some(Grammar::HoursMarker));
        assert_eq!(report.seconds, Some(11700));
        assert_eq!(report.suggestion.as_deref(), Some("3h 15m"));
        assert_eq!(report.canonical.as_deref(), Some("03:15:00"));
        assert!(!report.is_rejected());
    }

    #[test]
    fn test_report_for_rejected_input() {
        let report = ParseReport::new("abc");
        assert!(report.is_rejected());
        assert!(report.canonical.is_none());
    }

    #[test]
    fn test_parse_fails_when_any_rejected() {
        let inputs = vec!["15m".to_string(), "nope".to_string()];
        let err = parse(&inputs, OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("1 of 2 inputs rejected"));
    }
}
