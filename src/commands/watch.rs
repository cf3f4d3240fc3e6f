use crate::OutputFormat;
use crate::binding::{DurationField, FieldView};
use crate::config::Config;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Feed stdin lines into a single bound field, one line per edit.
pub fn watch(config: &Config, required: bool, format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    watch_stream(config, required, format, stdin.lock(), stdout.lock())
}

pub fn watch_stream<R: BufRead, W: Write>(
    config: &Config,
    required: bool,
    format: OutputFormat,
    reader: R,
    mut writer: W,
) -> Result<()> {
    let mut field = DurationField::new("duration", required, &config.widget);

    for line in reader.lines() {
        let line = line.context("Failed to read input")?;

        field.input(&line);
        let typed = field.view();
        field.blur();
        let blurred = field.view();

        match format {
            OutputFormat::Json => {
                let json = serde_json::to_string(&blurred).context("Failed to serialize field")?;
                writeln!(writer, "{}", json)?;
            }
            OutputFormat::Text => write_text(&mut writer, &line, &typed, &blurred)?,
        }
        writer.flush()?;
    }

    Ok(())
}

fn write_text<W: Write>(
    writer: &mut W,
    line: &str,
    typed: &FieldView,
    blurred: &FieldView,
) -> Result<()> {
    if blurred.invalid {
        let message = blurred.validation_message.as_deref().unwrap_or_default();
        writeln!(writer, "{:?} -> invalid ({})", line, message)?;
        return Ok(());
    }

    match (&typed.dropdown, &blurred.hidden) {
        (Some(dropdown), Some(hidden)) => writeln!(
            writer,
            "{:?} -> suggest {:?}, hidden {}",
            line, dropdown.item_text, hidden
        )?,
        _ => writeln!(writer, "{:?} -> empty", line)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, format: OutputFormat) -> String {
        let mut out = Vec::new();
        watch_stream(&Config::default(), false, format, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_watch_text_output() {
        let out = run("3h15\nabc\n\n", OutputFormat::Text);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], r#""3h15" -> suggest "3h 15m", hidden 03:15:00"#);
        assert_eq!(lines[1], r#""abc" -> invalid (Please enter a valid duration)"#);
        assert_eq!(lines[2], r#""" -> empty"#);
    }

    #[test]
    fn test_watch_json_output() {
        let out = run("15m\n", OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["visible"], "15m");
        assert_eq!(value["hidden"], "00:15:00");
        assert_eq!(value["invalid"], false);
    }
}
