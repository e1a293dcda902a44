use std::io::Write;

use colored::{Color, Colorize};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};

use crate::domain::errors::AppError;
use iplookup_rs::LookupError;

/// Writes the console report: blue notices, a green header with the white
/// JSON body, and red error lines.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn detected_ip(&mut self, ip: &str) -> Result<(), AppError> {
        self.line(&format!("Using public IP address: {ip}"), Color::Blue)
    }

    pub fn response(&mut self, data: &Value) -> Result<(), AppError> {
        let body = to_pretty_json(data)?;
        self.line("Response:", Color::Green)?;
        self.line(&body, Color::White)
    }

    pub fn error(&mut self, err: &AppError) -> Result<(), AppError> {
        match err {
            // An echo reply without an address is not a fetch failure.
            AppError::PublicIp(LookupError::MissingIp) => {}
            _ => self.line(&err.to_string(), Color::Red)?,
        }
        if let AppError::PublicIp(_) = err {
            self.line("Unable to determine public IP address.", Color::Red)?;
        }
        Ok(())
    }

    /// One red line for failures before any lookup runs.
    pub fn startup_error(&mut self, err: &anyhow::Error) -> Result<(), AppError> {
        self.line(&format!("{err:#}"), Color::Red)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str, color: Color) -> Result<(), AppError> {
        if self.color {
            writeln!(self.out, "{}", text.color(color))?;
        } else {
            writeln!(self.out, "{text}")?;
        }
        Ok(())
    }
}

/// Serializes with four-space indentation.
pub fn to_pretty_json(data: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    data.serialize(&mut ser)?;
    Ok(String::from_utf8(buf).expect("serde_json output is valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain() -> Reporter<Vec<u8>> {
        Reporter::new(Vec::new(), false)
    }

    fn output(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn response_is_indented_by_four_spaces() {
        let mut reporter = plain();
        reporter.response(&json!({ "ip": "8.8.8.8", "lat": 1 })).unwrap();

        assert_eq!(
            output(reporter),
            "Response:\n{\n    \"ip\": \"8.8.8.8\",\n    \"lat\": 1\n}\n"
        );
    }

    #[test]
    fn public_ip_failure_prints_two_lines() {
        let mut reporter = plain();
        reporter
            .error(&AppError::PublicIp(LookupError::Other("connection refused".into())))
            .unwrap();

        let out = output(reporter);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Error fetching public IP:"));
        assert_eq!(lines[1], "Unable to determine public IP address.");
    }

    #[test]
    fn echo_reply_without_ip_prints_only_the_summary() {
        let mut reporter = plain();
        reporter
            .error(&AppError::PublicIp(LookupError::MissingIp))
            .unwrap();

        assert_eq!(output(reporter), "Unable to determine public IP address.\n");
    }

    #[test]
    fn startup_error_is_a_single_line_with_context() {
        let err = anyhow::anyhow!("configuration file \"/nonexistent.toml\" not found")
            .context("Failed to load configuration");
        let mut reporter = plain();
        reporter.startup_error(&err).unwrap();

        assert_eq!(
            output(reporter),
            "Failed to load configuration: configuration file \"/nonexistent.toml\" not found\n"
        );
    }

    #[test]
    fn detected_ip_notice() {
        let mut reporter = plain();
        reporter.detected_ip("203.0.113.9").unwrap();
        assert_eq!(output(reporter), "Using public IP address: 203.0.113.9\n");
    }

    #[test]
    fn colored_output_keeps_text() {
        colored::control::set_override(true);
        let mut reporter = Reporter::new(Vec::new(), true);
        reporter.detected_ip("203.0.113.9").unwrap();

        let out = output(reporter);
        assert!(out.contains("Using public IP address: 203.0.113.9"));
        assert!(out.contains("\u{1b}["));
    }
}
