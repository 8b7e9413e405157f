//! Result rendering as plain text or JSON.

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::Result;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Titled, whitespace-separated values
    #[default]
    Text,
    /// One JSON object keyed by section
    Json,
}

/// Payload of one report section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Single value
    Scalar(f64),
    /// Text label such as a zone name
    Label(String),
    /// One value per time step
    Series(Vec<f64>),
    /// One row per path or forecast
    Matrix(Vec<Vec<f64>>),
}

/// Titled block of output.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Heading in text mode
    pub title: &'static str,
    /// Object key in JSON mode
    pub key: &'static str,
    /// Values to render
    pub payload: Payload,
}

impl Section {
    /// Creates a section.
    pub fn new(title: &'static str, key: &'static str, payload: Payload) -> Self {
        Self {
            title,
            key,
            payload,
        }
    }
}

/// Writes `sections` to `out` in the requested format.
pub fn render<W: Write>(out: &mut W, format: OutputFormat, sections: &[Section]) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(out, sections),
        OutputFormat::Json => render_json(out, sections),
    }
}

fn render_text<W: Write>(out: &mut W, sections: &[Section]) -> Result<()> {
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}:", section.title)?;
        match &section.payload {
            Payload::Scalar(value) => writeln!(out, "{}", value)?,
            Payload::Label(label) => writeln!(out, "{}", label)?,
            Payload::Series(values) => writeln!(out, "{}", join(values))?,
            Payload::Matrix(rows) => {
                for row in rows {
                    writeln!(out, "{}", join(row))?;
                }
            }
        }
    }
    Ok(())
}

fn render_json<W: Write>(out: &mut W, sections: &[Section]) -> Result<()> {
    let mut object = Map::new();
    for section in sections {
        object.insert(section.key.to_string(), serde_json::to_value(&section.payload)?);
    }
    serde_json::to_writer_pretty(&mut *out, &Value::Object(object))?;
    writeln!(out)?;
    Ok(())
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(format: OutputFormat, sections: &[Section]) -> String {
        let mut buffer = Vec::new();
        render(&mut buffer, format, sections).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text_sections() {
        let text = rendered(
            OutputFormat::Text,
            &[
                Section::new("Momentum", "momentum", Payload::Scalar(55.5)),
                Section::new("Stops", "stops", Payload::Series(vec![1.0, 1.5])),
            ],
        );
        assert_eq!(text, "Momentum:\n55.5\n\nStops:\n1 1.5\n");
    }

    #[test]
    fn test_text_matrix_one_row_per_line() {
        let text = rendered(
            OutputFormat::Text,
            &[Section::new(
                "Paths",
                "paths",
                Payload::Matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
            )],
        );
        assert_eq!(text, "Paths:\n1 2\n3 4\n");
    }

    #[test]
    fn test_json_object() {
        let json = rendered(
            OutputFormat::Json,
            &[
                Section::new("Index", "volatility_index", Payload::Scalar(12.5)),
                Section::new("Zone", "zone", Payload::Label("NEUTRAL".into())),
            ],
        );
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["volatility_index"], 12.5);
        assert_eq!(value["zone"], "NEUTRAL");
    }
}
