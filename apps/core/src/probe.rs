//! Preference probe: runs the classifier over raw inputs and renders one
//! output line per input.

use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::config::{AppConfig, OutputFormat, ProbeMode};
use crate::error::AppError;
use crate::preference::{analyze_strength, PreferenceClassifier, PreferenceResult, StrengthReport};

/// Output of one probe run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProbeOutput {
    Classification(PreferenceResult),
    Strength(StrengthReport),
}

pub struct Probe {
    config: AppConfig,
    classifier: PreferenceClassifier,
}

impl Probe {
    pub fn new(config: AppConfig) -> Self {
        let classifier = PreferenceClassifier::with_vocabulary(config.vocabulary);
        Self { config, classifier }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Evaluate one input according to the configured mode
    pub fn evaluate(&self, text: &str) -> ProbeOutput {
        let text = truncate_chars(text, self.config.max_input_chars);
        match self.config.mode {
            ProbeMode::Classify => ProbeOutput::Classification(self.classifier.classify(text)),
            ProbeMode::Strength => ProbeOutput::Strength(analyze_strength(text)),
        }
    }

    /// Render one input as a single output line (no trailing newline)
    pub fn render(&self, text: &str) -> Result<String, AppError> {
        let output = self.evaluate(text);
        match self.config.output {
            OutputFormat::Json => Ok(serde_json::to_string(&output)?),
            OutputFormat::Pretty => Ok(render_pretty(&output)),
        }
    }

    /// Render every input to `out`, one line each
    pub fn run_all<I, S, W>(&self, inputs: I, out: &mut W) -> Result<usize, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let mut count = 0;
        for input in inputs {
            self.write_line(input.as_ref(), out)?;
            count += 1;
        }
        out.flush()?;
        info!(count, mode = %self.config.mode, "Probe finished");
        Ok(count)
    }

    /// Render every line read from `reader` as it arrives.
    ///
    /// A read error stops the run; lines before it are already written.
    pub fn run_lines<R, W>(&self, reader: R, out: &mut W) -> Result<usize, AppError>
    where
        R: BufRead,
        W: Write,
    {
        let mut count = 0;
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    out.flush()?;
                    return Err(e.into());
                }
            };
            self.write_line(&line, out)?;
            count += 1;
        }
        out.flush()?;
        info!(count, mode = %self.config.mode, "Probe finished");
        Ok(count)
    }

    fn write_line<W: Write>(&self, text: &str, out: &mut W) -> Result<(), AppError> {
        writeln!(out, "{}", self.render(text)?)?;
        Ok(())
    }
}

fn render_pretty(output: &ProbeOutput) -> String {
    match output {
        ProbeOutput::Classification(result) => format!(
            "{:<6} {:.2}  {}  [{}]",
            result.preference.label(),
            result.confidence.unwrap_or(0.0),
            result.preference.display_text(),
            result.preference.display_color(),
        ),
        ProbeOutput::Strength(report) => format!(
            "{:<6} {:.2}  visual={:?} text={:?}",
            report.preference.label(),
            report.confidence,
            report.visual_keywords,
            report.text_keywords,
        ),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => {
            warn!(max_chars, "Input truncated");
            &text[..idx]
        }
        None => text,
    }
}
