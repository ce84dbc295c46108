//! Output renderers.
//!
//! Provides human-readable and JSON renderers for analyzed messages.

use std::fmt::Write;

use serde::Serialize;
use wxgloss_foundation::{
    ClassifiedToken, Error, ErrorKind, ExplainedField, FieldMeta, Issue, MessageType, Result,
};

use crate::config::{OutputFormat, RuntimeConfig};
use crate::session::Report;

// =============================================================================
// Renderer Trait
// =============================================================================

/// Trait for rendering analyzed messages.
pub trait Renderer {
    /// Renders a single report.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be encoded.
    fn render(&self, report: &Report) -> Result<String>;

    /// Renders several reports.
    ///
    /// # Errors
    ///
    /// Returns an error if any report cannot be encoded.
    fn render_many(&self, reports: &[Report]) -> Result<String> {
        let rendered = reports
            .iter()
            .map(|r| self.render(r))
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join("\n"))
    }
}

/// Builds the renderer a configuration asks for.
#[must_use]
pub fn renderer_for(config: &RuntimeConfig) -> Box<dyn Renderer> {
    match config.format {
        OutputFormat::Human => Box::new(HumanRenderer {
            show_tokens: config.show_tokens,
            show_fields: config.show_fields,
        }),
        OutputFormat::Json => Box::new(JsonRenderer {
            pretty: false,
            show_tokens: config.show_tokens,
            show_fields: config.show_fields,
        }),
    }
}

// =============================================================================
// Human-Readable Renderer
// =============================================================================

/// Renders reports as aligned text.
#[derive(Clone, Debug)]
pub struct HumanRenderer {
    /// Whether to list classified tokens.
    pub show_tokens: bool,
    /// Whether to list explained fields.
    pub show_fields: bool,
}

impl Default for HumanRenderer {
    fn default() -> Self {
        Self {
            show_tokens: true,
            show_fields: true,
        }
    }
}

impl HumanRenderer {
    /// Creates a renderer showing both sections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to list tokens only.
    #[must_use]
    pub fn tokens_only(mut self) -> Self {
        self.show_tokens = true;
        self.show_fields = false;
        self
    }

    /// Builder method to list fields only.
    #[must_use]
    pub fn fields_only(mut self) -> Self {
        self.show_tokens = false;
        self.show_fields = true;
        self
    }

    fn write_tokens(out: &mut String, tokens: &[ClassifiedToken]) {
        let width = tokens.iter().map(|t| t.token.chars().count()).max().unwrap_or(0);
        let _ = writeln!(out, "tokens:");
        for token in tokens {
            let _ = write!(out, "  {:<width$}  {}", token.token, token.label);
            if !token.detail.is_empty() {
                let _ = write!(out, " ({})", token.detail);
            }
            out.push('\n');
        }
    }

    fn write_fields(out: &mut String, fields: &[ExplainedField]) {
        let _ = writeln!(out, "fields:");
        for field in fields {
            let _ = writeln!(out, "  {}: {}", field.label, field.raw_value);
            if !field.explanation.is_empty() {
                let _ = writeln!(out, "      {}", field.explanation);
            }
            if let Some(FieldMeta::Clouds(layers)) = &field.meta {
                for layer in layers {
                    let _ = writeln!(out, "      - {}: {}", layer.value, layer.explanation);
                }
            }
        }
    }

    fn write_issues(out: &mut String, severity: &str, issues: &[Issue]) {
        for issue in issues {
            let _ = write!(out, "{severity}[{}]: {}", issue.code, issue.message);
            if let Some(token) = &issue.token {
                let _ = write!(out, " ({token})");
            }
            out.push('\n');
        }
    }
}

impl Renderer for HumanRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "[{}] {}",
            report.analysis.message_type,
            report.message.raw.trim()
        );
        Self::write_issues(&mut out, "warning", &report.message.warnings);
        Self::write_issues(&mut out, "error", &report.message.errors);

        if self.show_tokens && !report.analysis.tokens.is_empty() {
            Self::write_tokens(&mut out, &report.analysis.tokens);
        }
        if self.show_fields && !report.analysis.fields.is_empty() {
            Self::write_fields(&mut out, &report.analysis.fields);
        }
        Ok(out)
    }
}

// =============================================================================
// JSON Renderer
// =============================================================================

/// Renders reports as JSON documents.
#[derive(Clone, Debug)]
pub struct JsonRenderer {
    /// Whether to indent the output.
    pub pretty: bool,
    /// Whether to include classified tokens.
    pub show_tokens: bool,
    /// Whether to include explained fields.
    pub show_fields: bool,
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self {
            pretty: false,
            show_tokens: true,
            show_fields: true,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    raw: &'a str,
    message_type: MessageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<&'a [ClassifiedToken]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a [ExplainedField]>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    warnings: &'a [Issue],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    errors: &'a [Issue],
}

impl JsonRenderer {
    /// Creates a compact renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for indented output.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn document<'a>(&self, report: &'a Report) -> Document<'a> {
        Document {
            raw: &report.message.raw,
            message_type: report.analysis.message_type,
            tokens: self.show_tokens.then_some(report.analysis.tokens.as_slice()),
            fields: self.show_fields.then_some(report.analysis.fields.as_slice()),
            warnings: &report.message.warnings,
            errors: &report.message.errors,
        }
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.map_err(|e| Error::new(ErrorKind::Internal(format!("cannot encode report: {e}"))))
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &Report) -> Result<String> {
        self.encode(&self.document(report))
    }

    fn render_many(&self, reports: &[Report]) -> Result<String> {
        if let [report] = reports {
            return self.render(report);
        }
        let documents: Vec<_> = reports.iter().map(|r| self.document(r)).collect();
        self.encode(&documents)
    }
}
