//! Output rendering
//!
//! Writes a resource list either as a JSON envelope or through a template
//! in Go-style `{{ }}` syntax (gtmpl). gtmpl is not Go `text/template`:
//! `{{.}}` on the whole list prints its debug form and `{{range}}...{{else}}`
//! also runs the else branch for non-empty lists. Output is fully rendered
//! in memory before anything is written, so a failure never leaves partial
//! output behind.

use std::io::Write;

use gtmpl::Value;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{DomainError, DomainResult, Envelope, OutputFormat, ResourceList};

/// Renders resource lists in the configured output format.
#[derive(Debug, Clone)]
pub struct Renderer {
    format: OutputFormat,
    query: String,
}

impl Renderer {
    /// Create a renderer. `query` is only used for [`OutputFormat::Query`].
    pub fn new(format: OutputFormat, query: impl Into<String>) -> Self {
        Self {
            format,
            query: query.into(),
        }
    }

    /// Render `resources` and write the result to `out`.
    #[instrument(skip(self, resources, out), fields(format = ?self.format, count = resources.len()))]
    pub fn render(&self, resources: &ResourceList, out: &mut dyn Write) -> ApplicationResult<()> {
        let rendered = self.render_to_string(resources)?;
        debug!("render: {} bytes", rendered.len());
        out.write_all(rendered.as_bytes())
            .with_io_context("write rendered output")
    }

    /// Render `resources` without writing anything.
    pub fn render_to_string(&self, resources: &ResourceList) -> ApplicationResult<String> {
        match self.format {
            OutputFormat::Query => Ok(self.render_query(resources)?),
            OutputFormat::Json => render_json(resources),
        }
    }

    fn render_query(&self, resources: &ResourceList) -> DomainResult<String> {
        gtmpl::template(&self.query, template_value(resources)).map_err(|e| {
            DomainError::Template {
                message: e.to_string(),
            }
        })
    }
}

/// `{"data": [...]}` followed by a newline.
fn render_json(resources: &ResourceList) -> ApplicationResult<String> {
    let mut json =
        serde_json::to_string(&Envelope::new(resources)).map_err(|e| ApplicationError::Render {
            message: e.to_string(),
        })?;
    json.push('\n');
    Ok(json)
}

/// Template root value: the list itself, so `{{range .}}` iterates names.
/// Names inside `range` print as plain strings.
fn template_value(resources: &ResourceList) -> Value {
    Value::Array(resources.iter().cloned().map(Value::String).collect())
}
