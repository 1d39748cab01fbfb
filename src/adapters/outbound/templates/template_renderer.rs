use crate::notice_generation::domain::{NoticeMetadata, ReportModel};
use crate::ports::outbound::ReportRenderer;
use crate::shared::error::ReportError;
use crate::shared::security::{read_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use minijinja::{context, AutoEscape, Environment};
use std::path::Path;

/// Built-in notice template.
///
/// Context: `licenses` maps each license id to its revisions (each with
/// `project.title`, `project.url`, `locator`, `licenses`); `tool_name` and
/// `tool_url` identify the generator.
pub const DEFAULT_TEMPLATE: &str = r#"# 3rd-Party Software License Notice
Generated by {{ tool_name }} ({{ tool_url }}).
This software includes the following software and licenses:
{% for license_id, revisions in licenses|items %}
========================================================================
{{ license_id }}
========================================================================
The following software have components provided under the terms of this license:
{% for revision in revisions %}
- {{ revision.project.title }} (from {{ revision.project.url }})
{%- endfor %}
{% endfor %}
"#;

const BUILTIN_TEMPLATE_NAME: &str = "default";

/// TemplateRenderer adapter rendering the notice through minijinja
///
/// The template is compiled on construction, so a syntax error surfaces
/// before any license data is fetched or rendered.
pub struct TemplateRenderer {
    env: Environment<'static>,
    name: String,
    metadata: NoticeMetadata,
}

impl TemplateRenderer {
    /// Renderer for the built-in notice template
    pub fn builtin(metadata: NoticeMetadata) -> Result<Self> {
        Self::from_source(BUILTIN_TEMPLATE_NAME, DEFAULT_TEMPLATE, metadata)
    }

    /// Renderer for a user-supplied template file. There is no fallback to
    /// the built-in template if the file cannot be read or parsed.
    pub fn from_file(path: &Path, metadata: NoticeMetadata) -> Result<Self> {
        let source = read_regular_file(path, "template file", MAX_FILE_SIZE).map_err(|e| {
            ReportError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;
        Self::from_source(path.display().to_string(), source, metadata)
    }

    pub fn from_source(
        name: impl Into<String>,
        source: impl Into<String>,
        metadata: NoticeMetadata,
    ) -> Result<Self> {
        let name: String = name.into();
        let source: String = source.into();

        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        // Notices are plain text regardless of the template's file extension
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template_owned(name.clone(), source)
            .map_err(|e| ReportError::TemplateParse {
                name: name.clone(),
                details: e.to_string(),
            })?;

        tracing::debug!(template = %name, "compiled notice template");

        Ok(Self {
            env,
            name,
            metadata,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ReportRenderer for TemplateRenderer {
    fn render(&self, model: &ReportModel) -> Result<String> {
        let render_error = |e: minijinja::Error| ReportError::TemplateRender {
            name: self.name.clone(),
            details: e.to_string(),
        };

        let template = self.env.get_template(&self.name).map_err(render_error)?;
        let rendered = template
            .render(context! {
                licenses => model,
                tool_name => self.metadata.tool_name(),
                tool_url => self.metadata.tool_url(),
            })
            .map_err(render_error)?;

        Ok(rendered)
    }
}
