use crate::adapters::outbound::templates::TemplateRenderer;
use crate::notice_generation::domain::NoticeMetadata;
use crate::ports::outbound::ReportRenderer;
use crate::shared::Result;
use std::path::PathBuf;

/// Where the notice template comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    #[default]
    Builtin,
    File(PathBuf),
}

impl TemplateSource {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Builtin, Self::File)
    }
}

/// Factory for creating report renderers
///
/// The returned renderer has already compiled its template, so a bad
/// template file fails here, before any license data is fetched.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer for the given template source
    ///
    /// # Examples
    /// ```
    /// use license_notice::application::factories::{RendererFactory, TemplateSource};
    /// use license_notice::notice_generation::domain::NoticeMetadata;
    ///
    /// let renderer = RendererFactory::create(TemplateSource::Builtin, NoticeMetadata::current());
    /// assert!(renderer.is_ok());
    /// ```
    pub fn create(
        source: TemplateSource,
        metadata: NoticeMetadata,
    ) -> Result<Box<dyn ReportRenderer>> {
        let renderer = match source {
            TemplateSource::Builtin => TemplateRenderer::builtin(metadata)?,
            TemplateSource::File(path) => TemplateRenderer::from_file(&path, metadata)?,
        };
        Ok(Box::new(renderer))
    }

    /// Progress message shown while the template is prepared
    pub fn progress_message(source: &TemplateSource) -> String {
        match source {
            TemplateSource::Builtin => "📝 Using the built-in notice template".to_string(),
            TemplateSource::File(path) => {
                format!("📝 Using notice template: {}", path.display())
            }
        }
    }
}
