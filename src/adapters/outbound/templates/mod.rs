/// Template adapters rendering the report model into a notice
mod template_renderer;

pub use template_renderer::{TemplateRenderer, DEFAULT_TEMPLATE};
