/// Identifies the tool in the generated notice ("Generated by <tool> (<url>).")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeMetadata {
    tool_name: String,
    tool_url: String,
}

impl NoticeMetadata {
    pub fn new(tool_name: String, tool_url: String) -> Self {
        Self {
            tool_name,
            tool_url,
        }
    }

    /// Metadata for this build, taken from the package manifest at compile time
    pub fn current() -> Self {
        Self::new(
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_REPOSITORY").to_string(),
        )
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_url(&self) -> &str {
        &self.tool_url
    }
}

impl Default for NoticeMetadata {
    fn default() -> Self {
        Self::current()
    }
}
