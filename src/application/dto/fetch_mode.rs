/// Strategy used to resolve dependency licenses
///
/// `Bulk` resolves everything in one call and treats any failure as fatal.
/// `Exhaustive` resolves one dependency at a time and skips the ones that
/// fail, which surfaces licenses the bulk endpoint does not resolve at the
/// cost of one round-trip per dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    #[default]
    Bulk,
    Exhaustive,
}

impl FetchMode {
    /// Maps the `--include-unknown` switch onto a fetch mode
    pub fn from_include_unknown(include_unknown: bool) -> Self {
        if include_unknown {
            FetchMode::Exhaustive
        } else {
            FetchMode::Bulk
        }
    }
}

impl std::str::FromStr for FetchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bulk" => Ok(FetchMode::Bulk),
            "exhaustive" => Ok(FetchMode::Exhaustive),
            _ => Err(format!(
                "Invalid fetch mode: {}. Please specify 'bulk' or 'exhaustive'",
                s
            )),
        }
    }
}

impl std::fmt::Display for FetchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchMode::Bulk => write!(f, "bulk"),
            FetchMode::Exhaustive => write!(f, "exhaustive"),
        }
    }
}
