/// Type alias for Result with anyhow::Error as the error type.
/// Every layer propagates through this alias so `?` works across port boundaries.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
