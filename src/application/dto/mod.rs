/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod fetch_mode;
mod licenses_request;
mod licenses_response;

pub use fetch_mode::FetchMode;
pub use licenses_request::LicensesRequest;
pub use licenses_response::LicensesResponse;
