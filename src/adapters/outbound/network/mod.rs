/// Network adapters for the license metadata service
mod fossa_client;

pub use fossa_client::{FossaRevisionClient, DEFAULT_ENDPOINT};
