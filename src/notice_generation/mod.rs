/// Domain layer for license notice generation
///
/// Pure value objects and services with no I/O. Everything here is built
/// and discarded within a single report run.
pub mod domain;
pub mod services;
