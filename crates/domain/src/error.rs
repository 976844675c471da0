use thiserror::Error;

/// Error channel of the repository ports. The in-memory store is
/// infallible, so no variant exists today; a backend that can fail adds
/// its variants here.
#[derive(Debug, Error)]
pub enum DomainError {}
