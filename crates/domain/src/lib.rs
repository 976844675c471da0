pub mod error;
pub mod event;
pub mod feedback;
pub mod ports;
pub mod realtime;
pub mod util;

pub type DomainResult<T> = Result<T, error::DomainError>;
