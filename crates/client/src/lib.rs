pub mod error;
pub mod feed;
pub mod filters;
pub mod transport;
