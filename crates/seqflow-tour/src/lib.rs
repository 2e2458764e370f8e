//! A guided tour of seqflow: default methods, comparators, functional
//! interfaces, closure scopes, optional values, stream pipelines, and maps.
//!
//! Each section is built as plain lines of text so the binary only has to
//! print them.

pub mod config;
pub mod error;
pub mod sections;

pub use config::TourConfig;
pub use error::{Result, TourError};
pub use sections::{Section, run};
