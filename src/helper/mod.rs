//! Helper tools: error handling

pub mod error;
