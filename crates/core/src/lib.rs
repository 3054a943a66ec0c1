//! Shared domain types and errors for the cinedex catalog service.

pub mod error;
pub mod types;
