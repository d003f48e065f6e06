//! Shared foundation for the Painel workspace: configuration loading,
//! route constants, and the base error type.

pub mod config;
pub mod constants;
pub mod error;
