//! Data models module
//!
//! Defines upstream payload records and the outbound response envelope

pub mod envelope;
pub mod upstream;

pub use envelope::Envelope;
