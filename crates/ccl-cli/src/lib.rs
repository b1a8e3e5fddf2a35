//! CLI library components for the contact-list cleaning toolkit.

pub mod logging;
pub mod pipeline;
