//! Adapters for the external certificate-inspection services.

pub mod ssl_checker;
pub mod ssllabs;
