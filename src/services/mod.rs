//! Service layer.

pub mod inspection;

pub use inspection::{InspectionOp, InspectionService};
