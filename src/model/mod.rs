//! Core data model types: envelope, attachment resources, outcomes, report.

pub mod address;
pub mod attachment;
pub mod email;
pub mod report;
