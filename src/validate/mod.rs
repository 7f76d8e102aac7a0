//! Payload validation. Each operation is a pure, single-step transform
//! from a raw submission to a normalized record ready for the store, or
//! a `Validation` error naming every missing field.

pub mod program;
pub mod report;

pub use program::{validate_program, ProgramRegistration};
pub use report::{validate_report, ReportSubmission};
