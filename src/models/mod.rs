pub mod error;
pub mod form;
pub mod plot;
pub mod submission;
