pub mod chart;
pub mod status;
pub mod submission_form;

pub use chart::ScatterChart;
pub use submission_form::SubmissionForm;
