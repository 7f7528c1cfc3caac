pub mod use_submission;
