pub mod submission;
pub mod template;
