pub mod setting;
pub mod submission;
