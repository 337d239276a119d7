//! Input processing module
//! Handles file detection, resume text extraction, and job source loading

pub mod file_detector;
pub mod job_source;
pub mod manager;
pub mod text_extractor;

pub use file_detector::FileType;
pub use job_source::{CsvFileSource, JobBatch, JobSource, JobSourceManager, JsonFileSource};
pub use manager::InputManager;
