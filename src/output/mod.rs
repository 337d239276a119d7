//! Output module
//! Shortlist report model and the console, JSON and Markdown formatters

pub mod formatter;
pub mod report;

pub use formatter::{
    resolve_save_path, save_report_to_file, suggest_filename, ConsoleFormatter, JsonFormatter,
    MarkdownFormatter, OutputFormatter, ReportGenerator,
};
pub use report::{
    JobEntry, ProfileSummary, ReportContext, ReportMetadata, ShortlistReport, ShortlistSummary,
};
