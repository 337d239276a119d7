//! Output formatters for shortlists and profiles

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, ResumeMatcherError};
use crate::matching::MatchCategory;
use crate::output::report::{JobEntry, ShortlistReport};
use crate::profile::CandidateProfile;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

pub trait OutputFormatter {
    fn format_report(&self, report: &ShortlistReport) -> Result<String>;
    fn format_profile(&self, profile: &CandidateProfile) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches to the formatter matching the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_confidence_badge(&self, confidence: f64, category: MatchCategory) -> String {
        let color = match category {
            MatchCategory::Recommended => Color::Green,
            MatchCategory::WorthExploring => Color::Yellow,
            MatchCategory::Unranked => Color::BrightBlack,
        };
        let badge = format!("{:.0}%", confidence);

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_entry(&self, entry: &JobEntry) -> String {
        let mut output = format!(
            "{:>3}. {} {} at {}\n",
            entry.rank,
            self.format_confidence_badge(entry.confidence, entry.category),
            self.colorize(&entry.title, Color::White),
            entry.company
        );
        output.push_str(&format!(
            "     {} | {} | {}\n",
            entry.location, entry.salary, entry.posted_date
        ));

        for reason in &entry.explanation {
            output.push_str(&format!("     • {}\n", self.colorize(reason, Color::Cyan)));
        }

        if self.detailed {
            output.push_str(&format!(
                "     Scores: role {} | experience {} | content {} | total {:.2}\n",
                entry.scores.role, entry.scores.experience, entry.scores.content, entry.scores.total
            ));
            if !entry.matched_skills.is_empty() {
                output.push_str(&format!("     Skills: {}\n", entry.matched_skills.join(", ")));
            }
            output.push_str(&format!(
                "     {}\n",
                self.colorize(&format!("{} ({})", entry.url, entry.source), Color::BrightBlack)
            ));
        }

        output
    }

    fn format_section(&self, title: &str, entries: &[JobEntry], output: &mut String) {
        if entries.is_empty() {
            return;
        }
        output.push_str(&self.format_header(title, 2));
        for entry in entries {
            output.push_str(&self.format_entry(entry));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ShortlistReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("JOB SHORTLIST", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        let profile = &report.profile;
        output.push_str(&format!(
            "Candidate: {} | {} years | {} level\n",
            profile.primary_title.as_deref().unwrap_or("Unknown role"),
            profile.total_years_experience,
            profile.seniority_level
        ));

        let summary = &report.summary;
        output.push_str(&format!(
            "Postings: {} | {} | {} | {} unranked\n",
            summary.total_postings,
            self.colorize(&format!("{} recommended", summary.recommended), Color::Green),
            self.colorize(&format!("{} worth exploring", summary.worth_exploring), Color::Yellow),
            summary.unranked
        ));

        if !report.metadata.failed_sources.is_empty() {
            output.push_str(&self.colorize(
                &format!("Failed sources: {}\n", report.metadata.failed_sources.join(", ")),
                Color::Red,
            ));
        }

        self.format_section("Recommended", &report.recommended, &mut output);
        self.format_section("Worth Exploring", &report.worth_exploring, &mut output);
        self.format_section("Other Postings", &report.other, &mut output);

        if report.is_empty() {
            output.push_str("\nNo postings reached the shortlist.\n");
        }

        Ok(output)
    }

    fn format_profile(&self, profile: &CandidateProfile) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("CANDIDATE PROFILE", 1));
        if let Some(primary) = &profile.primary_role {
            let role_type = primary
                .role_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| "Unclassified".to_string());
            output.push_str(&format!(
                "Primary role: {} ({}, {} years)\n",
                self.colorize(&primary.title, Color::Cyan),
                role_type,
                primary.years_in_role
            ));
        }
        output.push_str(&format!(
            "Total experience: {} years | Seniority: {}\n",
            profile.total_years_experience, profile.seniority_level
        ));

        output.push_str(&self.format_header("Roles", 2));
        if profile.roles.is_empty() {
            output.push_str("  (none detected)\n");
        }
        for role in &profile.roles {
            let years = role
                .years
                .map(|y| format!("{} years", y))
                .unwrap_or_else(|| "undated".to_string());
            match &role.company {
                Some(company) => {
                    output.push_str(&format!("  • {} at {} ({})\n", role.title, company, years))
                }
                None => output.push_str(&format!("  • {} ({})\n", role.title, years)),
            }
        }

        output.push_str(&self.format_header("Experience by Category", 2));
        for (category, experience) in &profile.experience_by_category {
            if experience.years > 0 {
                output.push_str(&format!(
                    "  {:<12} {} years\n",
                    category.to_string(),
                    experience.years
                ));
            }
        }

        if profile.has_skills() {
            output.push_str(&self.format_header("Skills", 2));
            output.push_str(&format!(
                "  {}\n",
                self.colorize(&profile.skills.technical.join(", "), Color::Green)
            ));
        }

        if !profile.education.is_empty() {
            output.push_str(&self.format_header("Education", 2));
            for degree in &profile.education {
                output.push_str(&format!("  • {}\n", degree));
            }
        }

        if self.detailed && !profile.keywords.is_empty() {
            output.push_str(&self.format_header("Keywords", 3));
            output.push_str(&format!("  {}\n", profile.keywords.join(", ")));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ShortlistReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_profile(&self, profile: &CandidateProfile) -> Result<String> {
        self.to_json(profile)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_section(title: &str, entries: &[JobEntry], output: &mut String) {
        if entries.is_empty() {
            return;
        }
        output.push_str(&format!("## {}\n\n", title));
        output.push_str("| # | Title | Company | Location | Confidence | Total |\n");
        output.push_str("|---|---|---|---|---|---|\n");
        for entry in entries {
            output.push_str(&format!(
                "| {} | [{}]({}) | {} | {} | {:.0}% | {:.2} |\n",
                entry.rank,
                escape_cell(&entry.title),
                entry.url,
                escape_cell(&entry.company),
                escape_cell(&entry.location),
                entry.confidence,
                entry.scores.total
            ));
        }
        output.push('\n');

        for entry in entries.iter().filter(|e| !e.explanation.is_empty()) {
            output.push_str(&format!("**{}. {}**\n\n", entry.rank, entry.title));
            for reason in &entry.explanation {
                output.push_str(&format!("- {}\n", reason));
            }
            output.push('\n');
        }
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ShortlistReport) -> Result<String> {
        let mut output = String::from("# Job Shortlist\n\n");

        let profile = &report.profile;
        output.push_str(&format!(
            "**Candidate:** {} | **Experience:** {} years | **Seniority:** {}\n\n",
            profile.primary_title.as_deref().unwrap_or("Unknown role"),
            profile.total_years_experience,
            profile.seniority_level
        ));
        if !profile.skills.is_empty() {
            output.push_str(&format!("**Skills:** {}\n\n", profile.skills.join(", ")));
        }

        let summary = &report.summary;
        output.push_str(&format!(
            "{} postings scored: {} recommended, {} worth exploring, {} unranked.\n\n",
            summary.total_postings, summary.recommended, summary.worth_exploring, summary.unranked
        ));

        Self::markdown_section("Recommended", &report.recommended, &mut output);
        Self::markdown_section("Worth Exploring", &report.worth_exploring, &mut output);
        Self::markdown_section("Other Postings", &report.other, &mut output);

        if self.include_metadata {
            let meta = &report.metadata;
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated {} by resume-matcher v{} in {}ms from `{}`*\n",
                meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                meta.matcher_version,
                meta.processing_time_ms,
                meta.resume_file
            ));
            if !meta.job_sources.is_empty() {
                output.push_str(&format!("\n*Job sources: {}*\n", meta.job_sources.join(", ")));
            }
            if !meta.failed_sources.is_empty() {
                output.push_str(&format!(
                    "\n*Failed sources: {}*\n",
                    meta.failed_sources.join(", ")
                ));
            }
        }

        Ok(output)
    }

    fn format_profile(&self, profile: &CandidateProfile) -> Result<String> {
        let mut output = String::from("# Candidate Profile\n\n");

        if let Some(title) = profile.primary_title() {
            output.push_str(&format!("**Primary role:** {}\n\n", title));
        }
        output.push_str(&format!(
            "**Total experience:** {} years | **Seniority:** {}\n\n",
            profile.total_years_experience, profile.seniority_level
        ));

        if !profile.roles.is_empty() {
            output.push_str("## Roles\n\n");
            for role in &profile.roles {
                let years = role.years.map(|y| format!(" ({} years)", y)).unwrap_or_default();
                output.push_str(&format!("- {}{}\n", role.title, years));
            }
            output.push('\n');
        }

        output.push_str("## Experience by Category\n\n| Category | Years |\n|---|---|\n");
        for (category, experience) in &profile.experience_by_category {
            output.push_str(&format!("| {} | {} |\n", category, experience.years));
        }
        output.push('\n');

        if profile.has_skills() {
            output.push_str(&format!("## Skills\n\n{}\n\n", profile.skills.technical.join(", ")));
        }
        if !profile.education.is_empty() {
            output.push_str("## Education\n\n");
            for degree in &profile.education {
                output.push_str(&format!("- {}\n", degree));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_options(config.color_output, config.detailed, config.pretty_json, true)
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_report(
        &self,
        report: &ShortlistReport,
        format: OutputFormat,
    ) -> Result<String> {
        self.formatter(format).format_report(report)
    }

    pub fn generate_profile(
        &self,
        profile: &CandidateProfile,
        format: OutputFormat,
    ) -> Result<String> {
        self.formatter(format).format_profile(profile)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content).map_err(|e| {
        ResumeMatcherError::OutputFormatting(format!(
            "Failed to write {}: {}",
            file_path.display(),
            e
        ))
    })
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_shortlist{}.{}", base_name, timestamp_suffix, extension)
}

/// Where `--save` writes: the path itself, or a suggested file name inside it
/// when it names an existing directory.
pub fn resolve_save_path(save: &Path, format: OutputFormat, resume: &Path) -> PathBuf {
    if save.is_dir() {
        save.join(suggest_filename(format, &resume.to_string_lossy(), false))
    } else {
        save.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchingConfig;
    use crate::matching::{match_jobs, JobPosting};
    use crate::output::report::ReportContext;
    use crate::profile::ProfileExtractor;

    fn report() -> (CandidateProfile, ShortlistReport) {
        let profile = ProfileExtractor::with_current_year(2024)
            .extract("Software Engineer 2018 - 2024\nSkills: Python, Docker")
            .unwrap();
        let jobs = vec![
            JobPosting::new("Software Engineer", "Acme | Co", "Python and Docker"),
            JobPosting::new("Barista", "Cafe", "Make coffee"),
        ];
        let results = match_jobs(&profile, &jobs);
        let options = MatchingConfig {
            max_results: 10,
            include_unranked: true,
        };
        let context = ReportContext {
            resume_file: "resume.txt".to_string(),
            job_sources: vec!["jobs.json".to_string()],
            failed_sources: vec!["broken.csv".to_string()],
            processing_time_ms: 12,
        };
        let report = ShortlistReport::from_results(&profile, &results, &options, context);
        (profile, report)
    }

    #[test]
    fn test_console_without_colors() {
        let (_, report) = report();
        let output = ConsoleFormatter::new(false, true).format_report(&report).unwrap();
        assert!(output.contains("JOB SHORTLIST"));
        assert!(output.contains("Software Engineer at Acme | Co"));
        assert!(output.contains("Failed sources: broken.csv"));
        assert!(output.contains("Scores: role 100"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_round_trips_report() {
        let (_, report) = report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["recommended"][0]["title"], "Software Engineer");
        assert_eq!(value["metadata"]["failed_sources"][0], "broken.csv");
    }

    #[test]
    fn test_markdown_escapes_table_cells() {
        let (_, report) = report();
        let output = MarkdownFormatter::new(true).format_report(&report).unwrap();
        assert!(output.starts_with("# Job Shortlist"));
        assert!(output.contains("Acme \\| Co"));
        assert!(output.contains("*Failed sources: broken.csv*"));
    }

    #[test]
    fn test_profile_formats() {
        let (profile, _) = report();
        let generator = ReportGenerator::with_options(false, false, true, true);

        let console = generator.generate_profile(&profile, OutputFormat::Console).unwrap();
        assert!(console.contains("Primary role: Software Engineer"));

        let json = generator.generate_profile(&profile, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_years_experience"], 6);
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(OutputFormat::Markdown, "/tmp/jane_doe.pdf", false),
            "jane_doe_shortlist.md"
        );
        assert!(suggest_filename(OutputFormat::Json, "cv.txt", true).ends_with(".json"));
    }

    #[test]
    fn test_save_into_directory_uses_suggested_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let resume = Path::new("resumes/jane_doe.md");

        assert_eq!(
            resolve_save_path(dir.path(), OutputFormat::Json, resume),
            dir.path().join("jane_doe_shortlist.json")
        );
        let explicit = dir.path().join("custom.txt");
        assert_eq!(resolve_save_path(&explicit, OutputFormat::Json, resume), explicit);
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out.md");
        save_report_to_file("# Job Shortlist\n", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Job Shortlist\n");
    }
}
