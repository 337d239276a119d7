//! Heuristic resume -> candidate profile extraction
//!
//! Extraction is a single synchronous pass over already-decoded text. Every
//! sub-step degrades to an empty/default value when its pattern is absent;
//! only empty input is rejected.

use crate::error::ParseError;
use crate::lexicon::{
    contains_any, contains_term, terms_pattern, CATEGORY_KEYWORDS, ROLE_NOUNS, ROLE_TITLES,
    SENIORITY_INDICATORS, TECHNICAL_SKILLS,
};
use crate::profile::model::{
    CandidateProfile, CategoryExperience, ExperienceCategory, PrimaryRole, RoleRecord,
    SeniorityLevel, Skills, MAX_KEYWORDS, MAX_TOTAL_YEARS,
};
use crate::profile::normalize::TextNormalizer;
use chrono::Datelike;
use log::{debug, info};
use regex::Regex;
use std::collections::{BTreeMap, HashSet};

/// Fallback estimate per role when a category has roles but no dated ranges.
const YEARS_PER_UNDATED_ROLE: u32 = 2;

const EDUCATION_FIELDS: &str = "computer science|software engineering|computer engineering|\
    electrical engineering|mechanical engineering|information technology|information systems|\
    data science|mathematics|statistics|physics|economics|business administration|business|\
    finance|psychology|graphic design|design|engineering|arts|science";

pub struct ProfileExtractor {
    current_year: i32,
    normalizer: TextNormalizer,
    year_range: Regex,
    title_at_company: Regex,
    title_line: Regex,
    company_line: Regex,
    seniority_tiers: Vec<(SeniorityLevel, Regex)>,
    skill_patterns: Vec<(&'static str, Regex)>,
    education_patterns: Vec<Regex>,
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileExtractor {
    /// Extractor resolving "Present"/"Current" to the current calendar year.
    pub fn new() -> Self {
        Self::with_current_year(chrono::Local::now().year())
    }

    pub fn with_current_year(current_year: i32) -> Self {
        let year_range =
            Regex::new(r"(?i)\b((?:19|20)\d{2})\s*-\s*((?:19|20)\d{2}|present|current)\b")
                .expect("Invalid year range regex");

        let title_at_company = Regex::new(
            r"^(?P<title>[A-Z][A-Za-z/&+.\-]*(?:\s+[A-Za-z/&+.\-]+){0,5}?)\s+(?:at|@|\||-)\s+(?P<company>[A-Z][A-Za-z0-9&.,'\- ]*?)\s*(?:[|,(]|(?:19|20)\d{2}|$)",
        )
        .expect("Invalid title/company regex");

        let title_line = Regex::new(
            r"^[A-Z][A-Za-z/&+.\-]*(?:\s+(?:[A-Z][A-Za-z/&+.\-]*|of|and|&)){0,5}$",
        )
        .expect("Invalid title line regex");

        let company_line = Regex::new(r"^[A-Z][A-Za-z0-9&.,'\- ]{1,60}$")
            .expect("Invalid company line regex");

        let seniority_tiers = SENIORITY_INDICATORS
            .iter()
            .map(|(level, terms)| {
                (*level, Regex::new(&terms_pattern(terms)).expect("Invalid seniority regex"))
            })
            .collect();

        let skill_patterns = TECHNICAL_SKILLS
            .iter()
            .map(|skill| {
                let pattern = Regex::new(&terms_pattern(&[skill])).expect("Invalid skill regex");
                (*skill, pattern)
            })
            .collect();

        let education_patterns = vec![
            Regex::new(&format!(
                r"(?i)\b(?:bachelor|master)(?:'s)?(?:\s+degree)?\s+(?:of\s+)?(?:(?:science|arts|applied science)\s+)?(?:in\s+)?(?:{})\b",
                EDUCATION_FIELDS
            ))
            .expect("Invalid degree regex"),
            Regex::new(&format!(
                r"(?i)\b(?:b\.?sc?|m\.?sc?|b\.?a|m\.?a|b\.?eng|m\.?eng)\.?\s+(?:in\s+)?(?:{})\b",
                EDUCATION_FIELDS
            ))
            .expect("Invalid degree abbreviation regex"),
            Regex::new(&format!(
                r"(?i)\b(?:mba|ph\.?d|doctorate)\b(?:\.?\s+in\s+(?:{})\b)?",
                EDUCATION_FIELDS
            ))
            .expect("Invalid doctorate regex"),
        ];

        Self {
            current_year,
            normalizer: TextNormalizer::new(),
            year_range,
            title_at_company,
            title_line,
            company_line,
            seniority_tiers,
            skill_patterns,
            education_patterns,
        }
    }

    /// Build a profile from decoded resume text.
    pub fn extract(&self, raw_text: &str) -> Result<CandidateProfile, ParseError> {
        if raw_text.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let text = self.normalizer.normalize(raw_text);

        let roles = self.extract_roles(&text);
        let experience_by_category = self.rollup_experience(&roles);
        let total_years_experience = experience_by_category
            .values()
            .map(|c| c.years)
            .sum::<u32>()
            .min(MAX_TOTAL_YEARS);
        let seniority_level = self.detect_seniority(&text, total_years_experience);
        let technical = self.extract_skills(&text);
        let education = self.extract_education(&text);
        let primary_role = Self::primary_role(&roles, &experience_by_category);
        let keywords = self.normalizer.capitalized_runs(&text, MAX_KEYWORDS);

        info!(
            "Extracted profile: {} roles, {} years, {} skills, seniority {}",
            roles.len(),
            total_years_experience,
            technical.len(),
            seniority_level
        );

        Ok(CandidateProfile {
            roles,
            experience_by_category,
            total_years_experience,
            skills: Skills { technical },
            seniority_level,
            education,
            primary_role,
            keywords,
        })
    }

    /// Roles in resume order, de-duplicated by case-insensitive title.
    pub fn extract_roles(&self, text: &str) -> Vec<RoleRecord> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let mut roles = Vec::new();
        let mut seen = HashSet::new();

        for (idx, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }

            let Some(role) = self.detect_role(line, &lines[idx + 1..]) else {
                continue;
            };

            if seen.insert(self.normalizer.normalize_title(&role.title)) {
                debug!("Role detected: {} ({:?} years)", role.title, role.years);
                roles.push(role);
            }
        }

        roles
    }

    fn detect_role(&self, line: &str, following: &[&str]) -> Option<RoleRecord> {
        let lower = line.to_lowercase();

        if let Some(title) = Self::lexicon_title(&lower) {
            return Some(RoleRecord {
                title: title.to_string(),
                years: self.years_in(line),
                company: self.company_on_line(line),
                raw_line: Some(line.to_string()),
            });
        }

        let stripped = self.strip_years(line);

        if let Some(caps) = self.title_at_company.captures(&stripped) {
            let title = caps["title"].trim();
            if contains_any(&title.to_lowercase(), ROLE_NOUNS) {
                return Some(RoleRecord {
                    title: title.to_string(),
                    years: self.years_in(line),
                    company: Self::clean_company(&caps["company"]),
                    raw_line: Some(line.to_string()),
                });
            }
        }

        if self.title_line.is_match(&stripped)
            && contains_any(&stripped.to_lowercase(), ROLE_NOUNS)
        {
            let next = following.iter().find(|l| !l.is_empty())?;
            let next_stripped = self.strip_years(next);
            if self.company_line.is_match(&next_stripped)
                && !contains_any(&next_stripped.to_lowercase(), ROLE_NOUNS)
            {
                return Some(RoleRecord {
                    title: stripped,
                    years: self.years_in(line).or_else(|| self.years_in(next)),
                    company: Self::clean_company(&next_stripped),
                    raw_line: Some(line.to_string()),
                });
            }
        }

        None
    }

    /// Longest lexicon title contained in the line.
    fn lexicon_title(line_lower: &str) -> Option<&'static str> {
        ROLE_TITLES
            .iter()
            .filter(|title| contains_term(line_lower, &title.to_lowercase()))
            .max_by_key(|title| title.len())
            .copied()
    }

    /// Tenure from a `YYYY - YYYY|Present|Current` range on the line.
    pub fn years_in(&self, line: &str) -> Option<u32> {
        let caps = self.year_range.captures(line)?;
        let start: i32 = caps[1].parse().ok()?;
        let end: i32 = match caps[2].to_lowercase().as_str() {
            "present" | "current" => self.current_year,
            year => year.parse().ok()?,
        };
        Some((end - start).max(0) as u32)
    }

    fn strip_years(&self, line: &str) -> String {
        self.year_range
            .replace_all(line, "")
            .trim_matches(|c: char| c.is_whitespace() || matches!(c, '|' | ',' | '-' | '(' | ')'))
            .to_string()
    }

    fn company_on_line(&self, line: &str) -> Option<String> {
        self.title_at_company
            .captures(&self.strip_years(line))
            .and_then(|caps| Self::clean_company(&caps["company"]))
    }

    fn clean_company(raw: &str) -> Option<String> {
        let company = raw.trim().trim_end_matches(|c: char| matches!(c, ',' | '-' | '|')).trim();
        if company.is_empty() {
            None
        } else {
            Some(company.to_string())
        }
    }

    /// Sum explicit years per category; titles may count toward several.
    pub fn rollup_experience(
        &self,
        roles: &[RoleRecord],
    ) -> BTreeMap<ExperienceCategory, CategoryExperience> {
        let mut by_category: BTreeMap<ExperienceCategory, CategoryExperience> =
            ExperienceCategory::ALL
                .iter()
                .map(|c| (*c, CategoryExperience::default()))
                .collect();

        for role in roles {
            for category in Self::categories_for(&role.title) {
                let entry = by_category.entry(category).or_default();
                entry.roles.push(role.title.clone());
                entry.years += role.years.unwrap_or(0);
            }
        }

        for (category, entry) in by_category.iter_mut() {
            if !entry.roles.is_empty() && entry.years == 0 {
                entry.years = entry.roles.len() as u32 * YEARS_PER_UNDATED_ROLE;
                debug!("{} has no dated roles, estimating {} years", category, entry.years);
            }
        }

        by_category
    }

    pub fn categories_for(title: &str) -> Vec<ExperienceCategory> {
        let lower = title.to_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .filter(|(_, keywords)| contains_any(&lower, keywords))
            .map(|(category, _)| *category)
            .collect()
    }

    pub fn detect_seniority(&self, text: &str, total_years: u32) -> SeniorityLevel {
        self.seniority_tiers
            .iter()
            .find(|(_, pattern)| pattern.is_match(text))
            .map(|(level, _)| *level)
            .unwrap_or_else(|| SeniorityLevel::from_years(total_years))
    }

    /// Vocabulary hits, capitalised, in lexicon order.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let mut skills: Vec<String> = Vec::new();

        for (skill, pattern) in &self.skill_patterns {
            if pattern.is_match(text) {
                let capitalized = capitalize(skill);
                if !skills.contains(&capitalized) {
                    skills.push(capitalized);
                }
            }
        }

        skills
    }

    pub fn extract_education(&self, text: &str) -> Vec<String> {
        let mut education = Vec::new();
        let mut seen = HashSet::new();

        for pattern in &self.education_patterns {
            for mat in pattern.find_iter(text) {
                let degree = mat.as_str().trim().to_string();
                if seen.insert(degree.to_lowercase()) {
                    education.push(degree);
                }
            }
        }

        education
    }

    /// Dominant category by years; title from the first role regardless of
    /// that role's category.
    fn primary_role(
        roles: &[RoleRecord],
        by_category: &BTreeMap<ExperienceCategory, CategoryExperience>,
    ) -> Option<PrimaryRole> {
        let first = roles.first()?;

        let mut best: Option<(ExperienceCategory, u32)> = None;
        for category in ExperienceCategory::ALL {
            let years = by_category.get(&category).map(|c| c.years).unwrap_or(0);
            if years > best.map(|(_, y)| y).unwrap_or(0) {
                best = Some((category, years));
            }
        }

        Some(PrimaryRole {
            role_type: best.map(|(c, _)| c),
            title: first.title.clone(),
            years_in_role: best.map(|(_, y)| y).unwrap_or(0),
        })
    }
}

fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2024;

    fn extractor() -> ProfileExtractor {
        ProfileExtractor::with_current_year(YEAR)
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(extractor().extract("   \n\t ").unwrap_err(), ParseError::EmptyInput);
    }

    #[test]
    fn test_senior_engineer_example() {
        let profile = extractor()
            .extract("Jane Smith\nSenior Software Engineer 2015 - Present\nSkills: Python, Docker")
            .unwrap();

        assert_eq!(profile.seniority_level, SeniorityLevel::Senior);
        let role = &profile.roles[0];
        assert_eq!(role.title, "Software Engineer");
        assert_eq!(role.years, Some((YEAR - 2015) as u32));
        assert!(profile.skills.technical.contains(&"Python".to_string()));
        assert!(profile.skills.technical.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_years_from_en_dash_and_current() {
        let ex = extractor();
        let text = ex.normalizer.normalize("Data Analyst 2018 \u{2013} 2021");
        assert_eq!(ex.years_in(&text), Some(3));
        assert_eq!(ex.years_in("Tech Lead 2020 - current"), Some(4));
        assert_eq!(ex.years_in("Tech Lead"), None);
    }

    #[test]
    fn test_roles_deduplicated_first_wins() {
        let text = "Product Manager at Acme 2020 - 2023\n\
                    product manager at Beta 2016 - 2020\n\
                    UX Designer 2014 - 2016";
        let roles = extractor().extract_roles(text);
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].title, "Product Manager");
        assert_eq!(roles[0].company.as_deref(), Some("Acme"));
        assert_eq!(roles[0].years, Some(3));
        assert_eq!(roles[1].title, "UX Designer");
    }

    #[test]
    fn test_title_at_company_outside_lexicon() {
        let roles = extractor().extract_roles("Staff Engineer at Initech 2019 - 2022");
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].title, "Staff Engineer");
        assert_eq!(roles[0].company.as_deref(), Some("Initech"));
        assert_eq!(roles[0].years, Some(3));
    }

    #[test]
    fn test_title_then_company_line() {
        let roles = extractor().extract_roles("Growth Strategist\nGlobex Corporation\n2017 - 2020");
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].title, "Growth Strategist");
        assert_eq!(roles[0].company.as_deref(), Some("Globex Corporation"));
    }

    #[test]
    fn test_short_lexicon_titles_need_whole_tokens() {
        let roles = extractor().extract_roles("Director of Sales at Umbrella");
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].title, "Director of Sales");
    }

    #[test]
    fn test_prose_lines_are_not_roles() {
        let roles =
            extractor().extract_roles("Passionate about building great teams\nJohn Doe - Portland");
        assert!(roles.is_empty());
    }

    #[test]
    fn test_categories_are_not_exclusive() {
        let categories = ProfileExtractor::categories_for("Engineering Manager");
        assert!(categories.contains(&ExperienceCategory::Engineering));
        assert!(categories.contains(&ExperienceCategory::Management));
    }

    fn record(title: &str, years: Option<u32>) -> RoleRecord {
        RoleRecord {
            title: title.to_string(),
            years,
            company: None,
            raw_line: None,
        }
    }

    #[test]
    fn test_rollup_sums_and_estimates() {
        let ex = extractor();
        let roles = vec![
            record("Data Analyst", Some(3)),
            record("Data Scientist", Some(2)),
            record("UX Designer", None),
            record("UI Designer", None),
        ];
        let by_category = ex.rollup_experience(&roles);
        assert_eq!(by_category[&ExperienceCategory::Data].years, 5);
        assert_eq!(by_category[&ExperienceCategory::Design].years, 4);
        assert_eq!(by_category[&ExperienceCategory::Engineering].years, 0);
        assert!(by_category[&ExperienceCategory::Product].roles.is_empty());
    }

    #[test]
    fn test_total_years_capped() {
        let text = "Software Engineer 1990 - 2010\n\
                    Engineering Manager 2000 - 2024\n\
                    Data Engineer 1995 - 2015";
        let profile = extractor().extract(text).unwrap();
        assert_eq!(profile.total_years_experience, MAX_TOTAL_YEARS);
    }

    #[test]
    fn test_seniority_tier_order_and_fallback() {
        let ex = extractor();
        assert_eq!(
            ex.detect_seniority("junior developer, later senior", 12),
            SeniorityLevel::Entry
        );
        assert_eq!(ex.detect_seniority("Director of things", 1), SeniorityLevel::Manager);
        assert_eq!(ex.detect_seniority("international business", 1), SeniorityLevel::Entry);
        assert_eq!(ex.detect_seniority("international business", 4), SeniorityLevel::Mid);
        assert_eq!(ex.detect_seniority("plain text", 8), SeniorityLevel::Senior);
    }

    #[test]
    fn test_skills_whole_word_in_lexicon_order() {
        let skills = extractor().extract_skills("Docker, JavaScript and python; C++ too");
        assert_eq!(skills, vec!["Python", "Javascript", "C++", "Docker"]);
    }

    #[test]
    fn test_education_extraction() {
        let text = "Bachelor of Science in Computer Science, Stanford\nMBA\nM.S. Statistics\nmba";
        let education = extractor().extract_education(text);
        assert_eq!(
            education,
            vec!["Bachelor of Science in Computer Science", "M.S. Statistics", "MBA"]
        );
    }

    #[test]
    fn test_primary_role_title_ignores_category() {
        let text = "Product Manager 2022 - 2024\nSoftware Engineer 2012 - 2022";
        let profile = extractor().extract(text).unwrap();
        let primary = profile.primary_role.unwrap();
        assert_eq!(primary.title, "Product Manager");
        assert_eq!(primary.role_type, Some(ExperienceCategory::Engineering));
        assert_eq!(primary.years_in_role, 10);
    }

    #[test]
    fn test_no_roles_yields_defaults() {
        let profile = extractor().extract("Hello there\nI like hiking").unwrap();
        assert!(profile.roles.is_empty());
        assert!(profile.primary_role.is_none());
        assert_eq!(profile.total_years_experience, 0);
        assert_eq!(profile.experience_by_category.len(), 5);
    }
}
