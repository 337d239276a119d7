//! Static lexicon tables shared by profile extraction and job matching.
//!
//! Every table is a read-only `&'static` structure (canonical term -> variants
//! where that shape applies). Derived matchers built from these tables live in
//! the modules that use them and are initialised lazily, once per process.

use crate::profile::model::{ExperienceCategory, SeniorityLevel};

/// Canonical role titles recognised by line containment, grouped by family.
pub const ROLE_TITLES: &[&str] = &[
    // Engineering
    "Software Engineer",
    "Software Developer",
    "Frontend Engineer",
    "Frontend Developer",
    "Front-End Developer",
    "Backend Engineer",
    "Backend Developer",
    "Full Stack Engineer",
    "Full Stack Developer",
    "Web Developer",
    "Mobile Developer",
    "iOS Developer",
    "Android Developer",
    "DevOps Engineer",
    "Site Reliability Engineer",
    "Platform Engineer",
    "Cloud Engineer",
    "Security Engineer",
    "QA Engineer",
    "Test Engineer",
    "Embedded Engineer",
    "Systems Engineer",
    "Solutions Architect",
    "Software Architect",
    // Product
    "Product Manager",
    "Product Owner",
    "Technical Product Manager",
    "Program Manager",
    "Project Manager",
    "Product Analyst",
    // Design
    "UX Designer",
    "UI Designer",
    "UI/UX Designer",
    "Product Designer",
    "Graphic Designer",
    "Visual Designer",
    "Interaction Designer",
    "UX Researcher",
    // Data
    "Data Scientist",
    "Data Analyst",
    "Data Engineer",
    "Machine Learning Engineer",
    "ML Engineer",
    "Business Analyst",
    "Business Intelligence Analyst",
    "Research Scientist",
    "Analytics Engineer",
    // Management
    "Engineering Manager",
    "Technical Lead",
    "Tech Lead",
    "Team Lead",
    "Director of Engineering",
    "VP of Engineering",
    "Head of Product",
    "CTO",
    // Other
    "Consultant",
    "Technical Writer",
    "Scrum Master",
    "Marketing Manager",
    "Operations Manager",
    "Customer Success Manager",
];

/// Nouns that mark a free-form line as a job title when the lexicon misses it.
pub const ROLE_NOUNS: &[&str] = &[
    "engineer",
    "developer",
    "programmer",
    "manager",
    "designer",
    "analyst",
    "scientist",
    "architect",
    "consultant",
    "specialist",
    "director",
    "lead",
    "coordinator",
    "administrator",
    "officer",
    "researcher",
    "strategist",
    "intern",
    "owner",
    "president",
];

/// Canonical role -> variant titles. Two titles resolving to the same
/// canonical entry count as a direct match.
pub const ROLE_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "software engineer",
        &[
            "software engineer",
            "software developer",
            "software development engineer",
            "programmer",
            "swe",
        ],
    ),
    (
        "frontend engineer",
        &[
            "frontend engineer",
            "frontend developer",
            "front-end engineer",
            "front-end developer",
            "front end engineer",
            "front end developer",
            "ui engineer",
            "ui developer",
        ],
    ),
    (
        "backend engineer",
        &[
            "backend engineer",
            "backend developer",
            "back-end engineer",
            "back-end developer",
            "back end developer",
            "server engineer",
        ],
    ),
    (
        "full stack engineer",
        &[
            "full stack engineer",
            "full stack developer",
            "full-stack engineer",
            "full-stack developer",
            "fullstack engineer",
            "fullstack developer",
        ],
    ),
    (
        "devops engineer",
        &[
            "devops engineer",
            "site reliability engineer",
            "sre",
            "platform engineer",
            "infrastructure engineer",
        ],
    ),
    (
        "data scientist",
        &[
            "data scientist",
            "machine learning engineer",
            "ml engineer",
            "applied scientist",
            "research scientist",
        ],
    ),
    (
        "data analyst",
        &[
            "data analyst",
            "business analyst",
            "business intelligence analyst",
            "bi analyst",
            "analytics analyst",
        ],
    ),
    (
        "product manager",
        &[
            "product manager",
            "product owner",
            "technical product manager",
        ],
    ),
    (
        "ux designer",
        &[
            "ux designer",
            "ui designer",
            "ui/ux designer",
            "ux/ui designer",
            "product designer",
            "user experience designer",
            "interaction designer",
        ],
    ),
];

/// Technical vocabulary for whole-word skill extraction, in reporting order.
pub const TECHNICAL_SKILLS: &[&str] = &[
    // Languages
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "golang",
    "rust",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "sql",
    "html",
    "css",
    "bash",
    "matlab",
    // Frontend
    "react",
    "angular",
    "vue",
    "svelte",
    "next.js",
    "redux",
    "tailwind",
    "webpack",
    // Backend
    "node.js",
    "express",
    "django",
    "flask",
    "fastapi",
    "spring",
    "rails",
    ".net",
    "graphql",
    "rest",
    "grpc",
    "microservices",
    // Data stores
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "elasticsearch",
    "dynamodb",
    "cassandra",
    "snowflake",
    // Cloud and infrastructure
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "jenkins",
    "linux",
    "git",
    "ci/cd",
    // Data and ML
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "spark",
    "hadoop",
    "kafka",
    "airflow",
    "tableau",
    "power bi",
    "excel",
    "machine learning",
    "deep learning",
    "nlp",
    // Design
    "figma",
    "sketch",
    "adobe xd",
    "photoshop",
    "illustrator",
    // Process and tooling
    "agile",
    "scrum",
    "jira",
    "confluence",
];

/// Keyword containment rules assigning a role title to experience categories.
/// A title may land in several categories at once.
pub const CATEGORY_KEYWORDS: &[(ExperienceCategory, &[&str])] = &[
    (
        ExperienceCategory::Engineering,
        &[
            "engineer",
            "developer",
            "programmer",
            "architect",
            "devops",
            "sre",
            "software",
            "full stack",
            "frontend",
            "backend",
        ],
    ),
    (
        ExperienceCategory::Product,
        &[
            "product manager",
            "product owner",
            "product lead",
            "program manager",
            "head of product",
        ],
    ),
    (
        ExperienceCategory::Design,
        &["designer", "design", "ux", "ui", "user experience", "creative"],
    ),
    (
        ExperienceCategory::Data,
        &[
            "data",
            "analyst",
            "analytics",
            "scientist",
            "machine learning",
            "ml",
            "bi",
        ],
    ),
    (
        ExperienceCategory::Management,
        &[
            "manager",
            "director",
            "head of",
            "lead",
            "vp",
            "vice president",
            "chief",
            "cto",
            "ceo",
        ],
    ),
];

/// Ordered seniority tiers; the first tier with an indicator in the text wins.
pub const SENIORITY_INDICATORS: &[(SeniorityLevel, &[&str])] = &[
    (
        SeniorityLevel::Entry,
        &[
            "entry level",
            "entry-level",
            "junior",
            "intern",
            "internship",
            "new grad",
            "recent graduate",
        ],
    ),
    (
        SeniorityLevel::Mid,
        &["mid level", "mid-level", "intermediate"],
    ),
    (
        SeniorityLevel::Senior,
        &["senior", "sr.", "principal", "staff engineer", "tech lead"],
    ),
    (
        SeniorityLevel::Manager,
        &[
            "manager",
            "director",
            "head of",
            "vice president",
            "vp of",
            "chief",
        ],
    ),
];

/// Coarse role families for the "same family" tier of the role score.
/// Kept separate from [`RELATED_ROLE_KEYWORDS`]; the two tables differ on purpose.
pub const ROLE_FAMILIES: &[(&str, &[&str])] = &[
    (
        "engineering",
        &[
            "engineer",
            "developer",
            "programmer",
            "architect",
            "devops",
            "sre",
        ],
    ),
    ("product", &["product", "program manager"]),
    ("design", &["designer", "design", "ux", "ui"]),
    (
        "data",
        &["data", "analyst", "scientist", "analytics", "machine learning"],
    ),
];

/// Keywords associated with each primary role type, for the "related type"
/// tier of the role score.
pub const RELATED_ROLE_KEYWORDS: &[(ExperienceCategory, &[&str])] = &[
    (
        ExperienceCategory::Engineering,
        &[
            "engineer",
            "developer",
            "software",
            "technical",
            "platform",
            "infrastructure",
            "architect",
        ],
    ),
    (
        ExperienceCategory::Product,
        &["product", "program", "project", "roadmap", "strategy"],
    ),
    (
        ExperienceCategory::Design,
        &["design", "creative", "visual", "brand", "experience", "research"],
    ),
    (
        ExperienceCategory::Data,
        &[
            "data",
            "analytics",
            "insights",
            "intelligence",
            "machine learning",
            "quantitative",
        ],
    ),
    (
        ExperienceCategory::Management,
        &["manager", "director", "head", "lead", "operations", "chief"],
    ),
];

/// Posting-domain detection used to choose the relevant experience category.
/// Checked in order; the first hit decides.
pub const DOMAIN_KEYWORDS: &[(ExperienceCategory, &[&str])] = &[
    (ExperienceCategory::Engineering, &["engineer", "developer"]),
    (
        ExperienceCategory::Product,
        &["product manager", "program manager"],
    ),
    (ExperienceCategory::Design, &["designer", "ux", "ui"]),
    (ExperienceCategory::Data, &["data", "analyst", "ml"]),
    (
        ExperienceCategory::Management,
        &["manager", "director", "lead"],
    ),
];

/// Reference vocabulary approximating how many requirements a posting states.
pub const REFERENCE_TERMS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "node",
    "sql",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "api",
    "rest",
    "graphql",
    "machine learning",
    "figma",
    "sketch",
    "tableau",
    "excel",
    "jira",
    "analytics",
    "ci/cd",
    "linux",
    "golang",
];

/// Capitalised words that never count as profile keywords on their own.
pub const KEYWORD_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "of", "in", "at", "for", "to", "with", "on", "by", "from",
    "i", "my", "we", "our", "present", "current", "experience", "education", "skills",
    "summary", "responsibilities", "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Containment test for lexicon terms against lowercase text. Terms of three
/// characters or fewer ("ux", "ml", "vp") must match a whole token.
pub fn contains_term(haystack_lower: &str, term: &str) -> bool {
    if term.len() <= 3 {
        haystack_lower
            .split(|c: char| !c.is_alphanumeric())
            .any(|token| token == term)
    } else {
        haystack_lower.contains(term)
    }
}

pub fn contains_any(haystack_lower: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| contains_term(haystack_lower, term))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `text[start..end]` stands on its own: a side that begins or ends
/// with a word character must not touch another word character.
pub fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let term = &text[start..end];
    let open = !term.starts_with(is_word_char) || !text[..start].ends_with(is_word_char);
    let close = !term.ends_with(is_word_char) || !text[end..].starts_with(is_word_char);
    open && close
}

/// Boundary-matched containment, the plain-string counterpart of
/// [`boundary_pattern`]. "excel" is found in "excel, sql" but not in
/// "excellent".
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack
        .char_indices()
        .filter(|(i, _)| haystack[*i..].starts_with(needle))
        .any(|(i, _)| on_word_boundary(haystack, i, i + needle.len()))
}

/// Regex source matching `term` literally, with word boundaries only on sides
/// where the term starts or ends with a word character.
pub fn boundary_pattern(term: &str) -> String {
    let starts_word = term.chars().next().is_some_and(|c| c.is_alphanumeric());
    let ends_word = term.chars().last().is_some_and(|c| c.is_alphanumeric());
    format!(
        "{}{}{}",
        if starts_word { r"\b" } else { "" },
        regex::escape(term),
        if ends_word { r"\b" } else { "" }
    )
}

/// Case-insensitive alternation of boundary-matched terms.
pub fn terms_pattern(terms: &[&str]) -> String {
    let alternatives: Vec<String> = terms.iter().map(|t| boundary_pattern(t)).collect();
    format!("(?i)(?:{})", alternatives.join("|"))
}

/// Resolve a lowercase title to its canonical synonym entry, preferring the
/// longest contained variant.
pub fn canonical_role(title_lower: &str) -> Option<&'static str> {
    ROLE_SYNONYMS
        .iter()
        .flat_map(|(canonical, variants)| variants.iter().map(move |v| (*canonical, *v)))
        .filter(|(_, variant)| contains_term(title_lower, variant))
        .max_by_key(|(_, variant)| variant.len())
        .map(|(canonical, _)| canonical)
}

/// Families a lowercase title belongs to.
pub fn role_families(title_lower: &str) -> Vec<&'static str> {
    ROLE_FAMILIES
        .iter()
        .filter(|(_, keywords)| contains_any(title_lower, keywords))
        .map(|(family, _)| *family)
        .collect()
}

pub fn related_keywords(category: ExperienceCategory) -> &'static [&'static str] {
    RELATED_ROLE_KEYWORDS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}
