//! Resume matcher library
//!
//! Two pure pipelines sit at the core: [`profile::extract_profile`] turns
//! resume text into a [`CandidateProfile`], and [`matching::match_jobs`]
//! scores job postings against it. The remaining modules handle file
//! decoding, job sources, configuration and presentation around them.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod lexicon;
pub mod matching;
pub mod output;
pub mod profile;

pub use config::Config;
pub use error::{ParseError, Result, ResumeMatcherError};
pub use matching::{match_jobs, JobPosting, MatchEngine, MatchResults, ScoredJob};
pub use profile::{extract_profile, CandidateProfile, ProfileExtractor};
