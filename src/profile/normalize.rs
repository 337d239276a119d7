//! Text normalization and proper-noun keyword extraction

use crate::lexicon::KEYWORD_STOPWORDS;
use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

pub struct TextNormalizer {
    stop_words: HashSet<&'static str>,
    whitespace_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let whitespace_regex = Regex::new(r"[ \t\u{00A0}]+").expect("Invalid whitespace regex");

        Self {
            stop_words: KEYWORD_STOPWORDS.iter().copied().collect(),
            whitespace_regex,
        }
    }

    /// Fold typographic characters to ASCII and collapse horizontal whitespace.
    /// Line structure is preserved.
    pub fn normalize(&self, text: &str) -> String {
        let folded = Self::normalize_unicode(text);
        folded
            .lines()
            .map(|line| self.whitespace_regex.replace_all(line.trim(), " ").into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Lowercase, whitespace-collapsed form used for title de-duplication.
    pub fn normalize_title(&self, title: &str) -> String {
        self.whitespace_regex
            .replace_all(title.trim(), " ")
            .to_lowercase()
    }

    /// Runs of capitalised words on the same line, stopwords trimmed from
    /// both ends, first `limit` unique runs in document order.
    pub fn capitalized_runs(&self, text: &str, limit: usize) -> Vec<String> {
        let mut keywords = Vec::new();
        let mut seen = HashSet::new();

        for line in text.lines() {
            let mut run: Vec<&str> = Vec::new();

            for segment in line.split_word_bounds() {
                if segment.chars().all(|c| c == ' ' || c == '\t') {
                    continue;
                }
                if segment.chars().next().is_some_and(|c| c.is_uppercase()) {
                    run.push(segment);
                } else {
                    self.flush_run(&mut run, &mut keywords, &mut seen);
                }
            }
            self.flush_run(&mut run, &mut keywords, &mut seen);

            if keywords.len() >= limit {
                break;
            }
        }

        keywords.truncate(limit);
        keywords
    }

    fn flush_run(
        &self,
        run: &mut Vec<&str>,
        keywords: &mut Vec<String>,
        seen: &mut HashSet<String>,
    ) {
        let is_stop = |word: &&str| self.stop_words.contains(word.to_lowercase().as_str());

        let start = run.iter().position(|w| !is_stop(w));
        let end = run.iter().rposition(|w| !is_stop(w));

        if let (Some(start), Some(end)) = (start, end) {
            let phrase = run[start..=end].join(" ");
            if phrase.chars().count() > 1 && seen.insert(phrase.clone()) {
                keywords.push(phrase);
            }
        }

        run.clear();
    }

    fn normalize_unicode(text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '\u{2018}' | '\u{2019}' => '\'',
                '\u{201C}' | '\u{201D}' => '"',
                '\u{2010}'..='\u{2015}' | '\u{2212}' => '-',
                '\u{2022}' | '\u{25CF}' | '\u{25AA}' => '*',
                _ => c,
            })
            .collect()
    }
}
