//! Sensitive-item derivation from extracted document text.
//!
//! Produces the ordered candidate list applied uniformly to every page:
//! the supplied full name, its usable tokens, then every email address,
//! linkedin/github profile fragment and phone-number-like digit group
//! found in the text. Detection is intentionally loose and heuristic;
//! order of appearance is preserved and duplicates are not removed.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::ProcessingConfig;
use crate::types::SensitiveItem;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
    static ref LINKEDIN_RE: Regex = Regex::new(r"linkedin\.com/\S+").unwrap();
    static ref GITHUB_RE: Regex = Regex::new(r"github\.com/\S+").unwrap();
    static ref PHONE_RE: Regex =
        Regex::new(r"(\+\d{1,3}[\s-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}").unwrap();
}

/// Derives the candidate list for one run.
///
/// Name tokens shorter than `min_name_token_len` characters are skipped
/// so that very short fragments ("Jo") do not blur unrelated words.
pub fn find_sensitive_items(
    text: &str,
    full_name: &str,
    config: &ProcessingConfig,
) -> Vec<SensitiveItem> {
    let mut items = Vec::new();

    items.push(SensitiveItem::new(full_name));

    for token in full_name.split_whitespace() {
        if token.chars().count() >= config.min_name_token_len {
            items.push(SensitiveItem::new(token));
        }
    }

    for re in [&*EMAIL_RE, &*LINKEDIN_RE, &*GITHUB_RE, &*PHONE_RE] {
        for m in re.find_iter(text) {
            items.push(SensitiveItem::new(m.as_str()));
        }
    }

    items
}
