//! Greeting detection: named-greeting extraction and fuzzy phrase matching

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches "this is <name>", "i am <name>" or "i'm <name>" in lowercased text.
/// The name is a single alphabetic token; the first match wins.
static NAMED_GREETING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(this is|i am|i'm)\s+([a-z]+)").unwrap());

/// Greeting phrases checked by the fuzzy matcher, in precedence order
pub(crate) const KNOWN_GREETINGS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "greetings",
    "good morning",
    "good evening",
    "good afternoon",
    "how are you",
    "how was your day",
];

/// Extract a self-identified name from the input, if present.
///
/// The input is lowercased before matching, so the captured token is
/// re-capitalized for display ("maria" -> "Maria").
pub fn extract_named_greeting(input: &str) -> Option<String> {
    let lowered = input.to_lowercase();
    let captures = NAMED_GREETING_RE.captures(&lowered)?;
    let name = captures.get(2)?.as_str();
    Some(capitalize(name))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Whether any known greeting phrase scores at or above `threshold`
/// against the input. Phrases are tried in list order and the scan stops
/// at the first hit; no maximum is computed.
pub(crate) fn matches_known_greeting(input: &str, threshold: u8) -> bool {
    let lowered = input.to_lowercase();
    for greeting in KNOWN_GREETINGS {
        let score = partial_ratio(greeting, &lowered);
        if score >= threshold as u32 {
            tracing::debug!(phrase = greeting, score, "Fuzzy greeting match");
            return true;
        }
    }
    false
}

/// Partial similarity score (0-100) between two strings.
///
/// The shorter string is compared against every equal-length window of the
/// longer one and the best Levenshtein-based ratio is returned, so a phrase
/// embedded in a longer sentence still scores highly. Empty input scores 0.
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() || b_chars.is_empty() {
        return 0;
    }

    let (short, long) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let mut best = 0;
    for window in long.windows(short.len()) {
        let score = similarity_ratio(short, window);
        if score > best {
            best = score;
            if best == 100 {
                break;
            }
        }
    }
    best
}

/// Levenshtein-based similarity ratio (0-100) of two character slices
fn similarity_ratio(a: &[char], b: &[char]) -> u32 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    let distance = levenshtein(a, b);
    (((total - distance) as f64 * 100.0) / total as f64).round() as u32
}

/// Levenshtein edit distance between two character slices
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_named_greeting() {
        assert_eq!(
            extract_named_greeting("Hi this is Maria, I want a loan"),
            Some("Maria".to_string())
        );
        assert_eq!(
            extract_named_greeting("I am Ravi and I need help"),
            Some("Ravi".to_string())
        );
        assert_eq!(extract_named_greeting("I'm priya"), Some("Priya".to_string()));
    }

    #[test]
    fn test_extract_named_greeting_first_match_wins() {
        assert_eq!(
            extract_named_greeting("this is Anil and this is Sunita"),
            Some("Anil".to_string())
        );
    }

    #[test]
    fn test_extract_named_greeting_single_token_only() {
        // Only the first alphabetic token of a multi-word name is captured
        assert_eq!(
            extract_named_greeting("this is Mary Jane"),
            Some("Mary".to_string())
        );
    }

    #[test]
    fn test_extract_named_greeting_no_match() {
        assert_eq!(extract_named_greeting("What is my balance"), None);
        assert_eq!(extract_named_greeting("this is"), None);
    }

    #[test]
    fn test_levenshtein() {
        let a: Vec<char> = "kitten".chars().collect();
        let b: Vec<char> = "sitting".chars().collect();
        assert_eq!(levenshtein(&a, &b), 3);
        assert_eq!(levenshtein(&a, &a), 0);
        assert_eq!(levenshtein(&a, &[]), 6);
    }

    #[test]
    fn test_partial_ratio_exact_substring() {
        assert_eq!(partial_ratio("hello", "well hello there"), 100);
        assert_eq!(partial_ratio("hi", "hi"), 100);
    }

    #[test]
    fn test_partial_ratio_typo_tolerant() {
        // One edit away from "hello" still scores above the default threshold
        assert!(partial_ratio("hello", "helo") >= 85);
    }

    #[test]
    fn test_partial_ratio_dissimilar() {
        assert!(partial_ratio("hello", "transaction dispute") < 85);
    }

    #[test]
    fn test_partial_ratio_empty() {
        assert_eq!(partial_ratio("", "hello"), 0);
        assert_eq!(partial_ratio("hello", ""), 0);
    }

    #[test]
    fn test_matches_known_greeting() {
        assert!(matches_known_greeting("Good Morning!", 85));
        assert!(matches_known_greeting("how are you doing", 85));
        assert!(!matches_known_greeting("I want to dispute a transaction", 85));
    }
}
