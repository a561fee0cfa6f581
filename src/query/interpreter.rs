//! Natural-language query interpretation
//!
//! Translates a constrained natural-language phrase into a [`FilterSpec`]
//! by walking a fixed, ordered rule table. Later rules are more general
//! than earlier ones, so the evaluation order is part of the contract: the
//! first matching rule wins and the rest are never consulted. A query that
//! matches no rule is rejected rather than treated as "no filter".

use crate::query::filter::FilterSpec;
use crate::strings::types::ApiError;

type RuleFn = fn(&str) -> Option<FilterSpec>;

/// Interpretation rules, most specific first
const RULES: &[(&str, RuleFn)] = &[
    ("single_word_palindrome", single_word_palindrome),
    ("longer_than", longer_than),
    ("shorter_than", shorter_than),
    ("palindrome", palindrome),
    ("contains_letter", contains_letter),
];

/// Interpret a natural-language phrase as a filter set
pub fn interpret(query: &str) -> Result<FilterSpec, ApiError> {
    let phrase = query.to_lowercase();

    for (name, rule) in RULES {
        if let Some(spec) = rule(&phrase) {
            tracing::debug!(rule = name, "interpreted natural-language query");
            return Ok(spec);
        }
    }

    Err(ApiError::unparseable_query(query))
}

/// "single word" together with any palindrome wording
fn single_word_palindrome(phrase: &str) -> Option<FilterSpec> {
    (phrase.contains("single word") && phrase.contains("palindrom")).then(|| FilterSpec {
        word_count: Some(1),
        is_palindrome: Some(true),
        ..Default::default()
    })
}

/// "longer than N": strictly greater, so the minimum is N + 1
fn longer_than(phrase: &str) -> Option<FilterSpec> {
    let n = leading_number(phrase.split_once("longer than")?.1)?;
    Some(FilterSpec {
        min_length: Some(n + 1),
        ..Default::default()
    })
}

/// "shorter than N": strictly less, so the maximum is N - 1
fn shorter_than(phrase: &str) -> Option<FilterSpec> {
    let n = leading_number(phrase.split_once("shorter than")?.1)?;
    Some(FilterSpec {
        max_length: Some(n.saturating_sub(1)),
        ..Default::default()
    })
}

/// Any palindrome wording on its own
fn palindrome(phrase: &str) -> Option<FilterSpec> {
    phrase.contains("palindrom").then(|| FilterSpec {
        is_palindrome: Some(true),
        ..Default::default()
    })
}

/// "containing the letter c" or "contains c"
fn contains_letter(phrase: &str) -> Option<FilterSpec> {
    let rest = phrase
        .split_once("containing the letter")
        .or_else(|| phrase.split_once("contains"))
        .map(|(_, rest)| rest)?;

    let ch = rest.trim_start().chars().next()?;
    Some(FilterSpec {
        contains_character: Some(ch),
        ..Default::default()
    })
}

/// First unsigned integer at the start of `text`, ignoring leading whitespace
fn leading_number(text: &str) -> Option<usize> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
