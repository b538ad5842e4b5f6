//! Query sanitization for the keyword index.
//!
//! The FTS5 dialect assigns syntax to quotes, braces, parens, `^`, `*`, `:`
//! and treats a leading hyphen as exclusion. Users type hyphens constantly
//! ("gpt-4", "claude-3-opus"), so stripping is deliberately lossy: every
//! special character becomes a space, which keeps partial-token matching
//! alive ("gpt 4" still hits "gpt-4-turbo" via trigrams) at the cost of
//! exact-phrase precision.

/// Characters with syntactic meaning to the indexed-search dialect.
const QUERY_SYNTAX_CHARS: &[char] = &['\'', '"', '{', '}', '(', ')', '^', '*', ':', '-'];

/// Turn arbitrary user input into a term safe to hand to either strategy.
///
/// Replaces each syntax character with a space, collapses whitespace runs to
/// a single space, and trims. Infallible; the result may be empty.
pub fn sanitize(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if QUERY_SYNTAX_CHARS.contains(&c) { ' ' } else { c })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
