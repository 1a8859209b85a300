use crate::scoring::config::TermGroup;

/// Total occurrences of every mark in `text`.
pub fn count_punctuation(text: &str, marks: &[String]) -> usize {
    marks
        .iter()
        .filter(|mark| !mark.is_empty())
        .map(|mark| text.matches(mark.as_str()).count())
        .sum()
}

/// Number of term groups with at least one variant present in `text`.
///
/// Matching is case-insensitive; a group counts once no matter how many of
/// its variants appear.
pub fn count_terms(text: &str, terms: &[TermGroup]) -> usize {
    let haystack = text.to_lowercase();
    terms
        .iter()
        .filter(|group| {
            group
                .variants
                .iter()
                .filter(|v| !v.is_empty())
                .any(|variant| haystack.contains(&variant.to_lowercase()))
        })
        .count()
}
