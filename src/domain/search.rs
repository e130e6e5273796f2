use crate::domain::contact::Contact;

/// Match quality for search-as-you-type filtering, best first.
///
/// `Exact` outranks `Prefix`, which outranks `Contains`, which outranks
/// `Acronym`. Anything below `Acronym` is a non-match and is excluded from
/// results. Matching is case-insensitive throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Exact,
    Prefix,
    Contains,
    Acronym,
}

/// Rank a single field against a query, or `None` for a non-match.
pub fn rank(candidate: &str, query: &str) -> Option<MatchTier> {
    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();

    if candidate.is_empty() || query.is_empty() {
        return None;
    }

    if candidate == query {
        return Some(MatchTier::Exact);
    }

    if candidate.starts_with(&query) {
        return Some(MatchTier::Prefix);
    }

    // A word-boundary match inside the candidate is also a substring match,
    // so word starts do not need their own tier here.
    if candidate.contains(&query) {
        return Some(MatchTier::Contains);
    }

    if acronym(&candidate).contains(&query) {
        return Some(MatchTier::Acronym);
    }

    None
}

/// Best rank across a contact's `first` and `last` fields.
pub fn rank_contact(contact: &Contact, query: &str) -> Option<MatchTier> {
    let first = contact.first.as_deref().and_then(|f| rank(f, query));
    let last = contact.last.as_deref().and_then(|l| rank(l, query));

    match (first, last) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

fn acronym(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '-')
        .filter_map(|word| word.chars().next())
        .collect()
}
