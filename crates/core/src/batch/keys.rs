use std::collections::HashSet;

/// Separator between issue keys in the `issue_keys` input.
pub const ISSUE_KEY_SEPARATOR: char = '|';

/// Split a `|`-separated input into unique issue keys.
pub fn parse_issue_keys(raw: &str) -> Vec<String> {
    dedup_keys(raw.split(ISSUE_KEY_SEPARATOR))
}

/// Trim keys, drop empty ones and collapse duplicates, keeping first-seen order.
pub fn dedup_keys<I, S>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    keys.into_iter()
        .map(|key| key.as_ref().trim().to_string())
        .filter(|key| !key.is_empty())
        .filter(|key| seen.insert(key.clone()))
        .collect()
}
