use std::collections::HashSet;

/// Case-insensitive identity under which roster entries are unique. The same
/// key decides separation-list membership during partitioning.
pub(crate) fn dedup_key(name: &str) -> String {
    name.to_lowercase()
}

/// Splits free-form roster text into trimmed, deduplicated names.
///
/// Newline, comma, and semicolon are all split points. The first occurrence
/// of a name wins and keeps its original casing; later occurrences are
/// dropped even when they differ in case. Order of first occurrence is
/// preserved. Cannot fail; unparseable input just yields fewer names.
pub fn parse_names(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for token in text.split(['\n', ',', ';']) {
        let name = token.trim();
        if name.is_empty() {
            continue;
        }
        if seen.insert(dedup_key(name)) {
            names.push(name.to_string());
        }
    }

    names
}
