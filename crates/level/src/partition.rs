//! Section partitioning into the flattened mapping.

use indexmap::IndexMap;

use crate::{LevelError, Result};

/// The single ordered `tag.key` → value table flattened from all sections.
///
/// Iteration order is first-seen insertion order, and overwriting a key keeps
/// its original position. This order is directly observable in the encoded
/// artifact, so it is part of the format contract, not an implementation
/// detail.
#[derive(Debug, Default)]
pub struct FlattenedMapping {
    entries: IndexMap<String, String>,
}

impl FlattenedMapping {
    /// Look up a composite `tag.key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Entries in first-seen insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }
}

/// Split cleaned lines into blank-line-delimited sections and flatten them.
///
/// Each section contributes `tag.key` entries to one shared mapping; the
/// sections themselves are not retained.
pub fn partition(lines: &[String]) -> Result<FlattenedMapping> {
    let mut mapping = FlattenedMapping::default();
    let mut group: Vec<&str> = Vec::new();
    let mut sections = 0usize;

    for line in lines {
        if line.is_empty() {
            if !group.is_empty() {
                flatten_group(&group, &mut mapping)?;
                sections += 1;
                group.clear();
            }
        } else {
            group.push(line);
        }
    }

    if !group.is_empty() {
        flatten_group(&group, &mut mapping)?;
        sections += 1;
    }

    tracing::debug!("Flattened {} entries from {} sections", mapping.len(), sections);
    Ok(mapping)
}

fn flatten_group(group: &[&str], mapping: &mut FlattenedMapping) -> Result<()> {
    let header = group[0];
    let tag = header
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| LevelError::MalformedHeader {
            line: header.to_string(),
        })?;

    for node in &group[1..] {
        // The key side is greedy: a line with several `=` splits at the last
        // one that still leaves a non-empty value, so `k=v=` is key `k`,
        // value `v=`. Both sides must be non-empty.
        let eq = node
            .match_indices('=')
            .rev()
            .map(|(i, _)| i)
            .find(|&i| i > 0 && i + 1 < node.len())
            .ok_or_else(|| LevelError::MalformedEntry {
                tag: tag.to_string(),
                line: node.to_string(),
            })?;

        mapping.insert(format!("{}.{}", tag, &node[..eq]), node[eq + 1..].to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partition_single_section() {
        let mapping = partition(&lines(&["[meta]", "name=Valley"])).unwrap();
        assert_eq!(mapping.get("meta.name"), Some("Valley"));
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_partition_flattens_multiple_sections() {
        let mapping = partition(&lines(&[
            "[meta]", "name=Valley", "", "[map]", "0,0=1", "1,0=2",
        ]))
        .unwrap();

        let keys: Vec<&str> = mapping.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["meta.name", "map.0,0", "map.1,0"]);
        assert_eq!(mapping.get("map.1,0"), Some("2"));
    }

    #[test]
    fn test_multiple_blank_lines_between_sections() {
        let mapping = partition(&lines(&["[a]", "k=1", "", "", "", "[b]", "k=2"])).unwrap();
        assert_eq!(mapping.get("a.k"), Some("1"));
        assert_eq!(mapping.get("b.k"), Some("2"));
    }

    #[test]
    fn test_overwrite_keeps_original_position() {
        let mapping = partition(&lines(&[
            "[meta]", "name=First", "", "[map]", "0,0=1", "", "[meta]", "name=Second",
        ]))
        .unwrap();

        assert_eq!(mapping.get("meta.name"), Some("Second"));
        let keys: Vec<&str> = mapping.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["meta.name", "map.0,0"]);
    }

    #[test]
    fn test_value_split_at_last_equals() {
        let mapping = partition(&lines(&["[s]", "a=b=c"])).unwrap();
        assert_eq!(mapping.get("s.a=b"), Some("c"));
    }

    #[test]
    fn test_trailing_equals_stays_in_value() {
        let mapping = partition(&lines(&["[s]", "k=v="])).unwrap();
        assert_eq!(mapping.get("s.k"), Some("v="));
    }

    #[test]
    fn test_malformed_header() {
        let err = partition(&lines(&["meta]", "name=Valley"])).unwrap_err();
        assert!(matches!(
            err,
            LevelError::MalformedHeader { ref line } if line == "meta]"
        ));
    }

    #[test]
    fn test_empty_tag_is_malformed() {
        let err = partition(&lines(&["[]", "name=Valley"])).unwrap_err();
        assert!(matches!(err, LevelError::MalformedHeader { .. }));
    }

    #[test]
    fn test_entry_without_equals_names_the_tag() {
        let err = partition(&lines(&["[map]", "foo"])).unwrap_err();
        assert!(matches!(
            err,
            LevelError::MalformedEntry { ref tag, ref line } if tag == "map" && line == "foo"
        ));
    }

    #[test]
    fn test_entry_with_empty_side_is_malformed() {
        assert!(partition(&lines(&["[s]", "=v"])).is_err());
        assert!(partition(&lines(&["[s]", "k="])).is_err());
    }

    #[test]
    fn test_empty_input() {
        let mapping = partition(&[]).unwrap();
        assert!(mapping.is_empty());
    }
}
