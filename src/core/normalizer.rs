//! The character normalization pass.
//!
//! [`normalize_text`] is a pure function of its input and the soft hyphen mode:
//! one linear pass over the code points, rewriting dash-like characters to
//! `-`, dropping invisible joiners, and handling U+00AD per the mode.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::core::charset::{classify, code_point, CharClass};
use crate::core::config::SoftHyphenMode;

/// Occurrence counts per matched character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitCounts {
    counts: BTreeMap<char, usize>,
}

/// One row of a [`HitCounts`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitEntry {
    /// Matched character
    pub ch: char,
    /// Category it was matched as
    pub class: CharClass,
    /// Number of occurrences
    pub count: usize,
}

impl HitCounts {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `ch`.
    #[inline]
    pub fn bump(&mut self, ch: char) {
        *self.counts.entry(ch).or_insert(0) += 1;
    }

    /// Fold another table into this one.
    pub fn merge(&mut self, other: &HitCounts) {
        for (&ch, &n) in &other.counts {
            *self.counts.entry(ch).or_insert(0) += n;
        }
    }

    /// Count recorded for `ch` (zero if never seen).
    pub fn get(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// True when nothing was matched.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct characters matched.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Sum over all characters.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Rows sorted by descending count, ties broken by ascending code point.
    pub fn sorted(&self) -> Vec<HitEntry> {
        let mut entries: Vec<HitEntry> = self
            .counts
            .iter()
            .map(|(&ch, &count)| HitEntry {
                ch,
                class: classify(ch),
                count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.ch.cmp(&b.ch)));
        entries
    }
}

impl Serialize for HitEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut row = serializer.serialize_struct("HitEntry", 3)?;
        row.serialize_field("code_point", &code_point(self.ch))?;
        row.serialize_field("category", self.class.label())?;
        row.serialize_field("count", &self.count)?;
        row.end()
    }
}

impl Serialize for HitCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows = self.sorted();
        let mut seq = serializer.serialize_seq(Some(rows.len()))?;
        for row in &rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

/// Normalize `content`, returning the rewritten text and what was matched.
pub fn normalize_text(content: &str, soft_hyphen: SoftHyphenMode) -> (String, HitCounts) {
    let mut out = String::with_capacity(content.len());
    let mut hits = HitCounts::new();

    for ch in content.chars() {
        match classify(ch) {
            CharClass::Passthrough => out.push(ch),
            CharClass::DashLike => {
                hits.bump(ch);
                out.push('-');
            }
            CharClass::RemovableInvisible => hits.bump(ch),
            CharClass::SoftHyphen => {
                hits.bump(ch);
                if let Some(replacement) = soft_hyphen.replacement() {
                    out.push(replacement);
                }
            }
        }
    }

    (out, hits)
}
