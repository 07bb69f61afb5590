//! Compiled-in character classification table.
//!
//! Each code point falls into exactly one [`CharClass`]. The sets are fixed at
//! compile time; only the treatment of the soft hyphen is chosen at runtime
//! (see [`SoftHyphenMode`](crate::core::config::SoftHyphenMode)).

/// Non-ASCII hyphen and dash variants rewritten to `-`.
pub const DASH_LIKE: &[char] = &[
    '\u{2010}', // hyphen
    '\u{2011}', // non-breaking hyphen
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2212}', // minus sign
    '\u{FE63}', // small hyphen-minus
    '\u{FF0D}', // fullwidth hyphen-minus
];

/// Invisible breaking/joining characters dropped from the text.
pub const REMOVABLE_INVISIBLE: &[char] = &[
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{2060}', // word joiner
    '\u{FEFF}', // zero width no-break space (BOM)
];

/// Discretionary hyphen.
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// Category a single code point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    /// Left unchanged
    Passthrough,
    /// Converted to ASCII `-`
    DashLike,
    /// Dropped
    RemovableInvisible,
    /// U+00AD, converted or dropped depending on the mode
    SoftHyphen,
}

impl CharClass {
    /// Label used in the run report.
    pub fn label(self) -> &'static str {
        match self {
            Self::Passthrough => "PASSTHROUGH",
            Self::DashLike => "DASH/HYPHEN",
            Self::RemovableInvisible => "REMOVED",
            Self::SoftHyphen => "SOFT_HYPHEN",
        }
    }
}

/// Classify a single character.
#[inline]
pub fn classify(ch: char) -> CharClass {
    // Everything we act on sits outside ASCII.
    if ch.is_ascii() {
        return CharClass::Passthrough;
    }

    match ch {
        SOFT_HYPHEN => CharClass::SoftHyphen,
        '\u{2010}'..='\u{2014}' | '\u{2212}' | '\u{FE63}' | '\u{FF0D}' => CharClass::DashLike,
        '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}' => CharClass::RemovableInvisible,
        _ => CharClass::Passthrough,
    }
}

/// Format a character as `U+XXXX` (at least four hex digits).
pub fn code_point(ch: char) -> String {
    format!("U+{:04X}", ch as u32)
}
