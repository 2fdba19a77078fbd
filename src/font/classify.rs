//! Outline-format classification
//!
//! A font is classified by which outline tables its table directory
//! carries. The rules form an ordered list: the first rule whose tags
//! intersect the directory wins, so a font carrying both `glyf` and CFF
//! tables is still TrueType. Keeping the ordering in one table makes the
//! priority visible and testable on its own.

use read_fonts::types::Tag;

/// Table tag for quadratic (TrueType) glyph outlines.
pub const GLYF: Tag = Tag::new(b"glyf");
/// Table tags for compact (PostScript) glyph outlines.
pub const CFF: Tag = Tag::new(b"CFF ");
pub const CFF2: Tag = Tag::new(b"CFF2");

/// How the glyphs of a font are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontKind {
    /// Quadratic outlines in a `glyf` table.
    TrueType,
    /// Compact cubic outlines in a `CFF ` or `CFF2` table.
    Cff,
    /// Neither outline table present.
    #[default]
    Unknown,
}

impl FontKind {
    /// Short label used in logs.
    pub fn label(self) -> &'static str {
        match self {
            FontKind::TrueType => "TrueType",
            FontKind::Cff => "CFF",
            FontKind::Unknown => "unknown",
        }
    }
}

/// Ordered classification rules. Earlier entries take priority.
const RULES: &[(FontKind, &[Tag])] = &[
    (FontKind::TrueType, &[GLYF]),
    (FontKind::Cff, &[CFF, CFF2]),
];

/// Classify a font by the set of table tags in its table directory.
pub fn classify(tags: impl IntoIterator<Item = Tag>) -> FontKind {
    let tags: Vec<Tag> = tags.into_iter().collect();
    for (kind, keys) in RULES {
        if keys.iter().any(|key| tags.contains(key)) {
            return *kind;
        }
    }
    FontKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyf_alone_is_truetype() {
        assert_eq!(classify([GLYF]), FontKind::TrueType);
    }

    #[test]
    fn cff_alone_is_cff() {
        assert_eq!(classify([CFF]), FontKind::Cff);
        assert_eq!(classify([CFF2]), FontKind::Cff);
    }

    #[test]
    fn glyf_wins_over_cff() {
        // Priority rule: outline table checked first, even when CFF
        // tables are also present.
        assert_eq!(classify([CFF, GLYF]), FontKind::TrueType);
        assert_eq!(classify([GLYF, CFF2]), FontKind::TrueType);
    }

    #[test]
    fn unrelated_tables_are_unknown() {
        let tags = [Tag::new(b"name"), Tag::new(b"OS/2"), Tag::new(b"cmap")];
        assert_eq!(classify(tags), FontKind::Unknown);
    }

    #[test]
    fn empty_directory_is_unknown() {
        assert_eq!(classify(Vec::<Tag>::new()), FontKind::Unknown);
    }
}
