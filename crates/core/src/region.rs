//! Locate the placeholder region in a destination document

use derive_more::Display;
use serde::Deserialize;
use thiserror::Error;

/// Literal comment that marks a page whose code sample hasn't been inlined yet
pub const DEFAULT_PLACEHOLDER: &str =
    "const codeExample = `// Full component code available in the repository";
/// Literal that is written back in place of the placeholder
pub const DEFAULT_OPENING: &str = "const codeExample = `";
/// Literal that closes the template literal
pub const DEFAULT_CLOSING: &str = "`;";

/// The literal strings that delimit the replaceable region of a document
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Markers {
    /// Start marker for a document that has never been inlined
    pub placeholder: String,
    /// Opening sequence written in front of the inlined text. Also serves as
    /// the start marker when re-syncing an already inlined document
    pub opening: String,
    /// End marker. The region ends at its first occurrence after the start
    pub closing: String,
}

impl Markers {
    /// Name of the first marker field that is empty, if any. An empty marker
    /// would match at offset 0 of any document.
    pub fn empty_field(&self) -> Option<&'static str> {
        [
            ("placeholder", &self.placeholder),
            ("opening", &self.opening),
            ("closing", &self.closing),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.into(),
            opening: DEFAULT_OPENING.into(),
            closing: DEFAULT_CLOSING.into(),
        }
    }
}

/// Half-open byte range `[start, end)` within a document. `start` is the
/// offset of the start marker and `end` the offset of the end marker, so the
/// end marker itself is *not* part of the span.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
#[display("{start}..{end}")]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Which literal the start of the region was found by
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum Anchor {
    /// The never-inlined placeholder comment
    #[display("placeholder")]
    Placeholder,
    /// The opening of a previously inlined block (re-sync only)
    #[display("opening")]
    Opening,
}

/// A located placeholder region
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Region {
    pub span: Span,
    pub anchor: Anchor,
}

/// Which end of the region is missing
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum MarkerKind {
    #[display("start")]
    Start,
    #[display("end")]
    End,
}

/// The document doesn't have the structure we need to find the region
#[derive(Debug, Error, PartialEq)]
#[error("Placeholder {which} not found; expected `{marker}`")]
pub struct MarkerNotFound {
    pub which: MarkerKind,
    /// The literal we searched for
    pub marker: String,
}

/// Find the region of `document` to replace.
///
/// The start is the first occurrence of the placeholder. The end is the first
/// occurrence of the closing marker at or after the start.
///
/// If `resync` is enabled and the placeholder is absent, fall back to the
/// first occurrence of the opening literal. That's what a previous run left
/// behind, so this lets a page be refreshed after the source changes. In that
/// case the end is the first closing marker that isn't preceded by a
/// backslash, since the inlined body is full of escaped backticks.
pub fn locate(
    document: &str,
    markers: &Markers,
    resync: bool,
) -> Result<Region, MarkerNotFound> {
    let (start, anchor) = if let Some(start) =
        document.find(&markers.placeholder)
    {
        (start, Anchor::Placeholder)
    } else if let Some(start) =
        resync.then(|| document.find(&markers.opening)).flatten()
    {
        (start, Anchor::Opening)
    } else {
        // Report the placeholder even when re-syncing, because that's the
        // marker a fresh page is expected to have
        return Err(MarkerNotFound {
            which: MarkerKind::Start,
            marker: markers.placeholder.clone(),
        });
    };

    let end = match anchor {
        Anchor::Placeholder => document[start..]
            .find(&markers.closing)
            .map(|offset| start + offset),
        Anchor::Opening => find_unescaped(
            document,
            &markers.closing,
            start + markers.opening.len(),
        ),
    }
    .ok_or_else(|| MarkerNotFound {
        which: MarkerKind::End,
        marker: markers.closing.clone(),
    })?;

    Ok(Region {
        span: Span { start, end },
        anchor,
    })
}

/// Find the first occurrence of `needle` at or after `from` that isn't
/// immediately preceded by a backslash
fn find_unescaped(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack[from..]
        .match_indices(needle)
        .map(|(offset, _)| from + offset)
        .find(|&index| !haystack[..index].ends_with('\\'))
}
