use crate::region::Span;

/// Build a new document by replacing `span` of `document` with `opening`
/// followed by `body`. Everything before the span and everything from the end
/// of the span onward (including the end marker) is kept byte-for-byte.
///
/// The opening is always written fresh rather than copied from the matched
/// text, so the result only depends on the content outside the span.
///
/// Panics if the span isn't on char boundaries within `document`, which can't
/// happen for spans produced by [locate](crate::region::locate).
pub fn splice(document: &str, span: Span, opening: &str, body: &str) -> String {
    let mut output = String::with_capacity(
        document.len() - span.len() + opening.len() + body.len(),
    );
    output.push_str(&document[..span.start]);
    output.push_str(opening);
    output.push_str(body);
    output.push_str(&document[span.end..]);
    output
}
