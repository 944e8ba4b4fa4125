use winnow::combinator::{alt, delimited, repeat};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_till;

/// One annotation recognised at the end of a raw key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag<'i> {
    Optional,
    /// Captured text between `:score(` and `)`, not yet converted.
    Score(&'i str),
}

// -- Tags -------------------------------------------------------------------

fn optional_tag<'i>(input: &mut &'i str) -> ModalResult<Tag<'i>> {
    ":optional".value(Tag::Optional).parse_next(input)
}

fn score_tag<'i>(input: &mut &'i str) -> ModalResult<Tag<'i>> {
    delimited(":score(", take_till(1.., ')'), ')')
        .map(Tag::Score)
        .parse_next(input)
}

fn tag<'i>(input: &mut &'i str) -> ModalResult<Tag<'i>> {
    alt((optional_tag, score_tag)).parse_next(input)
}

/// One or more tags, back to back.
pub(crate) fn tag_suffix<'i>(input: &mut &'i str) -> ModalResult<Vec<Tag<'i>>> {
    repeat(1.., tag).parse_next(input)
}

/// Split `raw` into its bare key and the tags that end it.
///
/// The earliest `:` whose remainder parses completely as tags wins, so every
/// recognised tag sits in the suffix. The bare key is never empty; a key that
/// is nothing but tags is returned untouched.
pub(crate) fn split_tags(raw: &str) -> (&str, Vec<Tag<'_>>) {
    for (at, _) in raw.match_indices(':').filter(|(at, _)| *at > 0) {
        let (bare, suffix) = raw.split_at(at);
        if let Ok(tags) = tag_suffix.parse(suffix) {
            return (bare, tags);
        }
    }
    (raw, Vec::new())
}
