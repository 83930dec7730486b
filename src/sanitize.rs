use regex::Regex;
use std::sync::LazyLock;

// Greedy on purpose: each span runs from the first opener to the last closer on a line.
static BRACKET_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*\]").expect("bracket pattern is valid"));
static PAREN_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*\)").expect("paren pattern is valid"));

/// Strips markdown artifacts from a model reply.
///
/// Removes every `*` and `#`, then every `[...]` span, then every `(...)`
/// span. Spans are matched greedily within a line, so `"[a][b]"` becomes
/// `""` rather than leaving the text between the two pairs.
pub fn clean_response(text: &str) -> String {
    let text = text.replace(['*', '#'], "");
    let text = BRACKET_SPAN.replace_all(&text, "");
    PAREN_SPAN.replace_all(&text, "").into_owned()
}
