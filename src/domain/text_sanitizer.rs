use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

/// Normalizes decoded document text into printable ASCII.
///
/// Lines inside a paragraph are joined with single spaces, blank lines become a
/// single `\n\n` paragraph break, and every character outside printable ASCII is
/// replaced by a space before whitespace is collapsed. Applying it twice yields the
/// same result as applying it once.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let line_endings = normalized.replace("\r\n", "\n").replace('\r', "\n");
    let de_hyphenated = HYPHEN_NEWLINE.replace_all(&line_endings, "$prefix$suffix");
    let ascii: String = de_hyphenated.chars().map(to_printable_ascii).collect();

    let mut result = String::with_capacity(ascii.len());
    let mut prev_was_blank = false;
    let mut first_content = true;

    for line in ascii.split('\n') {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            prev_was_blank = true;
            continue;
        }

        if !first_content {
            if prev_was_blank {
                result.push_str("\n\n");
            } else {
                result.push(' ');
            }
        }
        collapse_internal_whitespace(trimmed, &mut result);
        prev_was_blank = false;
        first_content = false;
    }

    result
}

fn to_printable_ascii(ch: char) -> char {
    match ch {
        '\n' => '\n',
        ' '..='~' => ch,
        _ => ' ',
    }
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
