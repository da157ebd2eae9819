//! Leading front matter block: a `---` line, `key: value` lines, a closing `---` line.
//!
//! Parsing is two-phase: the opening delimiter must be the first line, then
//! lines are scanned until the closing delimiter. A block that is never closed
//! is not front matter, so the content is left untouched.

/// Line that opens and closes a front matter block (trailing whitespace allowed).
const DELIMITER: &str = "---";

/// A front matter block at the top of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    lines: Vec<&'a str>,
    body: &'a str,
}

impl<'a> FrontMatter<'a> {
    /// Parse the block at the start of `content`, or `None` if there is no
    /// complete block. Accepts `\n` and `\r\n` line endings.
    pub fn parse(content: &'a str) -> Option<Self> {
        let mut rest = content;

        let opening = next_line(&mut rest)?;
        if !opening.terminated || !is_delimiter(opening.text) {
            return None;
        }

        let mut lines = Vec::new();
        loop {
            // Running out of input before the closing delimiter: fail closed.
            let line = next_line(&mut rest)?;
            if is_delimiter(line.text) {
                return Some(Self { lines, body: rest });
            }
            lines.push(line.text);
        }
    }

    /// Raw lines between the delimiters.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Value of the first line whose key matches `name` (ASCII case-insensitive),
    /// trimmed. Only the first colon separates key and value.
    pub fn field(&self, name: &str) -> Option<&'a str> {
        self.lines.iter().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.eq_ignore_ascii_case(name).then(|| value.trim())
        })
    }

    /// The `title` field, if present and non-empty.
    pub fn title(&self) -> Option<&'a str> {
        self.field("title").filter(|t| !t.is_empty())
    }

    /// Everything after the closing delimiter line.
    pub fn body(&self) -> &'a str {
        self.body
    }
}

/// Extract the front matter title of a document.
pub fn extract_title(content: &str) -> Option<String> {
    FrontMatter::parse(content)
        .and_then(|fm| fm.title())
        .map(str::to_string)
}

/// Remove the front matter block and any leading whitespace after it.
/// Returns `None` when the content has no block.
pub fn strip_front_matter(content: &str) -> Option<String> {
    FrontMatter::parse(content).map(|fm| fm.body().trim_start().to_string())
}

struct Line<'a> {
    text: &'a str,
    terminated: bool,
}

/// Split the next line off `rest`, dropping its `\n` or `\r\n` ending.
fn next_line<'a>(rest: &mut &'a str) -> Option<Line<'a>> {
    if rest.is_empty() {
        return None;
    }
    let (raw, terminated) = match rest.find('\n') {
        Some(idx) => {
            let raw = &rest[..idx];
            *rest = &rest[idx + 1..];
            (raw, true)
        }
        None => {
            let raw = *rest;
            *rest = "";
            (raw, false)
        }
    };
    Some(Line {
        text: raw.strip_suffix('\r').unwrap_or(raw),
        terminated,
    })
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}
