use crate::error::{BlogError, Result};
use crate::parser::model::PostFrontMatter;
use gray_matter::{Matter, engine::YAML};
use lazy_static::lazy_static;
use regex::Regex;

const DELIMITER: &str = "---";

// extracts YAML frontmatter and returns the typed metadata alongside the raw markdown body
pub fn extract_frontmatter(md_content: &str, filename: &str) -> Result<(PostFrontMatter, String)> {
    let matter = Matter::<YAML>::new();

    let parsed_matter = matter
        .parse::<PostFrontMatter>(md_content)
        .map_err(|e| BlogError::FrontMatter {
            file: filename.to_string(),
            message: e.to_string(),
        })?;

    let frontmatter = parsed_matter.data.unwrap_or_default();

    // gray_matter trims its content, the body has to come back byte for byte
    Ok((frontmatter, split_body(md_content).to_string()))
}

/// Everything after the closing `---` line, minus the one newline ending it.
///
/// Delimiters are whole lines, as gray_matter reads them. Input that doesn't
/// open with one is all body, and a block that is never closed holds no
/// metadata, so only the opening line is dropped.
pub fn split_body(md_content: &str) -> &str {
    let Some((first_line, rest)) = md_content.split_once('\n') else {
        return md_content;
    };
    if first_line.trim_end() != DELIMITER {
        return md_content;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end() == DELIMITER {
            return &rest[offset..];
        }
    }

    rest
}

lazy_static! {
    static ref H3: Regex = Regex::new(r"(?imR)^### (.*)$").unwrap();
    static ref H2: Regex = Regex::new(r"(?imR)^## (.*)$").unwrap();
    static ref H1: Regex = Regex::new(r"(?imR)^# (.*)$").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*(.*?)\*").unwrap();
    static ref LINE_BREAK: Regex = Regex::new(r"(?mR)\n$").unwrap();
    static ref FENCED_CODE: Regex = Regex::new(r"`{3}([\s\S]*?)`{3}").unwrap();
    static ref INLINE_CODE: Regex = Regex::new(r"`([^`]+)`").unwrap();
}

/// Converts the small markdown subset used by posts into HTML.
///
/// This is a chain of substitutions, not a parser. The order matters: bold runs
/// before italic so `**` is consumed first, and anything that doesn't match is
/// left as literal text.
pub fn markdown_to_html(md: &str) -> String {
    let html = H3.replace_all(md, "<h3>${1}</h3>");
    let html = H2.replace_all(&html, "<h2>${1}</h2>");
    let html = H1.replace_all(&html, "<h1>${1}</h1>");
    let html = BOLD.replace_all(&html, "<strong>${1}</strong>");
    let html = ITALIC.replace_all(&html, "<em>${1}</em>");
    let html = LINE_BREAK.replace_all(&html, "<br />");
    let html = FENCED_CODE.replace_all(&html, "<pre><code>${1}</code></pre>");
    let html = INLINE_CODE.replace_all(&html, "<code>${1}</code>");

    html.into_owned()
}
