// Fragment routing for the client.
// Maps the part of the URL after `#` onto the view that should be shown.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use std::fmt;

/// Characters escaped when a slug is put into a fragment or a request path.
pub(crate) const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A client-side route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing page with the featured posts
    Home,
    /// Paginated list of every post, pages start at 1
    Archive { page: usize },
    /// A single post
    Post { slug: String },
    /// The contact form
    Contact,
}

impl Route {
    /// Resolves a fragment, with or without its leading `#`.
    ///
    /// Rules are checked in order and the first match wins; anything
    /// unrecognised, including an empty fragment, is the home page.
    pub fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

        if let Some(rest) = fragment.strip_prefix("post/") {
            // a slug is one path segment, anything after the next `/` is ignored
            let segment = rest.split_once('/').map_or(rest, |(segment, _)| segment);
            let slug = percent_decode_str(segment).decode_utf8_lossy().into_owned();
            return Route::Post { slug };
        }

        if fragment.starts_with("archive") {
            return Route::Archive {
                page: page_param(fragment).unwrap_or(1),
            };
        }

        if fragment == "contact" {
            return Route::Contact;
        }

        Route::Home
    }

    /// The canonical fragment for this route, `#` included.
    pub fn to_fragment(&self) -> String {
        match self {
            Route::Home => "#home".to_string(),
            Route::Archive { page } if *page <= 1 => "#archive".to_string(),
            Route::Archive { page } => format!("#archive?page={}", page),
            Route::Post { slug } => format!("#post/{}", utf8_percent_encode(slug, PATH_SEGMENT)),
            Route::Contact => "#contact".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fragment())
    }
}

// `archive?page=3` -> Some(3); zero and junk count as missing
fn page_param(fragment: &str) -> Option<usize> {
    let (_, query) = fragment.split_once('?')?;

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .filter(|page| *page >= 1)
}
