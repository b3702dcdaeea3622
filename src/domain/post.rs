use chrono::{DateTime, NaiveDate, NaiveDateTime};
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Metadata for one post, as listed in the post index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Display)]
#[display("{}", slug)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<ReadTime>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A post with its markdown body, frontmatter already stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub summary: PostSummary,
    pub content: String,
}

// writers put either `readTime: 5` or `readTime: "5"` in their frontmatter,
// the API hands back whichever they wrote
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ReadTime {
    Minutes(u64),
    Fractional(f64),
    Text(String),
}

impl fmt::Display for ReadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadTime::Minutes(m) => write!(f, "{}", m),
            ReadTime::Fractional(m) => write!(f, "{}", m),
            ReadTime::Text(t) => f.write_str(t),
        }
    }
}

impl PostSummary {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: None,
            date: None,
            excerpt: None,
            read_time: None,
            tags: Vec::new(),
        }
    }

    /// Parses `date` into a sortable timestamp, `None` when missing or unrecognised.
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(parse_post_date)
    }
}

fn parse_post_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    for format in ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(raw, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Orders posts newest first. Undated posts go last, in their original order.
pub fn sort_newest_first(posts: &mut [PostSummary]) {
    posts.sort_by(|a, b| match (a.published_at(), b.published_at()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
