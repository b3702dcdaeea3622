use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_CONTACT_FORM_ACTION: &str = "https://formspree.io/f/your_form_id";

#[derive(Clone, Debug)]
pub struct BloggyConfig {
    pub bind_addr: String,
    pub port: u16,
    pub posts_dir: PathBuf,
    pub public_dir: PathBuf,
    pub api_base_url: String,
    pub contact_form_action: String,
    pub archive_page_size: usize,
    pub featured_count: usize,
}

impl BloggyConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // split out so tests can feed values without touching the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(val) => val
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {:?}", val))?,
            None => 3000,
        };

        let posts_dir = PathBuf::from(lookup("POSTS_DIR").unwrap_or_else(|| "./posts".to_string()));

        let public_dir =
            PathBuf::from(lookup("PUBLIC_DIR").unwrap_or_else(|| "./public".to_string()));

        let api_base_url = lookup("API_BASE_URL")
            .unwrap_or_else(|| format!("http://127.0.0.1:{}", port))
            .trim_end_matches('/')
            .to_string();

        let contact_form_action = lookup("CONTACT_FORM_ACTION")
            .unwrap_or_else(|| DEFAULT_CONTACT_FORM_ACTION.to_string());

        let archive_page_size = parse_positive(&lookup, "ARCHIVE_PAGE_SIZE", 4)?;
        let featured_count = parse_positive(&lookup, "FEATURED_COUNT", 3)?;

        Ok(Self {
            bind_addr,
            port,
            posts_dir,
            public_dir,
            api_base_url,
            contact_form_action,
            archive_page_size,
            featured_count,
        })
    }
}

fn parse_positive<F>(lookup: &F, key: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(val) = lookup(key) else {
        return Ok(default);
    };

    match val.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => anyhow::bail!("{} must be a positive integer, got {:?}", key, val),
    }
}
