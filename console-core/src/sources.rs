use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Html,
    Api,
    Pdf,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Html, SourceKind::Api, SourceKind::Pdf];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Html => "html",
            SourceKind::Api => "api",
            SourceKind::Pdf => "pdf",
        }
    }

    pub fn parse(value: &str) -> Result<SourceKind, String> {
        match value {
            "html" => Ok(SourceKind::Html),
            "api" => Ok(SourceKind::Api),
            "pdf" => Ok(SourceKind::Pdf),
            other => Err(format!("unknown source kind '{other}'")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeMethod {
    Scrapy,
    Playwright,
    Search,
}

impl ScrapeMethod {
    pub const ALL: [ScrapeMethod; 3] = [
        ScrapeMethod::Scrapy,
        ScrapeMethod::Playwright,
        ScrapeMethod::Search,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScrapeMethod::Scrapy => "scrapy",
            ScrapeMethod::Playwright => "playwright",
            ScrapeMethod::Search => "search",
        }
    }

    pub fn parse(value: &str) -> Result<ScrapeMethod, String> {
        match value {
            "scrapy" => Ok(ScrapeMethod::Scrapy),
            "playwright" => Ok(ScrapeMethod::Playwright),
            "search" => Ok(ScrapeMethod::Search),
            other => Err(format!("unknown scrape method '{other}'")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Active,
    Paused,
    Broken,
}

impl SourceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceStatus::Active => "active",
            SourceStatus::Paused => "paused",
            SourceStatus::Broken => "broken",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub source_method: ScrapeMethod,
    pub status: SourceStatus,
    #[serde(default)]
    pub last_scraped_at: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewSource {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub source_method: ScrapeMethod,
}

impl NewSource {
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("source URL is required".into());
        }
        Ok(())
    }
}

/// Case-insensitive substring filter over URL and kind, matching the
/// management table's search box.
pub fn filter_sources<'a>(sources: &'a [Source], filter: &str) -> Vec<&'a Source> {
    let needle = filter.to_lowercase();
    sources
        .iter()
        .filter(|s| {
            s.url.to_lowercase().contains(&needle) || s.kind.as_str().contains(&needle)
        })
        .collect()
}
