use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Identity recorded on a commit at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub email: String,
}

/// One node of the commit graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// 40 lowercase hex characters
    pub hash: String,
    /// First parent, empty for a root commit
    pub parent_hash: String,
    /// Every parent in recorded order; `parents[0] == parent_hash` when present
    pub parents: Vec<String>,
    pub tree_id: String,
    /// Full message, untrimmed
    pub message: String,
    pub author: Signature,
    pub committer: Signature,
    /// Author time, seconds since the epoch
    pub timestamp: i64,
    /// Author time zone offset in minutes east of UTC
    pub offset_minutes: i32,
}

impl Commit {
    pub fn is_root(&self) -> bool {
        self.parent_hash.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// First line of the message.
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("").trim()
    }

    /// Author time in the author's own offset.
    pub fn time(&self) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(self.offset_minutes * 60)?;
        DateTime::from_timestamp(self.timestamp, 0).map(|t| t.with_timezone(&offset))
    }

    pub fn relative_time(&self) -> String {
        format_relative_time(self.timestamp, chrono::Utc::now().timestamp())
    }
}

pub fn format_relative_time(timestamp: i64, now: i64) -> String {
    let diff = now - timestamp;

    if diff < 60 {
        "just now".to_string()
    } else if diff < 3600 {
        let mins = diff / 60;
        format!("{} minute{} ago", mins, if mins == 1 { "" } else { "s" })
    } else if diff < 86400 {
        let hours = diff / 3600;
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else if diff < 2592000 {
        let days = diff / 86400;
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    } else if diff < 31536000 {
        let months = diff / 2592000;
        format!("{} month{} ago", months, if months == 1 { "" } else { "s" })
    } else {
        let years = diff / 31536000;
        format!("{} year{} ago", years, if years == 1 { "" } else { "s" })
    }
}
