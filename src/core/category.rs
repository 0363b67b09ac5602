//! Log category definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual classification of a log line.
///
/// Every category maps to a display prefix that already carries its
/// trailing space, so a formatted line is always `prefix + timestamp`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    #[default]
    None,
    Info,
    Warning,
    Error,
    Success,
    #[serde(alias = "likeABoss")]
    Highlight,
    Test,
    Request,
    Response,
    Start,
    End,
    Package,
    Delete,
    User,
    Tracking,
}

impl LogCategory {
    pub const ALL: [LogCategory; 15] = [
        LogCategory::None,
        LogCategory::Info,
        LogCategory::Warning,
        LogCategory::Error,
        LogCategory::Success,
        LogCategory::Highlight,
        LogCategory::Test,
        LogCategory::Request,
        LogCategory::Response,
        LogCategory::Start,
        LogCategory::End,
        LogCategory::Package,
        LogCategory::Delete,
        LogCategory::User,
        LogCategory::Tracking,
    ];

    /// Display prefix, including the trailing space
    pub fn prefix(&self) -> &'static str {
        match self {
            LogCategory::None => "   ",
            LogCategory::Info => "\u{2139}\u{FE0F} ",
            LogCategory::Warning => "\u{26A0}\u{FE0F} ",
            LogCategory::Error => "\u{26D4}\u{FE0F} ",
            LogCategory::Success => "\u{2705} ",
            LogCategory::Highlight => "\u{1F60E} ",
            LogCategory::Test => "\u{2754} ",
            LogCategory::Request => "\u{27A1}\u{FE0F} ",
            LogCategory::Response => "\u{2B05}\u{FE0F} ",
            LogCategory::Start => "\u{1F680} ",
            LogCategory::End => "\u{1F3C1} ",
            LogCategory::Package => "\u{1F4E6} ",
            LogCategory::Delete => "\u{1F5D1} ",
            LogCategory::User => "\u{1F464} ",
            LogCategory::Tracking => "\u{1F3F7} ",
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogCategory::None => "none",
            LogCategory::Info => "info",
            LogCategory::Warning => "warning",
            LogCategory::Error => "error",
            LogCategory::Success => "success",
            LogCategory::Highlight => "highlight",
            LogCategory::Test => "test",
            LogCategory::Request => "request",
            LogCategory::Response => "response",
            LogCategory::Start => "start",
            LogCategory::End => "end",
            LogCategory::Package => "package",
            LogCategory::Delete => "delete",
            LogCategory::User => "user",
            LogCategory::Tracking => "tracking",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            LogCategory::Warning => Some(Yellow),
            LogCategory::Error => Some(Red),
            LogCategory::Success => Some(Green),
            LogCategory::Request | LogCategory::Response => Some(Cyan),
            LogCategory::Highlight => Some(Magenta),
            _ => None,
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(LogCategory::None),
            "info" => Ok(LogCategory::Info),
            "warning" | "warn" => Ok(LogCategory::Warning),
            "error" => Ok(LogCategory::Error),
            "success" => Ok(LogCategory::Success),
            "highlight" | "likeaboss" => Ok(LogCategory::Highlight),
            "test" => Ok(LogCategory::Test),
            "request" => Ok(LogCategory::Request),
            "response" => Ok(LogCategory::Response),
            "start" => Ok(LogCategory::Start),
            "end" => Ok(LogCategory::End),
            "package" => Ok(LogCategory::Package),
            "delete" => Ok(LogCategory::Delete),
            "user" => Ok(LogCategory::User),
            "tracking" => Ok(LogCategory::Tracking),
            _ => Err(format!("Invalid log category: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_prefixes_are_distinct() {
        let prefixes: HashSet<_> = LogCategory::ALL.iter().map(|c| c.prefix()).collect();
        assert_eq!(prefixes.len(), LogCategory::ALL.len());
    }

    #[test]
    fn test_prefixes_end_with_space() {
        for category in LogCategory::ALL {
            assert!(category.prefix().ends_with(' '), "{} prefix", category);
        }
        assert_eq!(LogCategory::None.prefix(), "   ");
        assert_eq!(LogCategory::Start.prefix(), "🚀 ");
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(LogCategory::default(), LogCategory::None);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("likeABoss".parse::<LogCategory>(), Ok(LogCategory::Highlight));
        assert_eq!("WARN".parse::<LogCategory>(), Ok(LogCategory::Warning));
        assert!("verbose".parse::<LogCategory>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LogCategory::Tracking).unwrap();
        assert_eq!(json, "\"tracking\"");
        let parsed: LogCategory = serde_json::from_str("\"likeABoss\"").unwrap();
        assert_eq!(parsed, LogCategory::Highlight);
    }
}
