use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported programming language. The serialized form is the wire id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    CSharp,
    Python,
    Rust,
    Java,
    Cpp,
    JavaScript,
    TypeScript,
    Go,
}

impl LanguageId {
    pub const ALL: [LanguageId; 8] = [
        LanguageId::CSharp,
        LanguageId::Python,
        LanguageId::Rust,
        LanguageId::Java,
        LanguageId::Cpp,
        LanguageId::JavaScript,
        LanguageId::TypeScript,
        LanguageId::Go,
    ];

    /// Languages offered as default translation targets, in priority order.
    pub const PRIMARY: [LanguageId; 5] = [
        LanguageId::CSharp,
        LanguageId::Python,
        LanguageId::Rust,
        LanguageId::Java,
        LanguageId::Cpp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageId::CSharp => "csharp",
            LanguageId::Python => "python",
            LanguageId::Rust => "rust",
            LanguageId::Java => "java",
            LanguageId::Cpp => "cpp",
            LanguageId::JavaScript => "javascript",
            LanguageId::TypeScript => "typescript",
            LanguageId::Go => "go",
        }
    }

    /// Human-readable name used in prompts and rendered headings.
    pub fn display_name(self) -> &'static str {
        match self {
            LanguageId::CSharp => "C#",
            LanguageId::Python => "Python",
            LanguageId::Rust => "Rust",
            LanguageId::Java => "Java",
            LanguageId::Cpp => "C++",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Go => "Go",
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for LanguageId {
    type Err = UnknownLanguage;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        LanguageId::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownLanguage(raw.to_string()))
    }
}
