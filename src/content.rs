//! Static example sources shown by the viewer tabs.
//!
//! Everything here is baked into the binary at compile time and never
//! mutated; the panels render it read-only.

/// One showcased document: the raw text plus what the viewer needs to
/// label and highlight it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticDoc {
    pub filename: &'static str,
    pub language: &'static str,
    pub source: &'static str,
}

/// FastAPI backend example.
pub const BACKEND_DOC: StaticDoc = StaticDoc {
    filename: "main.py",
    language: "python",
    source: include_str!("../assets/showcase/main.py"),
};

/// Aiogram bot example.
pub const BOT_DOC: StaticDoc = StaticDoc {
    filename: "bot.py",
    language: "python",
    source: include_str!("../assets/showcase/bot.py"),
};

/// PostgreSQL schema with seed data.
pub const SCHEMA_DOC: StaticDoc = StaticDoc {
    filename: "schema.sql",
    language: "sql",
    source: include_str!("../assets/showcase/schema.sql"),
};

/// Project README, rendered as markdown rather than source.
pub const README_DOC: StaticDoc = StaticDoc {
    filename: "README.md",
    language: "markdown",
    source: include_str!("../assets/showcase/README.md"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_are_not_empty() {
        for doc in [BACKEND_DOC, BOT_DOC, SCHEMA_DOC, README_DOC] {
            assert!(!doc.source.trim().is_empty(), "{} is empty", doc.filename);
        }
    }

    #[test]
    fn schema_seeds_the_reply_templates() {
        assert!(SCHEMA_DOC.source.contains("reply_templates"));
        assert!(SCHEMA_DOC.source.contains("welcome_back"));
    }

    #[test]
    fn filenames_match_languages() {
        assert_eq!(BACKEND_DOC.filename, "main.py");
        assert_eq!(BOT_DOC.language, "python");
        assert_eq!(SCHEMA_DOC.language, "sql");
        assert_eq!(README_DOC.language, "markdown");
    }
}
