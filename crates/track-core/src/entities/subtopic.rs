//! Subtopic entity - the unit users mark complete

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{slugify, Snowflake};

/// Difficulty bucket for a subtopic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Tough,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Tough => "tough",
        }
    }

    /// Parse leniently: unknown difficulty buckets as medium
    pub fn parse_lossy(s: &str) -> Self {
        match s {
            "easy" => Self::Easy,
            "tough" => Self::Tough,
            _ => Self::Medium,
        }
    }

    /// Strict parse for input validation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "tough" => Some(Self::Tough),
            _ => None,
        }
    }
}

/// Catalog-level status flag, distinct from per-user completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubtopicStatus {
    #[default]
    Pending,
    Completed,
}

impl SubtopicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Subtopic entity, belonging to exactly one Topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtopic {
    pub id: Snowflake,
    pub topic_id: Snowflake,
    /// Unique within the parent topic
    pub name: String,
    /// Derived from name; unique across subtopics
    pub slug: String,
    pub difficulty: Difficulty,
    pub youtube_link: Option<String>,
    pub leetcode_link: Option<String>,
    pub article_link: Option<String>,
    /// Ordering within the topic; unique per topic
    pub position: i32,
    pub status: SubtopicStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subtopic {
    pub fn new(id: Snowflake, topic_id: Snowflake, name: String, difficulty: Difficulty, position: i32) -> Self {
        let now = Utc::now();
        let slug = slugify(&name);
        Self {
            id,
            topic_id,
            name,
            slug,
            difficulty,
            youtube_link: None,
            leetcode_link: None,
            article_link: None,
            position,
            status: SubtopicStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename the subtopic. Returns true when the slug must be re-derived.
    pub fn rename(&mut self, name: String) -> bool {
        if self.name == name {
            return false;
        }
        self.name = name;
        self.updated_at = Utc::now();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_lossy_defaults_to_medium() {
        assert_eq!(Difficulty::parse_lossy("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_lossy("tough"), Difficulty::Tough);
        assert_eq!(Difficulty::parse_lossy("hard"), Difficulty::Medium);
        assert_eq!(Difficulty::parse_lossy(""), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_strict_parse() {
        assert_eq!(Difficulty::parse("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("hard"), None);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(SubtopicStatus::parse("pending"), Some(SubtopicStatus::Pending));
        assert_eq!(SubtopicStatus::parse("completed"), Some(SubtopicStatus::Completed));
        assert_eq!(SubtopicStatus::parse("done"), None);
    }

    #[test]
    fn test_new_derives_slug() {
        let st = Subtopic::new(
            Snowflake::new(2),
            Snowflake::new(1),
            "Two Pointers".to_string(),
            Difficulty::Easy,
            3,
        );
        assert_eq!(st.slug, "two-pointers");
        assert_eq!(st.status, SubtopicStatus::Pending);
    }
}
