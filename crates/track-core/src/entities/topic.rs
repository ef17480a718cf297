//! Topic entity - top-level catalog category

use chrono::{DateTime, Utc};

use crate::value_objects::{slugify, Snowflake};

/// Topic entity (e.g. "Graph Theory")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: Snowflake,
    pub name: String,
    /// Derived from name; unique across topics
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    /// Create a new Topic with a base slug derived from the name.
    /// Collision suffixing happens in the service layer.
    pub fn new(id: Snowflake, name: String, description: Option<String>) -> Self {
        let now = Utc::now();
        let slug = slugify(&name);
        Self {
            id,
            name,
            slug,
            description,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename the topic. Returns true when the slug must be re-derived.
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
    fn test_new_derives_slug() {
        let topic = Topic::new(Snowflake::new(1), "Graph Theory".to_string(), None);
        assert_eq!(topic.slug, "graph-theory");
        assert!(topic.is_active);
    }

    #[test]
    fn test_rename_signals_slug_refresh() {
        let mut topic = Topic::new(Snowflake::new(1), "Arrays".to_string(), None);
        assert!(!topic.rename("Arrays".to_string()));
        assert!(topic.rename("Strings".to_string()));
        assert_eq!(topic.name, "Strings");
    }
}
