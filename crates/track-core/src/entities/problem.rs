//! Problem entity - legacy catalog unit with a fixed label taxonomy
//!
//! Problems predate the Topic/Subtopic catalog and key on free-text
//! labels constrained to a fixed taxonomy rather than foreign keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Difficulty scale for legacy problems (distinct from subtopic difficulty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProblemDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl ProblemDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Self::Easy),
            "Medium" => Some(Self::Medium),
            "Hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Fixed taxonomy: topic label -> allowed subtopic labels
pub fn problem_taxonomy() -> &'static [(&'static str, &'static [&'static str])] {
    TAXONOMY
}

/// Allowed subtopic labels for a topic label, or None if the topic is unknown
pub fn subtopics_for_topic(topic: &str) -> Option<&'static [&'static str]> {
    TAXONOMY
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, subs)| *subs)
}

static TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Arrays",
        &[
            "Array Basics",
            "Hashing",
            "Sliding Window",
            "Two Pointers",
            "Prefix Sum",
            "Kadane's Algorithm",
            "Merging Intervals",
            "Cyclic Sort",
            "In-place Array Manipulation",
        ],
    ),
    (
        "Strings",
        &[
            "String Basics",
            "String Matching",
            "String Manipulation",
            "String Hashing",
            "Suffix Arrays",
            "Regular Expressions",
        ],
    ),
    (
        "Linked Lists",
        &[
            "Singly Linked Lists",
            "Doubly Linked Lists",
            "Circular Linked Lists",
            "Fast and Slow Pointers",
            "Linked List Manipulation",
        ],
    ),
    (
        "Stacks",
        &[
            "Implementation",
            "Monotonic Stack",
            "Parentheses Problems",
            "Postfix/Prefix Evaluation",
        ],
    ),
    ("Queues", &["Implementation", "Priority Queue/Heap", "Deque", "BFS"]),
    (
        "Trees",
        &[
            "Binary Trees",
            "Binary Search Trees",
            "N-ary Trees",
            "Trie",
            "Segment Trees",
            "Binary Indexed Tree",
            "AVL Trees",
            "Red-Black Trees",
        ],
    ),
    (
        "Graphs",
        &[
            "Graph Representation",
            "BFS/DFS",
            "Topological Sort",
            "Shortest Path",
            "Minimum Spanning Tree",
            "Strongly Connected Components",
            "Eulerian Path/Circuit",
            "Network Flow",
        ],
    ),
    (
        "Sorting",
        &[
            "Comparison Sorts",
            "Non-comparison Sorts",
            "Sorting with Custom Comparators",
        ],
    ),
    ("Searching", &["Binary Search", "Ternary Search", "Interpolation Search"]),
    (
        "Dynamic Programming",
        &[
            "0/1 Knapsack",
            "Unbounded Knapsack",
            "Fibonacci",
            "LCS",
            "LIS",
            "Edit Distance",
            "Matrix Chain Multiplication",
            "DP on Trees",
            "DP on Grids",
            "Digit DP",
            "Bitmask DP",
        ],
    ),
    (
        "Backtracking",
        &["Subsets", "Permutations", "Combinations", "N-Queens", "Sudoku"],
    ),
    (
        "Greedy",
        &[
            "Activity Selection",
            "Fractional Knapsack",
            "Job Sequencing",
            "Huffman Coding",
        ],
    ),
    ("Bit Manipulation", &["Bitwise Operations", "Bitmasking", "Bit Tricks"]),
    (
        "Math",
        &["Number Theory", "Combinatorics", "Geometry", "Probability", "Game Theory"],
    ),
    (
        "Other",
        &["System Design", "OOP Design", "Concurrency", "SQL", "Shell Scripting"],
    ),
];

/// Legacy problem entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub id: Snowflake,
    pub title: String,
    pub description: String,
    /// Topic label from the fixed taxonomy
    pub topic: String,
    /// Subtopic label from the topic's allowed set
    pub subtopic: String,
    pub difficulty: ProblemDifficulty,
    pub youtube_link: Option<String>,
    pub leetcode_link: Option<String>,
    pub article_link: Option<String>,
    /// Ordering; unique within (topic, subtopic)
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Problem {
    /// Check the (topic, subtopic) label pair against the taxonomy
    pub fn labels_valid(topic: &str, subtopic: &str) -> bool {
        subtopics_for_topic(topic).is_some_and(|subs| subs.contains(&subtopic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_lookup() {
        let subs = subtopics_for_topic("Arrays").unwrap();
        assert!(subs.contains(&"Two Pointers"));
        assert!(subtopics_for_topic("Knitting").is_none());
    }

    #[test]
    fn test_labels_valid() {
        assert!(Problem::labels_valid("Graphs", "Topological Sort"));
        assert!(!Problem::labels_valid("Graphs", "Two Pointers"));
        assert!(!Problem::labels_valid("Nope", "Two Pointers"));
    }

    #[test]
    fn test_problem_difficulty_parse() {
        assert_eq!(ProblemDifficulty::parse("Hard"), Some(ProblemDifficulty::Hard));
        assert_eq!(ProblemDifficulty::parse("hard"), None);
    }
}
