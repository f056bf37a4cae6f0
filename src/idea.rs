//! Idea - The posted startup concept and its embedded founder.
//!
//! Ideas are plain serde structs; the wire shape uses camelCase field names
//! (`createdAt`, `lookingFor`) and ISO-8601 timestamps. The `id` is opaque
//! and immutable once created, `created_at` is set once, and `likes` never
//! goes negative.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A posted startup idea with metadata and a like counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub founder: Founder,
    pub looking_for: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
}

/// The person who posted an idea. Embedded value, no independent identity.
///
/// `avatar` holds the display initials derived from `name` at form time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Founder {
    pub name: String,
    pub avatar: String,
    pub tagline: String,
    pub email: String,
}

/// Closed category set. Wire spellings match the original board exactly
/// ("AI / ML", "E-Commerce", "Developer Tools").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    SaaS,
    Fintech,
    Health,
    #[serde(rename = "AI / ML")]
    AiMl,
    Education,
    #[serde(rename = "E-Commerce")]
    ECommerce,
    Social,
    #[serde(rename = "Developer Tools")]
    DeveloperTools,
    Sustainability,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 10] = [
        Category::SaaS,
        Category::Fintech,
        Category::Health,
        Category::AiMl,
        Category::Education,
        Category::ECommerce,
        Category::Social,
        Category::DeveloperTools,
        Category::Sustainability,
        Category::Other,
    ];

    /// The display / wire label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::SaaS => "SaaS",
            Category::Fintech => "Fintech",
            Category::Health => "Health",
            Category::AiMl => "AI / ML",
            Category::Education => "Education",
            Category::ECommerce => "E-Commerce",
            Category::Social => "Social",
            Category::DeveloperTools => "Developer Tools",
            Category::Sustainability => "Sustainability",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Role tags offered by the post form.
pub const LOOKING_FOR_OPTIONS: [&str; 9] = [
    "Co-Founder",
    "Frontend Developer",
    "Backend Developer",
    "Designer",
    "Marketing",
    "Sales",
    "Investor",
    "Advisor",
    "Other",
];

/// Input for creating an idea. The server fills in `id`, `created_at`
/// and `likes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaInput {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub looking_for: Vec<String>,
    pub founder: Founder,
}

/// Derive avatar initials from a founder name: first letter of each word,
/// uppercased, at most two characters.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    letters.to_uppercase().chars().take(2).collect()
}
