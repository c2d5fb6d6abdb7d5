use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dish category. Closed set; persisted as lowercase strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Main,
    Side,
    Soup,
    Noodle,
    Don,
    Dessert,
}

impl Category {
    /// All categories, in display order
    pub const ALL: &'static [Category] = &[
        Category::Main,
        Category::Side,
        Category::Soup,
        Category::Noodle,
        Category::Don,
        Category::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Main => "main",
            Category::Side => "side",
            Category::Soup => "soup",
            Category::Noodle => "noodle",
            Category::Don => "don",
            Category::Dessert => "dessert",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "main" => Some(Category::Main),
            "side" => Some(Category::Side),
            "soup" => Some(Category::Soup),
            "noodle" => Some(Category::Noodle),
            "don" => Some(Category::Don),
            "dessert" => Some(Category::Dessert),
            _ => None,
        }
    }
}

/// Whether the user still wants to cook the dish or already has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Want,
    Cooked,
}

impl Status {
    pub const ALL: &'static [Status] = &[Status::Want, Status::Cooked];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Want => "want",
            Status::Cooked => "cooked",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "want" => Some(Status::Want),
            "cooked" => Some(Status::Cooked),
            _ => None,
        }
    }
}

/// Ordering for the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first
    #[default]
    CreatedDesc,
    /// Oldest first
    CreatedAsc,
    /// Shortest cook time first
    TimeAsc,
    /// Longest cook time first
    TimeDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::CreatedDesc => "created-desc",
            SortKey::CreatedAsc => "created-asc",
            SortKey::TimeAsc => "time-asc",
            SortKey::TimeDesc => "time-desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "created-desc" => Some(SortKey::CreatedDesc),
            "created-asc" => Some(SortKey::CreatedAsc),
            "time-asc" => Some(SortKey::TimeAsc),
            "time-desc" => Some(SortKey::TimeDesc),
            _ => None,
        }
    }
}

/// One recipe entry in the notebook.
///
/// Records are immutable after creation; the collection is only ever
/// replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub category: Category,
    pub status: Status,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Minutes, absent means "unspecified"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Unvalidated candidate record assembled by the view layer.
///
/// `cook_time` is carried as a raw float so that non-numeric form input
/// (parsed to NaN by the caller) reaches validation and gets reported as a
/// per-field error rather than failing at the parse site.
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub title: String,
    pub category: Category,
    pub status: Status,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub cook_time: Option<f64>,
    pub servings: Option<f64>,
    pub source_url: Option<String>,
    pub notes: Option<String>,
}

/// The combined query/category/status/sort selection driving the visible
/// list. Transient; mirrored into the URL query string, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub query: String,
    pub category: Option<Category>,
    pub status: Option<Status>,
    pub sort: SortKey,
}

/// Split multi-line form input into trimmed, non-empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
