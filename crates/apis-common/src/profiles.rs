/// Built-in interest profiles.
///
/// Each profile bundles the directory sections a user with that interest cares
/// about and the lowercase keywords matched against entry names and
/// descriptions. The registry is plain data built once at startup and passed
/// by reference to the scorer and recommender.
use serde::Serialize;

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestProfile {
    /// Human-readable label, e.g. "Fun & Entertainment"
    pub label: &'static str,
    /// Section headings that earn the category bonus
    pub categories: &'static [&'static str],
    /// Lowercase substrings matched against "name description"
    pub keywords: &'static [&'static str],
}

impl InterestProfile {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| *c == category)
    }

    /// The first `n` category names, for short menu previews.
    pub fn category_preview(&self, n: usize) -> &'static [&'static str] {
        &self.categories[..n.min(self.categories.len())]
    }
}

/// Ordered, immutable map from interest tag to profile.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<(&'static str, InterestProfile)>,
}

impl ProfileRegistry {
    pub fn new(profiles: Vec<(&'static str, InterestProfile)>) -> Self {
        Self { profiles }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_PROFILES.to_vec())
    }

    pub fn get(&self, tag: &str) -> Option<&InterestProfile> {
        self.profiles
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, profile)| profile)
    }

    pub fn require(&self, tag: &str) -> Result<&InterestProfile, CatalogError> {
        self.get(tag)
            .ok_or_else(|| CatalogError::UnknownInterest(tag.to_string()))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.profiles.iter().map(|(tag, _)| *tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &InterestProfile)> {
        self.profiles.iter().map(|(tag, profile)| (*tag, profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Keep the known tags from `tags`, in input order.
    pub fn validate_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&'static str> {
        tags.iter()
            .filter_map(|t| self.profiles.iter().find(|(tag, _)| *tag == t.as_ref()))
            .map(|(tag, _)| *tag)
            .collect()
    }
}

const BUILTIN_PROFILES: [(&str, InterestProfile); 8] = [
    (
        "web-dev",
        InterestProfile {
            label: "Web Development",
            categories: &[
                "Development",
                "Authentication & Authorization",
                "Cloud Storage & File Sharing",
                "Continuous Integration",
                "Documents & Productivity",
                "Email",
                "URL Shorteners",
                "Test Data",
                "Data Validation",
            ],
            keywords: &[
                "api", "rest", "json", "webhook", "server", "deploy", "host", "database",
                "storage", "cdn", "proxy", "dns", "ssl", "docker",
            ],
        },
    ),
    (
        "data-science",
        InterestProfile {
            label: "Data Science & ML",
            categories: &[
                "Machine Learning",
                "Science & Math",
                "Open Data",
                "Data Validation",
                "Text Analysis",
                "Weather",
                "Environment",
                "Finance",
            ],
            keywords: &[
                "data",
                "dataset",
                "predict",
                "machine learning",
                "ai",
                "nlp",
                "analysis",
                "statistics",
                "research",
                "compute",
                "neural",
            ],
        },
    ),
    (
        "fun",
        InterestProfile {
            label: "Fun & Entertainment",
            categories: &[
                "Animals",
                "Anime",
                "Entertainment",
                "Games & Comics",
                "Music",
                "Video",
                "Personality",
                "Art & Design",
            ],
            keywords: &[
                "fun", "game", "random", "joke", "trivia", "comic", "meme", "cat", "dog", "anime",
                "movie", "tv", "gif",
            ],
        },
    ),
    (
        "finance",
        InterestProfile {
            label: "Finance & Business",
            categories: &[
                "Finance",
                "Cryptocurrency",
                "Currency Exchange",
                "Business",
                "Blockchain",
                "Shopping",
                "Jobs",
            ],
            keywords: &[
                "stock", "crypto", "bitcoin", "bank", "payment", "price", "market", "trade",
                "exchange", "currency", "invoice",
            ],
        },
    ),
    (
        "security",
        InterestProfile {
            label: "Security & Privacy",
            categories: &[
                "Security",
                "Anti-Malware",
                "Authentication & Authorization",
                "Phone",
                "Data Validation",
            ],
            keywords: &[
                "security",
                "breach",
                "malware",
                "phishing",
                "spam",
                "threat",
                "vulnerability",
                "encrypt",
                "password",
                "auth",
                "scan",
            ],
        },
    ),
    (
        "media",
        InterestProfile {
            label: "Media & Creative",
            categories: &[
                "Photography",
                "Music",
                "Video",
                "Art & Design",
                "Social",
                "News",
                "Books",
                "Dictionaries",
            ],
            keywords: &[
                "image", "photo", "video", "music", "art", "design", "color", "font", "icon",
                "stock", "creative", "media", "stream",
            ],
        },
    ),
    (
        "geo",
        InterestProfile {
            label: "Geography & Travel",
            categories: &[
                "Geocoding",
                "Transportation",
                "Vehicle",
                "Weather",
                "Government",
                "Events",
                "Tracking",
            ],
            keywords: &[
                "map", "location", "gps", "country", "city", "travel", "flight", "transport",
                "route", "address", "geocode", "weather", "climate",
            ],
        },
    ),
    (
        "health",
        InterestProfile {
            label: "Health & Science",
            categories: &[
                "Health",
                "Science & Math",
                "Food & Drink",
                "Sports & Fitness",
                "Environment",
            ],
            keywords: &[
                "health",
                "medical",
                "nutrition",
                "food",
                "fitness",
                "exercise",
                "science",
                "biology",
                "chemistry",
                "nasa",
                "space",
                "covid",
            ],
        },
    ),
];
