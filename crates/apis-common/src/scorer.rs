/// Scores one catalog entry against one interest profile.
///
/// Signals are additive and never negative:
/// - category listed in the profile: +5.0
/// - each profile keyword found in "name description" (case-insensitive): +2.0
/// - auth fit for the user's preference: +3.0 (none) or +2.0 (apikey)
/// - HTTPS supported: +1.0
/// - CORS supported: +0.5
use crate::model::{ApiEntry, AuthPreference, NO_AUTH};
use crate::profiles::InterestProfile;

pub const CATEGORY_WEIGHT: f64 = 5.0;
pub const KEYWORD_WEIGHT: f64 = 2.0;
pub const NO_AUTH_BONUS: f64 = 3.0;
pub const API_KEY_BONUS: f64 = 2.0;
pub const HTTPS_BONUS: f64 = 1.0;
pub const CORS_BONUS: f64 = 0.5;

/// Auth label for plain API-key auth, compared case-sensitively.
const API_KEY_AUTH: &str = "apiKey";

pub fn score(entry: &ApiEntry, profile: &InterestProfile, auth: AuthPreference) -> f64 {
    let mut score = 0.0;

    if profile.has_category(&entry.category) {
        score += CATEGORY_WEIGHT;
    }

    let text = format!("{} {}", entry.name, entry.description).to_lowercase();
    let matched = profile
        .keywords
        .iter()
        .filter(|kw| text.contains(**kw))
        .count();
    score += KEYWORD_WEIGHT * matched as f64;

    score += auth_bonus(&entry.auth, auth);

    if entry.supports_https() {
        score += HTTPS_BONUS;
    }
    if entry.supports_cors() {
        score += CORS_BONUS;
    }

    score
}

// `Any` never earns a bonus, not even for keyless APIs.
fn auth_bonus(entry_auth: &str, preference: AuthPreference) -> f64 {
    match preference {
        AuthPreference::None if entry_auth == NO_AUTH => NO_AUTH_BONUS,
        AuthPreference::ApiKey if entry_auth == NO_AUTH || entry_auth == API_KEY_AUTH => {
            API_KEY_BONUS
        }
        _ => 0.0,
    }
}
