/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the embedded dataset and the UI layer.

use serde::Deserialize;

/// Represents a single nominee in the directory
///
/// Constructed once from the embedded dataset at startup and never
/// mutated afterwards. Optional fields render with safe defaults
/// instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Person {
    /// Unique identifier (e.g., "ana-ruiz")
    pub id: String,
    /// Full display name
    pub name: String,
    /// Country shown on the card badge and used for faceting
    pub country: String,
    /// Company or organization, searchable and facetable
    pub company: String,
    /// Role or title (None renders a generic fallback)
    #[serde(default)]
    pub role: Option<String>,
    /// External profile link, possibly missing its protocol prefix
    pub profile: String,
    /// Short biography for the detail modal (None renders a fallback)
    #[serde(default)]
    pub short_bio: Option<String>,
    /// Optional image reference; cards fall back to an initials avatar
    #[serde(default)]
    pub image: Option<String>,
    /// Whether this person is part of the current honoree cohort
    #[serde(default)]
    pub honoree: bool,
}

impl Person {
    /// Role with a generic fallback for nominees that did not supply one
    pub fn role_or_default(&self) -> &str {
        self.role.as_deref().unwrap_or("Líder en IA")
    }

    /// Biography with a generic fallback
    pub fn bio_or_default(&self) -> &str {
        self.short_bio.as_deref().unwrap_or(
            "Reconocido por su contribución al ecosistema de Inteligencia \
             Artificial en Latinoamérica.",
        )
    }

    /// Profile link normalized to always carry a protocol.
    /// Links supplied without one are assumed to be HTTPS.
    pub fn profile_url(&self) -> String {
        safe_link(&self.profile)
    }

    /// Up to two uppercase initials for the avatar placeholder
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// Prefix bare links with https://; empty input stays empty.
pub fn safe_link(url: &str) -> String {
    if url.is_empty() || url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(role: Option<&str>, bio: Option<&str>) -> Person {
        Person {
            id: "ana-ruiz".into(),
            name: "Ana Ruiz".into(),
            country: "México".into(),
            company: "Nubelab".into(),
            role: role.map(String::from),
            profile: "linkedin.com/in/ana-ruiz".into(),
            short_bio: bio.map(String::from),
            image: None,
            honoree: true,
        }
    }

    #[test]
    fn test_missing_optionals_fall_back() {
        let p = person(None, None);
        assert_eq!(p.role_or_default(), "Líder en IA");
        assert!(p.bio_or_default().contains("Latinoamérica"));
    }

    #[test]
    fn test_supplied_optionals_win() {
        let p = person(Some("CTO"), Some("Bio corta."));
        assert_eq!(p.role_or_default(), "CTO");
        assert_eq!(p.bio_or_default(), "Bio corta.");
    }

    #[test]
    fn test_safe_link_adds_protocol() {
        assert_eq!(
            safe_link("linkedin.com/in/ana"),
            "https://linkedin.com/in/ana"
        );
        assert_eq!(
            safe_link("https://linkedin.com/in/ana"),
            "https://linkedin.com/in/ana"
        );
        assert_eq!(safe_link(""), "");
    }

    #[test]
    fn test_initials() {
        assert_eq!(person(None, None).initials(), "AR");
    }
}
