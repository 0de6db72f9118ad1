/*
 * Responsibility
 * - Locale enumeration (English canonical, Indonesian optional)
 * - Text fallback resolution: a defined string is always returned
 * - Shallow config merge for bilingual JSON config objects
 */
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Id,
}

impl Locale {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Self::En),
            "id" => Some(Self::Id),
            _ => None,
        }
    }

    /// Best-effort read of an Accept-Language header value: only the first
    /// language tag is considered, quality weights are ignored.
    pub fn from_accept_language(header: &str) -> Self {
        let first = header
            .split(',')
            .next()
            .and_then(|tag| tag.split(';').next())
            .map(str::trim)
            .unwrap_or("");
        if first == "id" || first.starts_with("id-") {
            Self::Id
        } else {
            Self::En
        }
    }
}

/// Pick the display string for a bilingual field.
///
/// Indonesian wins only when requested and non-empty after trimming;
/// English is the canonical fallback. Never returns a missing value: if
/// both sides are absent the result is the empty string.
pub fn resolve_localized_text(
    locale: Locale,
    english: Option<&str>,
    indonesian: Option<&str>,
) -> String {
    if locale == Locale::Id
        && let Some(id) = indonesian
        && !id.trim().is_empty()
    {
        return id.to_string();
    }
    match (english, indonesian) {
        (Some(en), _) => en.to_string(),
        (None, Some(id)) => id.to_string(),
        (None, None) => String::new(),
    }
}

/// Merge bilingual config objects for the requested locale.
///
/// The English object is the base. For any locale other than Indonesian it
/// is returned unchanged; for Indonesian the Indonesian keys are shallow
/// merged over it (English-only keys preserved).
pub fn resolve_localized_config(
    locale: Locale,
    english: Option<&Map<String, Value>>,
    indonesian: Option<&Map<String, Value>>,
) -> Map<String, Value> {
    let mut base = english.cloned().unwrap_or_default();
    if locale != Locale::Id {
        return base;
    }
    if let Some(id) = indonesian {
        for (key, value) in id {
            base.insert(key.clone(), value.clone());
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn indonesian_wins_when_requested_and_non_empty() {
        assert_eq!(
            resolve_localized_text(Locale::Id, Some("Coffee"), Some("Kopi")),
            "Kopi"
        );
    }

    #[test]
    fn blank_indonesian_falls_back_to_english() {
        assert_eq!(
            resolve_localized_text(Locale::Id, Some("Coffee"), Some("   ")),
            "Coffee"
        );
        assert_eq!(
            resolve_localized_text(Locale::Id, Some("Coffee"), None),
            "Coffee"
        );
    }

    #[test]
    fn english_locale_ignores_indonesian() {
        assert_eq!(
            resolve_localized_text(Locale::En, Some("Coffee"), Some("Kopi")),
            "Coffee"
        );
    }

    #[test]
    fn missing_english_degrades_to_indonesian_then_empty() {
        assert_eq!(resolve_localized_text(Locale::En, None, Some("Kopi")), "Kopi");
        assert_eq!(resolve_localized_text(Locale::Id, None, None), "");
    }

    #[test]
    fn config_merge_is_identity_for_english() {
        let en = map(json!({"title": "Home", "cta": "Read more"}));
        let id = map(json!({"title": "Beranda"}));
        let merged = resolve_localized_config(Locale::En, Some(&en), Some(&id));
        assert_eq!(merged, en);
    }

    #[test]
    fn config_merge_overrides_and_preserves() {
        let en = map(json!({"title": "Home", "cta": "Read more"}));
        let id = map(json!({"title": "Beranda"}));
        let merged = resolve_localized_config(Locale::Id, Some(&en), Some(&id));
        assert_eq!(merged.get("title"), Some(&json!("Beranda")));
        assert_eq!(merged.get("cta"), Some(&json!("Read more")));
    }

    #[test]
    fn config_merge_tolerates_missing_sides() {
        let id = map(json!({"title": "Beranda"}));
        let merged = resolve_localized_config(Locale::Id, None, Some(&id));
        assert_eq!(merged.get("title"), Some(&json!("Beranda")));
        assert!(resolve_localized_config(Locale::En, None, None).is_empty());
    }

    #[test]
    fn accept_language_first_tag_decides() {
        assert_eq!(Locale::from_accept_language("id-ID,id;q=0.9"), Locale::Id);
        assert_eq!(Locale::from_accept_language("en-US,en;q=0.9,id;q=0.8"), Locale::En);
        assert_eq!(Locale::from_accept_language(""), Locale::En);
    }
}
