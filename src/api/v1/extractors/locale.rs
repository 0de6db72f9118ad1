/*
 * Responsibility
 * - Pick the display locale for a request
 * - `?locale=` query param wins, then Accept-Language, then English
 * - Infallible: an unrecognized locale silently falls back
 */
use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::domain::locale::Locale;
use crate::state::AppState;

pub struct RequestLocale(pub Locale);

impl FromRequestParts<AppState> for RequestLocale {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let from_query = parts.uri.query().and_then(locale_param);

        let locale = from_query.unwrap_or_else(|| {
            parts
                .headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok())
                .map(Locale::from_accept_language)
                .unwrap_or_default()
        });

        Ok(RequestLocale(locale))
    }
}

fn locale_param(query: &str) -> Option<Locale> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == "locale" { Locale::parse(value) } else { None }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_param_parses() {
        assert_eq!(locale_param("locale=id"), Some(Locale::Id));
        assert_eq!(locale_param("page=2&locale=en"), Some(Locale::En));
        assert_eq!(locale_param("locale=fr"), None);
        assert_eq!(locale_param("page=2"), None);
    }
}
