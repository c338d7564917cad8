//! Route matching logic.
//!
//! # Responsibilities
//! - Match a path against one rule (exact, prefix, or dynamic-set membership)
//! - Percent-decode prefix remainders into the `id` path parameter
//! - Produce the invocation inputs a matched rule implies
//!
//! # Design Decisions
//! - Path matching is case-sensitive; no trailing-slash normalization beyond
//!   the literal variants a rule lists
//! - Malformed percent-escapes in a matched remainder fail the request (error
//!   envelope), they are not a no-match
//! - Matching is O(path length); no regex

use std::collections::HashMap;

use crate::handlers::Invocation;

/// Category-set candidates are compared against `"/api/" + name`.
const API_PREFIX: &str = "/api/";

/// Genre fallback accepts any path under this prefix, evaluated last.
const GENRE_PREFIX: &str = "/api/genre/";

/// Match condition for one route rule.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Literal equality against any listed variant (the root route lists
    /// both `/api` and `/api/`).
    Exact(&'static [&'static str]),

    /// Literal equality carrying the stream fallback flag.
    ExactWithFlag(&'static str, bool),

    /// Prefix test; the percent-decoded remainder becomes `params["id"]`.
    PrefixId(&'static str),

    /// Prefix test with no extraction; the trailing segment is consumed by
    /// the handler.
    Prefix(&'static str),

    /// Membership against the externally supplied ordered category list.
    CategorySet,

    /// Any `/api/genre/<rest>`; the routing argument is `genre/<rest>`.
    GenreFallback,
}

/// Parameters and invocation inputs produced by a successful match.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub params: HashMap<String, String>,
    pub invocation: Invocation,
}

impl MatchOutcome {
    fn plain() -> Self {
        Self {
            params: HashMap::new(),
            invocation: Invocation::Plain,
        }
    }

    fn with_id(id: String) -> Self {
        let mut params = HashMap::new();
        params.insert("id".to_string(), id);
        Self {
            params,
            invocation: Invocation::Plain,
        }
    }

    fn category(route_type: String) -> Self {
        Self {
            params: HashMap::new(),
            invocation: Invocation::Category(route_type),
        }
    }

    fn stream(fallback: bool) -> Self {
        Self {
            params: HashMap::new(),
            invocation: Invocation::Stream { fallback },
        }
    }
}

/// A matched rule's remainder contained a malformed percent-escape.
#[derive(Debug, Clone, thiserror::Error)]
#[error("malformed percent-encoding in path segment \"{0}\"")]
pub struct MatchError(pub String);

impl Matcher {
    /// Evaluate this condition against a path.
    ///
    /// `Ok(None)` means no match; `Err` is only returned when a rule matched
    /// but its extracted remainder failed to decode.
    pub fn evaluate(
        &self,
        path: &str,
        categories: &[String],
    ) -> Result<Option<MatchOutcome>, MatchError> {
        match self {
            Self::Exact(variants) => Ok(variants
                .iter()
                .any(|v| *v == path)
                .then(MatchOutcome::plain)),
            Self::ExactWithFlag(literal, fallback) => {
                Ok((path == *literal).then(|| MatchOutcome::stream(*fallback)))
            }
            Self::PrefixId(prefix) => match path.strip_prefix(prefix) {
                Some(rest) => Ok(Some(MatchOutcome::with_id(decode_segment(rest)?))),
                None => Ok(None),
            },
            Self::Prefix(prefix) => Ok(path.starts_with(prefix).then(MatchOutcome::plain)),
            Self::CategorySet => {
                let Some(rest) = path.strip_prefix(API_PREFIX) else {
                    return Ok(None);
                };
                for name in categories {
                    if rest == name.as_str() {
                        return Ok(Some(MatchOutcome::category(name.clone())));
                    }
                }
                Ok(None)
            }
            Self::GenreFallback => {
                if path.starts_with(GENRE_PREFIX) {
                    let route_type = path[API_PREFIX.len()..].to_string();
                    Ok(Some(MatchOutcome::category(route_type)))
                } else {
                    Ok(None)
                }
            }
        }
    }
}

/// Percent-decode a path remainder, rejecting malformed escape sequences.
fn decode_segment(raw: &str) -> Result<String, MatchError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(MatchError(raw.to_string()));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    urlencoding::decode(raw)
        .map(|cow| cow.into_owned())
        .map_err(|_| MatchError(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_CATEGORIES: &[String] = &[];

    #[test]
    fn test_exact_matches_all_variants() {
        let matcher = Matcher::Exact(&["/api", "/api/"]);
        assert!(matcher.evaluate("/api", NO_CATEGORIES).unwrap().is_some());
        assert!(matcher.evaluate("/api/", NO_CATEGORIES).unwrap().is_some());
        assert!(matcher.evaluate("/api/x", NO_CATEGORIES).unwrap().is_none());
    }

    #[test]
    fn test_prefix_id_extracts_decoded_remainder() {
        let matcher = Matcher::PrefixId("/api/episodes/");
        let outcome = matcher
            .evaluate("/api/episodes/One%20Piece", NO_CATEGORIES)
            .unwrap()
            .unwrap();
        assert_eq!(outcome.params.get("id").map(String::as_str), Some("One Piece"));
    }

    #[test]
    fn test_prefix_id_rejects_malformed_escape() {
        let matcher = Matcher::PrefixId("/api/episodes/");
        assert!(matcher.evaluate("/api/episodes/bad%zz", NO_CATEGORIES).is_err());
        assert!(matcher.evaluate("/api/episodes/trunc%2", NO_CATEGORIES).is_err());
        assert!(matcher.evaluate("/api/episodes/end%", NO_CATEGORIES).is_err());
    }

    #[test]
    fn test_prefix_without_extraction() {
        let matcher = Matcher::Prefix("/api/servers/");
        let outcome = matcher
            .evaluate("/api/servers/anything-here", NO_CATEGORIES)
            .unwrap()
            .unwrap();
        assert!(outcome.params.is_empty());
    }

    #[test]
    fn test_stream_flag_carried_in_invocation() {
        let matcher = Matcher::ExactWithFlag("/api/stream/fallback", true);
        let outcome = matcher
            .evaluate("/api/stream/fallback", NO_CATEGORIES)
            .unwrap()
            .unwrap();
        assert_eq!(outcome.invocation, Invocation::Stream { fallback: true });
    }

    #[test]
    fn test_category_set_membership() {
        let categories = vec!["movie".to_string(), "tv".to_string()];
        let matcher = Matcher::CategorySet;
        let outcome = matcher.evaluate("/api/movie", &categories).unwrap().unwrap();
        assert_eq!(outcome.invocation, Invocation::Category("movie".to_string()));
        assert!(matcher.evaluate("/api/isekai", &categories).unwrap().is_none());
    }

    #[test]
    fn test_genre_fallback_argument_keeps_prefix() {
        let matcher = Matcher::GenreFallback;
        let outcome = matcher
            .evaluate("/api/genre/isekai", NO_CATEGORIES)
            .unwrap()
            .unwrap();
        assert_eq!(
            outcome.invocation,
            Invocation::Category("genre/isekai".to_string())
        );
    }

    #[test]
    fn test_decode_segment_passes_plain_text() {
        assert_eq!(decode_segment("steins-gate-3").unwrap(), "steins-gate-3");
        assert_eq!(decode_segment("").unwrap(), "");
    }
}
