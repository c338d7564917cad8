//! Route table: the fixed, ordered declaration of every endpoint.
//!
//! # Responsibilities
//! - Declare the full route surface in dispatch order
//! - Scan rules top-to-bottom and stop at the first match
//! - Surface decode failures from matched rules distinctly from no-match
//!
//! # Design Decisions
//! - Immutable after construction, shared via Arc, never mutated
//! - More specific prefixes are declared before more general ones
//!   (`/api/character/list/` before `/api/character/`); the precedence is a
//!   tested invariant, not an incidental ordering
//! - The genre fallback sits last so declared category names win

use std::collections::HashMap;

use crate::handlers::{HandlerId, Invocation};

use super::matcher::{MatchError, Matcher};

/// One ordered rule: a match condition paired with a handler key.
#[derive(Debug, Clone)]
pub struct RouteRule {
    pub matcher: Matcher,
    pub handler: HandlerId,
}

/// Result of a successful table lookup.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub handler: HandlerId,
    pub params: HashMap<String, String>,
    pub invocation: Invocation,
}

/// Ordered route table, built once per process.
#[derive(Debug, Clone)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
    categories: Vec<String>,
}

impl RouteTable {
    /// Build the table around the externally supplied category-name list.
    pub fn new(categories: Vec<String>) -> Self {
        use HandlerId::*;
        use Matcher::*;

        let rules = vec![
            RouteRule { matcher: Exact(&["/api", "/api/"]), handler: HomeInfo },
            RouteRule { matcher: Exact(&["/api/top-ten"]), handler: TopTen },
            RouteRule { matcher: Exact(&["/api/top-search"]), handler: TopSearch },
            RouteRule { matcher: Exact(&["/api/info"]), handler: AnimeInfo },
            RouteRule { matcher: PrefixId("/api/episodes/"), handler: EpisodeList },
            RouteRule { matcher: Prefix("/api/servers/"), handler: Servers },
            RouteRule { matcher: ExactWithFlag("/api/stream", false), handler: StreamInfo },
            RouteRule { matcher: ExactWithFlag("/api/stream/fallback", true), handler: StreamInfo },
            RouteRule { matcher: Exact(&["/api/search"]), handler: Search },
            RouteRule { matcher: Exact(&["/api/filter"]), handler: Filter },
            RouteRule { matcher: Exact(&["/api/schedule"]), handler: Schedule },
            RouteRule { matcher: Exact(&["/api/random"]), handler: Random },
            RouteRule { matcher: Exact(&["/api/random/id"]), handler: RandomId },
            RouteRule { matcher: PrefixId("/api/qtip/"), handler: Qtip },
            RouteRule { matcher: PrefixId("/api/producer/"), handler: Producer },
            // list/ must stay ahead of the generic character prefix below
            RouteRule { matcher: PrefixId("/api/character/list/"), handler: VoiceActorList },
            RouteRule { matcher: PrefixId("/api/actors/"), handler: Actors },
            RouteRule { matcher: PrefixId("/api/character/"), handler: Character },
            RouteRule { matcher: CategorySet, handler: Category },
            RouteRule { matcher: GenreFallback, handler: Category },
        ];

        Self { rules, categories }
    }

    /// Evaluate rules in declaration order; first match wins.
    ///
    /// `Ok(None)` is no-route-match (404); `Err` is a decode failure inside a
    /// matched rule and surfaces as the error envelope.
    pub fn resolve(&self, path: &str) -> Result<Option<RouteMatch>, MatchError> {
        for rule in &self.rules {
            if let Some(outcome) = rule.matcher.evaluate(path, &self.categories)? {
                return Ok(Some(RouteMatch {
                    handler: rule.handler,
                    params: outcome.params,
                    invocation: outcome.invocation,
                }));
            }
        }
        Ok(None)
    }

    /// Declared category names, in evaluation order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new(vec!["movie".to_string(), "tv".to_string()])
    }

    fn handler_for(path: &str) -> Option<HandlerId> {
        table().resolve(path).unwrap().map(|m| m.handler)
    }

    #[test]
    fn test_root_variants_share_a_handler() {
        assert_eq!(handler_for("/api"), Some(HandlerId::HomeInfo));
        assert_eq!(handler_for("/api/"), Some(HandlerId::HomeInfo));
    }

    #[test]
    fn test_character_list_precedes_character() {
        assert_eq!(
            handler_for("/api/character/list/42"),
            Some(HandlerId::VoiceActorList)
        );
        assert_eq!(
            handler_for("/api/character/list/zoro"),
            Some(HandlerId::VoiceActorList)
        );
        assert_eq!(handler_for("/api/character/42"), Some(HandlerId::Character));
    }

    #[test]
    fn test_stream_routes_carry_fallback_flag() {
        let plain = table().resolve("/api/stream").unwrap().unwrap();
        assert_eq!(plain.handler, HandlerId::StreamInfo);
        assert_eq!(plain.invocation, Invocation::Stream { fallback: false });

        let fallback = table().resolve("/api/stream/fallback").unwrap().unwrap();
        assert_eq!(fallback.handler, HandlerId::StreamInfo);
        assert_eq!(fallback.invocation, Invocation::Stream { fallback: true });
    }

    #[test]
    fn test_declared_category_beats_genre_fallback_order() {
        let m = table().resolve("/api/movie").unwrap().unwrap();
        assert_eq!(m.handler, HandlerId::Category);
        assert_eq!(m.invocation, Invocation::Category("movie".to_string()));

        let g = table().resolve("/api/genre/isekai").unwrap().unwrap();
        assert_eq!(g.handler, HandlerId::Category);
        assert_eq!(g.invocation, Invocation::Category("genre/isekai".to_string()));
    }

    #[test]
    fn test_unknown_path_is_no_match() {
        assert_eq!(handler_for("/api/does-not-exist"), None);
        assert_eq!(handler_for("/other"), None);
        assert_eq!(handler_for(""), None);
    }

    #[test]
    fn test_decode_failure_is_an_error_not_a_miss() {
        assert!(table().resolve("/api/episodes/bad%GG").is_err());
    }

    #[test]
    fn test_servers_consumes_remainder_without_params() {
        let m = table().resolve("/api/servers/whatever/else").unwrap().unwrap();
        assert_eq!(m.handler, HandlerId::Servers);
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_first_match_wins_for_overlapping_rules() {
        // /api/random/id is exact and unreachable only if /api/random were a
        // prefix rule; both must resolve to their own handlers.
        assert_eq!(handler_for("/api/random"), Some(HandlerId::Random));
        assert_eq!(handler_for("/api/random/id"), Some(HandlerId::RandomId));
    }
}
