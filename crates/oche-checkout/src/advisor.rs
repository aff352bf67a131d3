//! Checkout possibility checks and route suggestions.

use crate::tables::{IMPOSSIBLE_CHECKOUTS, MAX_CHECKOUT, routes_for};

/// True if `score` can be taken out in a single visit.
///
/// A score qualifies when it is at most [`MAX_CHECKOUT`], is not one of the
/// seven impossible totals, and is either even or carries a tabulated route.
pub fn is_checkout_possible(score: u32) -> bool {
    if score > MAX_CHECKOUT {
        return false;
    }
    if IMPOSSIBLE_CHECKOUTS.contains(&score) {
        return false;
    }
    score % 2 == 0 || routes_for(score).is_some()
}

/// Suggested finishing combinations for `score`, or `None` when no
/// single-visit finish exists.
///
/// Tabulated scores return their chart entries. For reachable scores the
/// chart misses, an even value up to 40 falls back to the bare double and
/// anything else gets a generic placeholder with no combination detail.
pub fn checkout_routes(score: u32) -> Option<Vec<String>> {
    if !is_checkout_possible(score) {
        return None;
    }
    Some(suggest(routes_for(score), score))
}

/// Route synthesis behind [`checkout_routes`]: chart entries when present,
/// fallbacks otherwise.
fn suggest(tabulated: Option<&[&str]>, score: u32) -> Vec<String> {
    if let Some(routes) = tabulated {
        return routes.iter().map(|route| (*route).to_string()).collect();
    }
    if score % 2 == 0 && score <= 40 {
        return vec![format!("D{}", score / 2)];
    }
    vec!["Checkout possible".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_finishes_are_possible() {
        for score in [2, 32, 40, 100, 167, 170] {
            assert!(is_checkout_possible(score), "score {score}");
        }
    }

    #[test]
    fn tabulated_odd_scores_are_possible() {
        for score in [1, 3, 39, 97, 161] {
            assert!(is_checkout_possible(score), "score {score}");
        }
    }

    #[test]
    fn scores_above_the_cap_are_not_possible() {
        assert!(!is_checkout_possible(171));
        assert!(!is_checkout_possible(180));
        assert!(!is_checkout_possible(501));
    }

    #[test]
    fn impossible_scores_are_not_possible() {
        for &score in IMPOSSIBLE_CHECKOUTS {
            assert!(!is_checkout_possible(score), "score {score}");
        }
    }

    #[test]
    fn routes_for_the_maximum_finish() {
        assert_eq!(checkout_routes(170), Some(vec!["T20 T20 Bull".to_string()]));
    }

    #[test]
    fn routes_for_bare_doubles() {
        assert_eq!(checkout_routes(40), Some(vec!["D20".to_string()]));
        assert_eq!(checkout_routes(32), Some(vec!["D16".to_string()]));
    }

    #[test]
    fn routes_for_tabulated_odd_scores() {
        assert_eq!(
            checkout_routes(39),
            Some(vec!["S7 D16".to_string(), "S19 D10".to_string()])
        );
        assert_eq!(checkout_routes(3), Some(vec!["S1 D1".to_string()]));
    }

    #[test]
    fn no_routes_when_not_possible() {
        assert!(checkout_routes(171).is_none());
        assert!(checkout_routes(169).is_none());
        assert!(checkout_routes(162).is_none());
    }

    #[test]
    fn fallback_suggests_the_bare_double() {
        // The shipped chart covers these, so exercise the synthesis
        // directly.
        assert_eq!(suggest(None, 38), vec!["D19".to_string()]);
        assert_eq!(suggest(None, 40), vec!["D20".to_string()]);
    }

    #[test]
    fn fallback_placeholder_for_everything_else() {
        assert_eq!(suggest(None, 42), vec!["Checkout possible".to_string()]);
        assert_eq!(suggest(None, 55), vec!["Checkout possible".to_string()]);
    }
}
