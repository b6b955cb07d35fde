//! Pattern passes over the raw input.
//!
//! Three textual shapes are recognized, applied strictly in this order, with
//! all matches of one shape collected (left to right) before the next shape
//! runs:
//!
//! 1. Bracketed pair: `[60.1691, 24.9522]`
//! 2. Parenthesized pair: `(40.7128, -74.0060)`
//! 3. Compass-suffixed pair: `60.1691N, 24.9522E` (comma optional)
//!
//! Each occurrence yields exactly one candidate whose first number is read as
//! latitude and second as longitude. The hemisphere letters of shape 3 are
//! shape markers only; they do not fold the sign. Malformed numerics inside a
//! syntactic match drop the candidate silently, never as an error.

use crate::Candidate;
use regex::Regex;

/// Run all pattern passes and concatenate their candidates in pass order.
pub(crate) fn match_candidates(text: &str) -> Vec<Candidate> {
    let mut out = Vec::new();

    collect(regex!(r"\[\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*\]"), "bracketed", text, &mut out);
    collect(regex!(r"\(\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*\)"), "parenthesized", text, &mut out);
    // `\b` after the hemisphere letter keeps the pass from firing on words
    // like "North" or "East".
    collect(
        regex!(r"(-?\d+(?:\.\d+)?)\s*[NS]\b\s*,?\s*(-?\d+(?:\.\d+)?)\s*[EW]\b"),
        "compass",
        text,
        &mut out,
    );

    out
}

fn collect(re: &Regex, pattern: &'static str, text: &str, out: &mut Vec<Candidate>) {
    for caps in re.captures_iter(text) {
        let lat_text = &caps[1];
        let lng_text = &caps[2];

        let (Ok(latitude), Ok(longitude)) = (lat_text.parse::<f64>(), lng_text.parse::<f64>())
        else {
            continue;
        };

        out.push(Candidate {
            latitude,
            longitude,
            lat_text: lat_text.to_string(),
            lng_text: lng_text.to_string(),
            pattern,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracketed_pairs_in_order() {
        let cands = match_candidates("[60.1691, 24.9522] then [60.1669,24.9525]");
        assert_eq!(cands.len(), 2);
        assert_eq!(cands[0].pattern, "bracketed");
        assert_eq!(cands[0].lat_text, "60.1691");
        assert_eq!(cands[1].longitude, 24.9525);
    }

    #[test]
    fn parenthesized_pair_with_negative_longitude() {
        let cands = match_candidates("Visit (40.7128, -74.0060) today");
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0].pattern, "parenthesized");
        assert_eq!(cands[0].latitude, 40.7128);
        assert_eq!(cands[0].longitude, -74.0060);
        assert_eq!(cands[0].lng_text, "-74.0060");
    }

    #[test]
    fn compass_pair_with_and_without_comma() {
        let with_comma = match_candidates("Helsinki sits at 60.1691N, 24.9522E roughly");
        assert_eq!(with_comma.len(), 1);
        assert_eq!(with_comma[0].pattern, "compass");
        assert_eq!(with_comma[0].latitude, 60.1691);

        let without_comma = match_candidates("60.1691N 24.9522E");
        assert_eq!(without_comma.len(), 1);
    }

    #[test]
    fn compass_letters_do_not_fold_sign() {
        let cands = match_candidates("33.8688S 151.2093E");
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0].latitude, 33.8688);
    }

    #[test]
    fn compass_ignores_prose_words() {
        assert!(match_candidates("walk 500 North then 200 East").is_empty());
    }

    #[test]
    fn prose_without_pairs_yields_nothing() {
        assert!(match_candidates("a lovely walk through the park").is_empty());
        assert!(match_candidates("10,000 steps, about 7 km").is_empty());
    }

    #[test]
    fn thousands_separators_break_the_numeric_grammar() {
        // "[10,000, 20]" cannot be read as a pair: "10,000" is not a single
        // number under the pattern grammar, and no comma split satisfies the
        // closing delimiter.
        assert!(match_candidates("[10,000, 20]").is_empty());
    }

    #[test]
    fn passes_run_in_fixed_order() {
        let cands = match_candidates("(40.7128, -74.0060) and [60.1691, 24.9522]");
        assert_eq!(cands.len(), 2);
        // Bracketed pass runs first even though the parenthesized pair
        // appears earlier in the text.
        assert_eq!(cands[0].pattern, "bracketed");
        assert_eq!(cands[1].pattern, "parenthesized");
    }
}
