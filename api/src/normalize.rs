/// Shared normalization algorithms used by every provider mapper: status
/// classification, period formatting, and the token-based team matching that
/// joins providers lacking a shared identifier.
use crate::GameStatus;

/// Classify an upstream status string into the internal status enum, plus
/// the orthogonal overtime flag.
///
/// Total over arbitrary input: anything not explicitly terminal, scheduled,
/// or interrupted is assumed in progress, so an unrecognized string shows a
/// live game rather than silently hiding it.
pub fn classify_status(raw: &str) -> (GameStatus, bool) {
    let lc = raw.trim().to_lowercase();
    let went_ot = lc.contains("over time")
        || lc.contains("overtime")
        || tokens(&lc).any(|t| t == "ot" || t == "aot");

    let status = if lc.contains("halftime") || lc == "ht" {
        GameStatus::Halftime
    } else if lc.contains("final") || lc.contains("finish") || lc == "ft" || lc == "aot" {
        GameStatus::Final
    } else if lc.contains("not started")
        || lc.contains("scheduled")
        || lc.contains("pregame")
        || lc.contains("pre-game")
        || lc == "ns"
        || lc == "tbd"
    {
        GameStatus::Scheduled
    } else if lc.contains("postpon") {
        GameStatus::Postponed
    } else if lc.contains("cancel") {
        GameStatus::Canceled
    } else if lc.contains("delay") || lc.contains("suspend") {
        GameStatus::Delayed
    } else {
        GameStatus::Live
    };

    (status, went_ot)
}

fn tokens(lc: &str) -> impl Iterator<Item = &str> {
    lc.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
}

/// Normalize a period code to its ordinal display form. Unrecognized codes
/// pass through unchanged — "OT" and provider-specific labels survive as-is.
pub fn ordinal_period(raw: &str) -> String {
    match raw.trim() {
        "1" | "Q1" => "1st".to_owned(),
        "2" | "Q2" => "2nd".to_owned(),
        "3" | "Q3" => "3rd".to_owned(),
        "4" | "Q4" => "4th".to_owned(),
        other => other.to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Team token matching
// ---------------------------------------------------------------------------

/// Candidate name tokens for one side of a matchup: abbreviation, display
/// name, short display name, full name — all lower-cased, blanks dropped.
pub fn team_tokens(candidates: &[Option<&str>]) -> Vec<String> {
    candidates
        .iter()
        .flatten()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect()
}

/// Case-insensitive substring test: the queried name matches when any
/// candidate token contains it or is contained by it.
pub fn name_matches(tokens: &[String], query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return false;
    }
    tokens.iter().any(|t| t.contains(&q) || q.contains(t.as_str()))
}

/// Both sides of a matchup must match for the event to be considered the
/// queried game. Best-effort heuristic — callers take the first event in
/// provider order that passes.
pub fn sides_match(
    home_tokens: &[String],
    away_tokens: &[String],
    home_query: &str,
    away_query: &str,
) -> bool {
    name_matches(home_tokens, home_query) && name_matches(away_tokens, away_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_total_over_observed_fixtures() {
        let fixtures = [
            ("Not Started", GameStatus::Scheduled),
            ("In Progress", GameStatus::Live),
            ("Halftime", GameStatus::Halftime),
            ("Finished", GameStatus::Final),
            ("Final/OT", GameStatus::Final),
            ("Canceled", GameStatus::Canceled),
            ("Postponed", GameStatus::Postponed),
            ("Delayed", GameStatus::Delayed),
            // Anything unrecognized is assumed in progress.
            ("Weather Hold Q3", GameStatus::Live),
        ];
        for (raw, expected) in fixtures {
            let (status, _) = classify_status(raw);
            assert_eq!(status, expected, "input {raw:?}");
        }
    }

    #[test]
    fn overtime_flag_is_orthogonal_to_status() {
        assert_eq!(classify_status("Final/OT"), (GameStatus::Final, true));
        assert_eq!(classify_status("After Over Time"), (GameStatus::Live, true));
        assert_eq!(classify_status("Finished"), (GameStatus::Final, false));
    }

    #[test]
    fn not_started_does_not_trip_the_ot_token() {
        // "nOT started" contains "ot" as a substring but not as a token.
        assert_eq!(classify_status("Not Started"), (GameStatus::Scheduled, false));
    }

    #[test]
    fn period_codes_normalize_to_ordinals() {
        assert_eq!(ordinal_period("Q1"), "1st");
        assert_eq!(ordinal_period("2"), "2nd");
        assert_eq!(ordinal_period("Q3"), "3rd");
        assert_eq!(ordinal_period("4"), "4th");
        assert_eq!(ordinal_period("OT"), "OT");
        assert_eq!(ordinal_period("Q5?"), "Q5?");
    }

    #[test]
    fn display_name_matches_queried_nickname() {
        let home = team_tokens(&[
            Some("LAL"),
            Some("Los Angeles Lakers"),
            Some("Lakers"),
        ]);
        let away = team_tokens(&[
            Some("GS"),
            Some("Golden State Warriors"),
            Some("Warriors"),
        ]);
        assert!(sides_match(&home, &away, "Lakers", "Warriors"));
        assert!(!sides_match(&home, &away, "Lakers", "Celtics"));
    }

    #[test]
    fn empty_query_never_matches() {
        let tokens = team_tokens(&[Some("Lakers")]);
        assert!(!name_matches(&tokens, ""));
        assert!(!name_matches(&tokens, "   "));
    }
}
