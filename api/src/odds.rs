/// Odds provider raw wire types — the backend proxy relays the bookmaker
/// feed unchanged: a list of events, each with bookmaker quotes over
/// moneyline/spread/total markets.
use crate::normalize::{sides_match, team_tokens};
use crate::{BookmakerQuote, Market, MarketKind, Odds, Outcome};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct OddsEvent {
    pub id: Option<String>,
    pub sport_key: Option<String>,
    pub commence_time: Option<DateTime<Utc>>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    #[serde(default)]
    pub bookmakers: Vec<OddsBookmaker>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OddsBookmaker {
    pub key: Option<String>,
    pub title: Option<String>,
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub markets: Vec<OddsMarket>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OddsMarket {
    pub key: Option<String>, // "h2h" | "spreads" | "totals"
    #[serde(default)]
    pub outcomes: Vec<OddsOutcome>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OddsOutcome {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub point: Option<f64>,
}

// ---------------------------------------------------------------------------
// Mapping: odds wire types → domain
// ---------------------------------------------------------------------------

/// Pick the event for a team pair out of the provider's list and map it.
/// The odds provider names teams by full display name, so the join is the
/// usual token match. Returns an empty `Odds` when no event matches —
/// "no odds posted" is an ordinary outcome, not an error.
pub fn map_matchup(events: &[OddsEvent], home: &str, away: &str) -> Odds {
    let event = events.iter().find(|e| {
        let home_tokens = team_tokens(&[e.home_team.as_deref()]);
        let away_tokens = team_tokens(&[e.away_team.as_deref()]);
        sides_match(&home_tokens, &away_tokens, home, away)
    });
    let Some(event) = event else {
        return Odds::default();
    };

    let quotes = event
        .bookmakers
        .iter()
        .filter_map(map_bookmaker)
        .collect();
    Odds { event_id: event.id.clone(), quotes }
}

fn map_bookmaker(raw: &OddsBookmaker) -> Option<BookmakerQuote> {
    let bookmaker = raw.title.clone().or_else(|| raw.key.clone())?;
    let markets: Vec<Market> = raw.markets.iter().filter_map(map_market).collect();
    if markets.is_empty() {
        return None;
    }
    Some(BookmakerQuote { bookmaker, last_update: raw.last_update, markets })
}

fn map_market(raw: &OddsMarket) -> Option<Market> {
    let kind = match raw.key.as_deref()? {
        "h2h" => MarketKind::Moneyline,
        "spreads" => MarketKind::Spread,
        "totals" => MarketKind::Total,
        _ => return None,
    };
    let outcomes: Vec<Outcome> = raw
        .outcomes
        .iter()
        .filter_map(|o| {
            Some(Outcome {
                name: o.name.clone()?,
                price: o.price?,
                point: o.point,
            })
        })
        .collect();
    if outcomes.is_empty() {
        return None;
    }
    Some(Market { kind, outcomes })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lakers_warriors_odds() -> OddsEvent {
        OddsEvent {
            id: Some("odds-123".into()),
            sport_key: Some("basketball_nba".into()),
            commence_time: None,
            home_team: Some("Los Angeles Lakers".into()),
            away_team: Some("Golden State Warriors".into()),
            bookmakers: vec![OddsBookmaker {
                key: Some("draftkings".into()),
                title: Some("DraftKings".into()),
                last_update: None,
                markets: vec![
                    OddsMarket {
                        key: Some("h2h".into()),
                        outcomes: vec![
                            OddsOutcome { name: Some("Los Angeles Lakers".into()), price: Some(1.83), point: None },
                            OddsOutcome { name: Some("Golden State Warriors".into()), price: Some(2.05), point: None },
                        ],
                    },
                    OddsMarket {
                        key: Some("spreads".into()),
                        outcomes: vec![
                            OddsOutcome { name: Some("Los Angeles Lakers".into()), price: Some(1.91), point: Some(-2.5) },
                            OddsOutcome { name: Some("Golden State Warriors".into()), price: Some(1.91), point: Some(2.5) },
                        ],
                    },
                    // Unknown market keys are skipped, not errors.
                    OddsMarket { key: Some("player_points".into()), outcomes: vec![] },
                ],
            }],
        }
    }

    #[test]
    fn matchup_maps_known_markets() {
        let odds = map_matchup(&[lakers_warriors_odds()], "Lakers", "Warriors");
        assert_eq!(odds.event_id.as_deref(), Some("odds-123"));
        assert_eq!(odds.quotes.len(), 1);
        let quote = &odds.quotes[0];
        assert_eq!(quote.bookmaker, "DraftKings");
        assert_eq!(quote.markets.len(), 2);
        assert_eq!(quote.markets[0].kind, MarketKind::Moneyline);
        assert_eq!(quote.markets[1].kind, MarketKind::Spread);
        assert_eq!(quote.markets[1].outcomes[0].point, Some(-2.5));
    }

    #[test]
    fn unmatched_pair_yields_empty_odds() {
        let odds = map_matchup(&[lakers_warriors_odds()], "Celtics", "Knicks");
        assert!(odds.is_empty());
        assert!(odds.event_id.is_none());
    }

    #[test]
    fn bookmaker_with_no_usable_markets_is_dropped() {
        let mut event = lakers_warriors_odds();
        event.bookmakers[0].markets.retain(|m| m.key.as_deref() == Some("player_points"));
        let odds = map_matchup(&[event], "Lakers", "Warriors");
        assert!(odds.is_empty());
        // The event itself still matched.
        assert_eq!(odds.event_id.as_deref(), Some("odds-123"));
    }
}
