/// ESPN scoreboard raw wire types — serde shapes for deserializing
/// scoreboard responses. This provider keys teams by abbreviation, not by
/// the stats providers' numeric ids, so every join goes through the team
/// cross-reference (with token matching as the fallback).
use crate::normalize::{sides_match, team_tokens};
use crate::{teams, BroadcastInfo, League, LiveSituation, TeamRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    pub id: Option<String>,
    pub name: Option<String>,
    pub date: Option<String>, // ISO 8601
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    pub competitors: Option<Vec<EspnCompetitor>>,
    pub broadcasts: Option<Vec<EspnBroadcast>>,
    pub situation: Option<EspnSituation>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnCompetitor {
    pub id: Option<String>,
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    pub score: Option<String>, // ESPN sends scores as strings
    pub records: Option<Vec<EspnRecord>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnTeam {
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "shortDisplayName")]
    pub short_display_name: Option<String>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "alternateColor")]
    pub alternate_color: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnRecord {
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub summary: Option<String>, // "12-4"
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnBroadcast {
    pub names: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnSituation {
    /// Competitor/team id of the side with possession.
    pub possession: Option<String>,
    #[serde(rename = "downDistanceText")]
    pub down_distance_text: Option<String>,
    #[serde(rename = "lastPlay")]
    pub last_play: Option<EspnLastPlay>,
    #[serde(rename = "homeTimeouts")]
    pub home_timeouts: Option<u8>,
    #[serde(rename = "awayTimeouts")]
    pub away_timeouts: Option<u8>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnLastPlay {
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// Matching + mapping: scoreboard events → broadcast / situation / records
// ---------------------------------------------------------------------------

/// Find the scoreboard event for a home/away pair. Exact join first: both
/// queried names resolve through the cross-reference table and the event's
/// abbreviations match. Token matching is the fallback for names the table
/// does not carry. First event in provider order wins.
pub fn find_event<'a>(
    events: &'a [EspnEvent],
    league: League,
    home: &str,
    away: &str,
) -> Option<&'a EspnEvent> {
    let home_entry = teams::resolve(league, home);
    let away_entry = teams::resolve(league, away);

    events.iter().find(|event| {
        let Some((home_side, away_side)) = split_sides(event) else {
            return false;
        };
        if let (Some(h), Some(a)) = (home_entry, away_entry) {
            let exact = competitor_abbrev(home_side) == Some(h.abbrev)
                && competitor_abbrev(away_side) == Some(a.abbrev);
            if exact {
                return true;
            }
        }
        sides_match(
            &competitor_tokens(home_side),
            &competitor_tokens(away_side),
            home,
            away,
        )
    })
}

/// Broadcast networks for one event, flattened in provider order.
pub fn map_broadcasts(event: &EspnEvent) -> BroadcastInfo {
    let names = event
        .competitions
        .as_deref()
        .unwrap_or_default()
        .iter()
        .flat_map(|c| c.broadcasts.iter().flatten())
        .flat_map(|b| b.names.iter().flatten())
        .cloned()
        .collect();
    BroadcastInfo { names }
}

/// Live situation block. The possession id is translated from the
/// scoreboard's competitor id to the internal team id when the competitor's
/// abbreviation resolves through the cross-reference.
pub fn map_situation(event: &EspnEvent, league: League) -> LiveSituation {
    let competition = event.competitions.as_deref().unwrap_or_default().first();
    let Some(competition) = competition else {
        return LiveSituation::default();
    };
    let Some(situation) = competition.situation.as_ref() else {
        return LiveSituation::default();
    };

    let possession_team_id = situation.possession.as_deref().and_then(|poss_id| {
        let competitor = competition
            .competitors
            .iter()
            .flatten()
            .find(|c| c.id.as_deref() == Some(poss_id))?;
        let abbrev = competitor.team.as_ref()?.abbreviation.as_deref()?;
        teams::resolve(league, abbrev).map(|entry| entry.id.to_owned())
    });

    LiveSituation {
        possession_team_id,
        down_distance: situation.down_distance_text.clone(),
        last_play: situation.last_play.as_ref().and_then(|p| p.text.clone()),
        home_timeouts: situation.home_timeouts,
        away_timeouts: situation.away_timeouts,
    }
}

/// Win-loss records for every team on the scoreboard, keyed by internal id.
/// Competitors whose abbreviation cannot be resolved are skipped.
pub fn map_records(events: &[EspnEvent], league: League) -> Vec<TeamRecord> {
    events
        .iter()
        .flat_map(|e| e.competitions.iter().flatten())
        .flat_map(|c| c.competitors.iter().flatten())
        .filter_map(|competitor| {
            let team = competitor.team.as_ref()?;
            let abbrev = team.abbreviation.as_deref()?;
            let entry = teams::resolve(league, abbrev)?;
            let summary = competitor
                .records
                .iter()
                .flatten()
                .find(|r| r.record_type.as_deref() == Some("total"))
                .or_else(|| competitor.records.iter().flatten().next())?
                .summary
                .clone()?;
            Some(TeamRecord { team_id: entry.id.to_owned(), summary })
        })
        .collect()
}

fn split_sides(event: &EspnEvent) -> Option<(&EspnCompetitor, &EspnCompetitor)> {
    let competitors = event
        .competitions
        .as_deref()
        .unwrap_or_default()
        .first()?
        .competitors
        .as_deref()?;
    let home = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("home"))
        .or_else(|| competitors.first())?;
    let away = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("away"))
        .or_else(|| competitors.get(1))?;
    Some((home, away))
}

fn competitor_abbrev(c: &EspnCompetitor) -> Option<&str> {
    c.team.as_ref()?.abbreviation.as_deref()
}

fn competitor_tokens(c: &EspnCompetitor) -> Vec<String> {
    let Some(team) = c.team.as_ref() else {
        return Vec::new();
    };
    team_tokens(&[
        team.abbreviation.as_deref(),
        team.display_name.as_deref(),
        team.short_display_name.as_deref(),
        team.name.as_deref(),
    ])
}
