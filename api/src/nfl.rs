/// NFL stats provider raw wire types — games, scoring events, and per-game
/// statistics. The provider nests the fixture under a `game` object with
/// teams/scores as siblings.
use crate::normalize::{classify_status, ordinal_period};
use crate::{
    Game, GameEvent, GameStatus, League, PlayerGameStats, ScoreLine, StatPair, TeamGameStats,
    TeamRef, Venue,
};
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct NflGamesResponse {
    #[serde(default)]
    pub response: Vec<NflFixture>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflFixture {
    pub game: Option<NflGame>,
    pub teams: Option<NflMatchup>,
    pub scores: Option<NflScores>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflGame {
    pub id: Option<u64>,
    pub stage: Option<String>, // "Pre Season", "Regular Season"
    pub week: Option<String>,
    pub date: Option<NflDate>,
    pub venue: Option<NflVenue>,
    pub status: Option<NflStatus>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflDate {
    pub date: Option<String>, // "2026-09-13"
    pub time: Option<String>, // "20:20"
    pub timestamp: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflVenue {
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflStatus {
    pub short: Option<String>, // "NS", "Q2", "HT", "FT", "AOT"
    pub long: Option<String>,
    pub timer: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflMatchup {
    pub home: Option<NflTeam>,
    pub away: Option<NflTeam>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct NflTeam {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflScores {
    pub home: Option<NflScore>,
    pub away: Option<NflScore>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflScore {
    pub quarter_1: Option<u16>,
    pub quarter_2: Option<u16>,
    pub quarter_3: Option<u16>,
    pub quarter_4: Option<u16>,
    pub overtime: Option<u16>,
    pub total: Option<u16>,
}

// ---------------------------------------------------------------------------
// Scoring events
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default)]
pub struct NflEventsResponse {
    #[serde(default)]
    pub response: Vec<NflEvent>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflEvent {
    pub quarter: Option<String>,
    pub minute: Option<String>,
    pub team: Option<NflTeam>,
    pub player: Option<NflEventPlayer>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflEventPlayer {
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Game statistics (teams and players share one response shape)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default)]
pub struct NflStatsResponse {
    #[serde(default)]
    pub response: Vec<NflStatsEntry>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflStatsEntry {
    pub team: Option<NflTeam>,
    #[serde(default)]
    pub statistics: Vec<NflStatWire>,
    #[serde(default)]
    pub players: Vec<NflPlayerStats>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflPlayerStats {
    pub player: Option<NflEventPlayer>,
    #[serde(default)]
    pub statistics: Vec<NflStatWire>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NflStatWire {
    pub name: Option<String>,
    /// Numbers and strings both occur; normalized to string.
    pub value: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Mapping: NFL wire types → domain
// ---------------------------------------------------------------------------

pub fn map_game(raw: &NflFixture) -> Option<Game> {
    let game = raw.game.as_ref()?;
    let id = game.id?.to_string();
    let start_time = game.date.as_ref().and_then(parse_start)?;

    let status_raw = game.status.as_ref();
    // Prefer the long form for classification; the short code fills in when
    // the provider omits it.
    let status_str = status_raw
        .and_then(|s| s.long.as_deref())
        .or_else(|| status_raw.and_then(|s| s.short.as_deref()))
        .unwrap_or_default();
    let (status, went_ot) = classify_status(status_str);

    let (period, clock) = if status.is_live() {
        let period = status_raw
            .and_then(|s| s.short.as_deref())
            .map(ordinal_period);
        let clock = status_raw.and_then(|s| s.timer.clone());
        (period, clock)
    } else {
        (None, None)
    };

    let venue = game.venue.as_ref().map(|v| Venue {
        name: v.name.clone().unwrap_or_else(|| "Unknown".to_owned()),
        city: v.city.clone().unwrap_or_default(),
    });

    Some(Game {
        id,
        league: League::Nfl,
        start_time,
        status,
        went_ot,
        period,
        clock,
        venue,
        home: map_team(raw.teams.as_ref().and_then(|t| t.home.as_ref())),
        away: map_team(raw.teams.as_ref().and_then(|t| t.away.as_ref())),
        home_score: map_score(raw.scores.as_ref().and_then(|s| s.home.as_ref()), status),
        away_score: map_score(raw.scores.as_ref().and_then(|s| s.away.as_ref()), status),
        broadcasts: Vec::new(),
        possession_team_id: None,
    })
}

fn map_team(team: Option<&NflTeam>) -> TeamRef {
    let Some(team) = team else {
        return TeamRef { name: "Unknown".to_owned(), ..TeamRef::default() };
    };
    TeamRef {
        id: team.id.map(|id| id.to_string()).unwrap_or_default(),
        name: team.name.clone().unwrap_or_else(|| "Unknown".to_owned()),
        logo: team.logo.clone(),
        ..TeamRef::default()
    }
}

fn map_score(score: Option<&NflScore>, status: GameStatus) -> ScoreLine {
    let Some(score) = score else {
        return ScoreLine::default();
    };
    let mut periods = vec![score.quarter_1, score.quarter_2, score.quarter_3, score.quarter_4];
    if score.overtime.is_some() {
        periods.push(score.overtime);
    }
    let total = if status == GameStatus::Scheduled { None } else { score.total };
    ScoreLine { periods, total }
}

pub fn map_event(raw: &NflEvent) -> Option<GameEvent> {
    let kind = raw.kind.clone()?;
    Some(GameEvent {
        quarter: raw.quarter.clone().unwrap_or_default(),
        minute: raw.minute.clone().unwrap_or_default(),
        team_id: raw.team.as_ref().and_then(|t| t.id).map(|id| id.to_string()),
        player: raw.player.as_ref().and_then(|p| p.name.clone()),
        kind,
        comment: raw.comment.clone(),
    })
}

pub fn map_team_stats(raw: &NflStatsEntry) -> TeamGameStats {
    TeamGameStats {
        team_id: raw.team.as_ref().and_then(|t| t.id).map(|id| id.to_string()),
        stats: raw.statistics.iter().filter_map(map_stat_pair).collect(),
    }
}

pub fn map_player_stats(raw: &NflStatsEntry) -> Vec<PlayerGameStats> {
    let team_id = raw.team.as_ref().and_then(|t| t.id).map(|id| id.to_string());
    raw.players
        .iter()
        .filter_map(|p| {
            Some(PlayerGameStats {
                player: p.player.as_ref()?.name.clone()?,
                team_id: team_id.clone(),
                stats: p.statistics.iter().filter_map(map_stat_pair).collect(),
            })
        })
        .collect()
}

fn map_stat_pair(raw: &NflStatWire) -> Option<StatPair> {
    let name = raw.name.clone()?;
    let value = match raw.value.as_ref()? {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(StatPair { name, value })
}

fn parse_start(date: &NflDate) -> Option<DateTime<Utc>> {
    if let Some(ts) = date.timestamp {
        return Utc.timestamp_opt(ts, 0).single();
    }
    let day = date.date.as_deref()?;
    let time = date.time.as_deref().unwrap_or("00:00");
    let raw = format!("{day}T{time}:00Z");
    DateTime::parse_from_rfc3339(&raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_fixture() -> NflFixture {
        NflFixture {
            game: Some(NflGame {
                id: Some(7788),
                stage: Some("Regular Season".into()),
                week: Some("Week 2".into()),
                date: Some(NflDate {
                    date: Some("2026-09-20".into()),
                    time: Some("20:20".into()),
                    timestamp: Some(1789936800),
                }),
                venue: Some(NflVenue { name: Some("Arrowhead Stadium".into()), city: Some("Kansas City".into()) }),
                status: Some(NflStatus {
                    short: Some("Q3".into()),
                    long: Some("In Progress".into()),
                    timer: Some("08:12".into()),
                }),
            }),
            teams: Some(NflMatchup {
                home: Some(NflTeam { id: Some(17), name: Some("Kansas City Chiefs".into()), logo: None }),
                away: Some(NflTeam { id: Some(20), name: Some("Buffalo Bills".into()), logo: None }),
            }),
            scores: Some(NflScores {
                home: Some(NflScore {
                    quarter_1: Some(7),
                    quarter_2: Some(10),
                    quarter_3: Some(3),
                    quarter_4: None,
                    overtime: None,
                    total: Some(20),
                }),
                away: Some(NflScore {
                    quarter_1: Some(3),
                    quarter_2: Some(14),
                    quarter_3: Some(0),
                    quarter_4: None,
                    overtime: None,
                    total: Some(17),
                }),
            }),
        }
    }

    #[test]
    fn live_fixture_maps_quarter_and_timer() {
        let game = map_game(&raw_fixture()).unwrap();
        assert_eq!(game.id, "7788");
        assert_eq!(game.league, League::Nfl);
        assert_eq!(game.status, GameStatus::Live);
        assert_eq!(game.period.as_deref(), Some("3rd"));
        assert_eq!(game.clock.as_deref(), Some("08:12"));
        assert_eq!(game.home_score.total, Some(20));
        assert_eq!(game.home_score.periods, vec![Some(7), Some(10), Some(3), None]);
    }

    #[test]
    fn halftime_short_code_classifies() {
        let mut raw = raw_fixture();
        {
            let status = raw.game.as_mut().unwrap().status.as_mut().unwrap();
            status.long = None;
            status.short = Some("HT".into());
        }
        let game = map_game(&raw).unwrap();
        assert_eq!(game.status, GameStatus::Halftime);
    }

    #[test]
    fn overtime_quarter_extends_the_linescore() {
        let mut raw = raw_fixture();
        {
            let status = raw.game.as_mut().unwrap().status.as_mut().unwrap();
            status.long = Some("Finished/After Over Time".into());
            status.short = Some("AOT".into());
        }
        raw.scores.as_mut().unwrap().home.as_mut().unwrap().overtime = Some(6);
        let game = map_game(&raw).unwrap();
        assert_eq!(game.status, GameStatus::Final);
        assert!(game.went_ot);
        assert_eq!(game.home_score.periods.len(), 5);
    }

    #[test]
    fn start_time_falls_back_to_date_and_time() {
        let mut raw = raw_fixture();
        raw.game.as_mut().unwrap().date.as_mut().unwrap().timestamp = None;
        let game = map_game(&raw).unwrap();
        assert_eq!(game.start_time.to_rfc3339(), "2026-09-20T20:20:00+00:00");
    }

    #[test]
    fn fixture_without_game_block_is_dropped() {
        let raw = NflFixture::default();
        assert!(map_game(&raw).is_none());
    }

    #[test]
    fn numeric_stat_values_normalize_to_strings() {
        let entry = NflStatsEntry {
            team: Some(NflTeam { id: Some(17), name: None, logo: None }),
            statistics: vec![
                NflStatWire { name: Some("Total Yards".into()), value: Some(serde_json::json!(412)) },
                NflStatWire { name: Some("Possession".into()), value: Some(serde_json::json!("31:05")) },
                NflStatWire { name: None, value: Some(serde_json::json!(1)) },
            ],
            players: vec![],
        };
        let stats = map_team_stats(&entry);
        assert_eq!(stats.team_id.as_deref(), Some("17"));
        assert_eq!(stats.stats.len(), 2);
        assert_eq!(stats.stats[0].value, "412");
        assert_eq!(stats.stats[1].value, "31:05");
    }

    #[test]
    fn scoring_event_maps_player_and_team() {
        let raw = NflEvent {
            quarter: Some("Q2".into()),
            minute: Some("3:40".into()),
            team: Some(NflTeam { id: Some(17), name: None, logo: None }),
            player: Some(NflEventPlayer { name: Some("P. Mahomes".into()) }),
            kind: Some("TD".into()),
            comment: Some("12 yard pass".into()),
        };
        let event = map_event(&raw).unwrap();
        assert_eq!(event.kind, "TD");
        assert_eq!(event.team_id.as_deref(), Some("17"));
        assert_eq!(event.player.as_deref(), Some("P. Mahomes"));
    }
}
