/// NBA stats provider raw wire types — serde shapes for the games, players,
/// and statistics endpoints. Everything is optional on the wire; the mappers
/// substitute defaults so one sparse record never fails a batch.
use crate::normalize::{classify_status, ordinal_period};
use crate::{
    Game, GameStatus, League, Player, PlayerStatLine, ScoreLine, StatPair, TeamGameStats, TeamRef,
    Venue,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct NbaGamesResponse {
    #[serde(default)]
    pub response: Vec<NbaGame>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaGame {
    pub id: Option<u64>,
    pub date: Option<NbaDate>,
    pub status: Option<NbaStatus>,
    pub periods: Option<NbaPeriods>,
    pub arena: Option<NbaArena>,
    pub teams: Option<NbaMatchup>,
    pub scores: Option<NbaScores>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaDate {
    pub start: Option<String>, // ISO 8601
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaStatus {
    pub clock: Option<String>,
    pub halftime: Option<bool>,
    pub long: Option<String>, // "Not Started", "In Play", "Finished"
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaPeriods {
    pub current: Option<u8>,
    pub total: Option<u8>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaArena {
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaMatchup {
    pub home: Option<NbaTeam>,
    pub visitors: Option<NbaTeam>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct NbaTeam {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub code: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaScores {
    pub home: Option<NbaScore>,
    pub visitors: Option<NbaScore>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaScore {
    pub win: Option<u16>,
    pub loss: Option<u16>,
    /// The provider sends per-quarter points as strings.
    #[serde(default)]
    pub linescore: Vec<String>,
    pub points: Option<u16>,
}

// ---------------------------------------------------------------------------
// Players / statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default)]
pub struct NbaPlayersResponse {
    #[serde(default)]
    pub response: Vec<NbaPlayer>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaPlayer {
    pub id: Option<u64>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub leagues: Option<NbaPlayerLeagues>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaPlayerLeagues {
    pub standard: Option<NbaPlayerLeague>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaPlayerLeague {
    pub jersey: Option<u16>,
    pub pos: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaStatisticsResponse {
    #[serde(default)]
    pub response: Vec<NbaStatLine>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaGameStatsResponse {
    #[serde(default)]
    pub response: Vec<NbaTeamStatsEntry>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaTeamStatsEntry {
    pub team: Option<NbaTeam>,
    #[serde(default)]
    pub statistics: Vec<NbaTeamStatLine>,
}

/// The provider returns one totals object per team; only the headline
/// numbers are carried through.
#[derive(Debug, Deserialize, Default)]
pub struct NbaTeamStatLine {
    pub points: Option<u16>,
    #[serde(rename = "totReb")]
    pub tot_reb: Option<u16>,
    pub assists: Option<u16>,
    pub steals: Option<u16>,
    pub blocks: Option<u16>,
    pub turnovers: Option<u16>,
    pub fgp: Option<String>,
    pub tpp: Option<String>,
    pub ftp: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct NbaStatLine {
    pub player: Option<NbaPlayer>,
    pub team: Option<NbaTeam>,
    pub min: Option<String>,
    pub points: Option<u16>,
    #[serde(rename = "totReb")]
    pub tot_reb: Option<u16>,
    pub assists: Option<u16>,
}

// ---------------------------------------------------------------------------
// Mapping: NBA wire types → domain
// ---------------------------------------------------------------------------

/// Map one provider game. Returns None only for structurally unusable
/// records (no id or unparseable start instant); every other gap defaults.
pub fn map_game(raw: &NbaGame, league: League) -> Option<Game> {
    let id = raw.id?.to_string();
    let start_time = raw
        .date
        .as_ref()
        .and_then(|d| d.start.as_deref())
        .and_then(parse_instant)?;

    let status_long = raw
        .status
        .as_ref()
        .and_then(|s| s.long.as_deref())
        .unwrap_or_default();
    let (mut status, went_ot) = classify_status(status_long);
    // The provider carries halftime as a separate flag alongside the
    // status string; the flag wins when set.
    if raw.status.as_ref().and_then(|s| s.halftime) == Some(true) {
        status = GameStatus::Halftime;
    }

    let (period, clock) = if status.is_live() {
        let period = raw
            .periods
            .as_ref()
            .and_then(|p| p.current)
            .map(|p| ordinal_period(&p.to_string()));
        let clock = raw.status.as_ref().and_then(|s| s.clock.clone());
        (period, clock)
    } else {
        (None, None)
    };

    let venue = raw.arena.as_ref().map(|a| Venue {
        name: a.name.clone().unwrap_or_else(|| "Unknown".to_owned()),
        city: a.city.clone().unwrap_or_default(),
    });

    let home_raw = raw.teams.as_ref().and_then(|t| t.home.as_ref());
    let away_raw = raw.teams.as_ref().and_then(|t| t.visitors.as_ref());
    let home_score_raw = raw.scores.as_ref().and_then(|s| s.home.as_ref());
    let away_score_raw = raw.scores.as_ref().and_then(|s| s.visitors.as_ref());

    Some(Game {
        id,
        league,
        start_time,
        status,
        went_ot,
        period,
        clock,
        venue,
        home: map_team(home_raw, home_score_raw),
        away: map_team(away_raw, away_score_raw),
        home_score: map_score(home_score_raw, status),
        away_score: map_score(away_score_raw, status),
        broadcasts: Vec::new(), // joined later from the scoreboard provider
        possession_team_id: None,
    })
}

fn map_team(team: Option<&NbaTeam>, score: Option<&NbaScore>) -> TeamRef {
    let record = score.and_then(|s| match (s.win, s.loss) {
        (Some(w), Some(l)) => Some(format!("{w}-{l}")),
        _ => None,
    });
    let Some(team) = team else {
        return TeamRef { name: "Unknown".to_owned(), record, ..TeamRef::default() };
    };
    TeamRef {
        id: team.id.map(|id| id.to_string()).unwrap_or_default(),
        name: team
            .name
            .clone()
            .or_else(|| team.nickname.clone())
            .unwrap_or_else(|| "Unknown".to_owned()),
        logo: team.logo.clone(),
        logo_light: None,
        color: None,
        secondary_color: None,
        record,
    }
}

fn map_score(score: Option<&NbaScore>, status: GameStatus) -> ScoreLine {
    let Some(score) = score else {
        return ScoreLine::default();
    };
    let periods = score
        .linescore
        .iter()
        .map(|p| p.trim().parse::<u16>().ok())
        .collect();
    // Totals only exist once the game has started.
    let total = if status == GameStatus::Scheduled { None } else { score.points };
    ScoreLine { periods, total }
}

pub fn map_player(raw: &NbaPlayer, team_id: Option<&str>) -> Option<Player> {
    let id = raw.id?.to_string();
    let name = match (raw.firstname.as_deref(), raw.lastname.as_deref()) {
        (Some(f), Some(l)) => format!("{f} {l}"),
        (Some(f), None) => f.to_owned(),
        (None, Some(l)) => l.to_owned(),
        (None, None) => return None,
    };
    let league = raw.leagues.as_ref().and_then(|l| l.standard.as_ref());
    Some(Player {
        id,
        name,
        team_id: team_id.map(str::to_owned),
        position: league.and_then(|l| l.pos.clone()),
        jersey: league.and_then(|l| l.jersey).map(|j| j.to_string()),
    })
}

pub fn map_stat_line(raw: &NbaStatLine) -> Option<PlayerStatLine> {
    let player = raw.player.as_ref()?;
    let name = match (player.firstname.as_deref(), player.lastname.as_deref()) {
        (Some(f), Some(l)) => format!("{f} {l}"),
        _ => return None,
    };
    Some(PlayerStatLine {
        player: name,
        team_id: raw.team.as_ref().and_then(|t| t.id).map(|id| id.to_string()),
        minutes: raw.min.clone(),
        points: raw.points,
        rebounds: raw.tot_reb,
        assists: raw.assists,
    })
}

pub fn map_team_stats(raw: &NbaTeamStatsEntry) -> TeamGameStats {
    let mut stats = Vec::new();
    if let Some(line) = raw.statistics.first() {
        let mut push_count = |name: &str, value: Option<u16>| {
            if let Some(v) = value {
                stats.push(StatPair { name: name.to_owned(), value: v.to_string() });
            }
        };
        push_count("Points", line.points);
        push_count("Rebounds", line.tot_reb);
        push_count("Assists", line.assists);
        push_count("Steals", line.steals);
        push_count("Blocks", line.blocks);
        push_count("Turnovers", line.turnovers);
        for (name, value) in [("FG%", &line.fgp), ("3P%", &line.tpp), ("FT%", &line.ftp)] {
            if let Some(v) = value {
                stats.push(StatPair { name: name.to_owned(), value: v.clone() });
            }
        }
    }
    TeamGameStats {
        team_id: raw.team.as_ref().and_then(|t| t.id).map(|id| id.to_string()),
        stats,
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
