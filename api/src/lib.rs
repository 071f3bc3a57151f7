pub mod client;
pub mod espn;
pub mod nba;
pub mod news;
pub mod nfl;
pub mod normalize;
pub mod odds;
pub mod teams;

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of any provider's wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum League {
    #[default]
    Nba,
    Nfl,
    SummerLeague,
}

impl League {
    pub fn label(&self) -> &'static str {
        match self {
            League::Nba => "NBA",
            League::Nfl => "NFL",
            League::SummerLeague => "Summer League",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Scheduled,
    Live,
    Halftime,
    Final,
    Postponed,
    Canceled,
    Delayed,
}

impl GameStatus {
    /// Live and Halftime are the states subject to situation polling.
    pub fn is_live(&self) -> bool {
        matches!(self, GameStatus::Live | GameStatus::Halftime)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Venue {
    pub name: String,
    pub city: String,
}

#[derive(Debug, Clone, Default)]
pub struct TeamRef {
    pub id: String,
    pub name: String, // "Los Angeles Lakers"
    pub logo: Option<String>,
    /// Alternate "light" logo variant for dark backgrounds.
    pub logo_light: Option<String>,
    pub color: Option<String>,
    pub secondary_color: Option<String>,
    /// Win-loss summary ("12-4"), refreshed independently of game fetches.
    pub record: Option<String>,
}

/// Per-period score breakdown plus running total. `total` is None while the
/// game is still Scheduled.
#[derive(Debug, Clone, Default)]
pub struct ScoreLine {
    pub periods: Vec<Option<u16>>,
    pub total: Option<u16>,
}

#[derive(Debug, Clone, Default)]
pub struct Game {
    pub id: String,
    pub league: League,
    pub start_time: DateTime<Utc>,
    pub status: GameStatus,
    /// Orthogonal to status: set when the game went to overtime.
    pub went_ot: bool,
    /// Display-normalized period ("1st".."4th", "OT"). None unless live.
    pub period: Option<String>,
    /// Remaining time in the current period. None unless live.
    pub clock: Option<String>,
    pub venue: Option<Venue>,
    pub home: TeamRef,
    pub away: TeamRef,
    pub home_score: ScoreLine,
    pub away_score: ScoreLine,
    /// Ordered broadcast network names, possibly empty.
    pub broadcasts: Vec<String>,
    pub possession_team_id: Option<String>,
}

impl Game {
    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }

    /// Human-facing status label: "Final/OT", "Final", "Halftime",
    /// "2nd 4:31" while live, or the schedule-state wording.
    pub fn status_label(&self) -> String {
        match self.status {
            GameStatus::Final if self.went_ot => "Final/OT".to_owned(),
            GameStatus::Final => "Final".to_owned(),
            GameStatus::Halftime => "Halftime".to_owned(),
            GameStatus::Live => match (&self.period, &self.clock) {
                (Some(p), Some(c)) => format!("{p} {c}"),
                (Some(p), None) => p.clone(),
                _ => "Live".to_owned(),
            },
            GameStatus::Scheduled => "Scheduled".to_owned(),
            GameStatus::Postponed => "Postponed".to_owned(),
            GameStatus::Canceled => "Canceled".to_owned(),
            GameStatus::Delayed => "Delayed".to_owned(),
        }
    }
}

/// Broadcast networks for one game, matched by date + team pair — the
/// broadcast provider and the stats providers share no game identifier.
#[derive(Debug, Clone, Default)]
pub struct BroadcastInfo {
    pub names: Vec<String>,
}

/// Live in-game situation from the scoreboard provider. Football carries
/// down-and-distance; basketball only possession.
#[derive(Debug, Clone, Default)]
pub struct LiveSituation {
    pub possession_team_id: Option<String>,
    pub down_distance: Option<String>,
    pub last_play: Option<String>,
    pub home_timeouts: Option<u8>,
    pub away_timeouts: Option<u8>,
}

// ---------------------------------------------------------------------------
// Odds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketKind {
    Moneyline,
    Spread,
    Total,
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub name: String,
    pub price: f64,
    /// Spread/total line; None for moneyline outcomes.
    pub point: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Market {
    pub kind: MarketKind,
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone)]
pub struct BookmakerQuote {
    pub bookmaker: String,
    pub last_update: Option<DateTime<Utc>>,
    pub markets: Vec<Market>,
}

#[derive(Debug, Clone, Default)]
pub struct Odds {
    /// Provider-side event id, when the odds provider supplied one.
    pub event_id: Option<String>,
    pub quotes: Vec<BookmakerQuote>,
}

impl Odds {
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Standings, rosters, media
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct TeamRecord {
    pub team_id: String,
    pub summary: String, // "12-4"
}

#[derive(Debug, Clone, Default)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub team_id: Option<String>,
    pub position: Option<String>,
    pub jersey: Option<String>,
}

/// One player's line from a game statistics endpoint.
#[derive(Debug, Clone, Default)]
pub struct PlayerStatLine {
    pub player: String,
    pub team_id: Option<String>,
    pub minutes: Option<String>,
    pub points: Option<u16>,
    pub rebounds: Option<u16>,
    pub assists: Option<u16>,
}

/// One name/value pair from a statistics endpoint. The NFL provider's stat
/// names vary by season, so they pass through untyped.
#[derive(Debug, Clone, Default)]
pub struct StatPair {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct TeamGameStats {
    pub team_id: Option<String>,
    pub stats: Vec<StatPair>,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerGameStats {
    pub player: String,
    pub team_id: Option<String>,
    pub stats: Vec<StatPair>,
}

/// A scoring event from the NFL play feed.
#[derive(Debug, Clone, Default)]
pub struct GameEvent {
    pub quarter: String,
    pub minute: String,
    pub team_id: Option<String>,
    pub player: Option<String>,
    pub kind: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub source: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Gif {
    pub id: String,
    pub title: String,
    pub url: String,
}
