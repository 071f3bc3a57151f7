use chrono::{DateTime, NaiveDate, Utc};
use leagues_api::{BroadcastInfo, Game, League, LiveSituation, Odds, TeamRecord};

#[derive(Debug, Clone)]
pub enum FeedRequest {
    /// Fetch the league's games for a set of dates (today + tomorrow for
    /// the combined feed) in one worker round-trip.
    LoadGames { league: League, dates: Vec<NaiveDate> },
    RefreshSituation {
        league: League,
        date: NaiveDate,
        game_id: String,
        home: String,
        away: String,
    },
    RefreshBroadcasts {
        league: League,
        date: NaiveDate,
        game_id: String,
        home: String,
        away: String,
    },
    LoadMatchupOdds {
        league: League,
        date: NaiveDate,
        game_id: String,
        start_time: DateTime<Utc>,
        home: String,
        away: String,
    },
    LoadRecords { league: League, date: NaiveDate },
}

#[derive(Debug)]
pub enum FeedResponse {
    LoadingStateChanged { loading: bool },
    GamesLoaded { league: League, games: Vec<Game> },
    SituationUpdated { game_id: String, situation: LiveSituation },
    BroadcastsLoaded { game_id: String, broadcasts: BroadcastInfo },
    OddsLoaded { game_id: String, odds: Odds },
    RecordsLoaded { records: Vec<TeamRecord> },
    Error { message: String },
}
