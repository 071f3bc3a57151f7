use crate::espn::{self, ScoreboardResponse};
use crate::nba::{
    self, NbaGameStatsResponse, NbaGamesResponse, NbaPlayersResponse, NbaStatisticsResponse,
};
use crate::news::{self, GiphyResponse, NewsResponse};
use crate::nfl::{self, NflEventsResponse, NflGamesResponse, NflStatsResponse};
use crate::odds::{self, OddsEvent};
use crate::{
    BroadcastInfo, Game, GameEvent, Gif, League, LiveSituation, NewsArticle, Odds, Player,
    PlayerGameStats, PlayerStatLine, TeamGameStats, TeamRecord,
};
use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const NBA_BASE: &str = "https://api-nba-v1.p.rapidapi.com";
const NFL_BASE: &str = "https://api-american-football.p.rapidapi.com";
const ESPN_BASE: &str = "https://site.api.espn.com/apis/site/v2/sports";
const BACKEND_BASE: &str = "https://backend.scorefeed.app";
const GIPHY_BASE: &str = "https://api.giphy.com/v1/gifs";

const KEY_HEADER: &str = "x-rapidapi-key";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Multi-provider sports data client. One method per logical query; every
/// response is normalized before it leaves this crate, so callers only ever
/// see domain types.
#[derive(Debug, Clone)]
pub struct SportsApi {
    client: Client,
    timeout: Duration,
    nba_base: String,
    nfl_base: String,
    espn_base: String,
    backend_base: String,
    giphy_base: String,
    api_key: Option<String>,
    giphy_key: Option<String>,
}

impl Default for SportsApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("scorefeed/0.1 (game feed aggregator)")
                .build()
                .unwrap_or_default(),
            timeout: DEFAULT_TIMEOUT,
            nba_base: NBA_BASE.to_owned(),
            nfl_base: NFL_BASE.to_owned(),
            espn_base: ESPN_BASE.to_owned(),
            backend_base: BACKEND_BASE.to_owned(),
            giphy_base: GIPHY_BASE.to_owned(),
            api_key: None,
            giphy_key: None,
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// Transport failure — no response from the upstream.
    Network(reqwest::Error, String),
    /// Non-2xx with whatever message the provider supplied.
    Upstream { status: u16, message: String, url: String },
    Timeout(String),
    Parsing(reqwest::Error, String),
    /// Business-level miss: the queried matchup does not exist upstream.
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Upstream { status, message, url } => {
                write!(f, "Upstream error {status} for {url}: {message}")
            }
            ApiError::Timeout(url) => write!(f, "Timed out waiting for {url}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl SportsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read API keys (and an optional backend override) from the
    /// environment: `SCOREFEED_RAPIDAPI_KEY`, `SCOREFEED_GIPHY_KEY`,
    /// `SCOREFEED_BACKEND_URL`.
    pub fn from_env() -> Self {
        let mut api = Self::default();
        api.api_key = std::env::var("SCOREFEED_RAPIDAPI_KEY").ok().filter(|k| !k.is_empty());
        api.giphy_key = std::env::var("SCOREFEED_GIPHY_KEY").ok().filter(|k| !k.is_empty());
        if let Ok(base) = std::env::var("SCOREFEED_BACKEND_URL")
            && !base.trim().is_empty()
        {
            api.backend_base = base.trim_end_matches('/').to_owned();
        }
        api
    }

    // -----------------------------------------------------------------------
    // NBA stats provider
    // -----------------------------------------------------------------------

    /// Games for one calendar date (the provider's date is UTC-based).
    pub async fn fetch_nba_games(&self, date: NaiveDate) -> ApiResult<Vec<Game>> {
        let url = format!("{}/games", self.nba_base);
        let query = [("date", date.format("%Y-%m-%d").to_string())];
        let raw: NbaGamesResponse = self.get(&url, &query, true).await?;
        Ok(collect_games(&raw.response, |g| nba::map_game(g, League::Nba)))
    }

    /// Summer League games run through the same provider under a separate
    /// league parameter.
    pub async fn fetch_summer_league_games(&self, date: NaiveDate) -> ApiResult<Vec<Game>> {
        let url = format!("{}/games", self.nba_base);
        let query = [
            ("date", date.format("%Y-%m-%d").to_string()),
            ("league", "vegas".to_owned()),
        ];
        let raw: NbaGamesResponse = self.get(&url, &query, true).await?;
        Ok(collect_games(&raw.response, |g| nba::map_game(g, League::SummerLeague)))
    }

    /// Full season schedule for one team.
    pub async fn fetch_nba_team_games(&self, team_id: &str, season: &str) -> ApiResult<Vec<Game>> {
        let url = format!("{}/games", self.nba_base);
        let query = [("team", team_id.to_owned()), ("season", season.to_owned())];
        let raw: NbaGamesResponse = self.get(&url, &query, true).await?;
        Ok(collect_games(&raw.response, |g| nba::map_game(g, League::Nba)))
    }

    pub async fn fetch_nba_players(&self, team_id: &str, season: &str) -> ApiResult<Vec<Player>> {
        let url = format!("{}/players", self.nba_base);
        let query = [("team", team_id.to_owned()), ("season", season.to_owned())];
        let raw: NbaPlayersResponse = self.get(&url, &query, true).await?;
        Ok(raw
            .response
            .iter()
            .filter_map(|p| nba::map_player(p, Some(team_id)))
            .collect())
    }

    /// Per-player lines for one game.
    pub async fn fetch_nba_player_stats(&self, game_id: &str) -> ApiResult<Vec<PlayerStatLine>> {
        let url = format!("{}/players/statistics", self.nba_base);
        let query = [("game", game_id.to_owned())];
        let raw: NbaStatisticsResponse = self.get(&url, &query, true).await?;
        Ok(raw.response.iter().filter_map(nba::map_stat_line).collect())
    }

    /// Team totals for one game.
    pub async fn fetch_nba_game_team_stats(&self, game_id: &str) -> ApiResult<Vec<TeamGameStats>> {
        let url = format!("{}/games/statistics", self.nba_base);
        let query = [("id", game_id.to_owned())];
        let raw: NbaGameStatsResponse = self.get(&url, &query, true).await?;
        Ok(raw.response.iter().map(nba::map_team_stats).collect())
    }

    // -----------------------------------------------------------------------
    // NFL stats provider
    // -----------------------------------------------------------------------

    pub async fn fetch_nfl_games(&self, date: NaiveDate, season: &str) -> ApiResult<Vec<Game>> {
        let url = format!("{}/games", self.nfl_base);
        let query = [
            ("date", date.format("%Y-%m-%d").to_string()),
            ("league", "1".to_owned()),
            ("season", season.to_owned()),
        ];
        let raw: NflGamesResponse = self.get(&url, &query, true).await?;
        Ok(collect_games(&raw.response, nfl::map_game))
    }

    pub async fn fetch_nfl_team_games(&self, team_id: &str, season: &str) -> ApiResult<Vec<Game>> {
        let url = format!("{}/games", self.nfl_base);
        let query = [
            ("team", team_id.to_owned()),
            ("league", "1".to_owned()),
            ("season", season.to_owned()),
        ];
        let raw: NflGamesResponse = self.get(&url, &query, true).await?;
        Ok(collect_games(&raw.response, nfl::map_game))
    }

    /// Scoring events (touchdowns, field goals, safeties) for one game.
    pub async fn fetch_nfl_game_events(&self, game_id: &str) -> ApiResult<Vec<GameEvent>> {
        let url = format!("{}/games/events", self.nfl_base);
        let query = [("id", game_id.to_owned())];
        let raw: NflEventsResponse = self.get(&url, &query, true).await?;
        Ok(raw.response.iter().filter_map(nfl::map_event).collect())
    }

    pub async fn fetch_nfl_game_team_stats(&self, game_id: &str) -> ApiResult<Vec<TeamGameStats>> {
        let url = format!("{}/games/statistics/teams", self.nfl_base);
        let query = [("id", game_id.to_owned())];
        let raw: NflStatsResponse = self.get(&url, &query, true).await?;
        Ok(raw.response.iter().map(nfl::map_team_stats).collect())
    }

    pub async fn fetch_nfl_game_player_stats(
        &self,
        game_id: &str,
    ) -> ApiResult<Vec<PlayerGameStats>> {
        let url = format!("{}/games/statistics/players", self.nfl_base);
        let query = [("id", game_id.to_owned())];
        let raw: NflStatsResponse = self.get(&url, &query, true).await?;
        Ok(raw.response.iter().flat_map(nfl::map_player_stats).collect())
    }

    // -----------------------------------------------------------------------
    // ESPN scoreboard: broadcasts, live situation, records
    // -----------------------------------------------------------------------

    /// Broadcast networks for a matchup, joined by date + team pair (the
    /// scoreboard shares no game id with the stats providers). A pair with
    /// no scoreboard event that day is a `NotFound`, not an empty list.
    pub async fn fetch_broadcasts(
        &self,
        league: League,
        date: NaiveDate,
        home: &str,
        away: &str,
    ) -> ApiResult<BroadcastInfo> {
        let events = self.scoreboard(league, date).await?;
        let event = espn::find_event(&events, league, home, away).ok_or_else(|| {
            ApiError::NotFound(format!("no scoreboard event for {away} @ {home} on {date}"))
        })?;
        Ok(espn::map_broadcasts(event))
    }

    /// Live situation (possession, down-and-distance) for a matchup.
    pub async fn fetch_situation(
        &self,
        league: League,
        date: NaiveDate,
        home: &str,
        away: &str,
    ) -> ApiResult<LiveSituation> {
        let events = self.scoreboard(league, date).await?;
        let event = espn::find_event(&events, league, home, away).ok_or_else(|| {
            ApiError::NotFound(format!("no scoreboard event for {away} @ {home} on {date}"))
        })?;
        Ok(espn::map_situation(event, league))
    }

    /// Win-loss records for every team on that day's scoreboard, keyed by
    /// internal team id.
    pub async fn fetch_team_records(
        &self,
        league: League,
        date: NaiveDate,
    ) -> ApiResult<Vec<TeamRecord>> {
        let events = self.scoreboard(league, date).await?;
        Ok(espn::map_records(&events, league))
    }

    async fn scoreboard(&self, league: League, date: NaiveDate) -> ApiResult<Vec<espn::EspnEvent>> {
        let url = format!("{}/{}/scoreboard", self.espn_base, espn_path(league));
        let query = [("dates", date.format("%Y%m%d").to_string())];
        let raw: ScoreboardResponse = self.get(&url, &query, false).await?;
        Ok(raw.events.unwrap_or_default())
    }

    // -----------------------------------------------------------------------
    // Odds (via the first-party backend proxy)
    // -----------------------------------------------------------------------

    pub async fn fetch_upcoming_odds(
        &self,
        league: League,
        date: NaiveDate,
        home: &str,
        away: &str,
    ) -> ApiResult<Odds> {
        let url = format!("{}/api/odds/{}/upcoming", self.backend_base, odds_path(league));
        let query = [
            ("date", date.format("%Y-%m-%d").to_string()),
            ("team1", home.to_owned()),
            ("team2", away.to_owned()),
            ("markets", "h2h,spreads,totals".to_owned()),
            ("regions", "us".to_owned()),
            ("oddsFormat", "decimal".to_owned()),
        ];
        let raw: Vec<OddsEvent> = self.get(&url, &query, false).await?;
        Ok(odds::map_matchup(&raw, home, away))
    }

    pub async fn fetch_historical_odds(
        &self,
        league: League,
        timestamp: DateTime<Utc>,
        home: &str,
        away: &str,
    ) -> ApiResult<Odds> {
        let url = format!("{}/api/odds/{}/historical", self.backend_base, odds_path(league));
        let query = [
            ("timestamp", timestamp.to_rfc3339()),
            ("team1", home.to_owned()),
            ("team2", away.to_owned()),
            ("markets", "h2h,spreads,totals".to_owned()),
            ("regions", "us".to_owned()),
            ("oddsFormat", "decimal".to_owned()),
        ];
        let raw: Vec<OddsEvent> = self.get(&url, &query, false).await?;
        Ok(odds::map_matchup(&raw, home, away))
    }

    // -----------------------------------------------------------------------
    // News / media
    // -----------------------------------------------------------------------

    pub async fn fetch_news(&self, topic: &str) -> ApiResult<Vec<NewsArticle>> {
        let url = format!("{}/api/news", self.backend_base);
        let query = [("q", topic.to_owned())];
        let raw: NewsResponse = self.get(&url, &query, false).await?;
        Ok(raw.articles.iter().filter_map(news::map_article).collect())
    }

    pub async fn search_gifs(&self, query: &str, limit: u8) -> ApiResult<Vec<Gif>> {
        let url = format!("{}/search", self.giphy_base);
        let params = [
            ("api_key", self.giphy_key.clone().unwrap_or_default()),
            ("q", query.to_owned()),
            ("limit", limit.to_string()),
        ];
        let raw: GiphyResponse = self.get(&url, &params, false).await?;
        Ok(raw.data.iter().filter_map(news::map_gif).collect())
    }

    // -----------------------------------------------------------------------

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        keyed: bool,
    ) -> ApiResult<T> {
        let mut request = self.client.get(url).timeout(self.timeout).query(query);
        if keyed && let Some(key) = self.api_key.as_deref() {
            request = request.header(KEY_HEADER, key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout(url.to_owned())
            } else {
                ApiError::Network(e, url.to_owned())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
                url: url.to_owned(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout(url.to_owned())
                } else {
                    ApiError::Parsing(e, url.to_owned())
                }
            })
    }
}

/// One malformed upstream record drops out of the batch instead of failing
/// it, with a warning so a blanked feed is diagnosable.
fn collect_games<T>(raw: &[T], map: impl Fn(&T) -> Option<Game>) -> Vec<Game> {
    let games: Vec<Game> = raw.iter().filter_map(map).collect();
    let dropped = raw.len() - games.len();
    if dropped > 0 {
        warn!("dropped {dropped} malformed game record(s)");
    }
    games
}

fn espn_path(league: League) -> &'static str {
    match league {
        League::Nba | League::SummerLeague => "basketball/nba",
        League::Nfl => "football/nfl",
    }
}

fn odds_path(league: League) -> &'static str {
    match league {
        League::Nba | League::SummerLeague => "nba",
        League::Nfl => "nfl",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameStatus;
    use mockito::Matcher;

    fn test_api(base: &str) -> SportsApi {
        SportsApi {
            nba_base: base.to_owned(),
            nfl_base: base.to_owned(),
            espn_base: base.to_owned(),
            backend_base: base.to_owned(),
            giphy_base: base.to_owned(),
            api_key: Some("test-key".to_owned()),
            giphy_key: Some("giphy-key".to_owned()),
            timeout: Duration::from_secs(5),
            ..SportsApi::default()
        }
    }

    const NBA_GAMES_BODY: &str = r#"{
        "response": [
            {
                "id": 12021,
                "date": {"start": "2026-01-15T03:00:00.000Z"},
                "status": {"clock": null, "halftime": false, "long": "Finished"},
                "periods": {"current": 4, "total": 4},
                "arena": {"name": "Crypto.com Arena", "city": "Los Angeles"},
                "teams": {
                    "home": {"id": 17, "name": "Los Angeles Lakers", "nickname": "Lakers", "code": "LAL"},
                    "visitors": {"id": 11, "name": "Golden State Warriors", "nickname": "Warriors", "code": "GSW"}
                },
                "scores": {
                    "home": {"win": 24, "loss": 18, "linescore": ["28", "31", "25", "26"], "points": 110},
                    "visitors": {"win": 30, "loss": 12, "linescore": ["25", "30", "27", "26"], "points": 108}
                }
            },
            {
                "date": {"start": "2026-01-15T03:30:00.000Z"},
                "status": {"long": "Not Started"}
            }
        ]
    }"#;

    #[tokio::test]
    async fn nba_games_map_and_malformed_records_drop() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/games")
            .match_query(Matcher::UrlEncoded("date".into(), "2026-01-15".into()))
            .match_header(KEY_HEADER, "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(NBA_GAMES_BODY)
            .create_async()
            .await;

        let api = test_api(&server.url());
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let games = api.fetch_nba_games(date).await.unwrap();

        mock.assert_async().await;
        // The second record has no id and is dropped, not an error.
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].status, GameStatus::Final);
        assert_eq!(games[0].home_score.total, Some(110));
    }

    #[tokio::test]
    async fn non_2xx_surfaces_as_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/games")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("rate limited")
            .create_async()
            .await;

        let api = test_api(&server.url());
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let err = api.fetch_nba_games(date).await.unwrap_err();
        match err {
            ApiError::Upstream { status, message, .. } => {
                assert_eq!(status, 503);
                assert_eq!(message, "rate limited");
            }
            other => panic!("expected Upstream, got {other}"),
        }
    }

    #[tokio::test]
    async fn garbage_body_surfaces_as_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/games")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let api = test_api(&server.url());
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let err = api.fetch_nba_games(date).await.unwrap_err();
        assert!(matches!(err, ApiError::Parsing(..)), "got {err}");
    }

    const SCOREBOARD_BODY: &str = r#"{
        "events": [
            {
                "id": "401585601",
                "date": "2026-01-15T03:00:00Z",
                "competitions": [
                    {
                        "competitors": [
                            {
                                "id": "13",
                                "homeAway": "home",
                                "team": {"id": "13", "displayName": "Los Angeles Lakers", "shortDisplayName": "Lakers", "abbreviation": "LAL"},
                                "records": [{"type": "total", "summary": "24-18"}]
                            },
                            {
                                "id": "9",
                                "homeAway": "away",
                                "team": {"id": "9", "displayName": "Golden State Warriors", "shortDisplayName": "Warriors", "abbreviation": "GS"},
                                "records": [{"type": "total", "summary": "30-12"}]
                            }
                        ],
                        "broadcasts": [{"names": ["TNT"]}],
                        "situation": {"possession": "9"}
                    }
                ]
            }
        ]
    }"#;

    #[tokio::test]
    async fn broadcasts_join_by_team_pair() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/basketball/nba/scoreboard")
            .match_query(Matcher::UrlEncoded("dates".into(), "20260115".into()))
            .with_status(200)
            .with_body(SCOREBOARD_BODY)
            .create_async()
            .await;

        let api = test_api(&server.url());
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let broadcasts = api
            .fetch_broadcasts(League::Nba, date, "Lakers", "Warriors")
            .await
            .unwrap();
        assert_eq!(broadcasts.names, vec!["TNT"]);
    }

    #[tokio::test]
    async fn missing_matchup_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/basketball/nba/scoreboard")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(SCOREBOARD_BODY)
            .create_async()
            .await;

        let api = test_api(&server.url());
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let err = api
            .fetch_broadcasts(League::Nba, date, "Celtics", "Knicks")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)), "got {err}");
    }

    #[tokio::test]
    async fn possession_resolves_through_the_team_table() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/basketball/nba/scoreboard")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(SCOREBOARD_BODY)
            .create_async()
            .await;

        let api = test_api(&server.url());
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let situation = api
            .fetch_situation(League::Nba, date, "Lakers", "Warriors")
            .await
            .unwrap();
        // Scoreboard competitor "9" (GS) translates to internal Warriors id.
        assert_eq!(situation.possession_team_id.as_deref(), Some("11"));
    }

    #[tokio::test]
    async fn nfl_games_carry_league_and_season_params() {
        let body = r#"{
            "response": [
                {
                    "game": {
                        "id": 7788,
                        "stage": "Regular Season",
                        "week": "Week 2",
                        "date": {"date": "2026-09-20", "time": "20:20", "timestamp": 1789936800},
                        "venue": {"name": "Arrowhead Stadium", "city": "Kansas City"},
                        "status": {"short": "NS", "long": "Not Started"}
                    },
                    "teams": {
                        "home": {"id": 17, "name": "Kansas City Chiefs"},
                        "away": {"id": 20, "name": "Buffalo Bills"}
                    },
                    "scores": {"home": {}, "away": {}}
                }
            ]
        }"#;
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/games")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("date".into(), "2026-09-20".into()),
                Matcher::UrlEncoded("league".into(), "1".into()),
                Matcher::UrlEncoded("season".into(), "2026".into()),
            ]))
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let api = test_api(&server.url());
        let date = NaiveDate::from_ymd_opt(2026, 9, 20).unwrap();
        let games = api.fetch_nfl_games(date, "2026").await.unwrap();

        mock.assert_async().await;
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].league, League::Nfl);
        assert_eq!(games[0].status, GameStatus::Scheduled);
        assert!(games[0].home_score.total.is_none());
    }

    #[tokio::test]
    async fn players_map_name_and_jersey() {
        let body = r#"{
            "response": [
                {
                    "id": 265,
                    "firstname": "LeBron",
                    "lastname": "James",
                    "leagues": {"standard": {"jersey": 23, "pos": "F"}}
                },
                {"firstname": null, "lastname": null, "id": 999}
            ]
        }"#;
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/players")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("team".into(), "17".into()),
                Matcher::UrlEncoded("season".into(), "2025".into()),
            ]))
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let api = test_api(&server.url());
        let players = api.fetch_nba_players("17", "2025").await.unwrap();
        // The nameless record drops.
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "LeBron James");
        assert_eq!(players[0].jersey.as_deref(), Some("23"));
        assert_eq!(players[0].team_id.as_deref(), Some("17"));
    }

    #[tokio::test]
    async fn gif_search_passes_the_key_as_a_param() {
        let body = r#"{
            "data": [
                {"id": "dunk1", "title": "buzzer beater", "images": {"original": {"url": "https://g.example/dunk1.gif"}}}
            ]
        }"#;
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_key".into(), "giphy-key".into()),
                Matcher::UrlEncoded("q".into(), "dunk".into()),
                Matcher::UrlEncoded("limit".into(), "5".into()),
            ]))
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let api = test_api(&server.url());
        let gifs = api.search_gifs("dunk", 5).await.unwrap();
        mock.assert_async().await;
        assert_eq!(gifs.len(), 1);
        assert_eq!(gifs[0].url, "https://g.example/dunk1.gif");
    }

    #[tokio::test]
    async fn upcoming_odds_map_bookmaker_quotes() {
        let body = r#"[
            {
                "id": "odds-1",
                "home_team": "Los Angeles Lakers",
                "away_team": "Golden State Warriors",
                "bookmakers": [
                    {
                        "key": "fanduel",
                        "title": "FanDuel",
                        "markets": [
                            {
                                "key": "h2h",
                                "outcomes": [
                                    {"name": "Los Angeles Lakers", "price": 1.87},
                                    {"name": "Golden State Warriors", "price": 1.98}
                                ]
                            }
                        ]
                    }
                ]
            }
        ]"#;
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/odds/nba/upcoming")
            .match_query(Matcher::UrlEncoded("team1".into(), "Lakers".into()))
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let api = test_api(&server.url());
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let odds = api
            .fetch_upcoming_odds(League::Nba, date, "Lakers", "Warriors")
            .await
            .unwrap();
        assert_eq!(odds.quotes.len(), 1);
        assert_eq!(odds.quotes[0].bookmaker, "FanDuel");
    }
}
