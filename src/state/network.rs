use crate::state::cache::{CacheKey, RequestCache};
use crate::state::messages::{FeedRequest, FeedResponse};
use chrono::{Datelike, NaiveDate};
use leagues_api::client::{ApiError, SportsApi};
use leagues_api::{BroadcastInfo, League, Odds};
use log::{debug, error};
use std::time::Duration;
use tokio::sync::mpsc;

const ODDS_CACHE_CAPACITY: usize = 256;
const BROADCAST_CACHE_CAPACITY: usize = 256;

/// Upcoming odds move while books adjust lines; keep them for minutes.
const UPCOMING_ODDS_TTL: Duration = Duration::from_secs(5 * 60);
/// Historical odds are settled; keep them for hours.
const HISTORICAL_ODDS_TTL: Duration = Duration::from_secs(6 * 60 * 60);
const BROADCAST_TTL: Duration = Duration::from_secs(15 * 60);

/// Owns the provider client and the odds/broadcast caches; turns feed
/// requests into fetch+normalize cycles and emits responses. Errors become
/// messages, never panics — a failed fetch must not take the feed down.
pub struct FeedWorker {
    client: SportsApi,
    requests: mpsc::Receiver<FeedRequest>,
    responses: mpsc::Sender<FeedResponse>,
    odds_cache: RequestCache<Odds>,
    broadcast_cache: RequestCache<BroadcastInfo>,
}

impl FeedWorker {
    pub fn new(
        client: SportsApi,
        requests: mpsc::Receiver<FeedRequest>,
        responses: mpsc::Sender<FeedResponse>,
    ) -> Self {
        Self {
            client,
            requests,
            responses,
            odds_cache: RequestCache::new(ODDS_CACHE_CAPACITY),
            broadcast_cache: RequestCache::new(BROADCAST_CACHE_CAPACITY),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            let _ = self
                .responses
                .send(FeedResponse::LoadingStateChanged { loading: true })
                .await;

            let response = self
                .handle(request)
                .await
                .unwrap_or_else(|err| FeedResponse::Error { message: err.to_string() });

            let _ = self
                .responses
                .send(FeedResponse::LoadingStateChanged { loading: false })
                .await;

            if let Err(e) = self.responses.send(response).await {
                error!("feed response channel closed: {e}");
                break;
            }
        }
    }

    async fn handle(&mut self, request: FeedRequest) -> Result<FeedResponse, ApiError> {
        match request {
            FeedRequest::LoadGames { league, dates } => {
                debug!("loading {} games for {dates:?}", league.label());
                let mut games = Vec::new();
                for date in dates {
                    let mut batch = match league {
                        League::Nba => self.client.fetch_nba_games(date).await?,
                        League::SummerLeague => {
                            self.client.fetch_summer_league_games(date).await?
                        }
                        League::Nfl => {
                            self.client.fetch_nfl_games(date, &nfl_season(date)).await?
                        }
                    };
                    games.append(&mut batch);
                }
                Ok(FeedResponse::GamesLoaded { league, games })
            }

            FeedRequest::RefreshSituation { league, date, game_id, home, away } => {
                debug!("refreshing situation for {game_id}");
                let situation = self.client.fetch_situation(league, date, &home, &away).await?;
                Ok(FeedResponse::SituationUpdated { game_id, situation })
            }

            FeedRequest::RefreshBroadcasts { league, date, game_id, home, away } => {
                let date_key = date.to_string();
                let key = CacheKey::new(&[
                    ("kind", "broadcasts"),
                    ("league", league.label()),
                    ("date", date_key.as_str()),
                    ("home", home.as_str()),
                    ("away", away.as_str()),
                ]);
                if let Some(broadcasts) = self.broadcast_cache.get(&key) {
                    debug!("broadcast cache hit for {game_id}");
                    return Ok(FeedResponse::BroadcastsLoaded {
                        game_id,
                        broadcasts: broadcasts.clone(),
                    });
                }

                let broadcasts =
                    self.client.fetch_broadcasts(league, date, &home, &away).await?;
                self.broadcast_cache.insert(key, broadcasts.clone(), BROADCAST_TTL);
                Ok(FeedResponse::BroadcastsLoaded { game_id, broadcasts })
            }

            FeedRequest::LoadMatchupOdds { league, date, game_id, start_time, home, away } => {
                let date_key = date.to_string();
                let key = CacheKey::new(&[
                    ("kind", "odds"),
                    ("league", league.label()),
                    ("date", date_key.as_str()),
                    ("team1", home.as_str()),
                    ("team2", away.as_str()),
                ]);
                if let Some(odds) = self.odds_cache.get(&key) {
                    debug!("odds cache hit for {game_id}");
                    return Ok(FeedResponse::OddsLoaded { game_id, odds: odds.clone() });
                }

                // Upcoming odds win when the books have the matchup posted;
                // historical odds are only consulted otherwise.
                let upcoming = self.client.fetch_upcoming_odds(league, date, &home, &away).await?;
                let (odds, ttl) = if upcoming.is_empty() {
                    let historical = self
                        .client
                        .fetch_historical_odds(league, start_time, &home, &away)
                        .await?;
                    (historical, HISTORICAL_ODDS_TTL)
                } else {
                    (upcoming, UPCOMING_ODDS_TTL)
                };
                self.odds_cache.insert(key, odds.clone(), ttl);
                Ok(FeedResponse::OddsLoaded { game_id, odds })
            }

            FeedRequest::LoadRecords { league, date } => {
                let records = self.client.fetch_team_records(league, date).await?;
                Ok(FeedResponse::RecordsLoaded { records })
            }
        }
    }
}

/// The NFL provider keys seasons by their September start year; January and
/// February games belong to the previous year's season.
fn nfl_season(date: NaiveDate) -> String {
    let year = if date.month() >= 3 { date.year() } else { date.year() - 1 };
    year.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nfl_season_rolls_back_in_january_and_february() {
        assert_eq!(nfl_season(NaiveDate::from_ymd_opt(2026, 9, 13).unwrap()), "2026");
        assert_eq!(nfl_season(NaiveDate::from_ymd_opt(2026, 12, 28).unwrap()), "2026");
        assert_eq!(nfl_season(NaiveDate::from_ymd_opt(2027, 1, 4).unwrap()), "2026");
        assert_eq!(nfl_season(NaiveDate::from_ymd_opt(2027, 2, 8).unwrap()), "2026");
        assert_eq!(nfl_season(NaiveDate::from_ymd_opt(2027, 8, 10).unwrap()), "2027");
    }
}
