mod state;

use crate::state::cache::CacheKey;
use crate::state::feed::{season_rows, FeedRow, FeedState};
use crate::state::messages::{FeedRequest, FeedResponse};
use crate::state::network::FeedWorker;
use crate::state::poller::{LivePoller, BROADCAST_POLL_INTERVAL, SITUATION_POLL_INTERVAL};
use crate::state::query::Query;
use chrono::Local;
use leagues_api::client::SportsApi;
use leagues_api::{Game, GameStatus, League, NewsArticle};
use log::{debug, error, info, warn};
use std::collections::{HashMap, HashSet};
use tokio::sync::{mpsc, watch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let client = SportsApi::from_env();

    let (request_tx, request_rx) = mpsc::channel::<FeedRequest>(100);
    let (response_tx, response_rx) = mpsc::channel::<FeedResponse>(100);

    let worker = FeedWorker::new(client.clone(), request_rx, response_tx);
    let worker_task = tokio::spawn(worker.run());

    // Load today + tomorrow for every league up front; live polling takes
    // over from there.
    let today = Local::now().date_naive();
    let dates: Vec<_> = [Some(today), today.succ_opt()].into_iter().flatten().collect();
    for league in [League::Nba, League::Nfl, League::SummerLeague] {
        let _ = request_tx
            .send(FeedRequest::LoadGames { league, dates: dates.clone() })
            .await;
    }
    for league in [League::Nba, League::Nfl] {
        let _ = request_tx
            .send(FeedRequest::LoadRecords { league, date: today })
            .await;
    }

    // League headlines ride along as a side query.
    let mut news: Query<Vec<NewsArticle>> = Query::new();
    {
        let client = client.clone();
        news.run(CacheKey::new(&[("kind", "news"), ("topic", "nba")]), async move {
            client.fetch_news("nba").await
        });
    }

    watch_loop(response_rx, request_tx, news).await;

    worker_task.abort();
    Ok(())
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("scorefeed {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "scorefeed - multi-league live game feed watcher

Usage:
  scorefeed
  scorefeed --help
  scorefeed --version

Environment:
  SCOREFEED_RAPIDAPI_KEY   API key for the NBA/NFL stats providers
  SCOREFEED_GIPHY_KEY      API key for Giphy search
  SCOREFEED_BACKEND_URL    Override for the odds/news backend proxy
  RUST_LOG                 Log filter (default: info)"
}

async fn watch_loop(
    mut responses: mpsc::Receiver<FeedResponse>,
    requests: mpsc::Sender<FeedRequest>,
    news: Query<Vec<NewsArticle>>,
) {
    let today = Local::now().date_naive();
    let mut feed = FeedState::default();
    // One status source per live game; dropping a sender stops its pollers.
    let mut pollers: HashMap<String, watch::Sender<GameStatus>> = HashMap::new();
    let mut enriched: HashSet<String> = HashSet::new();
    let mut news_logged = false;

    let mut news_tick = tokio::time::interval(std::time::Duration::from_secs(5));

    loop {
        tokio::select! {
            Some(response) = responses.recv() => {
                match response {
                    FeedResponse::LoadingStateChanged { loading } => {
                        debug!("worker loading: {loading}");
                    }
                    FeedResponse::GamesLoaded { league, games } => {
                        info!("{}: {} games loaded", league.label(), games.len());
                        feed.set_games(league, games);
                        sync_pollers(&feed, league, &mut pollers, &requests);
                        enrich_window(&feed, today, &mut enriched, &requests).await;
                        if league == League::Nfl {
                            print_schedule(feed.games(League::Nfl));
                        }
                        print_feed(&feed, today);
                    }
                    FeedResponse::SituationUpdated { game_id, situation } => {
                        debug!("situation update for {game_id}");
                        feed.apply_situation(&game_id, &situation);
                    }
                    FeedResponse::BroadcastsLoaded { game_id, broadcasts } => {
                        debug!("broadcasts for {game_id}: {:?}", broadcasts.names);
                        feed.apply_broadcasts(&game_id, &broadcasts);
                    }
                    FeedResponse::OddsLoaded { game_id, odds } => {
                        if let Some(quote) = odds.quotes.first() {
                            info!("odds for {game_id}: {} quote(s), first from {}", odds.quotes.len(), quote.bookmaker);
                        }
                        feed.set_odds(game_id, odds);
                    }
                    FeedResponse::RecordsLoaded { records } => {
                        debug!("{} team records refreshed", records.len());
                        feed.apply_records(&records);
                    }
                    FeedResponse::Error { message } => {
                        // Fetch failures degrade to messages; the feed keeps
                        // whatever it already has.
                        error!("{message}");
                    }
                }
            }

            _ = news_tick.tick() => {
                if !news_logged {
                    let snapshot = news.snapshot();
                    if let Some(articles) = snapshot.data {
                        for article in articles.iter().take(5) {
                            info!("news: {}", article.title);
                        }
                        news_logged = true;
                    } else if let Some(err) = snapshot.error {
                        warn!("news unavailable: {err}");
                        news_logged = true;
                    }
                }
            }

            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }
}

/// Keep one situation poller and one broadcast poller per live game. Status
/// updates flow through the watch channel; senders for games that left the
/// feed are dropped, which winds their pollers down.
fn sync_pollers(
    feed: &FeedState,
    league: League,
    pollers: &mut HashMap<String, watch::Sender<GameStatus>>,
    requests: &mpsc::Sender<FeedRequest>,
) {
    let today = Local::now().date_naive();

    for game in feed.games(league) {
        if let Some(status_tx) = pollers.get(&game.id) {
            let _ = status_tx.send(game.status);
            continue;
        }
        if !game.is_live() {
            continue;
        }

        let (status_tx, status_rx) = watch::channel(game.status);
        let situation = LivePoller::new(
            SITUATION_POLL_INTERVAL,
            status_rx.clone(),
            requests.clone(),
            FeedRequest::RefreshSituation {
                league,
                date: today,
                game_id: game.id.clone(),
                home: game.home.name.clone(),
                away: game.away.name.clone(),
            },
        );
        let broadcasts = LivePoller::new(
            BROADCAST_POLL_INTERVAL,
            status_rx,
            requests.clone(),
            FeedRequest::RefreshBroadcasts {
                league,
                date: today,
                game_id: game.id.clone(),
                home: game.home.name.clone(),
                away: game.away.name.clone(),
            },
        );
        tokio::spawn(situation.run());
        tokio::spawn(broadcasts.run());
        pollers.insert(game.id.clone(), status_tx);
    }

    // Drop senders for games that left the feed entirely.
    let all: HashSet<&str> = [League::Nba, League::Nfl, League::SummerLeague]
        .into_iter()
        .flat_map(|l| feed.games(l))
        .map(|g| g.id.as_str())
        .collect();
    pollers.retain(|id, _| all.contains(id.as_str()));
}

/// Request odds + broadcasts once per game in the today-or-tomorrow window.
async fn enrich_window(
    feed: &FeedState,
    today: chrono::NaiveDate,
    enriched: &mut HashSet<String>,
    requests: &mpsc::Sender<FeedRequest>,
) {
    for game in feed.combined(today) {
        if !enriched.insert(game.id.clone()) {
            continue;
        }
        let date = game.start_time.with_timezone(&Local).date_naive();
        let _ = requests
            .send(FeedRequest::LoadMatchupOdds {
                league: game.league,
                date,
                game_id: game.id.clone(),
                start_time: game.start_time,
                home: game.home.name.clone(),
                away: game.away.name.clone(),
            })
            .await;
        let _ = requests
            .send(FeedRequest::RefreshBroadcasts {
                league: game.league,
                date,
                game_id: game.id.clone(),
                home: game.home.name.clone(),
                away: game.away.name.clone(),
            })
            .await;
    }
}

fn print_feed(feed: &FeedState, today: chrono::NaiveDate) {
    let games = feed.combined(today);
    if games.is_empty() {
        info!("No games found for today or tomorrow");
        return;
    }
    for game in &games {
        let broadcasts = if game.broadcasts.is_empty() {
            String::new()
        } else {
            format!(" [{}]", game.broadcasts.join(", "))
        };
        let odds = feed
            .odds_for(&game.id)
            .filter(|o| !o.is_empty())
            .map(|o| format!(" ({} books)", o.quotes.len()))
            .unwrap_or_default();
        info!(
            "{} | {} @ {} | {}{}{}",
            game.league.label(),
            game.away.name,
            game.home.name,
            game.status_label(),
            broadcasts,
            odds,
        );
    }
}

/// NFL schedule view: games grouped into season stages with header rows.
fn print_schedule(games: &[Game]) {
    for row in season_rows(games) {
        match row {
            FeedRow::Header(label) => info!("-- {label} --"),
            FeedRow::Game(game) => info!(
                "  {} @ {} | {}",
                game.away.name,
                game.home.name,
                game.start_time.with_timezone(&Local).format("%a %b %e %H:%M"),
            ),
        }
    }
}
