use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use leagues_api::{BroadcastInfo, Game, League, LiveSituation, Odds, TeamRecord};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Date-window filter
// ---------------------------------------------------------------------------

/// True when the game starts today or tomorrow on the viewer's local
/// calendar — day boundaries are local, not UTC.
pub fn in_date_window(start: DateTime<Utc>, today: NaiveDate) -> bool {
    let local_date = start.with_timezone(&Local).date_naive();
    local_date == today || Some(local_date) == today.succ_opt()
}

// ---------------------------------------------------------------------------
// Season sectioning (NFL schedule views)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonStage {
    Preseason,
    RegularSeason,
}

impl SeasonStage {
    pub fn label(&self) -> &'static str {
        match self {
            SeasonStage::Preseason => "Preseason",
            SeasonStage::RegularSeason => "Regular Season",
        }
    }
}

/// Month/day heuristic on the game's local date: August is preseason;
/// September through December, and the first week of January, are the
/// regular season.
pub fn season_stage(date: NaiveDate) -> Option<SeasonStage> {
    match date.month0() {
        7 => Some(SeasonStage::Preseason),
        8..=11 => Some(SeasonStage::RegularSeason),
        0 if date.day() <= 8 => Some(SeasonStage::RegularSeason),
        _ => None,
    }
}

/// A flattened schedule row: either a section header or a game.
#[derive(Debug, Clone)]
pub enum FeedRow {
    Header(&'static str),
    Game(Game),
}

/// Bucket games into season stages and flatten, headers first, in fixed
/// `[Preseason, Regular Season]` order. Games outside the heuristic's
/// months ride along in the regular-season bucket.
pub fn season_rows(games: &[Game]) -> Vec<FeedRow> {
    let mut preseason: Vec<Game> = Vec::new();
    let mut regular: Vec<Game> = Vec::new();
    for game in games {
        let local_date = game.start_time.with_timezone(&Local).date_naive();
        match season_stage(local_date) {
            Some(SeasonStage::Preseason) => preseason.push(game.clone()),
            _ => regular.push(game.clone()),
        }
    }

    let mut rows = Vec::with_capacity(games.len() + 2);
    for (stage, bucket) in [
        (SeasonStage::Preseason, preseason),
        (SeasonStage::RegularSeason, regular),
    ] {
        if bucket.is_empty() {
            continue;
        }
        rows.push(FeedRow::Header(stage.label()));
        rows.extend(bucket.into_iter().map(FeedRow::Game));
    }
    rows
}

// ---------------------------------------------------------------------------
// Feed state
// ---------------------------------------------------------------------------

/// Per-league collections plus the cross-league merge. Games are replaced
/// wholesale on every fetch cycle; the only in-place mutation is live
/// situation/broadcast/record enrichment.
#[derive(Debug, Default)]
pub struct FeedState {
    nba: Vec<Game>,
    nfl: Vec<Game>,
    summer: Vec<Game>,
    odds: HashMap<String, Odds>,
    records: HashMap<String, String>,
}

impl FeedState {
    /// Replace a league's collection with a fresh fetch. A game that was
    /// already Final keeps its frozen score and status even if the new
    /// fetch disagrees.
    pub fn set_games(&mut self, league: League, mut games: Vec<Game>) {
        for game in &mut games {
            if let Some(old) = self.bucket(league).iter().find(|g| g.id == game.id)
                && old.status == leagues_api::GameStatus::Final
            {
                game.status = old.status;
                game.home_score = old.home_score.clone();
                game.away_score = old.away_score.clone();
            }
            self.apply_record(game);
        }
        *self.bucket_mut(league) = games;
    }

    pub fn games(&self, league: League) -> &[Game] {
        self.bucket(league)
    }

    pub fn odds_for(&self, game_id: &str) -> Option<&Odds> {
        self.odds.get(game_id)
    }

    /// The unified today-or-tomorrow feed: date-filtered NBA + NFL games in
    /// start order, with Summer League appended as the supplementary
    /// source — a supplementary game only joins when no entry already
    /// carries its id.
    pub fn combined(&self, today: NaiveDate) -> Vec<Game> {
        let mut feed: Vec<Game> = self
            .nba
            .iter()
            .chain(self.nfl.iter())
            .filter(|g| in_date_window(g.start_time, today))
            .cloned()
            .collect();

        let supplement: Vec<&Game> = self
            .summer
            .iter()
            .filter(|g| in_date_window(g.start_time, today))
            .collect();
        for game in supplement {
            if !feed.iter().any(|g| g.id == game.id) {
                feed.push(game.clone());
            }
        }

        feed.sort_by_key(|g| g.start_time);
        feed
    }

    /// Live-poll result: update possession on the matching game. Ignored
    /// entirely unless the game is in a live state — situation fields may
    /// not appear on scheduled or finished games.
    pub fn apply_situation(&mut self, game_id: &str, situation: &LiveSituation) {
        let Some(game) = self.find_mut(game_id) else {
            return;
        };
        if !game.is_live() {
            return;
        }
        game.possession_team_id = situation.possession_team_id.clone();
    }

    pub fn apply_broadcasts(&mut self, game_id: &str, broadcasts: &BroadcastInfo) {
        if let Some(game) = self.find_mut(game_id) {
            game.broadcasts = broadcasts.names.clone();
        }
    }

    pub fn set_odds(&mut self, game_id: String, odds: Odds) {
        self.odds.insert(game_id, odds);
    }

    /// Records arrive from the scoreboard provider independently of game
    /// fetches; refresh both the lookup table and every displayed team.
    pub fn apply_records(&mut self, records: &[TeamRecord]) {
        for record in records {
            self.records.insert(record.team_id.clone(), record.summary.clone());
        }
        for game in self
            .nba
            .iter_mut()
            .chain(self.nfl.iter_mut())
            .chain(self.summer.iter_mut())
        {
            for side in [&mut game.home, &mut game.away] {
                if let Some(summary) = self.records.get(&side.id) {
                    side.record = Some(summary.clone());
                }
            }
        }
    }

    fn apply_record(&self, game: &mut Game) {
        for side in [&mut game.home, &mut game.away] {
            if let Some(summary) = self.records.get(&side.id) {
                side.record = Some(summary.clone());
            }
        }
    }

    fn find_mut(&mut self, game_id: &str) -> Option<&mut Game> {
        self.nba
            .iter_mut()
            .chain(self.nfl.iter_mut())
            .chain(self.summer.iter_mut())
            .find(|g| g.id == game_id)
    }

    fn bucket(&self, league: League) -> &Vec<Game> {
        match league {
            League::Nba => &self.nba,
            League::Nfl => &self.nfl,
            League::SummerLeague => &self.summer,
        }
    }

    fn bucket_mut(&mut self, league: League) -> &mut Vec<Game> {
        match league {
            League::Nba => &mut self.nba,
            League::Nfl => &mut self.nfl,
            League::SummerLeague => &mut self.summer,
        }
    }
}
