//! Static cross-reference between internal team ids and every provider's
//! naming scheme. The stats providers key teams by numeric id, the
//! scoreboard provider by abbreviation — this table gives exact-key joins
//! between them, with token matching as the logged fallback when a name is
//! missing from the table.

use crate::normalize::{name_matches, team_tokens};
use crate::League;
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct TeamEntry {
    pub id: &'static str,
    pub league: League,
    pub abbrev: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
}

/// Internal ids follow the primary stats provider's numbering, which is why
/// the NBA sequence has gaps (defunct franchise ids are never reassigned).
pub static NBA_TEAMS: &[TeamEntry] = &[
    TeamEntry { id: "1", league: League::Nba, abbrev: "ATL", name: "Atlanta Hawks", short_name: "Hawks" },
    TeamEntry { id: "2", league: League::Nba, abbrev: "BOS", name: "Boston Celtics", short_name: "Celtics" },
    TeamEntry { id: "4", league: League::Nba, abbrev: "BKN", name: "Brooklyn Nets", short_name: "Nets" },
    TeamEntry { id: "5", league: League::Nba, abbrev: "CHA", name: "Charlotte Hornets", short_name: "Hornets" },
    TeamEntry { id: "6", league: League::Nba, abbrev: "CHI", name: "Chicago Bulls", short_name: "Bulls" },
    TeamEntry { id: "7", league: League::Nba, abbrev: "CLE", name: "Cleveland Cavaliers", short_name: "Cavaliers" },
    TeamEntry { id: "8", league: League::Nba, abbrev: "DAL", name: "Dallas Mavericks", short_name: "Mavericks" },
    TeamEntry { id: "9", league: League::Nba, abbrev: "DEN", name: "Denver Nuggets", short_name: "Nuggets" },
    TeamEntry { id: "10", league: League::Nba, abbrev: "DET", name: "Detroit Pistons", short_name: "Pistons" },
    TeamEntry { id: "11", league: League::Nba, abbrev: "GSW", name: "Golden State Warriors", short_name: "Warriors" },
    TeamEntry { id: "14", league: League::Nba, abbrev: "HOU", name: "Houston Rockets", short_name: "Rockets" },
    TeamEntry { id: "15", league: League::Nba, abbrev: "IND", name: "Indiana Pacers", short_name: "Pacers" },
    TeamEntry { id: "16", league: League::Nba, abbrev: "LAC", name: "LA Clippers", short_name: "Clippers" },
    TeamEntry { id: "17", league: League::Nba, abbrev: "LAL", name: "Los Angeles Lakers", short_name: "Lakers" },
    TeamEntry { id: "19", league: League::Nba, abbrev: "MEM", name: "Memphis Grizzlies", short_name: "Grizzlies" },
    TeamEntry { id: "20", league: League::Nba, abbrev: "MIA", name: "Miami Heat", short_name: "Heat" },
    TeamEntry { id: "21", league: League::Nba, abbrev: "MIL", name: "Milwaukee Bucks", short_name: "Bucks" },
    TeamEntry { id: "22", league: League::Nba, abbrev: "MIN", name: "Minnesota Timberwolves", short_name: "Timberwolves" },
    TeamEntry { id: "23", league: League::Nba, abbrev: "NOP", name: "New Orleans Pelicans", short_name: "Pelicans" },
    TeamEntry { id: "24", league: League::Nba, abbrev: "NYK", name: "New York Knicks", short_name: "Knicks" },
    TeamEntry { id: "25", league: League::Nba, abbrev: "OKC", name: "Oklahoma City Thunder", short_name: "Thunder" },
    TeamEntry { id: "26", league: League::Nba, abbrev: "ORL", name: "Orlando Magic", short_name: "Magic" },
    TeamEntry { id: "27", league: League::Nba, abbrev: "PHI", name: "Philadelphia 76ers", short_name: "76ers" },
    TeamEntry { id: "28", league: League::Nba, abbrev: "PHX", name: "Phoenix Suns", short_name: "Suns" },
    TeamEntry { id: "29", league: League::Nba, abbrev: "POR", name: "Portland Trail Blazers", short_name: "Trail Blazers" },
    TeamEntry { id: "30", league: League::Nba, abbrev: "SAC", name: "Sacramento Kings", short_name: "Kings" },
    TeamEntry { id: "31", league: League::Nba, abbrev: "SAS", name: "San Antonio Spurs", short_name: "Spurs" },
    TeamEntry { id: "38", league: League::Nba, abbrev: "TOR", name: "Toronto Raptors", short_name: "Raptors" },
    TeamEntry { id: "40", league: League::Nba, abbrev: "UTA", name: "Utah Jazz", short_name: "Jazz" },
    TeamEntry { id: "41", league: League::Nba, abbrev: "WAS", name: "Washington Wizards", short_name: "Wizards" },
];

pub static NFL_TEAMS: &[TeamEntry] = &[
    TeamEntry { id: "1", league: League::Nfl, abbrev: "LV", name: "Las Vegas Raiders", short_name: "Raiders" },
    TeamEntry { id: "2", league: League::Nfl, abbrev: "JAX", name: "Jacksonville Jaguars", short_name: "Jaguars" },
    TeamEntry { id: "3", league: League::Nfl, abbrev: "NE", name: "New England Patriots", short_name: "Patriots" },
    TeamEntry { id: "4", league: League::Nfl, abbrev: "NYG", name: "New York Giants", short_name: "Giants" },
    TeamEntry { id: "5", league: League::Nfl, abbrev: "BAL", name: "Baltimore Ravens", short_name: "Ravens" },
    TeamEntry { id: "6", league: League::Nfl, abbrev: "TEN", name: "Tennessee Titans", short_name: "Titans" },
    TeamEntry { id: "7", league: League::Nfl, abbrev: "DET", name: "Detroit Lions", short_name: "Lions" },
    TeamEntry { id: "8", league: League::Nfl, abbrev: "ATL", name: "Atlanta Falcons", short_name: "Falcons" },
    TeamEntry { id: "9", league: League::Nfl, abbrev: "CLE", name: "Cleveland Browns", short_name: "Browns" },
    TeamEntry { id: "10", league: League::Nfl, abbrev: "CIN", name: "Cincinnati Bengals", short_name: "Bengals" },
    TeamEntry { id: "11", league: League::Nfl, abbrev: "ARI", name: "Arizona Cardinals", short_name: "Cardinals" },
    TeamEntry { id: "12", league: League::Nfl, abbrev: "PHI", name: "Philadelphia Eagles", short_name: "Eagles" },
    TeamEntry { id: "13", league: League::Nfl, abbrev: "NYJ", name: "New York Jets", short_name: "Jets" },
    TeamEntry { id: "14", league: League::Nfl, abbrev: "SF", name: "San Francisco 49ers", short_name: "49ers" },
    TeamEntry { id: "15", league: League::Nfl, abbrev: "GB", name: "Green Bay Packers", short_name: "Packers" },
    TeamEntry { id: "16", league: League::Nfl, abbrev: "CHI", name: "Chicago Bears", short_name: "Bears" },
    TeamEntry { id: "17", league: League::Nfl, abbrev: "KC", name: "Kansas City Chiefs", short_name: "Chiefs" },
    TeamEntry { id: "18", league: League::Nfl, abbrev: "WSH", name: "Washington Commanders", short_name: "Commanders" },
    TeamEntry { id: "19", league: League::Nfl, abbrev: "CAR", name: "Carolina Panthers", short_name: "Panthers" },
    TeamEntry { id: "20", league: League::Nfl, abbrev: "BUF", name: "Buffalo Bills", short_name: "Bills" },
    TeamEntry { id: "21", league: League::Nfl, abbrev: "IND", name: "Indianapolis Colts", short_name: "Colts" },
    TeamEntry { id: "22", league: League::Nfl, abbrev: "PIT", name: "Pittsburgh Steelers", short_name: "Steelers" },
    TeamEntry { id: "23", league: League::Nfl, abbrev: "SEA", name: "Seattle Seahawks", short_name: "Seahawks" },
    TeamEntry { id: "24", league: League::Nfl, abbrev: "TB", name: "Tampa Bay Buccaneers", short_name: "Buccaneers" },
    TeamEntry { id: "25", league: League::Nfl, abbrev: "MIA", name: "Miami Dolphins", short_name: "Dolphins" },
    TeamEntry { id: "26", league: League::Nfl, abbrev: "HOU", name: "Houston Texans", short_name: "Texans" },
    TeamEntry { id: "27", league: League::Nfl, abbrev: "NO", name: "New Orleans Saints", short_name: "Saints" },
    TeamEntry { id: "28", league: League::Nfl, abbrev: "DEN", name: "Denver Broncos", short_name: "Broncos" },
    TeamEntry { id: "29", league: League::Nfl, abbrev: "DAL", name: "Dallas Cowboys", short_name: "Cowboys" },
    TeamEntry { id: "30", league: League::Nfl, abbrev: "LAC", name: "Los Angeles Chargers", short_name: "Chargers" },
    TeamEntry { id: "31", league: League::Nfl, abbrev: "LAR", name: "Los Angeles Rams", short_name: "Rams" },
    TeamEntry { id: "32", league: League::Nfl, abbrev: "MIN", name: "Minnesota Vikings", short_name: "Vikings" },
];

/// Exact-lookup index over abbreviation, full name, and nickname, built once
/// at startup. Summer League shares the NBA table.
static INDEX: Lazy<HashMap<(League, String), &'static TeamEntry>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for entry in NBA_TEAMS.iter().chain(NFL_TEAMS.iter()) {
        for key in [entry.abbrev, entry.name, entry.short_name] {
            index.insert((entry.league, key.to_lowercase()), entry);
        }
    }
    index
});

fn table_league(league: League) -> League {
    match league {
        League::SummerLeague => League::Nba,
        other => other,
    }
}

/// Exact lookup by abbreviation, full name, or nickname (case-insensitive).
pub fn lookup(league: League, name: &str) -> Option<&'static TeamEntry> {
    INDEX
        .get(&(table_league(league), name.trim().to_lowercase()))
        .copied()
}

/// Resolve a provider-side team name to the internal entry: exact table
/// lookup first, token matching as the fallback for names the table does
/// not carry. Fallback hits are logged so the table can be extended.
pub fn resolve(league: League, name: &str) -> Option<&'static TeamEntry> {
    if let Some(entry) = lookup(league, name) {
        return Some(entry);
    }
    let table = match table_league(league) {
        League::Nfl => NFL_TEAMS,
        _ => NBA_TEAMS,
    };
    let found = table.iter().find(|entry| {
        let tokens = team_tokens(&[Some(entry.abbrev), Some(entry.name), Some(entry.short_name)]);
        name_matches(&tokens, name)
    });
    if let Some(entry) = found {
        debug!("team xref miss for {name:?} ({}); fuzzy-matched {}", league.label(), entry.name);
    }
    found
}
