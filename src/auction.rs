//! Line scanner for the auction report dump. The file interleaves team
//! headers, labelled stat pairs, and roster rows with no delimiters beyond
//! line order, so scanning runs as an explicit state machine over an index
//! with one line of pushback when a team code shows up mid-roster.

use crate::league;
use crate::model::{Player, PlayerRole, Team};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ScanState {
    AwaitingTeam,
    InTeamHeader,
    InRoster,
}

/// Stat labels announce their value on the following line.
fn stat_slot<'a>(team: &'a mut Team, line: &str) -> Option<&'a mut Option<String>> {
    if line.starts_with("Purse spent") {
        return Some(&mut team.purse_spent);
    }
    if line.starts_with("Purse left") {
        return Some(&mut team.purse_left);
    }
    if line.starts_with("Players bought") {
        return Some(&mut team.players_bought);
    }
    if line.starts_with("Overseas buys") {
        return Some(&mut team.overseas_buys);
    }
    None
}

/// Parses the whole report into one Team per section, in encounter order.
/// Missing or malformed detail lines leave the affected fields unset; the
/// scan itself never fails.
pub fn parse_auction_report(input: &str) -> Vec<Team> {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut teams: Vec<Team> = Vec::new();
    let mut current: Option<Team> = None;
    let mut state = ScanState::AwaitingTeam;
    let mut idx = 0usize;

    while idx < lines.len() {
        let line = lines[idx];

        // A team code opens the next section from any non-roster state.
        if state != ScanState::InRoster && league::is_team_code(line) {
            if let Some(team) = current.take() {
                teams.push(team);
            }
            current = Some(Team {
                code: line.to_string(),
                ..Team::default()
            });
            state = ScanState::InTeamHeader;
            idx += 1;
            continue;
        }

        let Some(team) = current.as_mut() else {
            // Preamble before the first section.
            idx += 1;
            continue;
        };

        match state {
            ScanState::AwaitingTeam => {
                idx += 1;
            }
            ScanState::InTeamHeader => {
                if team.name.is_none() && league::is_team_name(line) {
                    team.name = Some(line.to_string());
                    idx += 1;
                    continue;
                }
                if let Some(slot) = stat_slot(team, line) {
                    *slot = lines.get(idx + 1).map(|value| (*value).to_string());
                    idx += 2;
                    continue;
                }
                if line == "Players" && lines.get(idx + 1) == Some(&"Type") {
                    // Skip the Players/Type pair and the two price headers.
                    state = ScanState::InRoster;
                    idx += 4;
                    continue;
                }
                idx += 1;
            }
            ScanState::InRoster => {
                if league::is_team_code(line) {
                    // Pushback: reprocess this line as the next section start.
                    state = ScanState::AwaitingTeam;
                    continue;
                }

                let name = line;
                let mut is_new = false;
                let mut details = lines.get(idx + 1).copied();
                if details == Some("NEW") {
                    is_new = true;
                    idx += 1;
                    details = lines.get(idx + 1).copied();
                }

                let mut role = None;
                let mut base_price = None;
                let mut sold_price = None;
                if let Some(details) = details {
                    let mut parts = details.split_whitespace();
                    role = parts.next().and_then(PlayerRole::parse);
                    base_price = parts.next().map(str::to_string);
                    sold_price = parts.next().map(str::to_string);
                }

                team.roster.push(Player {
                    name: name.to_string(),
                    role,
                    is_new,
                    base_price,
                    sold_price,
                    ..Player::default()
                });
                idx += 2;
            }
        }
    }

    if let Some(team) = current.take() {
        teams.push(team);
    }
    teams
}
