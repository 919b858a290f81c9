use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use super::balance::{balance_teams, covers_required_classes, rank_by_mmr};
use crate::gas::Action;
use crate::gas::model::{PlayerInfo, PlayersInfo};
use crate::matches::parse::TEAM_SIZE;
use crate::util::text::{duplicates, split_list};
use crate::{AppError, Context};

const LOBBY_SIZE: usize = TEAM_SIZE * 2;

/// Validate the typed roster before asking the web app about it.
fn requested_players(input: Option<&str>) -> Result<Vec<String>, String> {
    let Some(input) = input.filter(|text| !text.trim().is_empty()) else {
        return Err(String::from(
            "🚨 팀을 생성할 유저 목록을 입력하세요! (쉼표로 구분, 정확히 8명 입력)",
        ));
    };

    let players = split_list(input, ',');
    if players.len() != LOBBY_SIZE {
        return Err(String::from("🚨 정확히 8명의 유저를 입력하세요!"));
    }

    let repeated = duplicates(&players);
    if !repeated.is_empty() {
        return Err(format!("🚨 중복된 유저가 있습니다: `{}`", repeated.join(", ")));
    }

    Ok(players)
}

/// Keep one row per requested player, dropping anything else the sheet sent.
fn lobby_rows(info: PlayersInfo, requested: &[String]) -> Vec<PlayerInfo> {
    let mut wanted: HashSet<&str> = requested.iter().map(String::as_str).collect();
    info.players
        .into_iter()
        .filter(|player| wanted.remove(player.username.as_str()))
        .collect()
}

/// Result text for a ranked lobby; `None` when no valid split was found.
fn generate_matchup(mut lobby: Vec<PlayerInfo>, rng: &mut StdRng) -> Option<String> {
    rank_by_mmr(&mut lobby);
    balance_teams(&lobby, rng, covers_required_classes).map(|teams| teams.matchup())
}

/// Split eight players into two MMR-balanced teams
#[poise::command(prefix_command, slash_command, rename = "팀생성")]
pub(crate) async fn generate_teams(
    ctx: Context<'_>,
    #[description = "쉼표로 구분한 유저 8명"]
    #[rest]
    players: Option<String>,
) -> Result<(), AppError> {
    let requested = match requested_players(players.as_deref()) {
        Ok(requested) => requested,
        Err(message) => {
            ctx.say(message).await?;
            return Ok(());
        }
    };

    let action = Action::GetPlayersInfo {
        players: requested.clone(),
    };
    let info = match ctx.data().http.gas.query::<PlayersInfo>(&action).await {
        Ok(info) => info,
        Err(err) => {
            warn!(error = %err, "player lookup for team generation failed");
            ctx.say(err.user_message()).await?;
            return Ok(());
        }
    };

    let missing = info.missing(&requested);
    if !missing.is_empty() {
        ctx.say(format!(
            "🚨 등록되지 않은 유저가 포함되어 있습니다: `{}`",
            missing.join(", ")
        ))
        .await?;
        return Ok(());
    }

    let lobby = lobby_rows(info, &requested);
    let reply = match generate_matchup(lobby, &mut StdRng::from_os_rng()) {
        Some(matchup) => {
            info!(%matchup, "generated teams");
            matchup
        }
        None => String::from("🚨 생성 불가능한 클래스 조합입니다. 다시 시도해주세요!"),
    };

    ctx.say(reply).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::parse::parse_result;

    fn row(name: &str, mmr: f64, class: &str) -> PlayerInfo {
        PlayerInfo {
            username: String::from(name),
            mmr,
            class: String::from(class),
        }
    }

    fn lobby() -> Vec<PlayerInfo> {
        vec![
            row("a", 1700.0, "드"),
            row("b", 1600.0, "어"),
            row("c", 1500.0, "넥"),
            row("d", 1400.0, "슴"),
            row("e", 1300.0, "드"),
            row("f", 1200.0, "어"),
            row("g", 1100.0, "넥"),
            row("h", 1000.0, "슴"),
        ]
    }

    #[test]
    fn roster_input_is_checked() {
        assert!(requested_players(None).is_err());
        assert_eq!(
            requested_players(Some("a, b, c")),
            Err(String::from("🚨 정확히 8명의 유저를 입력하세요!"))
        );
        assert_eq!(
            requested_players(Some("a,b,c,d,e,f,g,a")),
            Err(String::from("🚨 중복된 유저가 있습니다: `a`"))
        );
        assert_eq!(requested_players(Some("a, b,c,d,e,f,g,h")).unwrap().len(), 8);
    }

    #[test]
    fn lobby_rows_drop_extras_and_repeats() {
        let mut players = lobby();
        players.push(row("z", 2000.0, "드"));
        players.push(row("a", 0.0, "드"));
        let requested = split_list("a,b,c,d,e,f,g,h", ',');

        let rows = lobby_rows(PlayersInfo { players }, &requested);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].mmr, 1700.0);
    }

    #[test]
    fn matchup_feeds_back_into_result_entry() {
        let matchup = generate_matchup(lobby(), &mut StdRng::seed_from_u64(11)).unwrap();
        let scored = matchup.replacen("[아래]", "[아래2]", 1).replacen("[위]", "[위1]", 1);

        let result = parse_result(&scored).unwrap();
        assert_eq!(result.winners.len(), 4);
        assert_eq!(result.losers.len(), 4);
    }

    #[test]
    fn uncoverable_lobby_is_refused() {
        let lobby = lobby()
            .into_iter()
            .map(|p| row(&p.username, p.mmr, "드"))
            .collect();
        assert!(generate_matchup(lobby, &mut StdRng::seed_from_u64(11)).is_none());
    }
}
