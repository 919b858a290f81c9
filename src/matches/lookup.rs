use tracing::warn;

use super::format::{format_match_detail, format_recent_matches};
use crate::gas::model::MatchQuery;
use crate::gas::{Action, MatchKey};
use crate::{AppError, Context};

fn lookup_action(game_number: Option<&str>) -> Result<Action, String> {
    match game_number.map(str::trim).filter(|n| !n.is_empty()) {
        None => Ok(Action::GetRecentMatches),
        Some(raw) => raw
            .parse::<u64>()
            .map(|number| Action::GetMatch {
                game_number: MatchKey::Number(number),
            })
            .map_err(|_| format!("🚨 게임번호는 숫자로 입력해주세요: `{raw}`")),
    }
}

/// Show one match by game number, or the most recent matches
#[poise::command(prefix_command, slash_command, rename = "결과조회")]
pub(crate) async fn lookup_result(
    ctx: Context<'_>,
    #[description = "조회할 게임번호 (생략 시 최근 경기)"] game_number: Option<String>,
) -> Result<(), AppError> {
    let action = match lookup_action(game_number.as_deref()) {
        Ok(action) => action,
        Err(message) => {
            ctx.say(message).await?;
            return Ok(());
        }
    };

    let reply = match ctx.data().http.gas.query::<MatchQuery>(&action).await {
        Ok(MatchQuery::Recent(matches)) => format_recent_matches(&matches),
        Ok(MatchQuery::Single(record)) => format_match_detail(&record),
        Ok(MatchQuery::NotFound) => String::from("🚨 해당 경기 기록이 없습니다."),
        Err(err) => {
            warn!(?action, error = %err, "match lookup failed");
            err.user_message()
        }
    };

    ctx.say(reply).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_argument_asks_for_recent_matches() {
        assert_eq!(lookup_action(None), Ok(Action::GetRecentMatches));
        assert_eq!(lookup_action(Some("  ")), Ok(Action::GetRecentMatches));
    }

    #[test]
    fn game_number_is_sent_as_a_number() {
        assert_eq!(
            lookup_action(Some(" 2503011230 ")),
            Ok(Action::GetMatch {
                game_number: MatchKey::Number(2503011230)
            })
        );
    }

    #[test]
    fn non_numeric_game_number_is_refused() {
        assert_eq!(
            lookup_action(Some("어제")),
            Err(String::from("🚨 게임번호는 숫자로 입력해주세요: `어제`"))
        );
    }
}
