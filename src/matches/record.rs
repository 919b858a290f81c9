use chrono::Local;
use tracing::{debug, warn};

use super::format::{format_team, game_number_at};
use super::parse::{CLASS_ORDER, MatchResult, ResultParseError, parse_result};
use crate::gas::model::PlayersInfo;
use crate::gas::{Action, GasError};
use crate::util::confirm::{ConfirmPrompt, SuccessMessage};
use crate::util::prompt::{await_reply, reply_timed_out};
use crate::{AppError, Context};

fn usage() -> String {
    format!(
        "🏆 **경기 결과를 입력하세요!** (30초 내 입력)\n\
         예시: `[아래2]유저1/유저2/유저3/유저4 vs [위1]유저5/유저6/유저7/유저8`\n\
         또는: `[승]유저1,유저2,유저3,유저4[패]유저5,유저6,유저7,유저8`\n\
         ✅ **순서 주의:** 반드시 `{}` 클래스 순서대로 입력해야 합니다.",
        CLASS_ORDER.join(",")
    )
}

fn parse_error_message(prefix: &str, err: &ResultParseError) -> String {
    match err {
        ResultParseError::Format => format!(
            "🚨 **잘못된 형식입니다!**\n\
             `{prefix}결과등록 [아래2]유저1/유저2/유저3/유저4 vs [위1]유저5/유저6/유저7/유저8`\n\
             `{prefix}결과등록 [승]유저1,유저2,유저3,유저4[패]유저5,유저6,유저7,유저8`\n\
             ✅ **순서 주의:** 반드시 `{}` 클래스 순서대로 입력해야 합니다.",
            CLASS_ORDER.join(",")
        ),
        ResultParseError::Draw(score) => {
            format!("🚨 두 팀의 점수가 같습니다 ({score}:{score}). 무승부는 등록할 수 없습니다.")
        }
        ResultParseError::TeamSize { .. } => format!(
            "🚨 **잘못된 입력입니다!**\n\
             승리팀 혹은 패배팀의 인원 수 (4명) 를 확인해주세요.\n\n\
             🔹 **올바른 입력 예시:** `{prefix}결과등록 [승]유저1,유저2,유저3,유저4[패]유저5,유저6,유저7,유저8`"
        ),
        ResultParseError::Duplicate(names) => {
            format!("🚨 중복된 유저가 있습니다: {}", names.join(", "))
        }
    }
}

fn result_prompt(result: MatchResult, game_number: String) -> ConfirmPrompt {
    let winners_text = format_team(&result.winners);
    let losers_text = format_team(&result.losers);

    let prompt = format!(
        "📊 **승리 팀:** {winners_text}\n\
         ❌ **패배 팀:** {losers_text}\n\n\
         경기 결과를 등록하시겠습니까?"
    );

    ConfirmPrompt::new(
        prompt,
        Action::RegisterResult {
            game_number,
            winners: result.winners,
            losers: result.losers,
        },
        SuccessMessage::WithGameNumber(Box::new(move |game_number: &str| {
            format!(
                "✅ 경기 결과가 기록되었습니다! **[게임번호: {game_number}]**\n\
                 \x20- 등록 [승] {winners_text}\n\
                 \x20- 등록 [패] {losers_text}"
            )
        })),
        "경기 등록 요청에 실패했습니다.",
    )
}

/// Check every player is registered, then ask to record the result.
async fn validate_and_register(ctx: Context<'_>, result: MatchResult) -> Result<(), AppError> {
    let players = [result.winners.as_slice(), result.losers.as_slice()].concat();

    let info = match ctx
        .data()
        .http
        .gas
        .query::<PlayersInfo>(&Action::GetPlayersInfo {
            players: players.clone(),
        })
        .await
    {
        Ok(info) => info,
        Err(GasError::Status(status)) => {
            warn!(%status, "player check failed");
            ctx.say("🚨 서버 응답 오류로 인해 경기 등록을 진행할 수 없습니다. 다시 시도해주세요.")
                .await?;
            return Ok(());
        }
        Err(err) => {
            warn!(error = %err, "player check failed");
            ctx.say(err.user_message()).await?;
            return Ok(());
        }
    };

    let unregistered = info.missing(&players);
    if !unregistered.is_empty() {
        ctx.say(format!(
            "🚨 등록되지 않은 유저가 포함되어 있습니다: {}",
            unregistered.join(", ")
        ))
        .await?;
        return Ok(());
    }

    let game_number = game_number_at(Local::now().naive_local());
    let outcome = result_prompt(result, game_number).run(ctx).await?;
    debug!(?outcome, "result entry finished");

    Ok(())
}

/// Record the winners and losers of a match
#[poise::command(prefix_command, slash_command, rename = "결과등록")]
pub(crate) async fn record_result(
    ctx: Context<'_>,
    #[description = "[아래2]a/b/c/d vs [위1]e/f/g/h 또는 [승]a,b,c,d[패]e,f,g,h"]
    #[rest]
    result: Option<String>,
) -> Result<(), AppError> {
    let text = match result.filter(|text| !text.trim().is_empty()) {
        Some(text) => text,
        None => {
            ctx.say(usage()).await?;
            match await_reply(ctx).await {
                Some(text) => text,
                None => return reply_timed_out(ctx, "결과등록").await,
            }
        }
    };

    match parse_result(&text) {
        Ok(result) => validate_and_register(ctx, result).await,
        Err(err) => {
            ctx.say(parse_error_message(ctx.prefix(), &err)).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MatchResult {
        parse_result("[아래3]a/b/c/d vs [위1]e/f/g/h").unwrap()
    }

    #[test]
    fn success_message_carries_game_number_and_teams() {
        let prompt = result_prompt(sample(), String::from("2503011230"));
        assert_eq!(
            prompt.success_text(r#"{"game_number": 2503011230}"#),
            "✅ 경기 결과가 기록되었습니다! **[게임번호: 2503011230]**\n \
             - 등록 [승] a(드), b(어), c(넥), d(슴)\n \
             - 등록 [패] e(드), f(어), g(넥), h(슴)"
        );
    }

    #[test]
    fn parse_errors_explain_the_problem() {
        assert!(parse_error_message("!", &ResultParseError::Format).contains("`!결과등록 [승]"));
        assert!(parse_error_message("!", &ResultParseError::Draw(1)).contains("(1:1)"));
        assert!(
            parse_error_message("!", &ResultParseError::TeamSize { winners: 3, losers: 4 })
                .contains("인원 수 (4명)")
        );
        assert_eq!(
            parse_error_message("!", &ResultParseError::Duplicate(vec![String::from("a")])),
            "🚨 중복된 유저가 있습니다: a"
        );
    }

    #[test]
    fn usage_mentions_class_order() {
        assert!(usage().contains("`드,어,넥,슴`"));
    }

    #[test]
    fn usage_examples_can_be_sent_as_replies() {
        let text = usage();
        assert!(!text.contains("`!"));
        assert!(text.contains("`[승]유저1,"));
    }
}
