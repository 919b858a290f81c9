use tracing::warn;

use super::format::format_stored_team;
use crate::gas::model::MatchRecord;
use crate::gas::{Action, MatchKey};
use crate::util::confirm::{ConfirmPrompt, SuccessMessage};
use crate::util::prompt::{argument_or_ask, reply_timed_out};
use crate::{AppError, Context};

fn delete_prompt(game_number: String, record: &MatchRecord) -> ConfirmPrompt {
    let winners = format_stored_team(&record.winners.names());
    let losers = format_stored_team(&record.losers.names());
    let teams = format!(" - 삭제 [승] {winners}\n - 삭제 [패] {losers}");

    ConfirmPrompt::new(
        format!("⚠️ `{game_number}` 경기 기록을 삭제하시겠습니까?\n{teams}"),
        Action::DeleteMatch {
            game_number: game_number.clone(),
        },
        SuccessMessage::Fixed(format!(
            "✅ `{game_number}` 경기 기록이 삭제되었습니다!\n{teams}"
        )),
        "경기 삭제 요청에 실패했습니다.",
    )
}

/// Delete a recorded match
#[poise::command(prefix_command, slash_command, rename = "결과삭제")]
pub(crate) async fn delete_result(
    ctx: Context<'_>,
    #[description = "삭제할 게임번호"] game_number: Option<String>,
) -> Result<(), AppError> {
    let Some(game_number) = argument_or_ask(
        ctx,
        game_number,
        "🗑 삭제할 경기번호를 입력하세요! (30초 내 입력)",
    )
    .await?
    else {
        return reply_timed_out(ctx, "결과삭제").await;
    };

    let action = Action::GetMatch {
        game_number: MatchKey::Text(game_number.clone()),
    };
    let record = match ctx.data().http.gas.query::<MatchRecord>(&action).await {
        Ok(record) => record,
        Err(err) => {
            warn!(%game_number, error = %err, "match lookup before delete failed");
            ctx.say(err.user_message()).await?;
            return Ok(());
        }
    };

    delete_prompt(game_number, &record).run(ctx).await?;
    Ok(())
}
