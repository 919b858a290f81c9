use crate::gas::Action;
use crate::util::confirm::{ConfirmPrompt, SuccessMessage};
use crate::util::prompt::{argument_or_ask, reply_timed_out};
use crate::{AppError, Context};

/// Remove a player from the ladder
#[poise::command(prefix_command, slash_command, rename = "삭제")]
pub(crate) async fn delete_user(
    ctx: Context<'_>,
    #[description = "삭제할 유저명"] username: Option<String>,
) -> Result<(), AppError> {
    let Some(username) =
        argument_or_ask(ctx, username, "🗑 삭제할 유저명을 입력하세요! (30초 내 입력)").await?
    else {
        return reply_timed_out(ctx, "삭제").await;
    };

    ConfirmPrompt::new(
        format!("⚠️ `{username}` 님의 정보를 삭제하시겠습니까?"),
        Action::DeleteUser {
            username: username.clone(),
        },
        SuccessMessage::Fixed(format!("✅ `{username}` 님의 정보가 삭제되었습니다!")),
        "삭제 요청에 실패했습니다.",
    )
    .run(ctx)
    .await?;

    Ok(())
}
