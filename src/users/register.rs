use crate::gas::Action;
use crate::util::confirm::{ConfirmPrompt, SuccessMessage};
use crate::util::prompt::{argument_or_ask, reply_timed_out};
use crate::{AppError, Context};

fn register_prompt(username: String) -> ConfirmPrompt {
    ConfirmPrompt::new(
        format!("📋 `{username}` 님을 등록하시겠습니까?"),
        Action::Register {
            username: username.clone(),
        },
        SuccessMessage::Fixed(format!("✅ `{username}` 님이 등록되었습니다!")),
        "등록 요청에 실패했습니다.",
    )
}

/// Register a player on the ladder
#[poise::command(prefix_command, slash_command, rename = "등록")]
pub(crate) async fn register(
    ctx: Context<'_>,
    #[description = "등록할 유저명"] username: Option<String>,
) -> Result<(), AppError> {
    let Some(username) =
        argument_or_ask(ctx, username, "🎮 등록할 유저명을 입력하세요! (30초 내 입력)").await?
    else {
        return reply_timed_out(ctx, "등록").await;
    };

    register_prompt(username).run(ctx).await?;
    Ok(())
}
