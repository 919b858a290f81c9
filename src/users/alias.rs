use crate::gas::Action;
use crate::util::confirm::{ConfirmPrompt, SuccessMessage};
use crate::util::prompt::{argument_or_ask, reply_timed_out};
use crate::util::text::split_list;
use crate::{AppError, Context};

fn alias_prompt(username: String, aliases: Vec<String>) -> ConfirmPrompt {
    let joined = aliases.join(", ");
    ConfirmPrompt::new(
        format!("📋 `{username}` 님의 별명을 `{joined}` (으)로 등록하시겠습니까?"),
        Action::RegisterAlias {
            username: username.clone(),
            aliases,
        },
        SuccessMessage::Fixed(format!("✅ `{username}` 님의 별명이 등록되었습니다: {joined}")),
        "별명 등록 요청에 실패했습니다.",
    )
}

/// Add nicknames for a registered player
#[poise::command(prefix_command, slash_command, rename = "별명등록")]
pub(crate) async fn register_alias(
    ctx: Context<'_>,
    #[description = "별명을 등록할 유저명"] username: Option<String>,
    #[description = "쉼표로 구분한 별명 목록"]
    #[rest]
    aliases: Option<String>,
) -> Result<(), AppError> {
    let Some(username) = argument_or_ask(
        ctx,
        username,
        "🎮 별명을 등록할 유저명을 입력하세요! (30초 내 입력)",
    )
    .await?
    else {
        return reply_timed_out(ctx, "별명등록").await;
    };

    let question = format!("✏️ `{username}` 님의 별명을 입력하세요! (쉼표로 구분, 30초 내 입력)");
    let Some(aliases) = argument_or_ask(ctx, aliases, &question).await? else {
        return reply_timed_out(ctx, "별명등록").await;
    };

    let aliases = split_list(&aliases, ',');
    if aliases.is_empty() {
        ctx.say("🚨 등록할 별명을 하나 이상 입력하세요!").await?;
        return Ok(());
    }

    alias_prompt(username, aliases).run(ctx).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_lists_every_alias() {
        let prompt = alias_prompt(
            String::from("규석문"),
            vec![String::from("석문"), String::from("gyu")],
        );
        assert_eq!(
            prompt.success_text(""),
            "✅ `규석문` 님의 별명이 등록되었습니다: 석문, gyu"
        );
    }
}
