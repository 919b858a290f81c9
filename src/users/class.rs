use crate::gas::Action;
use crate::matches::parse::CLASS_ORDER;
use crate::util::confirm::{ConfirmPrompt, SuccessMessage};
use crate::util::prompt::{argument_or_ask, reply_timed_out};
use crate::util::text::split_list;
use crate::{AppError, Context};

fn class_prompt(username: String, classes: Vec<String>) -> ConfirmPrompt {
    let joined = classes.join(", ");
    ConfirmPrompt::new(
        format!("🛡 `{username}` 님의 클래스를 `{joined}` (으)로 등록하시겠습니까?"),
        Action::RegisterClass {
            username: username.clone(),
            classes,
        },
        SuccessMessage::Fixed(format!("✅ `{username}` 님의 클래스가 등록되었습니다: {joined}")),
        "클래스 등록 요청에 실패했습니다.",
    )
}

/// Set the classes a player can play
#[poise::command(prefix_command, slash_command, rename = "클래스")]
pub(crate) async fn register_class(
    ctx: Context<'_>,
    #[description = "클래스를 등록할 유저명"] username: Option<String>,
    #[description = "쉼표로 구분한 클래스 목록 (예시: 드,어,넥,슴)"]
    #[rest]
    classes: Option<String>,
) -> Result<(), AppError> {
    let Some(username) = argument_or_ask(
        ctx,
        username,
        "🎭 클래스를 등록할 유저명을 입력하세요! (30초 내 입력)",
    )
    .await?
    else {
        return reply_timed_out(ctx, "클래스").await;
    };

    let question = format!(
        "🛡 `{username}` 님의 클래스를 입력하세요! (쉼표로 구분(예시 : {}), 30초 내 입력)",
        CLASS_ORDER.join(",")
    );
    let Some(classes) = argument_or_ask(ctx, classes, &question).await? else {
        return reply_timed_out(ctx, "클래스").await;
    };

    let classes = split_list(&classes, ',');
    if classes.is_empty() {
        ctx.say("🚨 등록할 클래스를 하나 이상 입력하세요!").await?;
        return Ok(());
    }

    class_prompt(username, classes).run(ctx).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_joins_classes() {
        let prompt = class_prompt(
            String::from("a"),
            vec![String::from("드"), String::from("슴")],
        );
        assert_eq!(prompt.success_text(""), "✅ `a` 님의 클래스가 등록되었습니다: 드, 슴");
    }
}
