use std::time::Duration;

use serenity::all::MessageCollector;

use crate::{AppError, Context};

pub(crate) const PROMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// Wait for the invoking user's next message in the same channel.
///
/// Messages that start with the command prefix are skipped so that retyping a
/// command is not also swallowed as an answer.
pub(crate) async fn await_reply(ctx: Context<'_>) -> Option<String> {
    let prefix = ctx.prefix().to_owned();

    MessageCollector::new(&ctx.serenity_context().shard)
        .author_id(ctx.author().id)
        .channel_id(ctx.channel_id())
        .filter(move |msg| {
            let content = msg.content.trim();
            !content.is_empty() && !content.starts_with(prefix.as_str())
        })
        .timeout(PROMPT_TIMEOUT)
        .await
        .map(|msg| msg.content.trim().to_owned())
}

/// Post `question` and wait for the answer. `None` means the wait timed out.
pub(crate) async fn ask(
    ctx: Context<'_>,
    question: impl Into<String>,
) -> Result<Option<String>, AppError> {
    ctx.say(question).await?;
    Ok(await_reply(ctx).await)
}

/// Use the inline argument if one was given, otherwise ask for it.
pub(crate) async fn argument_or_ask(
    ctx: Context<'_>,
    given: Option<String>,
    question: &str,
) -> Result<Option<String>, AppError> {
    match given.map(|arg| arg.trim().to_owned()) {
        Some(arg) if !arg.is_empty() => Ok(Some(arg)),
        _ => ask(ctx, question).await,
    }
}

pub(crate) fn timeout_message(prefix: &str, command: &str) -> String {
    format!("⏳ 시간이 초과되었습니다. 다시 `{prefix}{command}`을(를) 입력하세요!")
}

pub(crate) async fn reply_timed_out(ctx: Context<'_>, command: &str) -> Result<(), AppError> {
    ctx.say(timeout_message(ctx.prefix(), command)).await?;
    Ok(())
}
