use std::time::Duration;

use poise::CreateReply;
use serenity::all::{
    ButtonStyle, ComponentInteraction, CreateActionRow, CreateButton, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
};
use tracing::{info, warn};

use crate::gas::Action;
use crate::gas::model::extract_game_number;
use crate::{AppError, Context};

const CONFIRM_TIMEOUT: Duration = Duration::from_secs(30);
const PROCESSING: &str = "⌛ 처리 중입니다. 잠시만 기다려주세요!";
const CANCELLED: &str = "🚫 작업이 취소되었습니다.";

/// What to say once the web app accepted the request.
pub(crate) enum SuccessMessage {
    Fixed(String),
    /// Built from the game number found in the response body.
    WithGameNumber(Box<dyn Fn(&str) -> String + Send + Sync>),
}

impl SuccessMessage {
    pub(crate) fn render(&self, body: &str) -> String {
        match self {
            SuccessMessage::Fixed(text) => text.clone(),
            SuccessMessage::WithGameNumber(build) => build(&extract_game_number(body)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmOutcome {
    Submitted,
    Failed,
    Cancelled,
    TimedOut,
}

/// A message with ✅/❌ buttons that sends `action` only after the invoking
/// user confirms it.
pub(crate) struct ConfirmPrompt {
    prompt: String,
    action: Action,
    success: SuccessMessage,
    error_message: String,
}

impl ConfirmPrompt {
    pub(crate) fn new(
        prompt: impl Into<String>,
        action: Action,
        success: SuccessMessage,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            action,
            success,
            error_message: error_message.into(),
        }
    }

    pub(crate) fn success_text(&self, body: &str) -> String {
        self.success.render(body)
    }

    pub(crate) fn failure_text(&self, err: impl std::fmt::Display) -> String {
        format!("🚨 {}\n오류: {err}", self.error_message)
    }

    pub(crate) async fn run(self, ctx: Context<'_>) -> Result<ConfirmOutcome, AppError> {
        let confirm_id = format!("{}_confirm", ctx.id());
        let cancel_id = format!("{}_cancel", ctx.id());

        let handle = ctx
            .send(
                CreateReply::default()
                    .content(&self.prompt)
                    .components(vec![CreateActionRow::Buttons(vec![
                        CreateButton::new(&confirm_id)
                            .label("✅ 확인")
                            .style(ButtonStyle::Success),
                        CreateButton::new(&cancel_id)
                            .label("❌ 취소")
                            .style(ButtonStyle::Danger),
                    ])]),
            )
            .await?;

        let waited = handle
            .message()
            .await?
            .await_component_interaction(&ctx.serenity_context().shard)
            .author_id(ctx.author().id)
            .custom_ids(vec![confirm_id, cancel_id.clone()])
            .timeout(CONFIRM_TIMEOUT)
            .await;

        let outcome = match waited {
            None => ConfirmOutcome::TimedOut,
            Some(ixn) if ixn.data.custom_id == cancel_id => {
                ixn.create_response(
                    ctx.http(),
                    CreateInteractionResponse::Message(
                        CreateInteractionResponseMessage::new()
                            .content(CANCELLED)
                            .ephemeral(true),
                    ),
                )
                .await?;
                ConfirmOutcome::Cancelled
            }
            Some(ixn) => self.submit(ctx, &ixn).await?,
        };

        // the buttons are dead either way
        handle
            .edit(
                ctx,
                CreateReply::default()
                    .content(&self.prompt)
                    .components(vec![]),
            )
            .await?;

        Ok(outcome)
    }

    async fn submit(
        &self,
        ctx: Context<'_>,
        ixn: &ComponentInteraction,
    ) -> Result<ConfirmOutcome, AppError> {
        ixn.defer(ctx.http()).await?;

        let progress = ixn
            .create_followup(
                ctx.http(),
                CreateInteractionResponseFollowup::new().content(PROCESSING),
            )
            .await?;

        let (content, outcome) = match ctx.data().http.gas.submit(&self.action).await {
            Ok(body) => {
                info!(action = ?self.action, user = %ctx.author().name, "request confirmed");
                (self.success_text(&body), ConfirmOutcome::Submitted)
            }
            Err(err) => {
                warn!(action = ?self.action, error = %err, "confirmed request failed");
                (self.failure_text(&err), ConfirmOutcome::Failed)
            }
        };

        ixn.edit_followup(
            ctx.http(),
            progress.id,
            CreateInteractionResponseFollowup::new().content(content),
        )
        .await?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(success: SuccessMessage) -> ConfirmPrompt {
        ConfirmPrompt::new(
            "prompt",
            Action::DeleteMatch {
                game_number: String::from("1"),
            },
            success,
            "경기 삭제 요청에 실패했습니다.",
        )
    }

    #[test]
    fn fixed_message_ignores_body() {
        let success = SuccessMessage::Fixed(String::from("✅ 완료"));
        assert_eq!(success.render(r#"{"game_number": 7}"#), "✅ 완료");
    }

    #[test]
    fn game_number_message_reads_body() {
        let success = SuccessMessage::WithGameNumber(Box::new(|n: &str| format!("[게임번호: {n}]")));
        assert_eq!(success.render(r#"{"game_number": 7}"#), "[게임번호: 7]");
        assert_eq!(success.render("ok"), "[게임번호: 알 수 없음]");
    }

    #[test]
    fn failure_text_appends_error() {
        let confirm = prompt(SuccessMessage::Fixed(String::new()));
        assert_eq!(
            confirm.failure_text("응답 코드 500"),
            "🚨 경기 삭제 요청에 실패했습니다.\n오류: 응답 코드 500"
        );
    }
}
