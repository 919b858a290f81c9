use tracing::warn;

use crate::gas::Action;
use crate::gas::model::{UNKNOWN, UserInfo};
use crate::{AppError, Context};

const NO_DATA: &str = "[Data 없음]";

fn format_user_info(info: &UserInfo) -> String {
    format!(
        "📜 **`{}` 님의 정보**\n\
         \n🛡 **플레이 가능 클래스:** {}\n\
         🎭 **별명:** {}\n\
         📅 **마지막 경기 일시:** {}\n\
         🏆 **이번 시즌 전체 승수:** {}승",
        info.username.or(UNKNOWN),
        info.class.or(NO_DATA),
        info.nickname.or(NO_DATA),
        info.last_game.or(NO_DATA),
        info.season_wins.or("0"),
    )
}

/// Show a player's classes, nicknames and season record
#[poise::command(prefix_command, slash_command, rename = "조회")]
pub(crate) async fn lookup_user(
    ctx: Context<'_>,
    #[description = "조회할 유저명"] username: Option<String>,
) -> Result<(), AppError> {
    let Some(username) = username.filter(|name| !name.trim().is_empty()) else {
        ctx.say(format!(
            "🔍 조회할 유저명을 입력하세요! 예시: `{}조회 규석문`",
            ctx.prefix()
        ))
        .await?;
        return Ok(());
    };

    let action = Action::GetUserInfo {
        username: username.trim().to_owned(),
    };
    let reply = match ctx.data().http.gas.query::<UserInfo>(&action).await {
        Ok(info) => format_user_info(&info),
        Err(err) => {
            warn!(%username, error = %err, "user lookup failed");
            err.user_message()
        }
    };

    ctx.say(reply).await?;
    Ok(())
}
