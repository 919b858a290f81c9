use crate::gas::Action;
use crate::util::ContextExtras as _;
use crate::{AppError, Context};

async fn check_gas_ok(ctx: &Context<'_>) -> Result<(), AppError> {
    ctx.data().http.gas.post(&Action::GetRecentMatches).await?;
    Ok(())
}

fn ping_text(ping_ms: u128, gas: Result<(), AppError>) -> String {
    let heartbeat = match ping_ms {
        0 => String::from("🏓 연결됨! 아직 핑을 측정하는 중입니다."),
        _ => format!("🏓 퐁! 응답 속도 {ping_ms}ms"),
    };
    let gas = match gas {
        Ok(()) => String::from("✅ 스프레드시트 연결 정상"),
        Err(err) => format!("🚨 스프레드시트 연결 실패: {err}"),
    };
    format!("{heartbeat}\n\n{gas}")
}

/// Check bot is alive, get numerical ping to Discord
#[poise::command(prefix_command, slash_command, rename = "핑")]
pub(crate) async fn ping(ctx: Context<'_>) -> Result<(), AppError> {
    let ping_ms = ctx.ping().await.as_millis();
    let gas = check_gas_ok(&ctx).await;

    ctx.reply_ephemeral(ping_text(ping_ms, gas)).await?;
    Ok(())
}
