use rand::seq::IndexedRandom;
use serenity::all::{
    ActivityData, ActivityType, Context, EventHandler, OnlineStatus, Permissions, Ready,
};
use serenity::async_trait;
use std::time::Duration;
use tokio::time;
use tracing::info;

use crate::util::text::bot_invite_url;

const STATUS_CYCLE: Duration = Duration::from_secs(120);

pub(crate) struct LadderEventHandler;

#[async_trait]
impl EventHandler for LadderEventHandler {
    async fn ready(&self, ctx: Context, ready_info: Ready) {
        info!(
            user = %ready_info.user.tag(),
            uid = %ready_info.user.id,
            api_version = ready_info.version,
            "connected"
        );
        info!(
            "invite link: {}",
            bot_invite_url(ready_info.user.id, Permissions::empty(), true)
        );

        tokio::spawn(async move {
            let mut interval = time::interval(STATUS_CYCLE);

            let status = [
                "!도움말 로 명령어 확인",
                "팀 나누는 중",
                "MMR 계산 중",
                "경기 결과 기다리는 중",
                "드, 어, 넥, 슴",
                "[아래] vs [위]",
            ];

            loop {
                let state = status.choose(&mut rand::rng()).copied().unwrap_or(status[0]);
                ctx.shard.set_presence(
                    Some(ActivityData {
                        name: String::from("ladder"),
                        kind: ActivityType::Custom,
                        state: Some(String::from(state)),
                        url: None,
                    }),
                    OnlineStatus::Online,
                );
                interval.tick().await;
            }
        });
        info!("status cycling active");
    }
}
