use crate::{AppError, Context};

fn help_text(prefix: &str) -> String {
    let commands = [
        ("등록 [유저명]", "유저 등록"),
        ("별명등록 [유저명] [별명1, 별명2, ...]", "유저 별명 추가"),
        ("삭제 [유저명]", "유저 삭제"),
        ("조회 [유저명]", "유저 정보 조회"),
        ("클래스 [유저명] [클래스1, 클래스2, ...]", "유저 클래스 등록"),
        (
            "결과등록 [아래N]유저1/유저2/유저3/유저4 vs [위M]유저5/유저6/유저7/유저8",
            "경기 결과 등록 (점수가 높은 팀이 승리)",
        ),
        (
            "결과등록 [승]유저1,유저2,유저3,유저4[패]유저5,유저6,유저7,유저8",
            "경기 결과 등록",
        ),
        ("결과조회 [게임번호]", "경기 결과 조회 (생략 시 최근 경기)"),
        ("결과삭제 [게임번호]", "경기 기록 삭제"),
        ("팀생성 [유저1, 유저2, ...]", "자동 팀 생성 (정확히 8명)"),
        ("도움말", "명령어 목록 확인"),
    ];

    let lines = commands
        .iter()
        .map(|(usage, what)| format!("{prefix}{usage} - {what}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("**📜 사용 가능한 명령어 목록:**\n```yaml\n{lines}\n```")
}

/// List the available commands
#[poise::command(
    prefix_command,
    slash_command,
    rename = "도움말",
    aliases("도움", "헬프", "명령어")
)]
pub(crate) async fn help(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.say(help_text(ctx.prefix())).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_is_listed_with_prefix() {
        let text = help_text("!");
        for command in [
            "!등록", "!별명등록", "!삭제", "!조회", "!클래스", "!결과등록", "!결과조회",
            "!결과삭제", "!팀생성", "!도움말",
        ] {
            assert!(text.contains(command), "{command} missing");
        }
        assert!(text.starts_with("**📜 사용 가능한 명령어 목록:**\n```yaml\n"));
        assert!(text.ends_with("\n```"));
    }
}
