use chrono::{DateTime, Local, NaiveDateTime};
use itertools::Itertools;

use super::parse::{CLASS_ORDER, TEAM_SIZE};
use crate::gas::model::MatchRecord;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `a(드), b(어), c(넥), d(슴)`
pub(crate) fn format_team(team: &[String]) -> String {
    team.iter()
        .zip(CLASS_ORDER)
        .map(|(player, class)| format!("{player}({class})"))
        .join(", ")
}

/// Team line shown before deleting a stored match.
pub(crate) fn format_stored_team(team: &[String]) -> String {
    if team.len() < TEAM_SIZE {
        return String::from("데이터 오류 (4명 부족)");
    }
    team.iter().take(TEAM_SIZE).join(", ")
}

/// Game numbers are the local time the result was entered, as `YYMMDDHHMM`.
pub(crate) fn game_number_at(at: NaiveDateTime) -> String {
    at.format("%y%m%d%H%M").to_string()
}

/// The sheet hands back either `2025-03-01 12:30` or an RFC 3339 string;
/// anything else is shown as-is.
pub(crate) fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, DISPLAY_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| {
            DateTime::parse_from_rfc3339(raw).map(|at| at.with_timezone(&Local).naive_local())
        })
        .map(|at| at.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_owned())
}

pub(crate) fn format_recent_matches(matches: &[MatchRecord]) -> String {
    let mut msg = format!("📊 **최근 {}경기 결과:**\n", matches.len());
    for (i, record) in matches.iter().enumerate() {
        msg += &format!(
            "`[{}]` 🎮 **게임번호:** `{}`\n\
             📅 **날짜:** {}\n\
             🏆 **승리 팀:** {}\n\
             ❌ **패배 팀:** {}\n\n",
            i + 1,
            record.game_number,
            format_timestamp(&record.timestamp.0),
            record.winners.names().join(", "),
            record.losers.names().join(", "),
        );
    }
    msg
}

pub(crate) fn format_match_detail(record: &MatchRecord) -> String {
    format!(
        "📜 **경기 정보**\n\
         🎮 **게임번호:** `{}`\n\
         📅 **날짜:** {}\n\
         🏆 **승리 팀:** {}\n\
         ❌ **패배 팀:** {}",
        record.game_number,
        format_timestamp(&record.timestamp.0),
        record.winners.names().join(", "),
        record.losers.names().join(", "),
    )
}
