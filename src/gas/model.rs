use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) const UNKNOWN: &str = "알 수 없음";

/// Renders a JSON scalar the way the spreadsheet shows it.
pub(crate) fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A spreadsheet cell that may come back as a string, a number or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LooseText(pub(crate) String);

impl LooseText {
    pub(crate) fn or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.0.trim() {
            "" => fallback,
            text => text,
        }
    }
}

impl Display for LooseText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LooseText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(text_of(&Value::deserialize(deserializer)?)))
    }
}

fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    LooseText::deserialize(deserializer).map(|text| text.0)
}

fn loose_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct UserInfo {
    #[serde(default)]
    pub(crate) username: LooseText,
    #[serde(default)]
    pub(crate) class: LooseText,
    #[serde(default)]
    pub(crate) nickname: LooseText,
    #[serde(default)]
    pub(crate) last_game: LooseText,
    #[serde(default)]
    pub(crate) season_wins: LooseText,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub(crate) struct PlayerInfo {
    #[serde(deserialize_with = "loose_string")]
    pub(crate) username: String,
    #[serde(default, deserialize_with = "loose_f64")]
    pub(crate) mmr: f64,
    #[serde(default, deserialize_with = "loose_string")]
    pub(crate) class: String,
}

impl PlayerInfo {
    /// Classes are stored as one `", "` separated cell.
    pub(crate) fn classes(&self) -> impl Iterator<Item = &str> {
        self.class
            .split(',')
            .map(str::trim)
            .filter(|class| !class.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayersInfo {
    pub(crate) players: Vec<PlayerInfo>,
}

impl PlayersInfo {
    /// Names from `requested` the web app did not return, in request order.
    pub(crate) fn missing(&self, requested: &[String]) -> Vec<String> {
        let registered: HashSet<&str> = self.players.iter().map(|p| p.username.as_str()).collect();
        requested
            .iter()
            .filter(|name| !registered.contains(name.as_str()))
            .cloned()
            .collect_vec()
    }
}

/// A team as stored in the results sheet: either one joined cell or a list.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum TeamField {
    List(Vec<LooseText>),
    Text(String),
}

impl Default for TeamField {
    fn default() -> Self {
        TeamField::List(vec![])
    }
}

impl TeamField {
    pub(crate) fn names(&self) -> Vec<String> {
        match self {
            TeamField::List(names) => names.iter().map(|n| n.0.trim().to_owned()).collect_vec(),
            TeamField::Text(text) => text
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect_vec(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct MatchRecord {
    #[serde(default)]
    pub(crate) game_number: LooseText,
    #[serde(default)]
    pub(crate) timestamp: LooseText,
    #[serde(default)]
    pub(crate) winners: TeamField,
    #[serde(default)]
    pub(crate) losers: TeamField,
}

/// Answer to `getMatch` / `getRecentMatches`.
#[derive(Debug, Deserialize)]
#[serde(try_from = "Value")]
pub(crate) enum MatchQuery {
    Recent(Vec<MatchRecord>),
    Single(MatchRecord),
    NotFound,
}

impl TryFrom<Value> for MatchQuery {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Some(matches) = value.get("matches").and_then(Value::as_array)
            && !matches.is_empty()
        {
            return Ok(MatchQuery::Recent(serde_json::from_value(Value::Array(
                matches.clone(),
            ))?));
        }

        if value.get("game_number").is_some() {
            return Ok(MatchQuery::Single(serde_json::from_value(value)?));
        }

        Ok(MatchQuery::NotFound)
    }
}

static GAME_NUMBER_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"게임번호:\s*(\d+)").expect("game number pattern is valid"));

/// Pull the game number out of a `registerResult` answer, which is either
/// JSON or a sentence such as `"게임번호: 2503011230"`.
pub(crate) fn extract_game_number(body: &str) -> String {
    let trimmed = body.trim().trim_matches('"');

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return value
            .get("game_number")
            .map(text_of)
            .unwrap_or_else(|| UNKNOWN.to_owned());
    }

    GAME_NUMBER_TEXT
        .captures(trimmed)
        .map(|caps| caps[1].to_owned())
        .unwrap_or_else(|| UNKNOWN.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_info_tolerates_numbers_and_gaps() {
        let info: UserInfo = serde_json::from_str(
            r#"{"username": "규석문", "class": "드, 넥", "season_wins": 12}"#,
        )
        .unwrap();

        assert_eq!(info.username.0, "규석문");
        assert_eq!(info.season_wins.0, "12");
        assert_eq!(info.nickname.or("[Data 없음]"), "[Data 없음]");
    }

    #[test]
    fn mmr_accepts_strings() {
        let player: PlayerInfo =
            serde_json::from_str(r#"{"username": "a", "mmr": " 1432.5 ", "class": "슴"}"#).unwrap();
        assert_eq!(player.mmr, 1432.5);

        let player: PlayerInfo = serde_json::from_str(r#"{"username": "b"}"#).unwrap();
        assert_eq!(player.mmr, 0.0);
        assert_eq!(player.classes().count(), 0);
    }

    #[test]
    fn numeric_names_and_null_classes_are_read_as_text() {
        let info: PlayersInfo = serde_json::from_str(
            r#"{"players": [{"username": 1234, "mmr": 1500, "class": null},
                            {"username": "b", "mmr": "1400", "class": "드"}]}"#,
        )
        .unwrap();

        assert_eq!(info.players[0].username, "1234");
        assert_eq!(info.players[0].class, "");
        assert_eq!(info.players[0].classes().count(), 0);
        assert!(info.missing(&[String::from("1234"), String::from("b")]).is_empty());
    }

    #[test]
    fn classes_split_on_commas() {
        let player = PlayerInfo {
            username: String::from("a"),
            mmr: 0.0,
            class: String::from("드, 어,넥"),
        };
        assert_eq!(player.classes().collect_vec(), vec!["드", "어", "넥"]);
    }

    #[test]
    fn missing_players_keep_request_order() {
        let info = PlayersInfo {
            players: vec![PlayerInfo {
                username: String::from("b"),
                mmr: 0.0,
                class: String::new(),
            }],
        };
        let requested = ["c", "b", "a"].map(String::from);
        assert_eq!(info.missing(&requested), vec!["c", "a"]);
    }

    #[test]
    fn team_field_reads_joined_cells_and_lists() {
        let joined: TeamField = serde_json::from_str(r#""a, b, c, d""#).unwrap();
        let listed: TeamField = serde_json::from_str(r#"["a", "b"]"#).unwrap();

        assert_eq!(joined.names(), vec!["a", "b", "c", "d"]);
        assert_eq!(listed.names(), vec!["a", "b"]);
        assert!(TeamField::Text(String::new()).names().is_empty());
    }

    #[test]
    fn team_lists_may_hold_numbers() {
        let record: MatchRecord = serde_json::from_str(
            r#"{"game_number": 1, "winners": [1234, "b", "c", "d"], "losers": "e, f, g, h"}"#,
        )
        .unwrap();

        assert_eq!(record.winners.names(), vec!["1234", "b", "c", "d"]);
        assert_eq!(record.losers.names().len(), 4);
    }

    #[test]
    fn match_query_recent() {
        let query: MatchQuery = serde_json::from_str(
            r#"{"matches": [{"game_number": 2503011230, "timestamp": "2025-03-01 12:30",
                "winners": "a, b, c, d", "losers": "e, f, g, h"}]}"#,
        )
        .unwrap();

        let MatchQuery::Recent(matches) = query else {
            panic!("expected recent matches");
        };
        assert_eq!(matches[0].game_number.0, "2503011230");
        assert_eq!(matches[0].losers.names().len(), 4);
    }

    #[test]
    fn match_query_single_and_empty() {
        let single: MatchQuery =
            serde_json::from_str(r#"{"game_number": "1", "winners": [], "losers": []}"#).unwrap();
        assert!(matches!(single, MatchQuery::Single(record) if record.game_number.0 == "1"));

        let empty: MatchQuery = serde_json::from_str(r#"{"matches": []}"#).unwrap();
        assert!(matches!(empty, MatchQuery::NotFound));
    }

    #[test]
    fn game_number_from_json_body() {
        assert_eq!(
            extract_game_number(r#" {"game_number": 2503011230} "#),
            "2503011230"
        );
        assert_eq!(extract_game_number(r#"{"ok": true}"#), UNKNOWN);
    }

    #[test]
    fn game_number_from_text_body() {
        assert_eq!(
            extract_game_number("\"경기 결과 등록 완료! 게임번호: 2503011230\""),
            "2503011230"
        );
        assert_eq!(extract_game_number("등록 완료"), UNKNOWN);
    }
}
