use serde::Serialize;

/// How a match is addressed when looking it up. Lookups from `결과조회` send
/// a number, lookups ahead of a deletion send the text the user typed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum MatchKey {
    Number(u64),
    Text(String),
}

/// A request to the spreadsheet web app. The variant name becomes the
/// `action` field of the JSON body.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "camelCase")]
pub(crate) enum Action {
    Register {
        username: String,
    },
    RegisterAlias {
        username: String,
        aliases: Vec<String>,
    },
    DeleteUser {
        username: String,
    },
    GetUserInfo {
        username: String,
    },
    RegisterClass {
        username: String,
        classes: Vec<String>,
    },
    GetPlayersInfo {
        players: Vec<String>,
    },
    RegisterResult {
        game_number: String,
        winners: Vec<String>,
        losers: Vec<String>,
    },
    GetMatch {
        game_number: MatchKey,
    },
    GetRecentMatches,
    DeleteMatch {
        game_number: String,
    },
}
