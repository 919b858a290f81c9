use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::util::text::{duplicates, split_list};

/// Class played by each slot of a team, in entry order.
pub(crate) const CLASS_ORDER: [&str; 4] = ["드", "어", "넥", "슴"];
pub(crate) const TEAM_SIZE: usize = CLASS_ORDER.len();

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatchResult {
    pub(crate) winners: Vec<String>,
    pub(crate) losers: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ResultParseError {
    #[error("result text does not match a known format")]
    Format,
    #[error("both teams scored {0}")]
    Draw(u32),
    #[error("teams have {winners} and {losers} players")]
    TeamSize { winners: usize, losers: usize },
    #[error("players listed twice: {}", .0.join(", "))]
    Duplicate(Vec<String>),
}

// [아래3]a/b/c/d vs [위1]e/f/g/h
static SCORED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[아래\s*(\d+)\s*\]\s*(.+?)\s*(?i:vs)\s*\[위\s*(\d+)\s*\]\s*(.+?)\s*$")
        .expect("scored result pattern is valid")
});

// [승]a,b,c,d[패]e,f,g,h
static WIN_LOSS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[승\]\s*(.+?)\s*\[패\]\s*(.+?)\s*$").expect("win/loss pattern is valid")
});

fn parse_scored(text: &str) -> Option<Result<MatchResult, ResultParseError>> {
    let caps = SCORED.captures(text)?;
    let (Ok(lower_score), Ok(upper_score)) = (caps[1].parse::<u32>(), caps[3].parse::<u32>())
    else {
        return Some(Err(ResultParseError::Format));
    };

    let lower = split_list(&caps[2], '/');
    let upper = split_list(&caps[4], '/');

    Some(match lower_score.cmp(&upper_score) {
        std::cmp::Ordering::Greater => Ok(MatchResult {
            winners: lower,
            losers: upper,
        }),
        std::cmp::Ordering::Less => Ok(MatchResult {
            winners: upper,
            losers: lower,
        }),
        std::cmp::Ordering::Equal => Err(ResultParseError::Draw(lower_score)),
    })
}

fn parse_win_loss(text: &str) -> Option<MatchResult> {
    let caps = WIN_LOSS.captures(text)?;
    Some(MatchResult {
        winners: split_list(&caps[1], ','),
        losers: split_list(&caps[2], ','),
    })
}

/// Parse a result entry in either the scored `[아래N] … vs [위M] …` form,
/// where the side with the higher score wins, or the `[승]…[패]…` form.
///
/// Both teams must list exactly four distinct players in class order.
pub(crate) fn parse_result(text: &str) -> Result<MatchResult, ResultParseError> {
    let result = match parse_scored(text) {
        Some(scored) => scored?,
        None => parse_win_loss(text).ok_or(ResultParseError::Format)?,
    };

    if result.winners.len() != TEAM_SIZE || result.losers.len() != TEAM_SIZE {
        return Err(ResultParseError::TeamSize {
            winners: result.winners.len(),
            losers: result.losers.len(),
        });
    }

    let everyone = [result.winners.as_slice(), result.losers.as_slice()].concat();
    let repeated = duplicates(&everyone);
    if !repeated.is_empty() {
        return Err(ResultParseError::Duplicate(repeated));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &str) -> Vec<String> {
        split_list(list, ',')
    }

    #[test]
    fn scored_lower_side_wins() {
        let result = parse_result("[아래3]a/b/c/d vs [위1]e/f/g/h").unwrap();
        assert_eq!(result.winners, names("a,b,c,d"));
        assert_eq!(result.losers, names("e,f,g,h"));
    }

    #[test]
    fn scored_upper_side_wins() {
        let result = parse_result("[아래 0] a / b / c / d  VS  [위 2] e / f / g / h").unwrap();
        assert_eq!(result.winners, names("e,f,g,h"));
        assert_eq!(result.losers, names("a,b,c,d"));
    }

    #[test]
    fn scored_draw_is_rejected() {
        assert_eq!(
            parse_result("[아래2]a/b/c/d vs [위2]e/f/g/h"),
            Err(ResultParseError::Draw(2))
        );
    }

    #[test]
    fn scored_without_scores_is_not_recognized() {
        assert_eq!(
            parse_result("[아래] a/b/c/d vs [위] e/f/g/h"),
            Err(ResultParseError::Format)
        );
    }

    #[test]
    fn huge_score_is_a_format_error() {
        assert_eq!(
            parse_result("[아래99999999999]a/b/c/d vs [위1]e/f/g/h"),
            Err(ResultParseError::Format)
        );
    }

    #[test]
    fn win_loss_form() {
        let result = parse_result("[승]a, b, c, d[패]e,f,g,h").unwrap();
        assert_eq!(result.winners, names("a,b,c,d"));
        assert_eq!(result.losers, names("e,f,g,h"));
    }

    #[test]
    fn unknown_text_is_a_format_error() {
        assert_eq!(parse_result("a b c d"), Err(ResultParseError::Format));
        assert_eq!(parse_result("[패]a,b,c,d[승]e,f,g,h"), Err(ResultParseError::Format));
    }

    #[test]
    fn team_size_is_checked() {
        assert_eq!(
            parse_result("[승]a,b,c[패]e,f,g,h"),
            Err(ResultParseError::TeamSize {
                winners: 3,
                losers: 4
            })
        );
        assert_eq!(
            parse_result("[아래1]a/b/c/d/x vs [위0]e/f/g/h"),
            Err(ResultParseError::TeamSize {
                winners: 5,
                losers: 4
            })
        );
    }

    #[test]
    fn player_on_both_sides_is_rejected() {
        assert_eq!(
            parse_result("[승]a,b,c,d[패]a,f,g,h"),
            Err(ResultParseError::Duplicate(vec![String::from("a")]))
        );
    }
}
