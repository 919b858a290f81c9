use itertools::Itertools;
use serenity::all::{Permissions, UserId};

pub(crate) fn bot_invite_url(
    id: UserId,
    permissions: Permissions,
    with_slash_commands: bool,
) -> String {
    let perms_section = permissions.bits().to_string();
    format!(
        "https://discord.com/oauth2/authorize?client_id={id}&permissions={perms_section}&integration_type=0&scope=bot{}",
        if with_slash_commands {
            "+applications.commands"
        } else {
            ""
        }
    )
}

/// Split user input such as `드, 어,넥` into trimmed, non-empty items.
pub(crate) fn split_list(text: &str, sep: char) -> Vec<String> {
    text.split(sep)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect_vec()
}

/// Items that occur more than once, each reported once, in first-seen order.
pub(crate) fn duplicates(items: &[String]) -> Vec<String> {
    items
        .iter()
        .duplicates()
        .cloned()
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(split_list(" 드, 어 ,,넥 ", ','), vec!["드", "어", "넥"]);
        assert!(split_list("  ", ',').is_empty());
        assert_eq!(split_list("a/b", '/'), vec!["a", "b"]);
    }

    #[test]
    fn duplicates_reported_once() {
        let items = ["a", "b", "a", "c", "a", "b"].map(String::from);
        assert_eq!(duplicates(&items), vec!["a", "b"]);
    }

    #[test]
    fn invite_url_scopes() {
        let url = bot_invite_url(UserId::new(42), Permissions::empty(), true);
        assert!(url.contains("client_id=42"));
        assert!(url.ends_with("scope=bot+applications.commands"));
    }
}
