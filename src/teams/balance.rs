use std::collections::HashSet;

use itertools::Itertools;
use rand::Rng;
use rand::seq::index::sample;

use crate::gas::model::PlayerInfo;
use crate::matches::parse::CLASS_ORDER;

/// Number of draws before giving up on a valid split.
pub(crate) const MAX_ATTEMPTS: usize = 10;

/// Two teams drawn from a ranked roster. `lower` is announced as `[아래]`,
/// `upper` as `[위]`.
#[derive(Debug)]
pub(crate) struct Teams<'a> {
    pub(crate) lower: Vec<&'a PlayerInfo>,
    pub(crate) upper: Vec<&'a PlayerInfo>,
}

impl Teams<'_> {
    /// `[아래] a/b/c/d vs [위] e/f/g/h`
    pub(crate) fn matchup(&self) -> String {
        let names = |team: &[&PlayerInfo]| team.iter().map(|p| p.username.as_str()).join("/");
        format!("[아래] {} vs [위] {}", names(&self.lower), names(&self.upper))
    }
}

/// Highest MMR first; ties keep their order.
pub(crate) fn rank_by_mmr(players: &mut [PlayerInfo]) {
    players.sort_by(|a, b| b.mmr.total_cmp(&a.mmr));
}

/// Take half of the top half and half of the bottom half of `ranked` as one
/// team; everyone else forms the other team, still in rank order.
pub(crate) fn draw_teams<'a, R: Rng + ?Sized>(ranked: &'a [PlayerInfo], rng: &mut R) -> Teams<'a> {
    let half = ranked.len() / 2;
    let picks = half / 2;

    let chosen = sample(&mut *rng, half, picks)
        .into_iter()
        .chain(sample(&mut *rng, ranked.len() - half, picks).into_iter().map(|i| i + half))
        .collect_vec();

    let lower = chosen.iter().map(|&i| &ranked[i]).collect_vec();
    let upper = (0..ranked.len())
        .filter(|i| !chosen.contains(i))
        .map(|i| &ranked[i])
        .collect_vec();

    Teams { lower, upper }
}

/// Both teams together can field every class.
pub(crate) fn covers_required_classes(teams: &Teams<'_>) -> bool {
    let fielded: HashSet<&str> = teams
        .lower
        .iter()
        .chain(teams.upper.iter())
        .flat_map(|player| player.classes())
        .collect();

    CLASS_ORDER.iter().all(|class| fielded.contains(class))
}

/// Draw up to [`MAX_ATTEMPTS`] times until `is_valid` accepts the split.
pub(crate) fn balance_teams<'a, R: Rng + ?Sized>(
    ranked: &'a [PlayerInfo],
    rng: &mut R,
    is_valid: impl Fn(&Teams<'a>) -> bool,
) -> Option<Teams<'a>> {
    (0..MAX_ATTEMPTS)
        .map(|_| draw_teams(ranked, &mut *rng))
        .find(|teams| is_valid(teams))
}
