//! Cross-identity game merging.
//!
//! Each participant's own games list reports a shared game, so a game between
//! two roster members is seen twice. [`merge_games`] keeps roster-vs-roster
//! games only and collapses sightings by game URL.
//!
//! Tie-break: lists are applied in roster order and a later sighting replaces
//! an earlier one wholesale, so the copy from the identity with the highest
//! roster position wins. A game keeps the output position of its first
//! sighting. Neither rule depends on fetch completion order.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{GameRecord, GameUrl, Identity, Roster, Side};

/// True when both sides of `game` are roster members.
#[must_use]
pub fn is_roster_game(roster: &Roster, game: &GameRecord) -> bool {
    [Side::White, Side::Black]
        .into_iter()
        .all(|side| roster.member_for_url(game.player_url(side)).is_some())
}

/// Merge per-identity game lists into one deduplicated list.
///
/// Identities missing from `lists` (failed fetches) simply contribute
/// nothing; lists keyed by identities outside the roster are ignored.
pub fn merge_games<'a, I>(roster: &Roster, lists: I) -> Vec<GameRecord>
where
    I: IntoIterator<Item = (&'a Identity, &'a [GameRecord])>,
{
    let mut ordered: Vec<(usize, &[GameRecord])> = lists
        .into_iter()
        .filter_map(|(identity, games)| match roster.position(identity) {
            Some(position) => Some((position, games)),
            None => {
                debug!(identity = %identity, "ignoring games list for non-roster identity");
                None
            }
        })
        .collect();
    ordered.sort_by_key(|(position, _)| *position);

    let mut merged: Vec<GameRecord> = Vec::new();
    let mut index: HashMap<GameUrl, usize> = HashMap::new();
    let mut seen = 0usize;

    for game in ordered.into_iter().flat_map(|(_, games)| games.iter()) {
        seen += 1;
        if !is_roster_game(roster, game) {
            continue;
        }
        match index.get(&game.url) {
            Some(&slot) => merged[slot] = game.clone(),
            None => {
                index.insert(game.url.clone(), merged.len());
                merged.push(game.clone());
            }
        }
    }

    debug!(seen, kept = merged.len(), "merged game lists");
    merged
}
