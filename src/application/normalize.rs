//! Profile + stats normalization into [`PlayerRecord`].

use crate::domain::{Identity, PlayerRecord, TimeClass};
use crate::port::{ProfilePayload, StatsPayload};

/// Merge a profile with the stats fetched for the same identity.
///
/// `stats` is `None` when the stats read failed and nothing was cached; the
/// record then has no stats snapshot. No numeric defaults are filled in.
#[must_use]
pub fn normalize(
    profile: &ProfilePayload,
    stats: Option<&StatsPayload>,
    time_class: TimeClass,
) -> PlayerRecord {
    PlayerRecord {
        identity: Identity::new(profile.username.clone()),
        url: profile.url.clone(),
        player_id: profile.player_id,
        name: profile.name.clone(),
        status: profile.status,
        title: profile.title.clone(),
        avatar: profile.avatar.clone(),
        location: profile.location.clone(),
        country: profile.country.clone(),
        joined: profile.joined,
        last_online: profile.last_online,
        followers: profile.followers,
        is_streamer: profile.is_streamer,
        twitch_url: profile.twitch_url.clone(),
        fide: known_fide(profile.fide).or_else(|| known_fide(stats.and_then(|s| s.fide))),
        stats: stats.and_then(|s| s.for_class(time_class)).cloned(),
    }
}

/// The remote service reports `0` for players without a FIDE rating.
fn known_fide(fide: Option<u32>) -> Option<u32> {
    fide.filter(|&rating| rating > 0)
}
