#![allow(dead_code)]

use rand::prelude::*;
use crate::data_loader::{Play, UNKNOWN_PLAYER};
use crate::impact_context::{ImpactContext, RosterSpec};
use crate::scoring::{fallback_score, score, Position};

// One player's PPI over the game clock. Points are (game_seconds_remaining, score).
// Real-data series keep source order; synthesized series run in decreasing-clock
// order, i.e. chronologically. Never empty either way.
#[derive(Debug,Clone,PartialEq)]
pub struct PlayerSeries {
    pub name: String,
    pub position: Position,
    pub points: Vec<(f64, f64)>,
}

impl PlayerSeries {
    pub fn is_synthetic(&self, plays: &[Play]) -> bool {
        !plays.iter().any(|p| p.involves(&self.name))
    }
}

/*
    Builds one player's series. Every play naming the player as passer or receiver
    contributes one point, scored by the position formula. A player with no plays in
    the feed gets a synthesized series instead of an error: the caller always gets
    something displayable back.
*/
pub fn build_player_series(
    name: &str,
    position: Position,
    plays: &[Play],
    ctx: &ImpactContext,
    rng: &mut impl Rng,
) -> PlayerSeries {
    let mut points = Vec::new();
    for play in plays {
        if !play.involves(name) { continue; }
        points.push((play.game_seconds_remaining, score(position, play, rng)));
    }

    if points.is_empty() {
        points = synthesize_points(ctx, rng);
    }

    PlayerSeries {
        name: name.to_string(),
        position,
        points,
    }
}

// Placeholder series for a player with no real plays: 5-15 points walking down the
// game clock at a random 60-500s stride, scores from the fallback draw. Stops early
// if the clock runs out, so timestamps stay unique within the series.
pub fn synthesize_points(ctx: &ImpactContext, rng: &mut impl Rng) -> Vec<(f64, f64)> {
    let count = rng.random_range(ctx.synth_points_min..=ctx.synth_points_max);
    let mut remaining = ctx.game_length_seconds;

    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        remaining -= rng.random_range(ctx.synth_step_min..=ctx.synth_step_max);
        if remaining < 0.0 { remaining = 0.0; }

        points.push((remaining, fallback_score(rng)));

        if remaining == 0.0 { break; }
    }

    points
}

// One placeholder series per requested roster slot, named "<POS>-<ordinal>". These
// names never collide with real play data, so every slot takes the synthesis branch.
pub fn synthesize_roster(
    spec: &RosterSpec,
    ctx: &ImpactContext,
    rng: &mut impl Rng,
) -> Vec<PlayerSeries> {
    let mut roster = Vec::with_capacity(spec.total_slots() as usize);

    for (position, count) in spec.slots() {
        for ordinal in 1..=count {
            roster.push(PlayerSeries {
                name: format!("{}-{}", position.label(), ordinal),
                position,
                points: synthesize_points(ctx, rng),
            });
        }
    }

    roster
}

/*
    Finds every named player in the feed and guesses a position: seen as a passer
    means QB, seen only as a receiver means WR. This is a known approximation (tight
    ends come out labeled WR, non-skill positions never show up at all); callers with
    a real depth chart should skip this and hand build_player_series the position.
*/
pub fn discover_real_players(plays: &[Play]) -> Vec<(String, Position)> {
    let mut players: Vec<(String, Position)> = Vec::new();

    for play in plays {
        if play.passer != UNKNOWN_PLAYER && !players.iter().any(|(n, _)| n == &play.passer) {
            players.push((play.passer.clone(), Position::QB));
        }
    }

    for play in plays {
        if play.receiver != UNKNOWN_PLAYER && !players.iter().any(|(n, _)| n == &play.receiver) {
            players.push((play.receiver.clone(), Position::WR));
        }
    }

    players
}
