#![allow(dead_code)]

use rand::prelude::*;
use crate::data_loader::Play;

// Range of the insufficient-data fallback draw. Symmetric around zero so padded
// series hover around the axis instead of biasing the team aggregate.
pub const FALLBACK_SCORE_MIN: f64 = -1.0;
pub const FALLBACK_SCORE_MAX: f64 = 1.0;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum Position {
    QB, RB, WR, TE, C, G, OT, DE, DT, LB, CB, S, PK, P, LS,
}

impl Position {
    pub fn parse(label: &str) -> Option<Position> {
        match label.to_uppercase().as_str() {
            "QB" => Some(Position::QB),
            "RB" => Some(Position::RB),
            "WR" => Some(Position::WR),
            "TE" => Some(Position::TE),
            "C"  => Some(Position::C),
            "G"  => Some(Position::G),
            "OT" => Some(Position::OT),
            "DE" => Some(Position::DE),
            "DT" => Some(Position::DT),
            "LB" => Some(Position::LB),
            "CB" => Some(Position::CB),
            "S"  => Some(Position::S),
            "PK" => Some(Position::PK),
            "P"  => Some(Position::P),
            "LS" => Some(Position::LS),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::C  => "C",
            Position::G  => "G",
            Position::OT => "OT",
            Position::DE => "DE",
            Position::DT => "DT",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::S  => "S",
            Position::PK => "PK",
            Position::P  => "P",
            Position::LS => "LS",
        }
    }
}

/*
    Per-play Performance Index for one position. QBs are scored off their passing
    impact, receivers off the catch-and-run split. Every other position has no
    per-play formula in the feed, so it falls through to the random draw below;
    that's the documented insufficient-data fallback, not an error. All randomness
    comes from the caller's rng so a seeded run reproduces exactly.
*/
pub fn score(position: Position, play: &Play, rng: &mut impl Rng) -> f64 {
    match position {
        Position::QB => {
            0.5 * play.qb_epa
                + 0.2 * play.air_epa
                + 0.2 * play.wpa
                + 0.1 * (play.yards_gained / 10.0)
        }
        Position::WR | Position::TE => {
            0.4 * play.yac_epa
                + 0.3 * play.air_epa
                + 0.2 * play.wpa
                + 0.1 * (play.yards_gained / 10.0)
        }
        _ => fallback_score(rng),
    }
}

// Used whenever there's nothing to score deterministically: unscored positions and
// synthesized plays. Callers can always ask for a score, even with no play behind it.
pub fn fallback_score(rng: &mut impl Rng) -> f64 {
    rng.random_range(FALLBACK_SCORE_MIN..=FALLBACK_SCORE_MAX)
}
