#![allow(dead_code)]

use crate::scoring::Position;

#[derive(Debug)]
pub struct ImpactContext {
    pub game_length_seconds: f64,

    pub synth_points_min: usize,
    pub synth_points_max: usize,

    pub synth_step_min: f64,        // Seconds between synthesized plays
    pub synth_step_max: f64,
}

impl ImpactContext {
    pub fn default() -> Self {
        Self {
            game_length_seconds: 3600.0,    // Regulation clock, no overtime

            synth_points_min: 5,
            synth_points_max: 15,

            synth_step_min: 60.0,
            synth_step_max: 500.0,
        }
    }
}

// How many placeholder series to generate per position. This only controls synthesis;
// real players found in the play feed are always built, whatever the counts say.
#[derive(Debug,Clone)]
pub struct RosterSpec {
    pub qb: u32,
    pub rb: u32,
    pub wr: u32,
    pub te: u32,
    pub c: u32,
    pub g: u32,
    pub ot: u32,
    pub de: u32,
    pub dt: u32,
    pub lb: u32,
    pub cb: u32,
    pub s: u32,
    pub pk: u32,
    pub p: u32,
    pub ls: u32,
}

impl RosterSpec {
    // Roughly a 53-man roster
    pub fn default() -> Self {
        Self {
            qb: 3,
            rb: 4,
            wr: 6,
            te: 3,
            c: 2,
            g: 4,
            ot: 4,
            de: 4,
            dt: 4,
            lb: 6,
            cb: 6,
            s: 4,
            pk: 1,
            p: 1,
            ls: 1,
        }
    }

    pub fn empty() -> Self {
        Self {
            qb: 0, rb: 0, wr: 0, te: 0, c: 0, g: 0, ot: 0,
            de: 0, dt: 0, lb: 0, cb: 0, s: 0, pk: 0, p: 0, ls: 0,
        }
    }

    // Slot counts in a fixed position order so synthesis output is stable run to run.
    pub fn slots(&self) -> [(Position, u32); 15] {
        [
            (Position::QB, self.qb),
            (Position::RB, self.rb),
            (Position::WR, self.wr),
            (Position::TE, self.te),
            (Position::C,  self.c),
            (Position::G,  self.g),
            (Position::OT, self.ot),
            (Position::DE, self.de),
            (Position::DT, self.dt),
            (Position::LB, self.lb),
            (Position::CB, self.cb),
            (Position::S,  self.s),
            (Position::PK, self.pk),
            (Position::P,  self.p),
            (Position::LS, self.ls),
        ]
    }

    pub fn total_slots(&self) -> u32 {
        self.slots().iter().map(|(_, count)| count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_approximates_53_players() {
        assert_eq!(RosterSpec::default().total_slots(), 53);
    }

    #[test]
    fn empty_roster_has_no_slots() {
        assert_eq!(RosterSpec::empty().total_slots(), 0);
    }
}
