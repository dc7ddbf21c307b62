#![allow(dead_code)]

use std::collections::HashMap;
use rand::prelude::*;
use crate::data_loader::Play;
use crate::impact_context::{ImpactContext, RosterSpec};
use crate::series::*;

// Team Performance Index over the game clock: one (game_seconds_remaining, sum)
// entry per distinct timestamp, ascending.
#[derive(Debug,Clone,PartialEq)]
pub struct TeamSeries {
    pub points: Vec<(f64, f64)>,
}

/*
    Sums every player's score at each distinct timestamp. Timestamps come from the
    union of all player series and all source plays; matching is exact f64 equality,
    no interpolation or snapping. Policy choices (documented, applied everywhere):
      - Dense output: a timestamp nobody scored at still gets a 0.0 entry, so the
        series covers every observed tick.
      - Collisions across players both contribute; the timestamp is not a unique key.
    Each series is indexed by timestamp bit pattern up front, so the scan is
    O(timestamps x players) lookups rather than a nested series walk.
*/
pub fn aggregate_team(players: &[PlayerSeries], plays: &[Play]) -> TeamSeries {
    let mut timestamps: Vec<f64> = Vec::new();
    for series in players {
        for &(seconds, _) in &series.points {
            timestamps.push(seconds);
        }
    }
    for play in plays {
        timestamps.push(play.game_seconds_remaining);
    }

    timestamps.sort_by(|a, b| a.partial_cmp(b).unwrap());
    timestamps.dedup();

    let mut indexes: Vec<HashMap<u64, f64>> = Vec::with_capacity(players.len());
    for series in players {
        let mut index = HashMap::with_capacity(series.points.len());
        for &(seconds, value) in &series.points {
            // Summing (not overwriting) keeps within-series duplicates contributing,
            // consistent with the cross-player collision policy
            *index.entry(seconds.to_bits()).or_insert(0.0) += value;
        }
        indexes.push(index);
    }

    let mut points = Vec::with_capacity(timestamps.len());
    for seconds in timestamps {
        let mut total = 0.0;
        for index in &indexes {
            if let Some(value) = index.get(&seconds.to_bits()) {
                total += value;
            }
        }
        points.push((seconds, total));
    }

    TeamSeries { points }
}

/*
    The whole pipeline over an already-normalized play set: discover the named
    players, build their real series, pad the roster with synthetic slots, then
    aggregate everything into the team series. Real players come first in the
    returned vector, synthetic slots after.
*/
pub fn compute_ppi_tpi(
    plays: &[Play],
    roster: &RosterSpec,
    ctx: &ImpactContext,
    rng: &mut impl Rng,
) -> (Vec<PlayerSeries>, TeamSeries) {
    let mut players = Vec::new();
    for (name, position) in discover_real_players(plays) {
        players.push(build_player_series(&name, position, plays, ctx, rng));
    }

    players.extend(synthesize_roster(roster, ctx, rng));

    let team = aggregate_team(&players, plays);
    (players, team)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use crate::data_loader::{normalize_plays, RawPlay};
    use crate::scoring::Position;

    fn series(name: &str, position: Position, points: Vec<(f64, f64)>) -> PlayerSeries {
        PlayerSeries { name: name.to_string(), position, points }
    }

    fn qb_raw(name: &str, seconds: f64, qb_epa: f64) -> RawPlay {
        let mut raw = RawPlay::absent();
        raw.passer_player_name = Some(name.to_string());
        raw.game_seconds_remaining = Some(seconds);
        raw.qb_epa = Some(qb_epa);
        raw
    }

    #[test]
    fn aggregation_sums_shared_timestamps() {
        let a = series("A", Position::QB, vec![(100.0, 0.5), (200.0, 1.0)]);
        let b = series("B", Position::WR, vec![(100.0, 0.25)]);

        let team = aggregate_team(&[a, b], &[]);

        assert_eq!(team.points, vec![(100.0, 0.75), (200.0, 1.0)]);
    }

    #[test]
    fn aggregation_commutes_over_player_order() {
        let a = series("A", Position::QB, vec![(100.0, 0.5), (300.0, -0.2)]);
        let b = series("B", Position::WR, vec![(100.0, 0.25), (200.0, 0.1)]);

        let forward = aggregate_team(&[a.clone(), b.clone()], &[]);
        let reverse = aggregate_team(&[b, a], &[]);

        assert_eq!(forward, reverse);
    }

    #[test]
    fn play_timestamps_without_contributors_emit_zero() {
        let a = series("A", Position::QB, vec![(100.0, 0.5)]);
        // A play nobody's series covers (e.g. attributed to Unknown)
        let plays = normalize_plays(vec![qb_raw("Unknown", 50.0, 0.0)]);

        let team = aggregate_team(&[a], &plays);

        assert_eq!(team.points, vec![(50.0, 0.0), (100.0, 0.5)]);
    }

    #[test]
    fn empty_input_yields_empty_team_series() {
        let team = aggregate_team(&[], &[]);
        assert!(team.points.is_empty());
    }

    #[test]
    fn end_to_end_single_qb() {
        let plays = normalize_plays(vec![
            qb_raw("J.Hurts", 100.0, 1.0),
            qb_raw("J.Hurts", 200.0, 2.0),
        ]);

        let ctx = ImpactContext::default();
        let mut rng = StdRng::seed_from_u64(1);
        let (players, team) = compute_ppi_tpi(&plays, &RosterSpec::empty(), &ctx, &mut rng);

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "J.Hurts");
        assert_eq!(players[0].position, Position::QB);
        assert_eq!(players[0].points, vec![(100.0, 0.5), (200.0, 1.0)]);

        assert_eq!(team.points, vec![(100.0, 0.5), (200.0, 1.0)]);
    }

    #[test]
    fn empty_play_set_still_synthesizes_the_roster() {
        let mut spec = RosterSpec::empty();
        spec.qb = 1;
        spec.wr = 2;

        let ctx = ImpactContext::default();
        let mut rng = StdRng::seed_from_u64(2);
        let (players, team) = compute_ppi_tpi(&[], &spec, &ctx, &mut rng);

        assert_eq!(players.len(), 3);
        assert!(players.iter().all(|p| !p.points.is_empty()));
        assert!(!team.points.is_empty());
    }

    #[test]
    fn real_players_precede_synthetic_slots() {
        let plays = normalize_plays(vec![qb_raw("J.Hurts", 100.0, 1.0)]);

        let mut spec = RosterSpec::empty();
        spec.wr = 1;

        let ctx = ImpactContext::default();
        let mut rng = StdRng::seed_from_u64(4);
        let (players, _) = compute_ppi_tpi(&plays, &spec, &ctx, &mut rng);

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name, "J.Hurts");
        assert_eq!(players[1].name, "WR-1");
        assert!(players[1].is_synthetic(&plays));
        assert!(!players[0].is_synthetic(&plays));
    }

    #[test]
    fn same_seed_same_run() {
        let plays = normalize_plays(vec![qb_raw("J.Hurts", 100.0, 1.0)]);
        let ctx = ImpactContext::default();
        let spec = RosterSpec::default();

        let mut rng_a = StdRng::seed_from_u64(77);
        let mut rng_b = StdRng::seed_from_u64(77);

        let run_a = compute_ppi_tpi(&plays, &spec, &ctx, &mut rng_a);
        let run_b = compute_ppi_tpi(&plays, &spec, &ctx, &mut rng_b);

        assert_eq!(run_a, run_b);
    }
}
