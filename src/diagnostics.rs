#![allow(dead_code)]

use crate::data_loader::Play;
use crate::series::PlayerSeries;

// How much of a computed run rests on real data vs synthesis. A run over a thin
// feed is mostly noise; this makes that visible before anyone reads charts into it.
#[derive(Debug,Clone,PartialEq)]
pub struct Coverage {
    pub real_players: usize,
    pub synthetic_players: usize,
    pub real_points: usize,
    pub synthetic_points: usize,
}

impl Coverage {
    // Share of all series points that came from real plays
    pub fn real_share(&self) -> f64 {
        let total = self.real_points + self.synthetic_points;
        if total == 0 { return 0.0; }

        self.real_points as f64 / total as f64
    }
}

pub fn coverage_report(players: &[PlayerSeries], plays: &[Play], verbose: bool) -> Coverage {
    let mut coverage = Coverage {
        real_players: 0,
        synthetic_players: 0,
        real_points: 0,
        synthetic_points: 0,
    };

    for series in players {
        if series.is_synthetic(plays) {
            coverage.synthetic_players += 1;
            coverage.synthetic_points += series.points.len();
        } else {
            coverage.real_players += 1;
            coverage.real_points += series.points.len();

            if verbose {
                println!("{0:20} | {1:2} | {2:3} real plays",
                    series.name,
                    series.position.label(),
                    series.points.len(),
                );
            }
        }
    }

    if verbose {
        println!("{} real / {} synthetic players, {:3.0}% of points from real plays",
            coverage.real_players,
            coverage.synthetic_players,
            coverage.real_share() * 100.0,
        );
    }

    coverage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_loader::{normalize_plays, RawPlay};
    use crate::scoring::Position;

    #[test]
    fn counts_real_and_synthetic_series() {
        let mut raw = RawPlay::absent();
        raw.passer_player_name = Some("J.Hurts".to_string());
        raw.game_seconds_remaining = Some(100.0);
        let plays = normalize_plays(vec![raw]);

        let real = PlayerSeries {
            name: "J.Hurts".to_string(),
            position: Position::QB,
            points: vec![(100.0, 0.5)],
        };
        let padded = PlayerSeries {
            name: "WR-1".to_string(),
            position: Position::WR,
            points: vec![(3000.0, 0.1), (2500.0, -0.3)],
        };

        let coverage = coverage_report(&[real, padded], &plays, false);

        assert_eq!(coverage, Coverage {
            real_players: 1,
            synthetic_players: 1,
            real_points: 1,
            synthetic_points: 2,
        });
        assert!((coverage.real_share() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_run_has_zero_share() {
        let coverage = coverage_report(&[], &[], false);
        assert_eq!(coverage.real_share(), 0.0);
    }
}
