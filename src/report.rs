use crate::*;
use crate::series::PlayerSeries;
use crate::aggregate::TeamSeries;
use crate::util::{format_mmss, series_mean};

pub fn output_report(players: &[PlayerSeries], team: &TeamSeries, ctx: &ImpactContext) {
    println!("Players:");
    for (i, series) in players.iter().enumerate() {
        println!("|{0:3}. | {1:20} | {2:2} | {3:3} points | mean PPI {4:7.3}",
            i,
            series.name,
            series.position.label(),
            series.points.len(),
            series_mean(&series.points),
        );
    }

    println!("\nTeam Performance Index:");
    for &(seconds, value) in &team.points {
        // Clock counts down; readers think in elapsed time
        let elapsed = (ctx.game_length_seconds - seconds).max(0.0);
        println!("| {0} | {1:8.4}", format_mmss(elapsed), value);
    }
}
