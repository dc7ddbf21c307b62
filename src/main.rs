#![allow(dead_code,unused_imports,unused)]

mod data_loader;
mod impact_context;
mod scoring;
mod series;
mod aggregate;
mod diagnostics;
mod report;
mod util;

use rand::prelude::*;

use aggregate::*;
use data_loader::*;
use diagnostics::*;
use impact_context::*;
use report::*;

/*
    Reads a filtered nflfastR play-by-play export (see the sample path below, or pass
    your own as the first argument), computes the per-player Performance Index series
    plus the team aggregate, and prints both. The seed is fixed so the synthesized
    roster padding comes out the same on every run over the same file.
*/

fn main() {
    let ctx = ImpactContext::default();
    let roster = RosterSpec::default();

    let path = std::env::args().nth(1)
        .unwrap_or_else(|| "../data/play_by_play_2025_filtered.csv".to_string());

    let plays = normalize_plays(load_plays_csv(&path));

    let mut rng = StdRng::seed_from_u64(1339);
    let (players, team) = compute_ppi_tpi(&plays, &roster, &ctx, &mut rng);

    coverage_report(&players, &plays, true);
    output_report(&players, &team, &ctx);
}
