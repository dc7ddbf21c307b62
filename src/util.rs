#![allow(dead_code)]

// Game-clock seconds as MM:SS for the console report
pub fn format_mmss(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

pub fn series_mean(points: &[(f64, f64)]) -> f64 {
    if points.is_empty() { return 0.0; }

    let mut sum = 0.0;
    for &(_, value) in points { sum += value; }
    sum / points.len() as f64
}
