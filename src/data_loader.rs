#![allow(dead_code)]

use serde::*;
use std::fs;

pub const UNKNOWN_PLAYER: &str = "Unknown";

// Loads a cassette-style JSON array of plays from the path. Field names match the
// nflfastR export, so the JSON cassettes and the filtered CSV share one raw struct.
pub fn load_plays_json(file_path: &str) -> Vec<RawPlay> {
    let data = fs::read_to_string(file_path).expect("Invalid path!");
    serde_json::from_str(&data[..]).expect("Malformed play JSON")
}

// Loads plays from a filtered play-by-play CSV (one row per play, empty cells for
// missing values, the way a pandas export writes NaN).
pub fn load_plays_csv(file_path: &str) -> Vec<RawPlay> {
    let mut reader = csv::Reader::from_path(file_path).expect("Invalid path!");

    let mut plays = Vec::new();
    for row in reader.deserialize() {
        let raw: RawPlay = row.expect("Malformed play row");
        plays.push(raw);
    }

    plays
}

// Fills every gap in the raw feed: missing numbers become 0.0, missing names become
// the "Unknown" sentinel. Never fails, never drops a row. Duplicate timestamps across
// different plays are kept; they get summed later when indexed by timestamp.
pub fn normalize_plays(raw_plays: Vec<RawPlay>) -> Vec<Play> {
    let mut plays = Vec::with_capacity(raw_plays.len());
    for raw in raw_plays {
        plays.push(Play::new(raw));
    }
    plays
}

// Raw mirror of one play record. Every field is optional because the upstream feed
// leaves gaps depending on play type: JSON cassettes carry explicit nulls, the CSV
// export leaves cells empty, and some rows omit keys entirely.
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct RawPlay {
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub game_seconds_remaining: Option<f64>,
    #[serde(default)]
    pub yards_gained: Option<f64>,
    #[serde(default)]
    pub passer_player_name: Option<String>,
    #[serde(default)]
    pub receiver_player_name: Option<String>,
    #[serde(default)]
    pub qb_epa: Option<f64>,
    #[serde(default)]
    pub air_epa: Option<f64>,
    #[serde(default)]
    pub yac_epa: Option<f64>,
    #[serde(default)]
    pub xyac_epa: Option<f64>,
    #[serde(default)]
    pub epa: Option<f64>,
    #[serde(default)]
    pub wp: Option<f64>,
    #[serde(default)]
    pub wpa: Option<f64>,
    #[serde(default)]
    pub air_wpa: Option<f64>,
    #[serde(default)]
    pub success: Option<f64>,
}

// Fully-populated play. Scoring only ever reads this, so nothing downstream has to
// probe for missing fields.
#[derive(Debug,Clone,PartialEq)]
pub struct Play {
    pub home_team: String,
    pub game_seconds_remaining: f64,
    pub yards_gained: f64,
    pub passer: String,
    pub receiver: String,
    pub qb_epa: f64,
    pub air_epa: f64,
    pub yac_epa: f64,
    pub xyac_epa: f64,
    pub epa: f64,
    pub wp: f64,
    pub wpa: f64,
    pub air_wpa: f64,
    pub success: f64,
}

impl Play {
    pub fn new(raw: RawPlay) -> Self {
        Self {
            home_team: raw.home_team.unwrap_or_else(unknown_player),
            game_seconds_remaining: raw.game_seconds_remaining.unwrap_or(0.0),
            yards_gained: raw.yards_gained.unwrap_or(0.0),
            passer: raw.passer_player_name.unwrap_or_else(unknown_player),
            receiver: raw.receiver_player_name.unwrap_or_else(unknown_player),
            qb_epa: raw.qb_epa.unwrap_or(0.0),
            air_epa: raw.air_epa.unwrap_or(0.0),
            yac_epa: raw.yac_epa.unwrap_or(0.0),
            xyac_epa: raw.xyac_epa.unwrap_or(0.0),
            epa: raw.epa.unwrap_or(0.0),
            wp: raw.wp.unwrap_or(0.0),
            wpa: raw.wpa.unwrap_or(0.0),
            air_wpa: raw.air_wpa.unwrap_or(0.0),
            success: raw.success.unwrap_or(0.0),
        }
    }

    pub fn empty() -> Self {
        Self::new(RawPlay::absent())
    }

    pub fn involves(&self, player_name: &str) -> bool {
        self.passer == player_name || self.receiver == player_name
    }
}

impl RawPlay {
    pub fn absent() -> Self {
        Self {
            home_team: None,
            game_seconds_remaining: None,
            yards_gained: None,
            passer_player_name: None,
            receiver_player_name: None,
            qb_epa: None,
            air_epa: None,
            yac_epa: None,
            xyac_epa: None,
            epa: None,
            wp: None,
            wpa: None,
            air_wpa: None,
            success: None,
        }
    }
}

// Re-wraps a normalized play as a raw record. Exists so normalization can be shown
// to be a fixed point: normalizing an already-normalized set changes nothing.
impl From<&Play> for RawPlay {
    fn from(play: &Play) -> Self {
        Self {
            home_team: Some(play.home_team.clone()),
            game_seconds_remaining: Some(play.game_seconds_remaining),
            yards_gained: Some(play.yards_gained),
            passer_player_name: Some(play.passer.clone()),
            receiver_player_name: Some(play.receiver.clone()),
            qb_epa: Some(play.qb_epa),
            air_epa: Some(play.air_epa),
            yac_epa: Some(play.yac_epa),
            xyac_epa: Some(play.xyac_epa),
            epa: Some(play.epa),
            wp: Some(play.wp),
            wpa: Some(play.wpa),
            air_wpa: Some(play.air_wpa),
            success: Some(play.success),
        }
    }
}

fn unknown_player() -> String { UNKNOWN_PLAYER.to_string() }
