// Desk layout module
// A pure, deterministic arrangement of people into one line of desks

pub mod calculator;

pub use calculator::{calculate_desk_layout, classify_team, TeamClassification};
