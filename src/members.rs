use std::cmp::Reverse;

use itertools::Itertools;
use ratatui::style::Color;

/// Id of the local user in the roster
pub const ME_ID: &str = "1";

/// Ranking palette, 1st place first
pub const RANK_COLORS: [Color; 7] = [
    Color::Rgb(59, 130, 246),  // blue
    Color::Rgb(20, 184, 166),  // teal
    Color::Rgb(168, 85, 247),  // purple
    Color::Rgb(245, 158, 11),  // amber
    Color::Rgb(236, 72, 153),  // pink
    Color::Rgb(99, 102, 241),  // indigo
    Color::Rgb(139, 92, 246),  // violet
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    /// seconds
    pub study_time: u64,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>, study_time: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            study_time,
        }
    }
}

/// One row of the ranking view
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub member: &'a Member,
    pub color: Color,
    /// Fraction of the group total in [0, 1]
    pub share: f64,
}

/// Starting roster for a demo room
pub fn seed_roster(my_name: &str) -> Vec<Member> {
    vec![
        Member::new(ME_ID, my_name, 0),
        Member::new("2", "Sam", 3500),
        Member::new("3", "Tom", 5200),
        Member::new("4", "Jerry", 1800),
        Member::new("5", "Sans", 7100),
    ]
}

/// Members ordered by study time, highest first. Ties keep roster order.
pub fn ranked(members: &[Member]) -> Vec<&Member> {
    members
        .iter()
        .sorted_by_key(|m| Reverse(m.study_time))
        .collect()
}

pub fn rank_color(rank_index: usize) -> Color {
    RANK_COLORS[rank_index % RANK_COLORS.len()]
}

pub fn total_study_time(members: &[Member]) -> u64 {
    members.iter().map(|m| m.study_time).sum()
}

pub fn share_of(study_time: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        study_time as f64 / total as f64
    }
}

/// Ranked, coloured view with each member's share of the total
pub fn ranked_view(members: &[Member]) -> Vec<RankedEntry<'_>> {
    let total = total_study_time(members);
    ranked(members)
        .into_iter()
        .enumerate()
        .map(|(idx, member)| RankedEntry {
            rank: idx + 1,
            member,
            color: rank_color(idx),
            share: share_of(member.study_time, total),
        })
        .collect()
}

pub fn find<'a>(members: &'a [Member], id: &str) -> Option<&'a Member> {
    members.iter().find(|m| m.id == id)
}

pub fn find_mut<'a>(members: &'a mut [Member], id: &str) -> Option<&'a mut Member> {
    members.iter_mut().find(|m| m.id == id)
}

/// Short roster label: `1h 26m` or `58m`
pub fn format_study_time(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    if h > 0 {
        format!("{h}h {m}m")
    } else {
        format!("{m}m")
    }
}
