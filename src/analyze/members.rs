// src/analyze/members.rs
use super::{NumStats, count_desc};
use crate::model::ClanMember;

#[derive(Clone, Debug, PartialEq)]
pub struct DonorRow {
    pub name: String,
    pub donated: u32,
    pub received: u32,
    /// donated / received, or donated when nothing was received
    pub ratio: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberSummary {
    pub count: usize,
    pub roles: Vec<(String, usize)>,
    pub trophies: NumStats,
    pub exp_levels: NumStats,
    pub leagues: Vec<(String, usize)>,
    pub top_donors: Vec<DonorRow>,
    pub total_donations: u64,
    pub total_received: u64,
}

pub fn summarize_members(members: &[ClanMember], top: usize) -> MemberSummary {
    let roles = count_desc(members.iter().map(|m| m.role.clone()));
    let leagues = count_desc(members.iter().map(|m| {
        m.league.as_ref().map_or_else(|| s!("Unranked"), |l| l.name.clone())
    }));

    let mut donors: Vec<DonorRow> = members
        .iter()
        .map(|m| DonorRow {
            name: m.name.clone(),
            donated: m.donations,
            received: m.donations_received,
            ratio: if m.donations_received > 0 {
                f64::from(m.donations) / f64::from(m.donations_received)
            } else {
                f64::from(m.donations)
            },
        })
        .collect();
    donors.sort_by(|a, b| b.donated.cmp(&a.donated));
    donors.truncate(top);

    MemberSummary {
        count: members.len(),
        roles,
        trophies: NumStats::from_values(members.iter().map(|m| u64::from(m.trophies))),
        exp_levels: NumStats::from_values(members.iter().map(|m| u64::from(m.exp_level))),
        leagues,
        top_donors: donors,
        total_donations: members.iter().map(|m| u64::from(m.donations)).sum(),
        total_received: members.iter().map(|m| u64::from(m.donations_received)).sum(),
    }
}
