// tests/common/mod.rs
#![allow(dead_code)]

use clan_analyzer::model::{
    ClanWar, Player, Unit, Village, WarAttack, WarMember, WarSide, WarState,
};

pub fn player(tag: &str, name: &str, th: u32) -> Player {
    Player {
        tag: tag.into(),
        name: name.into(),
        town_hall_level: th,
        ..Default::default()
    }
}

pub fn with_heroes(mut p: Player, heroes: &[(&str, u32)]) -> Player {
    p.heroes = heroes.iter().map(|(n, l)| Unit::home(n, *l)).collect();
    p
}

pub fn builder_unit(name: &str, level: u32) -> Unit {
    Unit { name: name.into(), level, max_level: 0, village: Village::BuilderBase }
}

pub fn attack(attacker: &str, defender: &str, stars: u32, destruction: f64) -> WarAttack {
    WarAttack {
        attacker_tag: attacker.into(),
        defender_tag: defender.into(),
        stars,
        destruction_percentage: destruction,
        ..Default::default()
    }
}

pub fn member(tag: &str, name: &str, th: u32, pos: u32, attacks: Vec<WarAttack>) -> WarMember {
    WarMember {
        tag: tag.into(),
        name: name.into(),
        townhall_level: th,
        map_position: pos,
        attacks,
        ..Default::default()
    }
}

pub fn side(tag: &str, name: &str, members: Vec<WarMember>) -> WarSide {
    WarSide { tag: tag.into(), name: name.into(), members, ..Default::default() }
}

/// Two-vs-two war: #P1 (TH12) attacks twice, #P2 (TH11) not at all.
pub fn sample_war(state: WarState) -> ClanWar {
    let ours = side(
        "#CLAN",
        "Home",
        vec![
            member("#P2", "Bravo", 11, 2, vec![]),
            member(
                "#P1",
                "Alpha",
                12,
                1,
                vec![attack("#P1", "#E1", 3, 100.0), attack("#P1", "#E2", 2, 75.5)],
            ),
        ],
    );
    let theirs = side(
        "#ENEMY",
        "Away",
        vec![member("#E1", "Echo", 13, 1, vec![]), member("#E2", "Foxtrot", 11, 2, vec![])],
    );
    ClanWar {
        state,
        team_size: 2,
        preparation_start_time: Some("20250301T100000.000Z".into()),
        clan: ours,
        opponent: theirs,
        ..Default::default()
    }
}
