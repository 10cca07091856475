//! Static achievement definitions.

use super::metrics::*;
use super::types::{
    AchievementCategory, AchievementDef, Rarity, Requirement, RequirementKind, Tier,
};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // SCORING ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "first_180",
        name: "Maximum!",
        description: "Score your first 180",
        icon: "🎯",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: SCORES_180,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "ton_eighty_10",
        name: "Maximum Collector",
        description: "Score 10 180s",
        icon: "🎯",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: SCORES_180,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "ton_eighty_25",
        name: "Maximum Habit",
        description: "Score 25 180s",
        icon: "🎯",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 25.0,
            metric: SCORES_180,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "ton_eighty_50",
        name: "Maximum Machine",
        description: "Score 50 180s",
        icon: "🎯",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 50.0,
            metric: SCORES_180,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "ton_eighty_100",
        name: "Maximum Century",
        description: "Score 100 180s",
        icon: "🎯",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: SCORES_180,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "ton_eighty_250",
        name: "Maximum Legend",
        description: "Score 250 180s",
        icon: "🎯",
        category: AchievementCategory::Scoring,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 250.0,
            metric: SCORES_180,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "ton_eighty_500",
        name: "Maximum Master",
        description: "Score 500 180s",
        icon: "🎯",
        category: AchievementCategory::Scoring,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 500.0,
            metric: SCORES_180,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "ton_eighty_1000",
        name: "Maximum Immortal",
        description: "Score 1,000 180s",
        icon: "🎯",
        category: AchievementCategory::Scoring,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: SCORES_180,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "ton_eighty_2500",
        name: "Maximum Eternal",
        description: "Score 2,500 180s",
        icon: "🎯",
        category: AchievementCategory::Scoring,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 2500.0,
            metric: SCORES_180,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "ton_forty_10",
        name: "Into the Forties",
        description: "Score 140 or more 10 times",
        icon: "💥",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: SCORES_140_PLUS,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "ton_forty_25",
        name: "Big Hitter",
        description: "Score 140 or more 25 times",
        icon: "💥",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 25.0,
            metric: SCORES_140_PLUS,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "ton_forty_250",
        name: "Heavy Hitter",
        description: "Score 140 or more 250 times",
        icon: "💥",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 250.0,
            metric: SCORES_140_PLUS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "ton_forty_1000",
        name: "Power Hitter",
        description: "Score 140 or more 1,000 times",
        icon: "💥",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: SCORES_140_PLUS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "ton_forty_5000",
        name: "Demolisher",
        description: "Score 140 or more 5,000 times",
        icon: "💥",
        category: AchievementCategory::Scoring,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 5000.0,
            metric: SCORES_140_PLUS,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "ton_forty_20000",
        name: "Wrecking Ball",
        description: "Score 140 or more 20,000 times",
        icon: "💥",
        category: AchievementCategory::Scoring,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 20000.0,
            metric: SCORES_140_PLUS,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "ton_plus_10",
        name: "Ton Up",
        description: "Score 100 or more 10 times",
        icon: "💯",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: SCORES_100_PLUS,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "ton_plus_100",
        name: "Ton Up",
        description: "Score 100 or more 100 times",
        icon: "💯",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: SCORES_100_PLUS,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "ton_plus_500",
        name: "Ton Regular",
        description: "Score 100 or more 500 times",
        icon: "💯",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 500.0,
            metric: SCORES_100_PLUS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "ton_plus_1000",
        name: "Ton Machine",
        description: "Score 100 or more 1,000 times",
        icon: "💯",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: SCORES_100_PLUS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "ton_plus_5000",
        name: "Ton Machine",
        description: "Score 100 or more 5,000 times",
        icon: "💯",
        category: AchievementCategory::Scoring,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 5000.0,
            metric: SCORES_100_PLUS,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "ton_plus_25000",
        name: "Ton Factory",
        description: "Score 100 or more 25,000 times",
        icon: "💯",
        category: AchievementCategory::Scoring,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 25000.0,
            metric: SCORES_100_PLUS,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "triples_10",
        name: "Treble Trouble",
        description: "Hit 10 trebles",
        icon: "🔺",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: TRIPLES_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "triples_100",
        name: "Treble Trouble",
        description: "Hit 100 trebles",
        icon: "🔺",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: TRIPLES_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "triples_500",
        name: "Treble Hunter",
        description: "Hit 500 trebles",
        icon: "🔺",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 500.0,
            metric: TRIPLES_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "triples_1000",
        name: "Treble Specialist",
        description: "Hit 1,000 trebles",
        icon: "🔺",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: TRIPLES_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "triples_5000",
        name: "Treble Specialist",
        description: "Hit 5,000 trebles",
        icon: "🔺",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 5000.0,
            metric: TRIPLES_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "triples_25000",
        name: "Treble Surgeon",
        description: "Hit 25,000 trebles",
        icon: "🔺",
        category: AchievementCategory::Scoring,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 25000.0,
            metric: TRIPLES_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "three_triples",
        name: "Hat Trick",
        description: "Hit three trebles in one visit",
        icon: "🎩",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: THREE_TRIPLES_VISITS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "three_triples_5",
        name: "Hat Trick Habit",
        description: "Hit three trebles in one visit 5 times",
        icon: "🎩",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 5.0,
            metric: THREE_TRIPLES_VISITS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "three_triples_25",
        name: "Treble Barrage",
        description: "Hit three trebles in one visit 25 times",
        icon: "🎩",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 25.0,
            metric: THREE_TRIPLES_VISITS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "three_triples_100",
        name: "Hat Stand",
        description: "Hit three trebles in one visit 100 times",
        icon: "🎩",
        category: AchievementCategory::Scoring,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: THREE_TRIPLES_VISITS,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "bullseye_1",
        name: "Bull's Eye",
        description: "Hit your first bullseye",
        icon: "🔴",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: BULLSEYES,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "bullseye_10",
        name: "Bull Spotter",
        description: "Hit 10 bullseyes",
        icon: "🔴",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: BULLSEYES,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "bullseye_50",
        name: "Bull Runner",
        description: "Hit 50 bullseyes",
        icon: "🔴",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 50.0,
            metric: BULLSEYES,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "bullseye_100",
        name: "Bull Rider",
        description: "Hit 100 bullseyes",
        icon: "🔴",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: BULLSEYES,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "bullseye_250",
        name: "Bull Tamer",
        description: "Hit 250 bullseyes",
        icon: "🔴",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 250.0,
            metric: BULLSEYES,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "bullseye_1000",
        name: "Bull Whisperer",
        description: "Hit 1,000 bullseyes",
        icon: "🔴",
        category: AchievementCategory::Scoring,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: BULLSEYES,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "bullseye_5000",
        name: "Bull Whisperer",
        description: "Hit 5,000 bullseyes",
        icon: "🔴",
        category: AchievementCategory::Scoring,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 5000.0,
            metric: BULLSEYES,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "darts_100",
        name: "Warming Up",
        description: "Throw 100 darts",
        icon: "🏹",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: DARTS_THROWN,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "darts_1000",
        name: "Warming Up",
        description: "Throw 1,000 darts",
        icon: "🏹",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: DARTS_THROWN,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "darts_10000",
        name: "Arm of Steel",
        description: "Throw 10,000 darts",
        icon: "🏹",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10000.0,
            metric: DARTS_THROWN,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "darts_50000",
        name: "Flight Path",
        description: "Throw 50,000 darts",
        icon: "🏹",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 50000.0,
            metric: DARTS_THROWN,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "darts_100000",
        name: "Oche Veteran",
        description: "Throw 100,000 darts",
        icon: "🏹",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100000.0,
            metric: DARTS_THROWN,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "darts_250000",
        name: "Tungsten Arm",
        description: "Throw 250,000 darts",
        icon: "🏹",
        category: AchievementCategory::Scoring,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 250000.0,
            metric: DARTS_THROWN,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "darts_1000000",
        name: "Million Dart Club",
        description: "Throw 1,000,000 darts",
        icon: "🏹",
        category: AchievementCategory::Scoring,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000000.0,
            metric: DARTS_THROWN,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "average_40",
        name: "Finding the Range",
        description: "Finish a match with a 40+ average",
        icon: "📈",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 40.0,
            metric: MATCH_AVERAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "average_50",
        name: "Steady Scorer",
        description: "Finish a match with a 50 average",
        icon: "📈",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 50.0,
            metric: MATCH_AVERAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "average_60",
        name: "Pub Champion",
        description: "Finish a match with a 60+ average",
        icon: "📈",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 60.0,
            metric: MATCH_AVERAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "average_70",
        name: "County Standard",
        description: "Finish a match with a 70 average",
        icon: "📈",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 70.0,
            metric: MATCH_AVERAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "average_80",
        name: "County Player",
        description: "Finish a match with an 80+ average",
        icon: "📈",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 80.0,
            metric: MATCH_AVERAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "average_90",
        name: "Tour Card",
        description: "Finish a match with a 90 average",
        icon: "📈",
        category: AchievementCategory::Scoring,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 90.0,
            metric: MATCH_AVERAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "average_100",
        name: "Tour Card",
        description: "Finish a match with a 100+ average",
        icon: "📈",
        category: AchievementCategory::Scoring,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 100.0,
            metric: MATCH_AVERAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "average_110",
        name: "World Class",
        description: "Finish a match with a 110 average",
        icon: "📈",
        category: AchievementCategory::Scoring,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 110.0,
            metric: MATCH_AVERAGE,
        },
        hidden: true,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "first_nine_60",
        name: "Fast Starter",
        description: "Open a leg with a 60 first-nine average",
        icon: "⚡",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 60.0,
            metric: FIRST_NINE_AVERAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "first_nine_80",
        name: "Fast Starter",
        description: "Reach an 80+ first-nine average",
        icon: "⚡",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 80.0,
            metric: FIRST_NINE_AVERAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "first_nine_100",
        name: "Flying Start",
        description: "Reach a 100+ first-nine average",
        icon: "⚡",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 100.0,
            metric: FIRST_NINE_AVERAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "first_nine_120",
        name: "Blistering Start",
        description: "Open a leg with a 120 first-nine average",
        icon: "⚡",
        category: AchievementCategory::Scoring,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 120.0,
            metric: FIRST_NINE_AVERAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "first_nine_140",
        name: "Flying Start",
        description: "Open a leg with a 140 first-nine average",
        icon: "⚡",
        category: AchievementCategory::Scoring,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 140.0,
            metric: FIRST_NINE_AVERAGE,
        },
        hidden: true,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "bust_10",
        name: "Overcooked",
        description: "Bust 10 times",
        icon: "🙈",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: BUSTS,
        },
        hidden: true,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "bust_100",
        name: "Bust Buster",
        description: "Bust 100 times. It happens to everyone",
        icon: "🙈",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: BUSTS,
        },
        hidden: true,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "bust_1000",
        name: "Bust Connoisseur",
        description: "Bust 1,000 times",
        icon: "🙈",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: BUSTS,
        },
        hidden: true,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "double_bull_1",
        name: "Dead Centre",
        description: "Hit your first double bull",
        icon: "🎯",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: DOUBLE_BULLS,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "double_bull_50",
        name: "Centre of Attention",
        description: "Hit 50 double bulls",
        icon: "🎯",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 50.0,
            metric: DOUBLE_BULLS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "double_bull_500",
        name: "Bullseye Royalty",
        description: "Hit 500 double bulls",
        icon: "🎯",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 500.0,
            metric: DOUBLE_BULLS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "shanghai_1",
        name: "Shanghai!",
        description: "Hit a single, double and treble of one number in a visit",
        icon: "🀄",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: SHANGHAIS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "shanghai_10",
        name: "Shanghai Regular",
        description: "Hit 10 Shanghais",
        icon: "🀄",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: SHANGHAIS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "shanghai_100",
        name: "Shanghai Master",
        description: "Hit 100 Shanghais",
        icon: "🀄",
        category: AchievementCategory::Scoring,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: SHANGHAIS,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "bag_of_nuts",
        name: "Bag of Nuts",
        description: "Score 26 in a visit",
        icon: "🥜",
        category: AchievementCategory::Scoring,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: SCORES_26,
        },
        hidden: true,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "bag_of_nuts_100",
        name: "Nut Collector",
        description: "Score 26 in a visit 100 times",
        icon: "🥜",
        category: AchievementCategory::Scoring,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: SCORES_26,
        },
        hidden: true,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "bag_of_nuts_1000",
        name: "Squirrel",
        description: "Score 26 in a visit 1,000 times",
        icon: "🥜",
        category: AchievementCategory::Scoring,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: SCORES_26,
        },
        hidden: true,
        rarity: Some(Rarity::Rare),
    },
    // ═══════════════════════════════════════════════════════════════
    // CHECKOUT ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "first_checkout",
        name: "Game Shot",
        description: "Hit your first checkout",
        icon: "✅",
        category: AchievementCategory::Checkout,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: CHECKOUTS_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "checkouts_10",
        name: "Finisher",
        description: "Hit 10 checkouts",
        icon: "✅",
        category: AchievementCategory::Checkout,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: CHECKOUTS_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "checkouts_25",
        name: "Double Digits Out",
        description: "Hit 25 checkouts",
        icon: "✅",
        category: AchievementCategory::Checkout,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 25.0,
            metric: CHECKOUTS_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "checkouts_50",
        name: "Reliable Finisher",
        description: "Hit 50 checkouts",
        icon: "✅",
        category: AchievementCategory::Checkout,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 50.0,
            metric: CHECKOUTS_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "checkouts_100",
        name: "Closer",
        description: "Hit 100 checkouts",
        icon: "✅",
        category: AchievementCategory::Checkout,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: CHECKOUTS_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "checkouts_250",
        name: "Closer",
        description: "Hit 250 checkouts",
        icon: "✅",
        category: AchievementCategory::Checkout,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 250.0,
            metric: CHECKOUTS_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "checkouts_500",
        name: "Ice Cold",
        description: "Hit 500 checkouts",
        icon: "✅",
        category: AchievementCategory::Checkout,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 500.0,
            metric: CHECKOUTS_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "checkouts_1000",
        name: "Finisher",
        description: "Hit 1,000 checkouts",
        icon: "✅",
        category: AchievementCategory::Checkout,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: CHECKOUTS_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "checkouts_2500",
        name: "Assassin",
        description: "Hit 2,500 checkouts",
        icon: "✅",
        category: AchievementCategory::Checkout,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 2500.0,
            metric: CHECKOUTS_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "checkouts_10000",
        name: "The Finisher",
        description: "Hit 10,000 checkouts",
        icon: "✅",
        category: AchievementCategory::Checkout,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10000.0,
            metric: CHECKOUTS_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "doubles_10",
        name: "Double Trouble",
        description: "Hit 10 doubles",
        icon: "🎲",
        category: AchievementCategory::Checkout,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: DOUBLES_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "doubles_100",
        name: "Double Digits",
        description: "Hit 100 doubles",
        icon: "🎲",
        category: AchievementCategory::Checkout,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: DOUBLES_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "doubles_500",
        name: "Double Trouble",
        description: "Hit 500 doubles",
        icon: "🎲",
        category: AchievementCategory::Checkout,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 500.0,
            metric: DOUBLES_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "doubles_1000",
        name: "Double Agent",
        description: "Hit 1,000 doubles",
        icon: "🎲",
        category: AchievementCategory::Checkout,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: DOUBLES_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "doubles_5000",
        name: "Double Vision",
        description: "Hit 5,000 doubles",
        icon: "🎲",
        category: AchievementCategory::Checkout,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 5000.0,
            metric: DOUBLES_HIT,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "ton_checkout",
        name: "Ton Finish",
        description: "Check out from 100 or more",
        icon: "🔥",
        category: AchievementCategory::Checkout,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: TON_PLUS_CHECKOUTS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "ton_checkout_5",
        name: "Ton Finisher",
        description: "Hit 5 checkouts of 100 or more",
        icon: "🔥",
        category: AchievementCategory::Checkout,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 5.0,
            metric: TON_PLUS_CHECKOUTS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "ton_checkout_25",
        name: "Big Fish Hunter",
        description: "Check out from 100 or more 25 times",
        icon: "🔥",
        category: AchievementCategory::Checkout,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 25.0,
            metric: TON_PLUS_CHECKOUTS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "ton_checkout_100",
        name: "Showman",
        description: "Hit 100 checkouts of 100 or more",
        icon: "🔥",
        category: AchievementCategory::Checkout,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: TON_PLUS_CHECKOUTS,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "ton_checkout_500",
        name: "Crowd Pleaser",
        description: "Hit 500 checkouts of 100 or more",
        icon: "🔥",
        category: AchievementCategory::Checkout,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 500.0,
            metric: TON_PLUS_CHECKOUTS,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "checkout_81",
        name: "Out in Three",
        description: "Check out 81 or more",
        icon: "🐉",
        category: AchievementCategory::Checkout,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 81.0,
            metric: HIGHEST_CHECKOUT,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "checkout_100",
        name: "Ton Out",
        description: "Check out 100 or more",
        icon: "🐉",
        category: AchievementCategory::Checkout,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 100.0,
            metric: HIGHEST_CHECKOUT,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "checkout_121",
        name: "Shanghai Finish",
        description: "Hit a 121 checkout or higher",
        icon: "🐉",
        category: AchievementCategory::Checkout,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 121.0,
            metric: HIGHEST_CHECKOUT,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "checkout_150",
        name: "Big Out",
        description: "Check out 150 or more",
        icon: "🐉",
        category: AchievementCategory::Checkout,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 150.0,
            metric: HIGHEST_CHECKOUT,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "checkout_161",
        name: "Bull Finish",
        description: "Check out 161 or more",
        icon: "🐉",
        category: AchievementCategory::Checkout,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 161.0,
            metric: HIGHEST_CHECKOUT,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "big_fish",
        name: "The Big Fish",
        description: "Check out 170",
        icon: "🐟",
        category: AchievementCategory::Checkout,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 170.0,
            metric: HIGHEST_CHECKOUT,
        },
        hidden: true,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "checkout_pct_25",
        name: "Finding the Double",
        description: "Finish a match with a 25% checkout rate",
        icon: "🎯",
        category: AchievementCategory::Checkout,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 25.0,
            metric: CHECKOUT_PERCENTAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "checkout_pct_40",
        name: "Sharp Shooter",
        description: "Finish a match with 40% checkout rate",
        icon: "🎯",
        category: AchievementCategory::Checkout,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 40.0,
            metric: CHECKOUT_PERCENTAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "checkout_pct_50",
        name: "Half and Half",
        description: "Finish a match with a 50% checkout rate",
        icon: "🧊",
        category: AchievementCategory::Checkout,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 50.0,
            metric: CHECKOUT_PERCENTAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "checkout_pct_60",
        name: "Ice Cold",
        description: "Finish a match with 60% checkout rate",
        icon: "🧊",
        category: AchievementCategory::Checkout,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 60.0,
            metric: CHECKOUT_PERCENTAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "checkout_pct_75",
        name: "Surgical",
        description: "Finish a match with a 75% checkout rate",
        icon: "🧊",
        category: AchievementCategory::Checkout,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 75.0,
            metric: CHECKOUT_PERCENTAGE,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "twenty_one_darter",
        name: "Seven Visits",
        description: "Win a leg in 21 darts or fewer",
        icon: "🏁",
        category: AchievementCategory::Checkout,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 21.0,
            metric: DARTS_TO_FINISH,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "eighteen_darter",
        name: "Getting There",
        description: "Win a 501 leg in 18 darts or fewer",
        icon: "🏁",
        category: AchievementCategory::Checkout,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 18.0,
            metric: DARTS_TO_FINISH,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "fifteen_darter",
        name: "Tidy Leg",
        description: "Win a 501 leg in 15 darts or fewer",
        icon: "🏁",
        category: AchievementCategory::Checkout,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 15.0,
            metric: DARTS_TO_FINISH,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "twelve_darter",
        name: "Twelve Darter",
        description: "Win a 501 leg in 12 darts or fewer",
        icon: "🏁",
        category: AchievementCategory::Checkout,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 12.0,
            metric: DARTS_TO_FINISH,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "eleven_darter",
        name: "Nearly Perfect",
        description: "Win a leg in 11 darts or fewer",
        icon: "🏁",
        category: AchievementCategory::Checkout,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 11.0,
            metric: DARTS_TO_FINISH,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "nine_darter",
        name: "Perfection",
        description: "Win a 501 leg in 9 darts",
        icon: "👑",
        category: AchievementCategory::Checkout,
        tier: Tier::Diamond,
        points: 500,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 9.0,
            metric: DARTS_TO_FINISH,
        },
        hidden: true,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "madhouse_1",
        name: "Madhouse",
        description: "Check out on double 1",
        icon: "🏚️",
        category: AchievementCategory::Checkout,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: MADHOUSE_CHECKOUTS,
        },
        hidden: true,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "madhouse_10",
        name: "Madhouse Regular",
        description: "Check out on double 1 ten times",
        icon: "🏚️",
        category: AchievementCategory::Checkout,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: MADHOUSE_CHECKOUTS,
        },
        hidden: true,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "madhouse_50",
        name: "Madhouse Landlord",
        description: "Check out on double 1 fifty times",
        icon: "🏚️",
        category: AchievementCategory::Checkout,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 50.0,
            metric: MADHOUSE_CHECKOUTS,
        },
        hidden: true,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "bull_finish_1",
        name: "Bull Out",
        description: "Check out on the bull",
        icon: "🐂",
        category: AchievementCategory::Checkout,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: BULL_CHECKOUTS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "bull_finish_25",
        name: "Bull Closer",
        description: "Check out on the bull 25 times",
        icon: "🐂",
        category: AchievementCategory::Checkout,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 25.0,
            metric: BULL_CHECKOUTS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "bull_finish_100",
        name: "Matador",
        description: "Check out on the bull 100 times",
        icon: "🐂",
        category: AchievementCategory::Checkout,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: BULL_CHECKOUTS,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    // ═══════════════════════════════════════════════════════════════
    // MATCHES ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "first_game",
        name: "Stepping Up",
        description: "Play your first game",
        icon: "🎮",
        category: AchievementCategory::Matches,
        tier: Tier::Bronze,
        points: 5,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: GAMES_PLAYED,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "games_10",
        name: "Regular",
        description: "Play 10 games",
        icon: "🎮",
        category: AchievementCategory::Matches,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: GAMES_PLAYED,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "games_25",
        name: "Getting Hooked",
        description: "Play 25 games",
        icon: "🎮",
        category: AchievementCategory::Matches,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 25.0,
            metric: GAMES_PLAYED,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "games_50",
        name: "Club Night",
        description: "Play 50 games",
        icon: "🎮",
        category: AchievementCategory::Matches,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 50.0,
            metric: GAMES_PLAYED,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "games_100",
        name: "Regular",
        description: "Play 100 games",
        icon: "🎮",
        category: AchievementCategory::Matches,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: GAMES_PLAYED,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "games_250",
        name: "League Player",
        description: "Play 250 games",
        icon: "🎮",
        category: AchievementCategory::Matches,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 250.0,
            metric: GAMES_PLAYED,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "games_500",
        name: "Pub Legend",
        description: "Play 500 games",
        icon: "🎮",
        category: AchievementCategory::Matches,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 500.0,
            metric: GAMES_PLAYED,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "games_1000",
        name: "League Stalwart",
        description: "Play 1,000 games",
        icon: "🎮",
        category: AchievementCategory::Matches,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: GAMES_PLAYED,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "games_2500",
        name: "Oche Veteran",
        description: "Play 2,500 games",
        icon: "🎮",
        category: AchievementCategory::Matches,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 2500.0,
            metric: GAMES_PLAYED,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "games_5000",
        name: "Lifer",
        description: "Play 5,000 games",
        icon: "🎮",
        category: AchievementCategory::Matches,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 5000.0,
            metric: GAMES_PLAYED,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "first_win",
        name: "Winner",
        description: "Win your first game",
        icon: "🏆",
        category: AchievementCategory::Matches,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: GAMES_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "wins_5",
        name: "On the Board",
        description: "Win 5 games",
        icon: "🏆",
        category: AchievementCategory::Matches,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 5.0,
            metric: GAMES_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "wins_10",
        name: "Winner",
        description: "Win 10 games",
        icon: "🏆",
        category: AchievementCategory::Matches,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: GAMES_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "wins_25",
        name: "Contender",
        description: "Win 25 games",
        icon: "🏆",
        category: AchievementCategory::Matches,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 25.0,
            metric: GAMES_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "wins_50",
        name: "Contender",
        description: "Win 50 games",
        icon: "🏆",
        category: AchievementCategory::Matches,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 50.0,
            metric: GAMES_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "wins_100",
        name: "Champion",
        description: "Win 100 games",
        icon: "🏆",
        category: AchievementCategory::Matches,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: GAMES_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "wins_250",
        name: "Serial Winner",
        description: "Win 250 games",
        icon: "🏆",
        category: AchievementCategory::Matches,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 250.0,
            metric: GAMES_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "wins_500",
        name: "Champion",
        description: "Win 500 games",
        icon: "🏆",
        category: AchievementCategory::Matches,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 500.0,
            metric: GAMES_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "wins_1000",
        name: "Undisputed",
        description: "Win 1,000 games",
        icon: "🏆",
        category: AchievementCategory::Matches,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: GAMES_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "first_leg",
        name: "First Leg",
        description: "Win your first leg",
        icon: "🦵",
        category: AchievementCategory::Matches,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "legs_10",
        name: "Leg Up",
        description: "Win 10 legs",
        icon: "🦵",
        category: AchievementCategory::Matches,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "legs_50",
        name: "Leg Work",
        description: "Win 50 legs",
        icon: "🦵",
        category: AchievementCategory::Matches,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 50.0,
            metric: LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "legs_100",
        name: "Leg Collector",
        description: "Win 100 legs",
        icon: "🦵",
        category: AchievementCategory::Matches,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "legs_250",
        name: "Leg Day",
        description: "Win 250 legs",
        icon: "🦵",
        category: AchievementCategory::Matches,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 250.0,
            metric: LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "legs_500",
        name: "Leg Collector",
        description: "Win 500 legs",
        icon: "🦵",
        category: AchievementCategory::Matches,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 500.0,
            metric: LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "legs_1000",
        name: "Leg Hoarder",
        description: "Win 1,000 legs",
        icon: "🦵",
        category: AchievementCategory::Matches,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "legs_2500",
        name: "Leg Hoarder",
        description: "Win 2,500 legs",
        icon: "🦵",
        category: AchievementCategory::Matches,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 2500.0,
            metric: LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "legs_5000",
        name: "Legendary Legs",
        description: "Win 5,000 legs",
        icon: "🦵",
        category: AchievementCategory::Matches,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 5000.0,
            metric: LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "whitewash",
        name: "Whitewash",
        description: "Win a match without dropping a leg",
        icon: "🧹",
        category: AchievementCategory::Matches,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: WHITEWASHES,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "whitewash_5",
        name: "Clean Sweeper",
        description: "Win 5 games without dropping a leg",
        icon: "🧹",
        category: AchievementCategory::Matches,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 5.0,
            metric: WHITEWASHES,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "whitewash_10",
        name: "Clean Sweep",
        description: "Win 10 matches without dropping a leg",
        icon: "🧹",
        category: AchievementCategory::Matches,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: WHITEWASHES,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "whitewash_50",
        name: "Spotless",
        description: "Win 50 games without dropping a leg",
        icon: "🧹",
        category: AchievementCategory::Matches,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 50.0,
            metric: WHITEWASHES,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "whitewash_100",
        name: "Untouchable",
        description: "Win 100 games without dropping a leg",
        icon: "🧹",
        category: AchievementCategory::Matches,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: WHITEWASHES,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "quick_game",
        name: "Brisk",
        description: "Finish a game in under 10 minutes",
        icon: "⏱️",
        category: AchievementCategory::Matches,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 600.0,
            metric: GAME_TIME_MAX,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "speed_game",
        name: "Quick Draw",
        description: "Finish a game in under five minutes",
        icon: "⏱️",
        category: AchievementCategory::Matches,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 300.0,
            metric: GAME_TIME_MAX,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "lightning_game",
        name: "Lightning Round",
        description: "Finish a game in under three minutes",
        icon: "⏱️",
        category: AchievementCategory::Matches,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 180.0,
            metric: GAME_TIME_MAX,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "blitz_game",
        name: "Blitz",
        description: "Finish a game in under 2 minutes",
        icon: "⏱️",
        category: AchievementCategory::Matches,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 120.0,
            metric: GAME_TIME_MAX,
        },
        hidden: true,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "decider_1",
        name: "Nerves of Steel",
        description: "Win a deciding leg",
        icon: "🎲",
        category: AchievementCategory::Matches,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: DECIDING_LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "decider_25",
        name: "Clutch",
        description: "Win 25 deciding legs",
        icon: "🎲",
        category: AchievementCategory::Matches,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 25.0,
            metric: DECIDING_LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "decider_100",
        name: "Big Game Player",
        description: "Win 100 deciding legs",
        icon: "🎲",
        category: AchievementCategory::Matches,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: DECIDING_LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "decider_500",
        name: "Ice Veins",
        description: "Win 500 deciding legs",
        icon: "🎲",
        category: AchievementCategory::Matches,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 500.0,
            metric: DECIDING_LEGS_WON,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "comeback_1",
        name: "Comeback Kid",
        description: "Win a game after trailing by three legs",
        icon: "🔄",
        category: AchievementCategory::Matches,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: COMEBACK_WINS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "comeback_10",
        name: "Never Say Die",
        description: "Win 10 games after trailing by three legs",
        icon: "🔄",
        category: AchievementCategory::Matches,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: COMEBACK_WINS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "comeback_50",
        name: "Houdini",
        description: "Win 50 games after trailing by three legs",
        icon: "🔄",
        category: AchievementCategory::Matches,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 50.0,
            metric: COMEBACK_WINS,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    // ═══════════════════════════════════════════════════════════════
    // TRAINING ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "first_training",
        name: "Practice Makes Perfect",
        description: "Complete a training session",
        icon: "📋",
        category: AchievementCategory::Training,
        tier: Tier::Bronze,
        points: 5,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: TRAINING_SESSIONS,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "training_10",
        name: "Practice Makes Progress",
        description: "Complete 10 training sessions",
        icon: "📋",
        category: AchievementCategory::Training,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: TRAINING_SESSIONS,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "training_50",
        name: "Dedicated",
        description: "Complete 50 training sessions",
        icon: "📋",
        category: AchievementCategory::Training,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 50.0,
            metric: TRAINING_SESSIONS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "training_100",
        name: "Dedicated",
        description: "Complete 100 training sessions",
        icon: "📋",
        category: AchievementCategory::Training,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: TRAINING_SESSIONS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "training_250",
        name: "Practice Addict",
        description: "Complete 250 training sessions",
        icon: "📋",
        category: AchievementCategory::Training,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 250.0,
            metric: TRAINING_SESSIONS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "training_500",
        name: "Practice Room Regular",
        description: "Complete 500 training sessions",
        icon: "📋",
        category: AchievementCategory::Training,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 500.0,
            metric: TRAINING_SESSIONS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "training_1000",
        name: "Grinder",
        description: "Complete 1,000 training sessions",
        icon: "📋",
        category: AchievementCategory::Training,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1000.0,
            metric: TRAINING_SESSIONS,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "training_2500",
        name: "Obsessed",
        description: "Complete 2,500 training sessions",
        icon: "📋",
        category: AchievementCategory::Training,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 2500.0,
            metric: TRAINING_SESSIONS,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "training_score_250",
        name: "Getting There",
        description: "Score 250 in a training session",
        icon: "📊",
        category: AchievementCategory::Training,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 250.0,
            metric: TRAINING_SCORE,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "training_score_500",
        name: "Solid Session",
        description: "Score 500 in a training routine",
        icon: "📊",
        category: AchievementCategory::Training,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 500.0,
            metric: TRAINING_SCORE,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "training_score_750",
        name: "Sharp Practice",
        description: "Score 750 in a training session",
        icon: "📊",
        category: AchievementCategory::Training,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 750.0,
            metric: TRAINING_SCORE,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "training_score_900",
        name: "Practice Perfect",
        description: "Score 900 in a training session",
        icon: "📊",
        category: AchievementCategory::Training,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 900.0,
            metric: TRAINING_SCORE,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "training_score_1000",
        name: "Training Ace",
        description: "Score 1,000 in a training routine",
        icon: "📊",
        category: AchievementCategory::Training,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 1000.0,
            metric: TRAINING_SCORE,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "training_score_1200",
        name: "Training Record",
        description: "Score 1,200 in a training session",
        icon: "📊",
        category: AchievementCategory::Training,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 1200.0,
            metric: TRAINING_SCORE,
        },
        hidden: true,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "around_the_clock_1",
        name: "Round the Board",
        description: "Complete Around the Clock",
        icon: "🕐",
        category: AchievementCategory::Training,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 1.0,
            metric: AROUND_THE_CLOCK,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "around_the_clock_10",
        name: "Clockwork",
        description: "Complete Around the Clock 10 times",
        icon: "🕐",
        category: AchievementCategory::Training,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 10.0,
            metric: AROUND_THE_CLOCK,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "around_the_clock_100",
        name: "Timekeeper",
        description: "Complete Around the Clock 100 times",
        icon: "🕐",
        category: AchievementCategory::Training,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Count,
            target: 100.0,
            metric: AROUND_THE_CLOCK,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "bobs_27_100",
        name: "Survivor",
        description: "Score 100 in Bob's 27",
        icon: "🎰",
        category: AchievementCategory::Training,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 100.0,
            metric: BOBS_27_SCORE,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "bobs_27_500",
        name: "Double Specialist",
        description: "Score 500 in Bob's 27",
        icon: "🎰",
        category: AchievementCategory::Training,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 500.0,
            metric: BOBS_27_SCORE,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "bobs_27_1000",
        name: "Bob's Your Uncle",
        description: "Score 1,000 in Bob's 27",
        icon: "🎰",
        category: AchievementCategory::Training,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 1000.0,
            metric: BOBS_27_SCORE,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "x121_130",
        name: "121 Climber",
        description: "Reach 130 in the 121 checkout game",
        icon: "🪜",
        category: AchievementCategory::Training,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 130.0,
            metric: CHECKOUT_121_LEVEL,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "x121_150",
        name: "121 Mountaineer",
        description: "Reach 150 in the 121 checkout game",
        icon: "🪜",
        category: AchievementCategory::Training,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 150.0,
            metric: CHECKOUT_121_LEVEL,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "x121_170",
        name: "121 Summit",
        description: "Reach 170 in the 121 checkout game",
        icon: "🪜",
        category: AchievementCategory::Training,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Value,
            target: 170.0,
            metric: CHECKOUT_121_LEVEL,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    // ═══════════════════════════════════════════════════════════════
    // CONSISTENCY ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "win_streak_3",
        name: "Hat-Trick of Wins",
        description: "Win 3 games in a row",
        icon: "🔗",
        category: AchievementCategory::Consistency,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 3.0,
            metric: WINS,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "win_streak_5",
        name: "On Fire",
        description: "Win 5 games in a row",
        icon: "🔗",
        category: AchievementCategory::Consistency,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 5.0,
            metric: WINS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "win_streak_7",
        name: "Winning Week",
        description: "Win 7 games in a row",
        icon: "🔗",
        category: AchievementCategory::Consistency,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 7.0,
            metric: WINS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "win_streak_10",
        name: "Unstoppable",
        description: "Win 10 games in a row",
        icon: "🔗",
        category: AchievementCategory::Consistency,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 10.0,
            metric: WINS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "win_streak_15",
        name: "Unstoppable",
        description: "Win 15 games in a row",
        icon: "🔗",
        category: AchievementCategory::Consistency,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 15.0,
            metric: WINS,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "win_streak_20",
        name: "Invincible",
        description: "Win 20 games in a row",
        icon: "🔗",
        category: AchievementCategory::Consistency,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 20.0,
            metric: WINS,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "checkout_streak_3",
        name: "Clinical",
        description: "Check out at the first attempt in 3 legs running",
        icon: "🩺",
        category: AchievementCategory::Consistency,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 3.0,
            metric: CHECKOUT_STREAK,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "checkout_streak_5",
        name: "Hot Hand",
        description: "Check out 5 legs in a row at the first attempt",
        icon: "🩺",
        category: AchievementCategory::Consistency,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 5.0,
            metric: CHECKOUT_STREAK,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "checkout_streak_10",
        name: "Never Misses",
        description: "Check out 10 legs in a row at the first attempt",
        icon: "🩺",
        category: AchievementCategory::Consistency,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 10.0,
            metric: CHECKOUT_STREAK,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "ton_visits_3",
        name: "Ton Trio",
        description: "Score 100+ in 3 consecutive visits",
        icon: "🔁",
        category: AchievementCategory::Consistency,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 3.0,
            metric: TON_VISITS,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "ton_visits_6",
        name: "Ton Machine Gun",
        description: "Score 100+ in 6 consecutive visits",
        icon: "🔁",
        category: AchievementCategory::Consistency,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 6.0,
            metric: TON_VISITS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "ton_visits_9",
        name: "Ton Machine Gun",
        description: "Score 100 or more in 9 visits in a row",
        icon: "🔁",
        category: AchievementCategory::Consistency,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 9.0,
            metric: TON_VISITS,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "ton_visits_12",
        name: "Relentless",
        description: "Score 100 or more in 12 visits in a row",
        icon: "🔁",
        category: AchievementCategory::Consistency,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 12.0,
            metric: TON_VISITS,
        },
        hidden: true,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "daily_3",
        name: "Habit Forming",
        description: "Play 3 days in a row",
        icon: "📅",
        category: AchievementCategory::Consistency,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 3.0,
            metric: DAILY_PLAY,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "daily_7",
        name: "Week at the Oche",
        description: "Play on 7 consecutive days",
        icon: "📅",
        category: AchievementCategory::Consistency,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 7.0,
            metric: DAILY_PLAY,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "daily_14",
        name: "Fortnight",
        description: "Play 14 days in a row",
        icon: "📅",
        category: AchievementCategory::Consistency,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 14.0,
            metric: DAILY_PLAY,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "daily_30",
        name: "Habit Formed",
        description: "Play on 30 consecutive days",
        icon: "📅",
        category: AchievementCategory::Consistency,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 30.0,
            metric: DAILY_PLAY,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "daily_60",
        name: "Two Months Strong",
        description: "Play 60 days in a row",
        icon: "📅",
        category: AchievementCategory::Consistency,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 60.0,
            metric: DAILY_PLAY,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "daily_100",
        name: "Centurion",
        description: "Play 100 days in a row",
        icon: "📅",
        category: AchievementCategory::Consistency,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 100.0,
            metric: DAILY_PLAY,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "daily_365",
        name: "Every Single Day",
        description: "Play every day for a year",
        icon: "📅",
        category: AchievementCategory::Consistency,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Streak,
            target: 365.0,
            metric: DAILY_PLAY,
        },
        hidden: true,
        rarity: Some(Rarity::Legendary),
    },
    // ═══════════════════════════════════════════════════════════════
    // CALENDAR ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "new_year",
        name: "Fresh Start",
        description: "Play on New Year's Day",
        icon: "🎆",
        category: AchievementCategory::Calendar,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 1.0,
            metric: PLAYED_NEW_YEAR,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "christmas",
        name: "Christmas Arrows",
        description: "Play on Christmas Day",
        icon: "🎄",
        category: AchievementCategory::Calendar,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 1.0,
            metric: PLAYED_CHRISTMAS,
        },
        hidden: true,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "night_owl",
        name: "Night Owl",
        description: "Finish a session after midnight",
        icon: "🦉",
        category: AchievementCategory::Calendar,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 1.0,
            metric: LATE_NIGHT_SESSION,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "early_bird",
        name: "Early Bird",
        description: "Start a session before 7am",
        icon: "🐦",
        category: AchievementCategory::Calendar,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 1.0,
            metric: EARLY_BIRD_SESSION,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "new_years_eve",
        name: "Countdown",
        description: "Play on New Year's Eve",
        icon: "🥂",
        category: AchievementCategory::Calendar,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 1.0,
            metric: PLAYED_NEW_YEARS_EVE,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "valentines",
        name: "Bullseye of My Heart",
        description: "Play on Valentine's Day",
        icon: "💘",
        category: AchievementCategory::Calendar,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 1.0,
            metric: PLAYED_VALENTINES,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "halloween",
        name: "Spooky Arrows",
        description: "Play on Halloween",
        icon: "🎃",
        category: AchievementCategory::Calendar,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 1.0,
            metric: PLAYED_HALLOWEEN,
        },
        hidden: true,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "leap_day",
        name: "Once in Four Years",
        description: "Play on 29 February",
        icon: "🐸",
        category: AchievementCategory::Calendar,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 1.0,
            metric: PLAYED_LEAP_DAY,
        },
        hidden: true,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "easter",
        name: "Egg Hunt",
        description: "Play on Easter Sunday",
        icon: "🐣",
        category: AchievementCategory::Calendar,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 1.0,
            metric: PLAYED_EASTER,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "st_patricks",
        name: "Lucky Arrows",
        description: "Play on St Patrick's Day",
        icon: "🍀",
        category: AchievementCategory::Calendar,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 1.0,
            metric: PLAYED_ST_PATRICKS,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "anniversary",
        name: "Part of the Furniture",
        description: "Play on the anniversary of your first game",
        icon: "🎂",
        category: AchievementCategory::Calendar,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 1.0,
            metric: ACCOUNT_ANNIVERSARY,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    // ═══════════════════════════════════════════════════════════════
    // MILESTONES ACHIEVEMENTS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "points_100",
        name: "Point Scorer",
        description: "Earn 100 achievement points",
        icon: "⭐",
        category: AchievementCategory::Milestones,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 100.0,
            metric: TOTAL_POINTS,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "points_250",
        name: "Point Gatherer",
        description: "Earn 250 achievement points",
        icon: "⭐",
        category: AchievementCategory::Milestones,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 250.0,
            metric: TOTAL_POINTS,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "points_500",
        name: "Point Collector",
        description: "Earn 500 achievement points",
        icon: "⭐",
        category: AchievementCategory::Milestones,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 500.0,
            metric: TOTAL_POINTS,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "points_1000",
        name: "Point Hoarder",
        description: "Earn 1,000 achievement points",
        icon: "⭐",
        category: AchievementCategory::Milestones,
        tier: Tier::Gold,
        points: 50,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 1000.0,
            metric: TOTAL_POINTS,
        },
        hidden: false,
        rarity: Some(Rarity::Rare),
    },
    AchievementDef {
        id: "points_2500",
        name: "Point Tycoon",
        description: "Earn 2,500 achievement points",
        icon: "🌟",
        category: AchievementCategory::Milestones,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 2500.0,
            metric: TOTAL_POINTS,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "points_5000",
        name: "Point Baron",
        description: "Earn 5,000 achievement points",
        icon: "🌟",
        category: AchievementCategory::Milestones,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 5000.0,
            metric: TOTAL_POINTS,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "points_10000",
        name: "Point Emperor",
        description: "Earn 10,000 achievement points",
        icon: "🌟",
        category: AchievementCategory::Milestones,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 10000.0,
            metric: TOTAL_POINTS,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "points_25000",
        name: "Point Deity",
        description: "Earn 25,000 achievement points",
        icon: "🌟",
        category: AchievementCategory::Milestones,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 25000.0,
            metric: TOTAL_POINTS,
        },
        hidden: true,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "unlocked_10",
        name: "Achiever",
        description: "Unlock 10 achievements",
        icon: "🏅",
        category: AchievementCategory::Milestones,
        tier: Tier::Bronze,
        points: 10,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 10.0,
            metric: ACHIEVEMENTS_UNLOCKED,
        },
        hidden: false,
        rarity: Some(Rarity::Common),
    },
    AchievementDef {
        id: "unlocked_25",
        name: "Over Achiever",
        description: "Unlock 25 achievements",
        icon: "🏅",
        category: AchievementCategory::Milestones,
        tier: Tier::Silver,
        points: 25,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 25.0,
            metric: ACHIEVEMENTS_UNLOCKED,
        },
        hidden: false,
        rarity: Some(Rarity::Uncommon),
    },
    AchievementDef {
        id: "unlocked_50",
        name: "Completionist",
        description: "Unlock 50 achievements",
        icon: "🏅",
        category: AchievementCategory::Milestones,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 50.0,
            metric: ACHIEVEMENTS_UNLOCKED,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "unlocked_75",
        name: "Trophy Cabinet",
        description: "Unlock 75 achievements",
        icon: "🏅",
        category: AchievementCategory::Milestones,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 75.0,
            metric: ACHIEVEMENTS_UNLOCKED,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "unlocked_100",
        name: "Trophy Room",
        description: "Unlock 100 achievements",
        icon: "🏅",
        category: AchievementCategory::Milestones,
        tier: Tier::Platinum,
        points: 100,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 100.0,
            metric: ACHIEVEMENTS_UNLOCKED,
        },
        hidden: false,
        rarity: Some(Rarity::Epic),
    },
    AchievementDef {
        id: "unlocked_150",
        name: "Trophy Hall",
        description: "Unlock 150 achievements",
        icon: "🏅",
        category: AchievementCategory::Milestones,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 150.0,
            metric: ACHIEVEMENTS_UNLOCKED,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "unlocked_200",
        name: "Completionist",
        description: "Unlock 200 achievements",
        icon: "🏅",
        category: AchievementCategory::Milestones,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 200.0,
            metric: ACHIEVEMENTS_UNLOCKED,
        },
        hidden: true,
        rarity: Some(Rarity::Legendary),
    },
    AchievementDef {
        id: "gold_everywhere",
        name: "All-Round Gold",
        description: "Earn a gold achievement in every category",
        icon: "🥇",
        category: AchievementCategory::Milestones,
        tier: Tier::Diamond,
        points: 250,
        requirement: Requirement {
            kind: RequirementKind::Special,
            target: 6.0,
            metric: GOLD_EVERY_CATEGORY,
        },
        hidden: false,
        rarity: Some(Rarity::Legendary),
    },
];
