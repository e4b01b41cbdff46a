//! Row reshaping applied between flattening and writing.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::riot::NameTables;

use super::{Row, Table};

/// Columns with no analytical value for a ranked stats sheet.
const DROPPED_COLUMNS: [&str; 17] = [
    "perks.styles",
    "unrealKills",
    "totalUnitsHealed",
    "summonerId",
    "summonerLevel",
    "summonerName",
    "role",
    "puuid",
    "profileIcon",
    "largestCriticalStrike",
    "lane",
    "itemsPurchased",
    "individualPosition",
    "goldSpent",
    "eligibleForProgression",
    "championTransform",
    "championId",
];

static DROPPED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("challenge|Ping|riot|nexus|gameEnded").expect("valid dropped column pattern")
});
static ITEM_COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^item\d$").expect("valid item column pattern"));
static SPELL_COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^summoner[12]Id$").expect("valid spell column pattern"));
static RUNE_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rune(Keystone|Primary\d|Secondary\d)$").expect("valid rune column pattern")
});

const PRIMARY_RUNE_COLUMNS: [&str; 4] = [
    "runeKeystone",
    "runePrimary1",
    "runePrimary2",
    "runePrimary3",
];
const SECONDARY_RUNE_COLUMNS: [&str; 2] = ["runeSecondary1", "runeSecondary2"];

const SHARD_COLUMNS: [(&str, &str); 3] = [
    ("perks.statPerks.defense", "runeShardDefense"),
    ("perks.statPerks.flex", "runeShardFlex"),
    ("perks.statPerks.offense", "runeShardOffense"),
];

/// Reshape and, when `names` is given, decode every row of the table.
pub fn apply(table: &mut Table, names: Option<&NameTables>) {
    for row in table.rows_mut() {
        extract_runes(row);
        rename_shard_columns(row);
        drop_unneeded_columns(row);
        if let Some(names) = names {
            decode_ids(row, names);
        }
    }
}

/// Split the nested `perks.styles` array into one column per rune choice.
pub fn extract_runes(row: &mut Row) {
    let Some(Value::Array(styles)) = row.get("perks.styles").cloned() else {
        return;
    };

    let trees = [
        (styles.first(), &PRIMARY_RUNE_COLUMNS[..]),
        (styles.get(1), &SECONDARY_RUNE_COLUMNS[..]),
    ];

    for (style, columns) in trees {
        let Some(selections) = style
            .and_then(|s| s.get("selections"))
            .and_then(Value::as_array)
        else {
            continue;
        };

        for (column, selection) in columns.iter().zip(selections) {
            if let Some(perk) = selection.get("perk") {
                row.insert(column.to_string(), perk.clone());
            }
        }
    }
}

pub fn rename_shard_columns(row: &mut Row) {
    for (from, to) in SHARD_COLUMNS {
        if let Some(value) = row.remove(from) {
            row.insert(to.to_string(), value);
        }
    }
}

pub fn drop_unneeded_columns(row: &mut Row) {
    row.retain(|column, _| {
        !DROPPED_COLUMNS.contains(&column.as_str()) && !DROPPED_PATTERN.is_match(column)
    });
}

/// Replace item, summoner spell, rune and shard IDs by their names. Unknown
/// IDs are left as they are.
pub fn decode_ids(row: &mut Row, names: &NameTables) {
    for (column, value) in row.iter_mut() {
        let Some(id) = value.as_i64() else {
            continue;
        };

        let decoded = if ITEM_COLUMN.is_match(column) {
            if id == 0 {
                // Empty inventory slot
                Some(Value::Null)
            } else {
                names.item(id).map(Value::from)
            }
        } else if SPELL_COLUMN.is_match(column) {
            names.summoner_spell(id).map(Value::from)
        } else if RUNE_COLUMN.is_match(column) {
            names.rune(id).map(Value::from)
        } else if column.starts_with("runeShard") {
            shard_name(id).map(Value::from)
        } else {
            None
        };

        if let Some(decoded) = decoded {
            *value = decoded;
        }
    }
}

/// Stat shards are not part of Data Dragon.
pub fn shard_name(id: i64) -> Option<&'static str> {
    match id {
        5001 => Some("Health Scaling"),
        5002 => Some("Armor"),
        5003 => Some("Magic Resist"),
        5005 => Some("Attack Speed"),
        5007 => Some("Ability Haste"),
        5008 => Some("Adaptive Force"),
        5010 => Some("Move Speed"),
        5011 => Some("Health"),
        5013 => Some("Tenacity and Slow Resist"),
        _ => None,
    }
}
