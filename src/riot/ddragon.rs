//! Data Dragon static data used to translate numeric IDs into readable names.

use std::collections::HashMap;

use serde::Deserialize;

/// `item.json`: item id (as a string key) to item data.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemFile {
    pub data: HashMap<String, NamedEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedEntry {
    pub name: String,
}

/// `summoner.json`: spell identifiers (`SummonerFlash`) to spell data. The
/// numeric id used by match-v5 lives in `key`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummonerSpellFile {
    pub data: HashMap<String, SummonerSpellEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummonerSpellEntry {
    pub key: String,
    pub name: String,
}

/// One rune tree of `runesReforged.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RuneTree {
    pub id: i64,
    pub name: String,
    pub slots: Vec<RuneSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuneSlot {
    pub runes: Vec<Rune>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rune {
    pub id: i64,
    pub name: String,
}

/// Lookup tables built from the three static data files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTables {
    items: HashMap<i64, String>,
    summoner_spells: HashMap<i64, String>,
    runes: HashMap<i64, String>,
}

impl NameTables {
    pub fn from_static_data(
        items: ItemFile,
        spells: SummonerSpellFile,
        rune_trees: Vec<RuneTree>,
    ) -> Self {
        let items = items
            .data
            .into_iter()
            .filter_map(|(id, entry)| Some((id.parse().ok()?, entry.name)))
            .collect();

        let summoner_spells = spells
            .data
            .into_values()
            .filter_map(|spell| Some((spell.key.parse().ok()?, spell.name)))
            .collect();

        let mut runes = HashMap::new();
        for tree in rune_trees {
            runes.insert(tree.id, tree.name);
            for rune in tree.slots.into_iter().flat_map(|slot| slot.runes) {
                runes.insert(rune.id, rune.name);
            }
        }

        Self {
            items,
            summoner_spells,
            runes,
        }
    }

    pub fn item(&self, id: i64) -> Option<&str> {
        self.items.get(&id).map(String::as_str)
    }

    pub fn summoner_spell(&self, id: i64) -> Option<&str> {
        self.summoner_spells.get(&id).map(String::as_str)
    }

    pub fn rune(&self, id: i64) -> Option<&str> {
        self.runes.get(&id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builds_tables_from_static_files() {
        let items: ItemFile = serde_json::from_value(json!({
            "type": "item",
            "data": {
                "1001": { "name": "Boots", "gold": { "total": 300 } },
                "3006": { "name": "Berserker's Greaves" }
            }
        }))
        .unwrap();
        let spells: SummonerSpellFile = serde_json::from_value(json!({
            "data": {
                "SummonerFlash": { "id": "SummonerFlash", "key": "4", "name": "Flash" },
                "SummonerDot": { "id": "SummonerDot", "key": "14", "name": "Ignite" }
            }
        }))
        .unwrap();
        let runes: Vec<RuneTree> = serde_json::from_value(json!([
            {
                "id": 8100,
                "key": "Domination",
                "name": "Domination",
                "slots": [
                    { "runes": [ { "id": 8112, "name": "Electrocute" } ] },
                    { "runes": [ { "id": 8139, "name": "Taste of Blood" } ] }
                ]
            }
        ]))
        .unwrap();

        let tables = NameTables::from_static_data(items, spells, runes);

        assert_eq!(tables.item(1001), Some("Boots"));
        assert_eq!(tables.item(3006), Some("Berserker's Greaves"));
        assert_eq!(tables.summoner_spell(4), Some("Flash"));
        assert_eq!(tables.summoner_spell(14), Some("Ignite"));
        assert_eq!(tables.rune(8100), Some("Domination"));
        assert_eq!(tables.rune(8139), Some("Taste of Blood"));
        assert_eq!(tables.item(9999), None);
    }
}
