//! Canonical Pokémon record shape produced by retrieval

use serde::{Deserialize, Serialize};

/// A Pokémon record as retrieved from the search index.
///
/// Field names on the wire follow the original Pokédex API (`nameEn`,
/// `descriptionViolet`, ...). The dense vector the index stores alongside
/// these fields is excluded at search time and never appears here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    /// English name (possibly empty)
    pub name_en: String,
    /// Chinese name (possibly empty)
    pub name_cn: String,
    /// Japanese name (possibly empty)
    pub name_ja: String,
    /// Type names, 0-2 entries
    pub types: Vec<String>,
    /// Ability names, 0-3 entries
    pub abilities: Vec<String>,
    /// National dex number, absent for some forms
    pub no: Option<String>,
    /// Scarlet Pokédex description
    pub description: Option<String>,
    /// Violet Pokédex description
    pub description_violet: Option<String>,
    /// Regional form name (possibly empty)
    pub form: String,
    /// Base stat block
    pub stats: StatBlock,
}

/// Base stats; each value is either present as an integer or null, never a
/// non-numeric placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub hp: Option<i64>,
    pub attack: Option<i64>,
    pub defense: Option<i64>,
    pub special_attack: Option<i64>,
    pub special_defense: Option<i64>,
    pub speed: Option<i64>,
}
