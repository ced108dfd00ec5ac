//! Multi-asset values.
//!
//! A [`Value`] maps a currency identifier (a minting policy id, or the
//! reserved [`ADA`] identifier for the base currency) to a map of asset name
//! to [`Amount`]. The base currency lives under `ada` / `lovelace`.
//!
//! Wire forms:
//! - current: `{"ada": {"lovelace": 11}, "<policy>": {"<asset>": 5}}`
//! - legacy:  `{"coins": 11, "assets": {"<policy>.<asset>": 5}}`
//!
//! [`Value`] serializes in the legacy form; [`Value::from_nested`] builds one
//! from the current form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::Amount;

/// Currency identifier reserved for the base currency.
pub const ADA: &str = "ada";

/// Asset name of the base currency's smallest unit.
pub const LOVELACE: &str = "lovelace";

/// Identifies a native asset: minting policy plus asset name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId {
    pub policy_id: String,
    pub asset_name: String,
}

impl AssetId {
    pub fn new(policy_id: impl Into<String>, asset_name: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            asset_name: asset_name.into(),
        }
    }

    /// Parse the legacy `policy.asset` spelling. A bare policy id means an
    /// empty asset name.
    pub fn parse(s: &str) -> Self {
        match s.split_once('.') {
            Some((policy, asset)) => Self::new(policy, asset),
            None => Self::new(s, ""),
        }
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.asset_name.is_empty() {
            f.write_str(&self.policy_id)
        } else {
            write!(f, "{}.{}", self.policy_id, self.asset_name)
        }
    }
}

/// A multi-asset value. Absent entries read as zero; zero entries are never
/// stored, so values equal in every quantity compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LegacyValue", into = "LegacyValue")]
pub struct Value {
    entries: BTreeMap<String, BTreeMap<String, Amount>>,
}

impl Value {
    pub fn new() -> Self {
        Self::default()
    }

    /// A value holding only the base currency.
    pub fn from_coins(coins: Amount) -> Self {
        let mut value = Self::new();
        value.insert(ADA, LOVELACE, coins);
        value
    }

    /// Build from the current schema's nested currency → asset → amount map.
    pub fn from_nested(entries: BTreeMap<String, BTreeMap<String, Amount>>) -> Self {
        let mut value = Self::new();
        for (currency, assets) in entries {
            for (asset_name, amount) in assets {
                value.insert(currency.clone(), asset_name, amount);
            }
        }
        value
    }

    /// Base-currency quantity.
    pub fn coins(&self) -> Amount {
        self.get(ADA, LOVELACE)
    }

    /// Quantity of one asset; zero when absent.
    pub fn get(&self, currency: &str, asset_name: &str) -> Amount {
        self.entries
            .get(currency)
            .and_then(|assets| assets.get(asset_name))
            .cloned()
            .unwrap_or_default()
    }

    /// Set the quantity of one asset, replacing any previous entry. A zero
    /// quantity removes the entry.
    pub fn insert(&mut self, currency: impl Into<String>, asset_name: impl Into<String>, amount: Amount) {
        let currency = currency.into();
        let asset_name = asset_name.into();
        if !amount.is_zero() {
            self.entries.entry(currency).or_default().insert(asset_name, amount);
            return;
        }
        if let Some(assets) = self.entries.get_mut(&currency) {
            assets.remove(&asset_name);
            if assets.is_empty() {
                self.entries.remove(&currency);
            }
        }
    }

    /// Native assets (everything except the base currency), in key order.
    pub fn assets(&self) -> impl Iterator<Item = (AssetId, &Amount)> {
        self.entries
            .iter()
            .filter(|(currency, _)| currency.as_str() != ADA)
            .flat_map(|(policy, assets)| {
                assets
                    .iter()
                    .map(move |(name, amount)| (AssetId::new(policy.clone(), name.clone()), amount))
            })
    }

    /// The nested currency → asset → amount view.
    pub fn as_nested(&self) -> &BTreeMap<String, BTreeMap<String, Amount>> {
        &self.entries
    }
}

/// Legacy wire form.
#[derive(Clone, Serialize, Deserialize)]
struct LegacyValue {
    coins: Amount,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    assets: BTreeMap<String, Amount>,
}

impl From<LegacyValue> for Value {
    fn from(legacy: LegacyValue) -> Self {
        let mut value = Value::from_coins(legacy.coins);
        for (id, amount) in legacy.assets {
            let id = AssetId::parse(&id);
            value.insert(id.policy_id, id.asset_name, amount);
        }
        value
    }
}

impl From<Value> for LegacyValue {
    fn from(value: Value) -> Self {
        let coins = value.coins();
        let assets = value
            .entries
            .into_iter()
            .flat_map(|(currency, assets)| {
                assets
                    .into_iter()
                    .map(move |(name, amount)| (AssetId::new(currency.clone(), name), amount))
            })
            .filter(|(id, _)| !(id.policy_id == ADA && id.asset_name == LOVELACE))
            .map(|(id, amount)| (id.to_string(), amount))
            .collect();
        LegacyValue { coins, assets }
    }
}
