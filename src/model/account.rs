/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use bitflags::bitflags;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a brokerage account.
///
/// The API returns ids either as strings or as numbers; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates an account id from any textual value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reads an account id from a JSON string or number
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for AccountId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        AccountId::from_json(&value)
            .ok_or_else(|| D::Error::custom(format!("invalid account id: {value}")))
    }
}

bitflags! {
    /// Sub-resources requested for each account.
    ///
    /// Balances are always part of the response; `POSITIONS` and `ORDERS`
    /// add the matching `fields` query values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccountFields: u8 {
        /// Account balances
        const BALANCES = 1;
        /// Open positions
        const POSITIONS = 1 << 1;
        /// Orders
        const ORDERS = 1 << 2;
        /// Balances, positions and orders
        const ALL = Self::BALANCES.bits() | Self::POSITIONS.bits() | Self::ORDERS.bits();
    }
}

impl Default for AccountFields {
    fn default() -> Self {
        AccountFields::BALANCES
    }
}

impl AccountFields {
    /// Value of the `fields` query parameter for this selection.
    ///
    /// Empty when only balances are requested.
    #[must_use]
    pub fn fields_param(&self) -> String {
        let mut fields = Vec::with_capacity(2);
        if self.contains(AccountFields::POSITIONS) {
            fields.push("positions");
        }
        if self.contains(AccountFields::ORDERS) {
            fields.push("orders");
        }
        fields.join(",")
    }
}

/// Account documents keyed by account id, in the order they were received
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountsResponse {
    entries: Vec<(AccountId, Value)>,
}

impl AccountsResponse {
    /// Creates an empty response
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an account document, replacing any previous document with the same id
    pub fn insert(&mut self, id: AccountId, account: Value) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => *slot = account,
            None => self.entries.push((id, account)),
        }
    }

    /// Returns the document of an account
    #[must_use]
    pub fn get(&self, id: &AccountId) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, account)| account)
    }

    /// Number of accounts
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no account was returned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Account ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &AccountId> {
        self.entries.iter().map(|(id, _)| id)
    }

    /// Iterates over `(id, document)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &Value)> {
        self.entries.iter().map(|(id, account)| (id, account))
    }
}
