// Entity Descriptor & Generic Record Model
//
// The four managed record types share one CRUD engine. Each type declares a
// static `EntityDescriptor` (table, key column, key policy, ordered fields)
// and implements `Resource` to move between its struct and a `RecordRow`.

use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the primary key of a new record is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Service assigns a fresh UUID string; any caller value is overwritten
    Generated,
    /// Caller must supply a unique key
    CallerSupplied,
}

/// Storage type of the primary key column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Text,
    Integer,
}

/// JSON-RPC method names for one entity
#[derive(Debug, Clone, Copy)]
pub struct RpcMethods {
    pub create: &'static str,
    pub get: &'static str,
    pub list: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

/// Names used by the HTTP gateway for bodies and routes
#[derive(Debug, Clone, Copy)]
pub struct WireNames {
    pub singular: &'static str,
    pub plural: &'static str,
    pub route: &'static str,
}

/// Declarative schema of one entity type
#[derive(Debug)]
pub struct EntityDescriptor {
    pub name: &'static str,
    pub table: &'static str,
    pub key_column: &'static str,
    pub key_kind: KeyKind,
    pub key_policy: KeyPolicy,
    /// Descriptive columns, in the order `Resource::values` yields them
    pub fields: &'static [&'static str],
    pub methods: RpcMethods,
    pub wire: WireNames,
}

impl EntityDescriptor {
    /// Key column followed by the descriptive columns
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.key_column).chain(self.fields.iter().copied())
    }
}

/// Primary key value as the store sees it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Integer(i64),
    Text(String),
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Integer(n) => write!(f, "{}", n),
            RecordKey::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A stored row: key plus descriptive values in descriptor order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub key: RecordKey,
    pub values: Vec<String>,
}

impl RecordRow {
    /// Split the values into a fixed-size array, checking the column count
    pub fn into_fields<const N: usize>(
        self,
        entity: &EntityDescriptor,
    ) -> Result<(RecordKey, [String; N])> {
        let got = self.values.len();
        let fields: [String; N] = self.values.try_into().map_err(|_| {
            AppError::Internal(format!(
                "{} row has {} values, expected {}",
                entity.name, got, N
            ))
        })?;
        Ok((self.key, fields))
    }
}

/// Typed primary key of a resource
pub trait ResourceKey:
    Clone + fmt::Display + fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    fn into_record_key(self) -> RecordKey;

    fn from_record_key(key: RecordKey) -> Result<Self>;

    /// False for the wire default (empty string, zero)
    fn is_supplied(&self) -> bool;
}

impl ResourceKey for String {
    fn into_record_key(self) -> RecordKey {
        RecordKey::Text(self)
    }

    fn from_record_key(key: RecordKey) -> Result<Self> {
        Ok(match key {
            RecordKey::Text(s) => s,
            RecordKey::Integer(n) => n.to_string(),
        })
    }

    fn is_supplied(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl ResourceKey for i64 {
    fn into_record_key(self) -> RecordKey {
        RecordKey::Integer(self)
    }

    fn from_record_key(key: RecordKey) -> Result<Self> {
        match key {
            RecordKey::Integer(n) => Ok(n),
            RecordKey::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| AppError::Validation(format!("Invalid integer key: {}", s))),
        }
    }

    fn is_supplied(&self) -> bool {
        *self > 0
    }
}

/// A record type managed by the generic CRUD engine
pub trait Resource:
    Clone + fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    type Key: ResourceKey;

    fn descriptor() -> &'static EntityDescriptor;

    fn key(&self) -> &Self::Key;

    fn set_key(&mut self, key: Self::Key);

    /// Descriptive field values in descriptor order
    fn values(&self) -> Vec<&str>;

    fn from_row(row: RecordRow) -> Result<Self>;

    fn to_row(&self) -> RecordRow {
        RecordRow {
            key: self.key().clone().into_record_key(),
            values: self.values().into_iter().map(str::to_owned).collect(),
        }
    }

    /// Sparse merge set: the non-empty fields paired with their columns
    fn changes(&self) -> Vec<(&'static str, String)> {
        Self::descriptor()
            .fields
            .iter()
            .copied()
            .zip(self.values())
            .filter(|(_, value)| !value.is_empty())
            .map(|(column, value)| (column, value.to_owned()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, IpAsset, Publication, User};

    fn assert_shape<R: Resource + Default>() {
        let d = R::descriptor();
        assert_eq!(
            R::default().values().len(),
            d.fields.len(),
            "{} values/fields mismatch",
            d.name
        );
        assert_eq!(d.columns().next(), Some(d.key_column));
        assert!(!d.fields.contains(&d.key_column));
    }

    #[test]
    fn test_descriptors_match_structs() {
        assert_shape::<Author>();
        assert_shape::<IpAsset>();
        assert_shape::<Publication>();
        assert_shape::<User>();
    }

    #[test]
    fn test_row_round_trip() {
        let author = Author {
            author_id: "a-1".to_string(),
            author_name: "Jane Doe".to_string(),
            gender: "F".to_string(),
            type_of_author: "Faculty".to_string(),
            affiliation: "CS Dept".to_string(),
            email: "jane@example.edu".to_string(),
        };

        let row = author.to_row();
        assert_eq!(row.key, RecordKey::Text("a-1".to_string()));
        assert_eq!(Author::from_row(row).unwrap(), author);
    }

    #[test]
    fn test_from_row_rejects_short_row() {
        let row = RecordRow {
            key: RecordKey::Text("a-1".to_string()),
            values: vec!["Jane".to_string()],
        };
        let err = Author::from_row(row).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_changes_skip_empty_fields() {
        let partial = Author {
            author_id: "a-1".to_string(),
            affiliation: "EE Dept".to_string(),
            ..Default::default()
        };
        assert_eq!(
            partial.changes(),
            vec![("affiliation", "EE Dept".to_string())]
        );
    }

    #[test]
    fn test_integer_key_parsing() {
        assert_eq!(
            i64::from_record_key(RecordKey::Text("42".to_string())).unwrap(),
            42
        );
        assert!(i64::from_record_key(RecordKey::Text("abc".to_string())).is_err());
        assert!(!0i64.is_supplied());
        assert!(!String::new().is_supplied());
    }

    #[test]
    fn test_record_key_untagged() {
        let k: RecordKey = serde_json::from_str("7").unwrap();
        assert_eq!(k, RecordKey::Integer(7));
        let k: RecordKey = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(k, RecordKey::Text("x".to_string()));
    }
}
