// Author Record

use super::record::{
    EntityDescriptor, KeyKind, KeyPolicy, RecordRow, Resource, ResourceKey, RpcMethods, WireNames,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub static AUTHOR: EntityDescriptor = EntityDescriptor {
    name: "Author",
    table: "table_authors",
    key_column: "author_id",
    key_kind: KeyKind::Text,
    key_policy: KeyPolicy::Generated,
    fields: &[
        "author_name",
        "gender",
        "type_of_author",
        "affiliation",
        "email",
    ],
    methods: RpcMethods {
        create: "author.create.v1",
        get: "author.get.v1",
        list: "author.list.v1",
        update: "author.update.v1",
        delete: "author.delete.v1",
    },
    wire: WireNames {
        singular: "author",
        plural: "authors",
        route: "authors",
    },
};

/// Author of a publication or IP asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub author_id: String,
    pub author_name: String,
    pub gender: String,
    pub type_of_author: String,
    pub affiliation: String,
    pub email: String,
}

impl Resource for Author {
    type Key = String;

    fn descriptor() -> &'static EntityDescriptor {
        &AUTHOR
    }

    fn key(&self) -> &String {
        &self.author_id
    }

    fn set_key(&mut self, key: String) {
        self.author_id = key;
    }

    fn values(&self) -> Vec<&str> {
        vec![
            self.author_name.as_str(),
            self.gender.as_str(),
            self.type_of_author.as_str(),
            self.affiliation.as_str(),
            self.email.as_str(),
        ]
    }

    fn from_row(row: RecordRow) -> Result<Self> {
        let (key, [author_name, gender, type_of_author, affiliation, email]) =
            row.into_fields::<5>(&AUTHOR)?;

        Ok(Self {
            author_id: String::from_record_key(key)?,
            author_name,
            gender,
            type_of_author,
            affiliation,
            email,
        })
    }
}
