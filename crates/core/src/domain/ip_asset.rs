// Intellectual-Property Asset Record

use super::record::{
    EntityDescriptor, KeyKind, KeyPolicy, RecordRow, Resource, ResourceKey, RpcMethods, WireNames,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub static IP_ASSET: EntityDescriptor = EntityDescriptor {
    name: "IPAsset",
    table: "table_ipassets",
    key_column: "registration_number",
    key_kind: KeyKind::Text,
    key_policy: KeyPolicy::Generated,
    fields: &[
        "title_of_work",
        "type_of_document",
        "class_of_work",
        "date_of_creation",
        "date_registered",
        "campus",
        "college",
        "program",
        "authors",
    ],
    methods: RpcMethods {
        create: "ip_asset.create.v1",
        get: "ip_asset.get.v1",
        list: "ip_asset.list.v1",
        update: "ip_asset.update.v1",
        delete: "ip_asset.delete.v1",
    },
    wire: WireNames {
        singular: "ip_asset",
        plural: "ip_assets",
        route: "ip-assets",
    },
};

/// Registered intellectual-property work
///
/// Dates are kept as the free text the caller sent. `authors` is an
/// unstructured list, not a reference into the author table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpAsset {
    pub registration_number: String,
    pub title_of_work: String,
    pub type_of_document: String,
    pub class_of_work: String,
    pub date_of_creation: String,
    pub date_registered: String,
    pub campus: String,
    pub college: String,
    pub program: String,
    pub authors: String,
}

impl Resource for IpAsset {
    type Key = String;

    fn descriptor() -> &'static EntityDescriptor {
        &IP_ASSET
    }

    fn key(&self) -> &String {
        &self.registration_number
    }

    fn set_key(&mut self, key: String) {
        self.registration_number = key;
    }

    fn values(&self) -> Vec<&str> {
        vec![
            self.title_of_work.as_str(),
            self.type_of_document.as_str(),
            self.class_of_work.as_str(),
            self.date_of_creation.as_str(),
            self.date_registered.as_str(),
            self.campus.as_str(),
            self.college.as_str(),
            self.program.as_str(),
            self.authors.as_str(),
        ]
    }

    fn from_row(row: RecordRow) -> Result<Self> {
        let (
            key,
            [title_of_work, type_of_document, class_of_work, date_of_creation, date_registered, campus, college, program, authors],
        ) = row.into_fields::<9>(&IP_ASSET)?;

        Ok(Self {
            registration_number: String::from_record_key(key)?,
            title_of_work,
            type_of_document,
            class_of_work,
            date_of_creation,
            date_registered,
            campus,
            college,
            program,
            authors,
        })
    }
}
