// User Account Record

use super::record::{
    EntityDescriptor, KeyKind, KeyPolicy, RecordRow, Resource, ResourceKey, RpcMethods, WireNames,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub static USER: EntityDescriptor = EntityDescriptor {
    name: "User",
    table: "table_user",
    key_column: "user_id",
    key_kind: KeyKind::Integer,
    key_policy: KeyPolicy::CallerSupplied,
    fields: &[
        "sr_code",
        "email",
        "password",
        "account_type",
        "user_contact",
        "user_img",
        "user_fname",
        "user_lname",
        "user_mname",
    ],
    methods: RpcMethods {
        create: "user.create.v1",
        get: "user.get.v1",
        list: "user.list.v1",
        update: "user.update.v1",
        delete: "user.delete.v1",
    },
    wire: WireNames {
        singular: "user",
        plural: "users",
        route: "users",
    },
};

/// User account
///
/// `user_id` is chosen by the caller and must be a positive integer.
/// `password` is an ordinary stored field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub user_id: i64,
    pub sr_code: String,
    pub email: String,
    pub password: String,
    pub account_type: String,
    pub user_contact: String,
    pub user_img: String,
    pub user_fname: String,
    pub user_lname: String,
    pub user_mname: String,
}

impl Resource for User {
    type Key = i64;

    fn descriptor() -> &'static EntityDescriptor {
        &USER
    }

    fn key(&self) -> &i64 {
        &self.user_id
    }

    fn set_key(&mut self, key: i64) {
        self.user_id = key;
    }

    fn values(&self) -> Vec<&str> {
        vec![
            self.sr_code.as_str(),
            self.email.as_str(),
            self.password.as_str(),
            self.account_type.as_str(),
            self.user_contact.as_str(),
            self.user_img.as_str(),
            self.user_fname.as_str(),
            self.user_lname.as_str(),
            self.user_mname.as_str(),
        ]
    }

    fn from_row(row: RecordRow) -> Result<Self> {
        let (
            key,
            [sr_code, email, password, account_type, user_contact, user_img, user_fname, user_lname, user_mname],
        ) = row.into_fields::<9>(&USER)?;

        Ok(Self {
            user_id: i64::from_record_key(key)?,
            sr_code,
            email,
            password,
            account_type,
            user_contact,
            user_img,
            user_fname,
            user_lname,
            user_mname,
        })
    }
}
