//! Article entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Longest title the store accepts, in characters
pub const MAX_TITLE_LEN: usize = 512;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_article")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(512))")]
    pub title: String,

    /// Always carries an explicit http:// or https:// scheme
    #[sea_orm(column_type = "Text")]
    pub url: String,

    #[sea_orm(default_value = false)]
    pub is_read: bool,

    /// Set once on insert
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
