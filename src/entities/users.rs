//! `SeaORM` Entity for the users table
//!
//! A collision on either `username` or `email` blocks creation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::telegrams::Entity")]
    Telegram,
    #[sea_orm(has_many = "super::robots::Entity")]
    Robots,
}

impl Related<super::telegrams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Telegram.def()
    }
}

impl Related<super::robots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Robots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
