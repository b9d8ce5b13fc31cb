use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "licenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub licenseid: i32,

    pub code: String,
    pub version: String,
    pub name: String,
    #[sea_orm(unique)]
    pub url: String,

    #[sea_orm(has_many)]
    pub modules: HasMany<super::modules::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
