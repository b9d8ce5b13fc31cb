use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subject vocabulary shared by every module.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub tagid: i32,

    #[sea_orm(unique)]
    pub tag: String,
    pub scheme: Option<String>,

    #[sea_orm(has_many, via = "moduletags")]
    pub modules: HasMany<super::modules::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
