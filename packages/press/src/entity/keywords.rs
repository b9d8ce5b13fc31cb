use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Keyword vocabulary shared by every module. Words are unique and
/// compared case-sensitively.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "keywords")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub keywordid: i32,

    #[sea_orm(unique, column_type = "Text")]
    pub word: String,

    #[sea_orm(has_many, via = "modulekeywords")]
    pub modules: HasMany<super::modules::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
