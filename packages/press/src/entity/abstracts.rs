use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "abstracts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub abstractid: i32,

    #[sea_orm(column_name = "abstract", column_type = "Text")]
    pub abstract_text: String,

    /// Rendered form, filled in by later processing.
    #[sea_orm(column_type = "Text", nullable)]
    pub html: Option<String>,

    #[sea_orm(has_many)]
    pub modules: HasMany<super::modules::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
