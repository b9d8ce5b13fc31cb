use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "moduletags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub module_ident: i32,
    #[sea_orm(primary_key)]
    pub tagid: i32,
    #[sea_orm(belongs_to, from = "module_ident", to = "module_ident")]
    pub module: Option<super::modules::Entity>,
    #[sea_orm(belongs_to, from = "tagid", to = "tagid")]
    pub tag: Option<super::tags::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
