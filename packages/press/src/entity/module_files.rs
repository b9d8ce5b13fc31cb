use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "module_files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub module_ident: i32,
    /// Name of the file within the module, e.g. `index.cnxml`.
    #[sea_orm(primary_key)]
    pub filename: String,
    #[sea_orm(belongs_to, from = "module_ident", to = "module_ident")]
    pub module: Option<super::modules::Entity>,

    pub fileid: i32,
    #[sea_orm(belongs_to, from = "fileid", to = "fileid")]
    pub file: Option<super::files::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
