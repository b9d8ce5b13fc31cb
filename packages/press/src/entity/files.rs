use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Opaque file blobs. Linked to module versions through `module_files`.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "files")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub fileid: i32,

    pub file: Vec<u8>,
    pub media_type: String,

    #[sea_orm(has_many, via = "module_files")]
    pub modules: HasMany<super::modules::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
