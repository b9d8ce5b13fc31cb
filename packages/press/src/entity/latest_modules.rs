use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The newest `modules` row per external id.
///
/// Maintained by the `update_latest_module` trigger; never written directly.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "latest_modules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub moduleid: String,

    pub module_ident: i32,
    pub portal_type: String,
    pub version: String,
    pub major_version: i32,
    pub name: String,
    pub revised: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
