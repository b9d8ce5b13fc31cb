use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per published version of a module or collection.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub module_ident: i32,

    /// "Module" or "Collection".
    pub portal_type: String,
    pub moduleid: String,
    /// Assigned by the store when left unset (`1.<major_version>`).
    pub version: String,
    pub major_version: i32,
    pub minor_version: Option<i32>,

    pub name: String,
    pub created: DateTimeUtc,
    pub revised: DateTimeUtc,

    pub abstractid: Option<i32>,
    #[sea_orm(belongs_to, from = "abstractid", to = "abstractid")]
    pub abstract_ref: Option<super::abstracts::Entity>,

    pub licenseid: Option<i32>,
    #[sea_orm(belongs_to, from = "licenseid", to = "licenseid")]
    pub license: Option<super::licenses::Entity>,

    pub doctype: String,
    pub submitter: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub submitlog: Option<String>,
    pub language: Option<String>,

    pub authors: Vec<String>,
    pub maintainers: Vec<String>,
    pub licensors: Vec<String>,

    pub parent: Option<i32>,
    pub parentauthors: Option<Vec<String>>,

    #[sea_orm(has_many, via = "moduletags")]
    pub tags: HasMany<super::tags::Entity>,

    #[sea_orm(has_many, via = "modulekeywords")]
    pub keywords: HasMany<super::keywords::Entity>,

    #[sea_orm(has_many, via = "module_files")]
    pub files: HasMany<super::files::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
