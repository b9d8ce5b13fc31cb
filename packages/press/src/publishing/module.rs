use std::collections::BTreeSet;

use common::{CONTENT_FILENAME, Module, ModuleMetadata, Submission};
use sea_orm::sea_query::{LockType, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
    Set, TransactionSession, TransactionTrait,
};
use tracing::{debug, info, instrument, warn};

use super::rewrite::replace_id_and_version;
use crate::entity::{
    abstracts, files, keywords, latest_modules, licenses, module_files, modulekeywords, modules,
    moduletags, tags,
};
use crate::error::{PublishError, Result};

/// `portal_type` of a page.
pub const PORTAL_TYPE: &str = "Module";

/// Media type the document body is stored under.
pub const CONTENT_MEDIA_TYPE: &str = "text/xml";

/// Identity of a freshly published module version, as assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPage {
    pub id: String,
    /// Version string, e.g. `1.6`.
    pub version: String,
    pub major_version: i32,
    /// `modules.module_ident` of the new row.
    pub ident: i32,
}

impl PublishedPage {
    /// `((id, version), ident)`, the shape legacy callers expect.
    pub fn into_parts(self) -> ((String, String), i32) {
        ((self.id, self.version), self.ident)
    }
}

/// Publish a page (module) the way the legacy system does, producing the
/// same rows its in-database logic would.
///
/// Only republishing is supported: a `latest_modules` row must already
/// exist for `metadata.id`. Every write happens in one transaction; any
/// error rolls all of them back. The body of `model` is rewritten in place
/// with the newly assigned id and version before it is stored.
///
/// Resource files (images, attachments) are not published.
#[instrument(skip_all, fields(moduleid = ?metadata.id, submitter = %submission.submitter))]
pub async fn publish_legacy_page<C>(
    db: &C,
    model: &Module,
    metadata: &ModuleMetadata,
    submission: &Submission,
) -> Result<PublishedPage>
where
    C: TransactionTrait,
{
    let (Some(_), Some(moduleid)) = (model.id.as_deref(), metadata.id.as_deref()) else {
        return Err(PublishError::MissingId);
    };

    let txn = db.begin().await?;

    // Lock the latest row so concurrent publishes of this module queue up
    // behind us and see the version we are about to create.
    let existing = latest_modules::Entity::find_by_id(moduleid.to_owned())
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or_else(|| PublishError::NotFound(format!("Module '{moduleid}'")))?;
    let major_version = existing.major_version + 1;

    let abstractid = abstracts::Entity::insert(abstracts::ActiveModel {
        abstract_text: Set(metadata.abstract_text.clone()),
        ..Default::default()
    })
    .exec(&txn)
    .await?
    .last_insert_id;

    let license = licenses::Entity::find()
        .filter(licenses::Column::Url.eq(metadata.license_url.as_str()))
        .one(&txn)
        .await?
        .ok_or_else(|| PublishError::NotFound(format!("License '{}'", metadata.license_url)))?;

    // `version` is left to the store; the returned row is authoritative.
    let inserted = modules::ActiveModel {
        moduleid: Set(moduleid.to_owned()),
        major_version: Set(major_version),
        portal_type: Set(PORTAL_TYPE.to_owned()),
        name: Set(metadata.title.clone()),
        created: Set(metadata.created),
        revised: Set(metadata.revised),
        abstractid: Set(Some(abstractid)),
        licenseid: Set(Some(license.licenseid)),
        doctype: Set(String::new()),
        submitter: Set(Some(submission.submitter.clone())),
        submitlog: Set(Some(submission.message.clone())),
        language: Set(metadata.language.clone()),
        authors: Set(metadata.authors.clone()),
        maintainers: Set(metadata.maintainers.clone()),
        licensors: Set(metadata.licensors.clone()),
        // Parentage is not captured by the metadata.
        parent: Set(None),
        parentauthors: Set(None),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let ident = inserted.module_ident;
    let id = inserted.moduleid;
    let version = inserted.version;

    link_subjects(&txn, ident, &metadata.subjects).await?;
    link_keywords(&txn, ident, &metadata.keywords).await?;

    replace_id_and_version(model, &id, &version).await?;

    let content = model.file.read_all().await?;
    let fileid = files::Entity::insert(files::ActiveModel {
        file: Set(content),
        media_type: Set(CONTENT_MEDIA_TYPE.to_owned()),
        ..Default::default()
    })
    .exec(&txn)
    .await?
    .last_insert_id;

    module_files::Entity::insert(module_files::ActiveModel {
        module_ident: Set(ident),
        fileid: Set(fileid),
        filename: Set(CONTENT_FILENAME.to_owned()),
    })
    .exec_without_returning(&txn)
    .await?;

    if !model.resources.is_empty() {
        warn!(
            count = model.resources.len(),
            "Resource files are not published"
        );
    }

    txn.commit().await?;

    info!(
        id = %id,
        version = %version,
        ident,
        previous_major_version = existing.major_version,
        "Published legacy page"
    );

    Ok(PublishedPage {
        id,
        version,
        major_version: inserted.major_version,
        ident,
    })
}

/// Link the module version to every subject found in the tag vocabulary.
/// Subjects outside the vocabulary are skipped.
async fn link_subjects<C: ConnectionTrait>(
    conn: &C,
    ident: i32,
    subjects: &BTreeSet<String>,
) -> std::result::Result<usize, DbErr> {
    if subjects.is_empty() {
        return Ok(0);
    }

    let known = tags::Entity::find()
        .filter(tags::Column::Tag.is_in(subjects.iter().cloned()))
        .all(conn)
        .await?;

    for tag in &known {
        moduletags::Entity::insert(moduletags::ActiveModel {
            module_ident: Set(ident),
            tagid: Set(tag.tagid),
        })
        .exec_without_returning(conn)
        .await?;
    }

    if known.len() < subjects.len() {
        let skipped: Vec<&str> = subjects
            .iter()
            .filter(|s| !known.iter().any(|t| &t.tag == *s))
            .map(String::as_str)
            .collect();
        debug!(ident, ?skipped, "Skipped subjects missing from the vocabulary");
    }

    Ok(known.len())
}

/// Add any new words to the keyword vocabulary, then link the module
/// version to every keyword.
async fn link_keywords<C: ConnectionTrait>(
    conn: &C,
    ident: i32,
    words: &BTreeSet<String>,
) -> std::result::Result<usize, DbErr> {
    if words.is_empty() {
        return Ok(0);
    }

    let mut added = 0u64;
    for word in words {
        let result = keywords::Entity::insert(keywords::ActiveModel {
            word: Set(word.clone()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(keywords::Column::Word)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await;

        match result {
            Ok(n) => added += n,
            Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(e),
        }
    }

    let vocabulary = keywords::Entity::find()
        .filter(keywords::Column::Word.is_in(words.iter().cloned()))
        .all(conn)
        .await?;

    for keyword in &vocabulary {
        modulekeywords::Entity::insert(modulekeywords::ActiveModel {
            module_ident: Set(ident),
            keywordid: Set(keyword.keywordid),
        })
        .exec_without_returning(conn)
        .await?;
    }

    debug!(ident, added, linked = vocabulary.len(), "Linked keywords");
    Ok(vocabulary.len())
}
