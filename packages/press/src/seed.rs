use sea_orm::sea_query::{Index, OnConflict, PostgresQueryBuilder};
use sea_orm::*;
use tracing::info;

use crate::entity::{licenses, modules, tags};

/// Licenses a fresh database knows about: (code, version, name, url).
const DEFAULT_LICENSES: &[(&str, &str, &str, &str)] = &[
    (
        "by",
        "1.0",
        "Creative Commons Attribution License",
        "http://creativecommons.org/licenses/by/1.0",
    ),
    (
        "by",
        "2.0",
        "Creative Commons Attribution License",
        "http://creativecommons.org/licenses/by/2.0/",
    ),
    (
        "by",
        "3.0",
        "Creative Commons Attribution License",
        "http://creativecommons.org/licenses/by/3.0/",
    ),
    (
        "by",
        "4.0",
        "Creative Commons Attribution License",
        "http://creativecommons.org/licenses/by/4.0/",
    ),
    (
        "by-nc-sa",
        "4.0",
        "Creative Commons Attribution-NonCommercial-ShareAlike License",
        "http://creativecommons.org/licenses/by-nc-sa/4.0/",
    ),
];

const SUBJECT_SCHEME: &str = "ISKME subject";

/// Subject vocabulary a fresh database knows about.
const DEFAULT_SUBJECTS: &[&str] = &[
    "Arts",
    "Business",
    "Humanities",
    "Mathematics and Statistics",
    "Science and Technology",
    "Social Sciences",
];

/// Store-side versioning logic of the legacy database.
///
/// `assign_legacy_version` fills in `modules.version` when the insert
/// leaves it NULL; `update_latest_module` keeps `latest_modules` pointing
/// at the newest version of every module.
const TRIGGER_STATEMENTS: &[&str] = &[
    r#"CREATE OR REPLACE FUNCTION assign_legacy_version() RETURNS trigger AS $$
BEGIN
    IF NEW.version IS NULL THEN
        NEW.version := '1.' || NEW.major_version;
    END IF;
    RETURN NEW;
END;
$$ LANGUAGE plpgsql"#,
    "DROP TRIGGER IF EXISTS assign_legacy_version ON modules",
    "CREATE TRIGGER assign_legacy_version BEFORE INSERT ON modules \
     FOR EACH ROW EXECUTE FUNCTION assign_legacy_version()",
    r#"CREATE OR REPLACE FUNCTION update_latest_module() RETURNS trigger AS $$
BEGIN
    INSERT INTO latest_modules
        (moduleid, module_ident, portal_type, version, major_version, name, revised)
    VALUES
        (NEW.moduleid, NEW.module_ident, NEW.portal_type, NEW.version,
         NEW.major_version, NEW.name, NEW.revised)
    ON CONFLICT (moduleid) DO UPDATE SET
        module_ident = EXCLUDED.module_ident,
        portal_type = EXCLUDED.portal_type,
        version = EXCLUDED.version,
        major_version = EXCLUDED.major_version,
        name = EXCLUDED.name,
        revised = EXCLUDED.revised
    WHERE latest_modules.major_version <= EXCLUDED.major_version;
    RETURN NEW;
END;
$$ LANGUAGE plpgsql"#,
    "DROP TRIGGER IF EXISTS update_latest_module ON modules",
    "CREATE TRIGGER update_latest_module AFTER INSERT ON modules \
     FOR EACH ROW EXECUTE FUNCTION update_latest_module()",
];

/// Install (or replace) the versioning triggers on `modules`.
pub async fn ensure_triggers(db: &DatabaseConnection) -> Result<(), DbErr> {
    for stmt in TRIGGER_STATEMENTS {
        db.execute_unprepared(stmt).await?;
    }
    info!("Ensured legacy versioning triggers exist");
    Ok(())
}

/// Ensure required database indexes exist.
///
/// SeaORM's schema-sync doesn't support composite unique indexes over
/// non-key columns, so we create them manually.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Two publishes racing past the latest-row lock must not both
    // produce the same version.
    let stmt = Index::create()
        .if_not_exists()
        .unique()
        .name("idx_modules_moduleid_major_version")
        .table(modules::Entity)
        .col(modules::Column::Moduleid)
        .col(modules::Column::MajorVersion)
        .to_string(PostgresQueryBuilder);

    db.execute_unprepared(&stmt).await?;
    info!("Ensured index idx_modules_moduleid_major_version exists");
    Ok(())
}

/// Seed the `licenses` and `tags` vocabularies with defaults.
pub async fn seed_vocabularies(db: &DatabaseConnection) -> Result<(), DbErr> {
    let mut licenses_inserted = 0u32;
    for &(code, version, name, url) in DEFAULT_LICENSES {
        let model = licenses::ActiveModel {
            code: Set(code.to_string()),
            version: Set(version.to_string()),
            name: Set(name.to_string()),
            url: Set(url.to_string()),
            ..Default::default()
        };

        let result = licenses::Entity::insert(model)
            .on_conflict(
                OnConflict::column(licenses::Column::Url)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await;

        match result {
            Ok(n) if n > 0 => licenses_inserted += 1,
            Ok(_) | Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(e),
        }
    }

    if licenses_inserted > 0 {
        info!("Seeded {} new licenses", licenses_inserted);
    }

    let mut tags_inserted = 0u32;
    for &tag in DEFAULT_SUBJECTS {
        let model = tags::ActiveModel {
            tag: Set(tag.to_string()),
            scheme: Set(Some(SUBJECT_SCHEME.to_string())),
            ..Default::default()
        };

        let result = tags::Entity::insert(model)
            .on_conflict(OnConflict::column(tags::Column::Tag).do_nothing().to_owned())
            .exec_without_returning(db)
            .await;

        match result {
            Ok(n) if n > 0 => tags_inserted += 1,
            Ok(_) | Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(e),
        }
    }

    if tags_inserted > 0 {
        info!("Seeded {} new subject tags", tags_inserted);
    }

    Ok(())
}
