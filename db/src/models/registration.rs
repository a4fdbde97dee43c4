use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{QueryOrder, SqlErr, TransactionTrait};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::marathon;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "registrations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub additional_info: Option<String>,

    pub marathon_id: i64,
    // Copied off the marathon at submission time so listings render
    // without a join.
    pub marathon_title: String,
    pub marathon_start_date: DateTime<Utc>,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::marathon::Entity",
        from = "Column::MarathonId",
        to = "super::marathon::Column::Id",
        on_delete = "Cascade"
    )]
    Marathon,
}

impl Related<super::marathon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Marathon.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Everything a runner submits when registering for a marathon.
#[derive(Clone, Debug)]
pub struct NewRegistration {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub additional_info: Option<String>,
    pub marathon_id: i64,
}

/// The editable field set of an existing registration. The uniqueness key
/// (email, marathon id) is deliberately absent.
#[derive(Clone, Debug)]
pub struct RegistrationData {
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub additional_info: Option<String>,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("You have already placed a registration on the marathon!!")]
    AlreadyRegistered,
    #[error("Marathon not found")]
    MarathonNotFound,
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl Model {
    /// Submits a registration: at most one per (email, marathon) pair.
    ///
    /// The existence check, the insert, and the marathon counter increment
    /// run inside one transaction, so a failure at any step leaves both
    /// collections untouched and the counter can never drift from the
    /// number of live registrations. The unique index on the key pair
    /// decides the winner when two submissions race past the existence
    /// check at the same time.
    pub async fn submit(db: &DbConn, data: NewRegistration) -> Result<Model, SubmitError> {
        let txn = db.begin().await?;

        let existing = Entity::find()
            .filter(Column::Email.eq(data.email.as_str()))
            .filter(Column::MarathonId.eq(data.marathon_id))
            .one(&txn)
            .await?;
        if existing.is_some() {
            // dropping the uncommitted txn rolls it back
            return Err(SubmitError::AlreadyRegistered);
        }

        let marathon = marathon::Entity::find_by_id(data.marathon_id)
            .one(&txn)
            .await?
            .ok_or(SubmitError::MarathonNotFound)?;

        let record = ActiveModel {
            email: Set(data.email),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            contact_number: Set(data.contact_number),
            additional_info: Set(data.additional_info),
            marathon_id: Set(data.marathon_id),
            marathon_title: Set(marathon.title.clone()),
            marathon_start_date: Set(marathon.marathon_start_date),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let inserted = match record.insert(&txn).await {
            Ok(model) => model,
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::warn!(
                    marathon_id = data.marathon_id,
                    "registration lost the insert race to a concurrent submission"
                );
                return Err(SubmitError::AlreadyRegistered);
            }
            Err(e) => return Err(e.into()),
        };

        marathon::Model::increment_registration_count(&txn, data.marathon_id, 1).await?;

        txn.commit().await?;
        Ok(inserted)
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_key(
        db: &DbConn,
        email: &str,
        marathon_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .filter(Column::MarathonId.eq(marathon_id))
            .one(db)
            .await
    }

    /// Registrations placed by one runner, optionally narrowed to marathon
    /// titles containing `search` (case-insensitive substring match).
    pub async fn list_by_email(
        db: &DbConn,
        email: &str,
        search: Option<&str>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find().filter(Column::Email.eq(email));
        if let Some(term) = search {
            // LOWER() on both sides; SQLite LIKE is only case-insensitive
            // for ASCII by default.
            let pattern = format!("%{}%", term.to_lowercase());
            query = query
                .filter(Expr::expr(Func::lower(Expr::col(Column::MarathonTitle))).like(pattern));
        }
        query.order_by_desc(Column::CreatedAt).all(db).await
    }

    /// Replaces the editable fields of an existing registration.
    ///
    /// Fails with [`DbErr::RecordNotUpdated`] when no registration has
    /// that id.
    pub async fn edit(db: &DbConn, id: i64, data: RegistrationData) -> Result<Model, DbErr> {
        let registration = ActiveModel {
            id: Set(id),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            contact_number: Set(data.contact_number),
            additional_info: Set(data.additional_info),
            ..Default::default()
        };

        registration.update(db).await
    }

    /// Deletes a registration and decrements its marathon's counter in the
    /// same transaction. Returns `false` when no registration had that id.
    pub async fn delete(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let txn = db.begin().await?;

        let Some(registration) = Entity::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };

        Entity::delete_by_id(id).exec(&txn).await?;
        marathon::Model::increment_registration_count(&txn, registration.marathon_id, -1).await?;

        txn.commit().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::{Model as Registration, NewRegistration, RegistrationData, SubmitError};
    use crate::models::marathon::{Model as Marathon, MarathonData};
    use crate::test_utils::setup_test_db;
    use chrono::{TimeZone, Utc};
    use sea_orm::ActiveValue::Set;
    use sea_orm::{ActiveModelTrait, DbConn, SqlErr};

    async fn seed_marathon(db: &DbConn, title: &str) -> Marathon {
        let data = MarathonData {
            title: title.to_owned(),
            image: "https://img.example.com/banner.png".to_owned(),
            location: "Cape Town".to_owned(),
            registration_start: Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap(),
            registration_end: Utc.with_ymd_and_hms(2025, 2, 1, 18, 0, 0).unwrap(),
            marathon_start_date: Utc.with_ymd_and_hms(2025, 3, 1, 6, 0, 0).unwrap(),
            running_distance: "25k".to_owned(),
            description: "Coastal route.".to_owned(),
        };
        Marathon::create(db, data, "owner@example.com", "Owner")
            .await
            .unwrap()
    }

    fn entry(email: &str, marathon_id: i64) -> NewRegistration {
        NewRegistration {
            email: email.to_owned(),
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
            contact_number: "0821234567".to_owned(),
            additional_info: None,
            marathon_id,
        }
    }

    #[tokio::test]
    async fn submit_persists_and_increments_counter() {
        let db = setup_test_db().await;
        let marathon = seed_marathon(&db, "Ocean Run").await;

        let record = Registration::submit(&db, entry("jane@example.com", marathon.id))
            .await
            .unwrap();

        assert!(record.id > 0);
        assert_eq!(record.marathon_title, "Ocean Run");
        assert_eq!(record.marathon_start_date, marathon.marathon_start_date);

        let refreshed = Marathon::get_by_id(&db, marathon.id).await.unwrap().unwrap();
        assert_eq!(refreshed.total_registration_count, 1);
    }

    #[tokio::test]
    async fn duplicate_submission_is_rejected_without_side_effects() {
        let db = setup_test_db().await;
        let marathon = seed_marathon(&db, "Ocean Run").await;

        Registration::submit(&db, entry("jane@example.com", marathon.id))
            .await
            .unwrap();
        let second = Registration::submit(&db, entry("jane@example.com", marathon.id)).await;

        assert!(matches!(second, Err(SubmitError::AlreadyRegistered)));

        let found = Registration::find_by_key(&db, "jane@example.com", marathon.id)
            .await
            .unwrap();
        assert!(found.is_some());

        let refreshed = Marathon::get_by_id(&db, marathon.id).await.unwrap().unwrap();
        assert_eq!(refreshed.total_registration_count, 1);
    }

    #[tokio::test]
    async fn counter_tracks_distinct_registrations() {
        let db = setup_test_db().await;
        let marathon = seed_marathon(&db, "Ocean Run").await;

        for email in ["a@example.com", "b@example.com", "c@example.com"] {
            Registration::submit(&db, entry(email, marathon.id))
                .await
                .unwrap();
        }

        let refreshed = Marathon::get_by_id(&db, marathon.id).await.unwrap().unwrap();
        assert_eq!(refreshed.total_registration_count, 3);
    }

    #[tokio::test]
    async fn submit_against_unknown_marathon_fails() {
        let db = setup_test_db().await;

        let result = Registration::submit(&db, entry("jane@example.com", 999)).await;
        assert!(matches!(result, Err(SubmitError::MarathonNotFound)));
    }

    #[tokio::test]
    async fn unique_index_blocks_duplicate_inserts() {
        let db = setup_test_db().await;
        let marathon = seed_marathon(&db, "Ocean Run").await;

        Registration::submit(&db, entry("jane@example.com", marathon.id))
            .await
            .unwrap();

        // Bypass the workflow's existence check to hit the index directly,
        // the way a racing submission would.
        let duplicate = super::ActiveModel {
            email: Set("jane@example.com".to_owned()),
            first_name: Set("Jane".to_owned()),
            last_name: Set("Doe".to_owned()),
            contact_number: Set("0821234567".to_owned()),
            additional_info: Set(None),
            marathon_id: Set(marathon.id),
            marathon_title: Set(marathon.title.clone()),
            marathon_start_date: Set(marathon.marathon_start_date),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let err = duplicate.insert(&db).await.unwrap_err();
        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));
    }

    #[tokio::test]
    async fn delete_decrements_counter() {
        let db = setup_test_db().await;
        let marathon = seed_marathon(&db, "Ocean Run").await;

        let record = Registration::submit(&db, entry("jane@example.com", marathon.id))
            .await
            .unwrap();

        let deleted = Registration::delete(&db, record.id).await.unwrap();
        assert!(deleted);

        let refreshed = Marathon::get_by_id(&db, marathon.id).await.unwrap().unwrap();
        assert_eq!(refreshed.total_registration_count, 0);

        let deleted_again = Registration::delete(&db, record.id).await.unwrap();
        assert!(!deleted_again);
    }

    #[tokio::test]
    async fn list_by_email_filters_on_title_case_insensitively() {
        let db = setup_test_db().await;
        let ocean = seed_marathon(&db, "Ocean Run").await;
        let city = seed_marathon(&db, "City Night Race").await;

        Registration::submit(&db, entry("jane@example.com", ocean.id))
            .await
            .unwrap();
        Registration::submit(&db, entry("jane@example.com", city.id))
            .await
            .unwrap();
        Registration::submit(&db, entry("other@example.com", ocean.id))
            .await
            .unwrap();

        let all = Registration::list_by_email(&db, "jane@example.com", None)
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let filtered = Registration::list_by_email(&db, "jane@example.com", Some("OCEAN"))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].marathon_title, "Ocean Run");
    }

    #[tokio::test]
    async fn edit_replaces_editable_fields_only() {
        let db = setup_test_db().await;
        let marathon = seed_marathon(&db, "Ocean Run").await;

        let record = Registration::submit(&db, entry("jane@example.com", marathon.id))
            .await
            .unwrap();

        let updated = Registration::edit(
            &db,
            record.id,
            RegistrationData {
                first_name: "Janet".to_owned(),
                last_name: "Smith".to_owned(),
                contact_number: "0837654321".to_owned(),
                additional_info: Some("Vegetarian race pack".to_owned()),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.first_name, "Janet");
        assert_eq!(updated.contact_number, "0837654321");
        assert_eq!(updated.additional_info.as_deref(), Some("Vegetarian race pack"));
        // Key fields are untouched
        assert_eq!(updated.email, "jane@example.com");
        assert_eq!(updated.marathon_id, marathon.id);
    }
}
