use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{ConnectionTrait, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "marathons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub image: String,
    pub location: String,

    pub registration_start: DateTime<Utc>,
    pub registration_end: DateTime<Utc>,
    pub marathon_start_date: DateTime<Utc>,

    pub running_distance: String,
    pub description: String,

    pub creator_email: String,
    pub creator_name: String,

    pub total_registration_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::registration::Entity")]
    Registrations,
}

impl Related<super::registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The editable field set of a marathon. Used for both creation and the
/// full-field replace on update; the creator identity and the registration
/// counter are never part of it.
#[derive(Clone, Debug)]
pub struct MarathonData {
    pub title: String,
    pub image: String,
    pub location: String,
    pub registration_start: DateTime<Utc>,
    pub registration_end: DateTime<Utc>,
    pub marathon_start_date: DateTime<Utc>,
    pub running_distance: String,
    pub description: String,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        data: MarathonData,
        creator_email: &str,
        creator_name: &str,
    ) -> Result<Model, DbErr> {
        let marathon = ActiveModel {
            title: Set(data.title),
            image: Set(data.image),
            location: Set(data.location),
            registration_start: Set(data.registration_start),
            registration_end: Set(data.registration_end),
            marathon_start_date: Set(data.marathon_start_date),
            running_distance: Set(data.running_distance),
            description: Set(data.description),
            creator_email: Set(creator_email.to_owned()),
            creator_name: Set(creator_name.to_owned()),
            total_registration_count: Set(0),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        marathon.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Lists every marathon, optionally ordered by creation timestamp.
    /// `sort` accepts `asc` or `desc`; anything else leaves the store order.
    pub async fn get_all(db: &DbConn, sort: Option<&str>) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find();
        query = match sort {
            Some("asc") => query.order_by_asc(Column::CreatedAt),
            Some("desc") => query.order_by_desc(Column::CreatedAt),
            _ => query,
        };
        query.all(db).await
    }

    /// The `limit` most recently created marathons, newest first.
    pub async fn get_latest(db: &DbConn, limit: u64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(db)
            .await
    }

    pub async fn get_by_creator_email(db: &DbConn, email: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::CreatorEmail.eq(email))
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }

    /// Replaces the editable fields of an existing marathon.
    ///
    /// Fails with [`DbErr::RecordNotUpdated`] when no marathon has that id.
    pub async fn edit(db: &DbConn, id: i64, data: MarathonData) -> Result<Model, DbErr> {
        let marathon = ActiveModel {
            id: Set(id),
            title: Set(data.title),
            image: Set(data.image),
            location: Set(data.location),
            registration_start: Set(data.registration_start),
            registration_end: Set(data.registration_end),
            marathon_start_date: Set(data.marathon_start_date),
            running_distance: Set(data.running_distance),
            description: Set(data.description),
            ..Default::default()
        };

        marathon.update(db).await
    }

    /// Deletes a marathon. Dependent registrations are removed by the
    /// store's cascading foreign key. Returns the number of rows deleted.
    pub async fn delete(db: &DbConn, id: i64) -> Result<u64, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected)
    }

    /// Adjusts `total_registration_count` by `delta` in the store, so the
    /// add is atomic rather than read-modify-write. Callers run this inside
    /// the same transaction as the registration write it accounts for.
    pub async fn increment_registration_count<C: ConnectionTrait>(
        conn: &C,
        id: i64,
        delta: i32,
    ) -> Result<u64, DbErr> {
        let res = Entity::update_many()
            .col_expr(
                Column::TotalRegistrationCount,
                Expr::col(Column::TotalRegistrationCount).add(delta),
            )
            .filter(Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }
}
