use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A student record. The enrollment date is always a concrete in-range date,
/// never a sentinel minimum value.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub last_name: String,
    pub first_name: String,
    pub enrollment_date: NaiveDate,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        last_name: &str,
        first_name: &str,
        enrollment_date: NaiveDate,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let student = ActiveModel {
            last_name: Set(last_name.to_owned()),
            first_name: Set(first_name.to_owned()),
            enrollment_date: Set(enrollment_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        student.insert(db).await
    }

    /// Full replace of the editable fields.
    pub async fn edit(
        db: &DbConn,
        id: i64,
        last_name: &str,
        first_name: &str,
        enrollment_date: NaiveDate,
    ) -> Result<Model, DbErr> {
        let student = ActiveModel {
            id: Set(id),
            last_name: Set(last_name.to_owned()),
            first_name: Set(first_name.to_owned()),
            enrollment_date: Set(enrollment_date),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        student.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// Loads a student together with their enrollments and the course each
    /// enrollment belongs to. States its related fetches up front instead of
    /// relying on lazy navigation.
    pub async fn get_with_enrollments(
        db: &DbConn,
        id: i64,
    ) -> Result<
        Option<(
            Model,
            Vec<(super::enrollment::Model, Option<super::course::Model>)>,
        )>,
        DbErr,
    > {
        let Some(student) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let enrollments = super::enrollment::Entity::find()
            .filter(super::enrollment::Column::StudentId.eq(id))
            .find_also_related(super::course::Entity)
            .all(db)
            .await?;

        Ok(Some((student, enrollments)))
    }
}
