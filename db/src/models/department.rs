use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A department with a budget and an optional administering instructor.
///
/// `row_version` is the optimistic-concurrency token: it changes on every
/// successful update and is compared, never assigned, by conflicting writers.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub budget: f64,
    pub start_date: NaiveDate,

    /// Administrator, nullable.
    pub instructor_id: Option<i64>,

    pub row_version: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::instructor::Entity",
        from = "Column::InstructorId",
        to = "super::instructor::Column::Id",
        on_delete = "SetNull"
    )]
    Administrator,

    #[sea_orm(has_many = "super::course::Entity")]
    Courses,
}

impl Related<super::instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Administrator.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Result of a row-version-guarded update.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The stored row version matched and the write committed.
    Updated(Model),
    /// The row still exists but its version moved on; carries the current
    /// database values so callers can report them field by field.
    Conflict(Model),
    /// The row was deleted by another writer.
    Deleted,
}

/// The fields a department edit submission may change.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentEdit {
    pub name: String,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub instructor_id: Option<i64>,
}

impl Model {
    pub async fn create(
        db: &DbConn,
        name: &str,
        budget: f64,
        start_date: NaiveDate,
        instructor_id: Option<i64>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let department = ActiveModel {
            name: Set(name.to_owned()),
            budget: Set(budget),
            start_date: Set(start_date),
            instructor_id: Set(instructor_id),
            row_version: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        department.insert(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// Loads a department together with its administrator.
    pub async fn get_with_administrator(
        db: &DbConn,
        id: i64,
    ) -> Result<Option<(Model, Option<super::instructor::Model>)>, DbErr> {
        Entity::find_by_id(id)
            .find_also_related(super::instructor::Entity)
            .one(db)
            .await
    }

    /// All departments with their administrators, ordered by name.
    pub async fn list_with_administrators(
        db: &DbConn,
    ) -> Result<Vec<(Model, Option<super::instructor::Model>)>, DbErr> {
        use sea_orm::QueryOrder;
        Entity::find()
            .find_also_related(super::instructor::Entity)
            .order_by_asc(Column::Name)
            .all(db)
            .await
    }

    /// Applies an edit if and only if the stored row version still equals
    /// `row_version`. A single conditional UPDATE carries the version
    /// predicate, so the store itself arbitrates between concurrent writers;
    /// there is no retry loop.
    pub async fn update_with_version(
        db: &DbConn,
        id: i64,
        edit: &DepartmentEdit,
        row_version: i64,
    ) -> Result<UpdateOutcome, DbErr> {
        let values = ActiveModel {
            name: Set(edit.name.clone()),
            budget: Set(edit.budget),
            start_date: Set(edit.start_date),
            instructor_id: Set(edit.instructor_id),
            row_version: Set(row_version + 1),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = Entity::update_many()
            .set(values)
            .filter(Column::Id.eq(id))
            .filter(Column::RowVersion.eq(row_version))
            .exec(db)
            .await?;

        if result.rows_affected > 0 {
            return match Entity::find_by_id(id).one(db).await? {
                Some(updated) => Ok(UpdateOutcome::Updated(updated)),
                // Deleted between our UPDATE and re-read; treat as deleted.
                None => Ok(UpdateOutcome::Deleted),
            };
        }

        match Entity::find_by_id(id).one(db).await? {
            Some(current) => Ok(UpdateOutcome::Conflict(current)),
            None => Ok(UpdateOutcome::Deleted),
        }
    }
}
