use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A course offered by a department. `teaching_material_path` holds the
/// web-relative path of an uploaded image, if one was provided.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub credits: i32,

    /// Foreign key reference to the owning department.
    pub department_id: i64,

    pub teaching_material_path: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_delete = "Cascade"
    )]
    Department,

    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
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
        title: &str,
        credits: i32,
        department_id: i64,
        teaching_material_path: Option<String>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let course = ActiveModel {
            title: Set(title.to_owned()),
            credits: Set(credits),
            department_id: Set(department_id),
            teaching_material_path: Set(teaching_material_path),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        course.insert(db).await
    }

    /// Full replace of the editable fields. `teaching_material_path` is only
    /// touched when a new upload supplies one, so rejected uploads leave the
    /// prior stored path intact.
    pub async fn edit(
        db: &DbConn,
        id: i64,
        title: &str,
        credits: i32,
        department_id: i64,
        teaching_material_path: Option<String>,
    ) -> Result<Model, DbErr> {
        let mut course = ActiveModel {
            id: Set(id),
            title: Set(title.to_owned()),
            credits: Set(credits),
            department_id: Set(department_id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(path) = teaching_material_path {
            course.teaching_material_path = Set(Some(path));
        }

        course.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// Loads a course together with its owning department.
    pub async fn get_with_department(
        db: &DbConn,
        id: i64,
    ) -> Result<Option<(Model, Option<super::department::Model>)>, DbErr> {
        Entity::find_by_id(id)
            .find_also_related(super::department::Entity)
            .one(db)
            .await
    }

    /// All courses with their departments, ordered by title.
    pub async fn list_with_departments(
        db: &DbConn,
    ) -> Result<Vec<(Model, Option<super::department::Model>)>, DbErr> {
        use sea_orm::QueryOrder;
        Entity::find()
            .find_also_related(super::department::Entity)
            .order_by_asc(Column::Title)
            .all(db)
            .await
    }
}
