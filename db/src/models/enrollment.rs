use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Join entity between a student and a course, carrying the awarded grade.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub student_id: i64,
    pub course_id: i64,

    /// None until a grade has been awarded.
    pub grade: Option<Grade>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    EnumIter,
    EnumString,
    Display,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "enrollment_grade")]
pub enum Grade {
    #[strum(serialize = "A")]
    #[sea_orm(string_value = "A")]
    A,
    #[strum(serialize = "B")]
    #[sea_orm(string_value = "B")]
    B,
    #[strum(serialize = "C")]
    #[sea_orm(string_value = "C")]
    C,
    #[strum(serialize = "D")]
    #[sea_orm(string_value = "D")]
    D,
    #[strum(serialize = "F")]
    #[sea_orm(string_value = "F")]
    F,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        student_id: i64,
        course_id: i64,
        grade: Option<Grade>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let enrollment = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            grade: Set(grade),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        enrollment.insert(db).await
    }
}
