use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An instructor who may administer zero or more departments.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub last_name: String,
    pub first_name: String,
    pub hire_date: NaiveDate,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::department::Entity")]
    Departments,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Departments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Display name used in administrator dropdowns and conflict messages.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub async fn create(
        db: &DbConn,
        last_name: &str,
        first_name: &str,
        hire_date: NaiveDate,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let instructor = ActiveModel {
            last_name: Set(last_name.to_owned()),
            first_name: Set(first_name.to_owned()),
            hire_date: Set(hire_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        instructor.insert(db).await
    }

    /// All instructors ordered by surname, for the department form dropdown.
    pub async fn get_all_ordered(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        use sea_orm::QueryOrder;
        Entity::find()
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(db)
            .await
    }
}
