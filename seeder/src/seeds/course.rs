use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::{course, department};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct CourseSeeder;

#[async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let mut rng = StdRng::from_entropy();

        let departments = department::Entity::find().all(db).await?;
        if departments.is_empty() {
            return Ok(());
        }

        let titles = [
            "Chemistry",
            "Microeconomics",
            "Macroeconomics",
            "Calculus",
            "Trigonometry",
            "Composition",
            "Literature",
            "Statics",
            "Dynamics",
            "Poetry",
            "Algorithms",
            "Databases",
        ];

        for title in titles {
            let department = departments.as_slice().choose(&mut rng).unwrap();
            let credits = rng.gen_range(0..=5);
            course::Model::create(db, title, credits, department.id, None).await?;
        }

        Ok(())
    }
}
