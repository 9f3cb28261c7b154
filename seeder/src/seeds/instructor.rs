use crate::seed::Seeder;
use async_trait::async_trait;
use chrono::NaiveDate;
use db::models::instructor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sea_orm::{DatabaseConnection, DbErr};

pub struct InstructorSeeder;

#[async_trait]
impl Seeder for InstructorSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        // Use a Send-compatible RNG
        let mut rng = StdRng::from_entropy();

        let names = [
            ("Abercrombie", "Kim"),
            ("Fakhouri", "Fadi"),
            ("Harui", "Roger"),
            ("Kapoor", "Candace"),
            ("Zheng", "Roger"),
        ];

        for (last_name, first_name) in names {
            let year = rng.gen_range(1990..=2020);
            let month = rng.gen_range(1..=12);
            let day = rng.gen_range(1..=28);
            let hire_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            instructor::Model::create(db, last_name, first_name, hire_date).await?;
        }

        Ok(())
    }
}
