use crate::seed::Seeder;
use async_trait::async_trait;
use chrono::NaiveDate;
use db::models::student;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sea_orm::{DatabaseConnection, DbErr};

pub struct StudentSeeder;

#[async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let mut rng = StdRng::from_entropy();

        let last_names = [
            "Alexander", "Alonzo", "Anand", "Barzdukas", "Li", "Justice", "Norman", "Olivetto",
        ];
        let first_names = [
            "Carson", "Meredith", "Arturo", "Gytis", "Yan", "Peggy", "Laura", "Nino",
        ];

        for _ in 0..40 {
            let last_name = *last_names.as_slice().choose(&mut rng).unwrap();
            let first_name = *first_names.as_slice().choose(&mut rng).unwrap();
            let enrollment_date = NaiveDate::from_ymd_opt(
                rng.gen_range(2018..=2025),
                rng.gen_range(1..=12),
                rng.gen_range(1..=28),
            )
            .unwrap();
            student::Model::create(db, last_name, first_name, enrollment_date).await?;
        }

        Ok(())
    }
}
