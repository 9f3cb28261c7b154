use crate::seed::Seeder;
use async_trait::async_trait;
use chrono::NaiveDate;
use db::models::{department, instructor};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct DepartmentSeeder;

#[async_trait]
impl Seeder for DepartmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let mut rng = StdRng::from_entropy();

        let instructors = instructor::Entity::find().all(db).await?;
        let names = ["English", "Mathematics", "Engineering", "Economics"];
        let budget_options = [100000.0, 200000.0, 350000.0, 500000.0];

        for name in names {
            let budget = *budget_options.as_slice().choose(&mut rng).unwrap();
            let start_date =
                NaiveDate::from_ymd_opt(rng.gen_range(2005..=2015), 9, 1).unwrap();
            // Some departments run without an administrator.
            let instructor_id = instructors
                .as_slice()
                .choose(&mut rng)
                .filter(|_| rng.gen_bool(0.75))
                .map(|i| i.id);
            department::Model::create(db, name, budget, start_date, instructor_id).await?;
        }

        Ok(())
    }
}
