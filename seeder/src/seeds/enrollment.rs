use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::enrollment::{Grade, Model as EnrollmentModel};
use db::models::{course, student};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct EnrollmentSeeder;

#[async_trait]
impl Seeder for EnrollmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let mut rng = StdRng::from_entropy();

        let students = student::Entity::find().all(db).await?;
        let courses = course::Entity::find().all(db).await?;
        if courses.is_empty() {
            return Ok(());
        }

        let grades = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

        for student in &students {
            let count = rng.gen_range(1..=3usize);
            let picks = courses.as_slice().choose_multiple(&mut rng, count);
            for course in picks {
                // Roughly a quarter of enrollments are still ungraded.
                let grade = grades
                    .as_slice()
                    .choose(&mut rng)
                    .filter(|_| rng.gen_bool(0.75))
                    .cloned();
                EnrollmentModel::create(db, student.id, course.id, grade).await?;
            }
        }

        Ok(())
    }
}
