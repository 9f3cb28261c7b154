mod courses_test;
mod departments_test;
mod health_test;
mod stats_test;
mod students_test;
