pub mod m202507140001_create_instructors;
pub mod m202507140002_create_departments;
pub mod m202507140003_create_students;
pub mod m202507140004_create_courses;
pub mod m202507140005_create_enrollments;
