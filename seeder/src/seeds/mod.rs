pub mod assignment;
pub mod submission;
pub mod user;

pub const TRAINER_EMAIL: &str = "trainer@example.com";
pub const STUDENT_EMAIL: &str = "student@example.com";
pub const PASSWORD: &str = "password123";
