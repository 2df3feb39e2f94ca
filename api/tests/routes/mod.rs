mod assignments_test;
mod auth_test;
mod health_test;
mod me_test;
mod templates_test;
mod trainer_test;
