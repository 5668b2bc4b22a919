pub mod auth;
pub mod catalog;
pub mod programs;
pub mod students;
pub mod subjects;
