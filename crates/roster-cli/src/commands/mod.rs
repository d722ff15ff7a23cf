pub mod employee;
pub mod review;
