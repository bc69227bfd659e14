pub mod announcement;
pub mod establishment;
pub mod order;
pub mod product;
pub mod reclamation;
pub mod user;
