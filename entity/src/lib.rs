//! sea-orm entities for the employee records store.

pub mod department;
pub mod employees;

pub use department::Department;
