//! HR vertical slice: employee records, their validation and persistence.

pub mod dto;
mod error;
pub mod repository;
pub mod seed;
pub mod service;
pub mod validation;

pub use dto::{EmployeeDto, EmployeeInput};
pub use entity::Department;
pub use error::{HrError, HrResult};
pub use repository::{EmployeeRecord, EmployeeRepository};
pub use service::EmployeeService;
