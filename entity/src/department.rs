use std::{fmt, str::FromStr};

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Departments an employee can belong to. Stored and serialized by name.
#[derive(
    Copy, Clone, Debug, EnumIter, DeriveActiveEnum, Eq, PartialEq, Hash, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    #[sea_orm(string_value = "ENGINEERING")]
    Engineering,
    #[sea_orm(string_value = "MARKETING")]
    Marketing,
    #[sea_orm(string_value = "SALES")]
    Sales,
    #[sea_orm(string_value = "HUMAN_RESOURCES")]
    HumanResources,
    #[sea_orm(string_value = "FINANCE")]
    Finance,
    #[sea_orm(string_value = "OPERATIONS")]
    Operations,
    #[sea_orm(string_value = "IT")]
    It,
    #[sea_orm(string_value = "LEGAL")]
    Legal,
}

impl Department {
    pub const ALL: [Department; 8] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::HumanResources,
        Department::Finance,
        Department::Operations,
        Department::It,
        Department::Legal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Engineering => "ENGINEERING",
            Department::Marketing => "MARKETING",
            Department::Sales => "SALES",
            Department::HumanResources => "HUMAN_RESOURCES",
            Department::Finance => "FINANCE",
            Department::Operations => "OPERATIONS",
            Department::It => "IT",
            Department::Legal => "LEGAL",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDepartment(pub String);

impl fmt::Display for UnknownDepartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown department `{}`", self.0)
    }
}

impl std::error::Error for UnknownDepartment {}

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|dept| dept.as_str() == s)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}
