//! Store-backed access to the `employees` table.

use chrono::NaiveDate;
use entity::{Department, employees};
use platform_db::DbPool;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::validation::ValidEmployee;

/// Row to write. `id: None` inserts a new row and lets the store assign the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Department,
    pub salary_cents: i64,
    pub hire_date: NaiveDate,
}

impl EmployeeRecord {
    pub fn new(valid: ValidEmployee) -> Self {
        Self::with_id(None, valid)
    }

    pub fn with_id(id: Option<i64>, valid: ValidEmployee) -> Self {
        Self {
            id,
            first_name: valid.first_name,
            last_name: valid.last_name,
            email: valid.email,
            department: valid.department,
            salary_cents: valid.salary_cents,
            hire_date: valid.hire_date,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EmployeeRepository {
    db: DbPool,
}

impl EmployeeRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// All employees in insertion (id) order.
    pub async fn find_all(&self) -> Result<Vec<employees::Model>, DbErr> {
        employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<employees::Model>, DbErr> {
        employees::Entity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_department(
        &self,
        department: Department,
    ) -> Result<Vec<employees::Model>, DbErr> {
        employees::Entity::find()
            .filter(employees::Column::Department.eq(department))
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<employees::Model>, DbErr> {
        employees::Entity::find()
            .filter(employees::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = employees::Entity::find()
            .filter(employees::Column::Email.eq(email))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// Inserts when `record.id` is `None`, otherwise updates the row with that
    /// id. Updating a missing row fails with `DbErr::RecordNotUpdated`.
    pub async fn save(&self, record: EmployeeRecord) -> Result<employees::Model, DbErr> {
        let mut active = employees::ActiveModel {
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            email: Set(record.email),
            department: Set(record.department),
            salary_cents: Set(record.salary_cents),
            hire_date: Set(record.hire_date),
            ..Default::default()
        };
        match record.id {
            None => active.insert(&self.db).await,
            Some(id) => {
                active.id = Unchanged(id);
                active.update(&self.db).await
            }
        }
    }

    /// Returns whether a row was removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, DbErr> {
        let result = employees::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
