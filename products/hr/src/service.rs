use entity::Department;
use platform_db::DbPool;
use tracing::{info, instrument};

use crate::{
    HrError, HrResult,
    dto::{EmployeeDto, EmployeeInput},
    repository::{EmployeeRecord, EmployeeRepository},
    validation::{ValidEmployee, validate},
};

/// Employee use cases: validation, email uniqueness and not-found handling
/// on top of [`EmployeeRepository`].
#[derive(Clone, Debug)]
pub struct EmployeeService {
    repo: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(db: DbPool) -> Self {
        Self {
            repo: EmployeeRepository::new(db),
        }
    }

    pub fn repository(&self) -> &EmployeeRepository {
        &self.repo
    }

    #[instrument(name = "hr.employees.list", skip_all)]
    pub async fn get_all_employees(&self) -> HrResult<Vec<EmployeeDto>> {
        let rows = self.repo.find_all().await?;
        Ok(rows.into_iter().map(EmployeeDto::from).collect())
    }

    #[instrument(name = "hr.employees.get", skip(self))]
    pub async fn get_employee_by_id(&self, id: i64) -> HrResult<EmployeeDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(EmployeeDto::from)
            .ok_or(HrError::NotFound(id))
    }

    #[instrument(name = "hr.employees.by_department", skip(self))]
    pub async fn get_employees_by_department(
        &self,
        department: Department,
    ) -> HrResult<Vec<EmployeeDto>> {
        let rows = self.repo.find_by_department(department).await?;
        Ok(rows.into_iter().map(EmployeeDto::from).collect())
    }

    #[instrument(name = "hr.employees.create", skip_all)]
    pub async fn create_employee(&self, input: EmployeeInput) -> HrResult<EmployeeDto> {
        let valid = validate(&input).map_err(HrError::Validation)?;
        if self.repo.exists_by_email(&valid.email).await? {
            return Err(HrError::DuplicateEmail(valid.email));
        }
        let email = valid.email.clone();
        let created = self
            .repo
            .save(EmployeeRecord::new(valid))
            .await
            .map_err(|err| HrError::from_write(err, &email))?;
        info!(id = created.id, "employee created");
        Ok(created.into())
    }

    #[instrument(name = "hr.employees.update", skip(self, input))]
    pub async fn update_employee(&self, id: i64, input: EmployeeInput) -> HrResult<EmployeeDto> {
        let valid = validate(&input).map_err(HrError::Validation)?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(HrError::NotFound(id))?;
        if existing.email != valid.email {
            self.ensure_email_free(id, &valid).await?;
        }
        let email = valid.email.clone();
        let updated = self
            .repo
            .save(EmployeeRecord::with_id(Some(id), valid))
            .await
            .map_err(|err| HrError::from_write(err, &email))?;
        info!(id, "employee updated");
        Ok(updated.into())
    }

    #[instrument(name = "hr.employees.delete", skip(self))]
    pub async fn delete_employee(&self, id: i64) -> HrResult<()> {
        if !self.repo.delete_by_id(id).await? {
            return Err(HrError::NotFound(id));
        }
        info!(id, "employee deleted");
        Ok(())
    }

    /// Department names in declaration order.
    pub fn departments(&self) -> Vec<Department> {
        Department::ALL.to_vec()
    }

    async fn ensure_email_free(&self, id: i64, valid: &ValidEmployee) -> HrResult<()> {
        match self.repo.find_by_email(&valid.email).await? {
            Some(other) if other.id != id => Err(HrError::DuplicateEmail(valid.email.clone())),
            _ => Ok(()),
        }
    }
}
