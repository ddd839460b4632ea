use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Employee fields the reports need, as served by the employee API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEmployee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub hire_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHire {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub hire_date: NaiveDate,
    pub days_since_hire: i64,
}

impl NewHire {
    pub fn from_employee(employee: SourceEmployee, today: NaiveDate) -> Self {
        Self {
            days_since_hire: days_since_hire(employee.hire_date, today),
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            department: employee.department,
            hire_date: employee.hire_date,
        }
    }
}

/// The calendar date every report is computed against (UTC).
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whole days from `hire_date` to `today`; negative for future hire dates.
pub fn days_since_hire(hire_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - hire_date).num_days()
}

/// Projects `employees` into new-hire rows, most recent hires first. With
/// `within_days` only hires made in the last `within_days` days (today
/// included) are kept.
pub fn new_hires(
    employees: impl IntoIterator<Item = SourceEmployee>,
    today: NaiveDate,
    within_days: Option<i64>,
) -> Vec<NewHire> {
    let mut rows: Vec<NewHire> = employees
        .into_iter()
        .map(|employee| NewHire::from_employee(employee, today))
        .filter(|row| match within_days {
            Some(limit) => (0..=limit).contains(&row.days_since_hire),
            None => true,
        })
        .collect();
    rows.sort_by_key(|row| (row.days_since_hire, row.id));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(id: i64, hire_date: NaiveDate) -> SourceEmployee {
        SourceEmployee {
            id,
            first_name: format!("First{id}"),
            last_name: "Lee".into(),
            email: format!("e{id}@x.com"),
            department: "ENGINEERING".into(),
            hire_date,
        }
    }

    #[test]
    fn hired_today_is_zero_days() {
        let today = date(2024, 3, 1);
        assert_eq!(days_since_hire(today, today), 0);
    }

    #[test]
    fn counts_calendar_days_across_leap_day() {
        assert_eq!(days_since_hire(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(days_since_hire(date(2020, 1, 1), date(2021, 1, 1)), 366);
    }

    #[test]
    fn future_hire_dates_are_negative() {
        assert_eq!(days_since_hire(date(2024, 3, 11), date(2024, 3, 1)), -10);
    }

    #[test]
    fn projection_keeps_fields() {
        let row = NewHire::from_employee(employee(3, date(2024, 1, 1)), date(2024, 1, 31));
        assert_eq!(row.id, 3);
        assert_eq!(row.email, "e3@x.com");
        assert_eq!(row.department, "ENGINEERING");
        assert_eq!(row.days_since_hire, 30);
    }

    #[test]
    fn window_filter_excludes_old_and_future_hires() {
        let today = date(2024, 6, 30);
        let rows = new_hires(
            [
                employee(1, date(2024, 6, 30)),
                employee(2, date(2024, 1, 1)),
                employee(3, date(2024, 7, 15)),
                employee(4, date(2024, 6, 1)),
            ],
            today,
            Some(90),
        );
        let ids: Vec<_> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, [1, 4]);
    }

    #[test]
    fn without_window_everything_is_reported() {
        let today = date(2024, 6, 30);
        let rows = new_hires(
            [employee(1, date(2020, 1, 1)), employee(2, date(2024, 7, 1))],
            today,
            None,
        );
        let days: Vec<_> = rows.iter().map(|row| row.days_since_hire).collect();
        assert_eq!(days, [-1, 1642]);
    }

    #[test]
    fn serializes_camel_case() {
        let row = NewHire::from_employee(employee(1, date(2024, 1, 1)), date(2024, 1, 2));
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["daysSinceHire"], 1);
        assert_eq!(json["hireDate"], "2024-01-01");
        assert_eq!(json["firstName"], "First1");
    }
}
