//! Staff Model

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Staff gender as captured by the staff form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Restaurant department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Department {
    Management,
    #[default]
    Kitchen,
    Service,
    Cleaning,
    Delivery,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Management,
        Department::Kitchen,
        Department::Service,
        Department::Cleaning,
        Department::Delivery,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Management => "Management",
            Self::Kitchen => "Kitchen",
            Self::Service => "Service",
            Self::Cleaning => "Cleaning",
            Self::Delivery => "Delivery",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Staff member entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    /// Derived from `date_of_birth` on create/update, see [`age_from_birth_year`]
    pub age: i32,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub department: Department,
    pub position: String,
    pub salary: Decimal,
    pub hire_date: NaiveDate,
}

impl StaffMember {
    /// Build a staff record from a submitted form
    pub fn from_form(id: i64, form: StaffForm, today: NaiveDate) -> Self {
        Self {
            id,
            age: age_from_birth_year(form.date_of_birth, today),
            first_name: form.first_name,
            last_name: form.last_name,
            date_of_birth: form.date_of_birth,
            gender: form.gender,
            phone: form.phone,
            email: form.email,
            department: form.department,
            position: form.position,
            salary: form.salary,
            hire_date: form.hire_date,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Form pre-filled with this record (edit flow)
    pub fn to_form(&self) -> StaffForm {
        StaffForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            phone: self.phone.clone(),
            email: self.email.clone(),
            department: self.department,
            position: self.position.clone(),
            salary: self.salary,
            hire_date: self.hire_date,
        }
    }
}

/// Create / update staff payload (everything except `id` and `age`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StaffForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(custom(function = "validate_birth_date"))]
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    pub department: Department,
    #[validate(length(min = 1, message = "Position is required"))]
    pub position: String,
    #[validate(custom(function = "validate_salary"))]
    pub salary: Decimal,
    pub hire_date: NaiveDate,
}

impl StaffForm {
    /// Blank form used by the create flow
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            date_of_birth: today,
            gender: Gender::default(),
            phone: String::new(),
            email: String::new(),
            department: Department::default(),
            position: String::new(),
            salary: Decimal::ZERO,
            hire_date: today,
        }
    }
}

fn validate_salary(salary: &Decimal) -> Result<(), ValidationError> {
    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(ValidationError::new("staff_salary").with_message("Salary must not be negative".into()));
    }
    Ok(())
}

fn validate_birth_date(date: &NaiveDate) -> Result<(), ValidationError> {
    check_birth_date(*date, chrono::Local::now().date_naive())
}

/// Reject a date of birth after `today`; being born today is accepted
pub fn check_birth_date(date_of_birth: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date_of_birth > today {
        return Err(ValidationError::new("staff_birth_date")
            .with_message("Date of birth cannot be in the future".into()));
    }
    Ok(())
}

/// Age as the difference of calendar years.
///
/// Month and day are ignored, so the result can be one year ahead of the
/// calendar age until the birthday has passed in `today`'s year.
pub fn age_from_birth_year(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - date_of_birth.year()
}

/// Full calendar age, accounting for month and day.
pub fn calendar_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let age = age_from_birth_year(date_of_birth, today);
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age - 1
    } else {
        age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_ignores_month_and_day() {
        let dob = date(2000, 6, 1);
        assert_eq!(age_from_birth_year(dob, date(2024, 1, 15)), 24);
        assert_eq!(age_from_birth_year(dob, date(2024, 6, 1)), 24);
        assert_eq!(age_from_birth_year(dob, date(2024, 12, 31)), 24);
    }

    #[test]
    fn test_calendar_age_waits_for_birthday() {
        let dob = date(2000, 6, 1);
        assert_eq!(calendar_age(dob, date(2024, 5, 31)), 23);
        assert_eq!(calendar_age(dob, date(2024, 6, 1)), 24);
    }

    #[test]
    fn test_from_form_computes_age() {
        let mut form = StaffForm::blank(date(2024, 3, 1));
        form.first_name = "Ana".into();
        form.date_of_birth = date(1990, 11, 20);

        let staff = StaffMember::from_form(5, form.clone(), date(2024, 3, 1));
        assert_eq!(staff.id, 5);
        assert_eq!(staff.age, 34);
        assert_eq!(staff.to_form(), form);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&Department::Kitchen).unwrap(), "\"Kitchen\"");
        assert_eq!(serde_json::to_string(&Gender::Other).unwrap(), "\"Other\"");
        assert_eq!(StaffForm::blank(date(2024, 1, 1)).department, Department::Kitchen);
    }

    #[test]
    fn test_form_validation() {
        let mut form = StaffForm::blank(date(2020, 1, 1));
        form.first_name = "Luis".into();
        form.last_name = "Pérez".into();
        form.phone = "555-0101".into();
        form.email = "luis@bistro.test".into();
        form.position = "Chef".into();
        assert!(form.validate().is_ok());

        form.salary = Decimal::new(-100, 0);
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("salary"));

        form.salary = Decimal::ZERO;
        form.email = "not-an-email".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_birth_date_checked_against_today() {
        let today = date(2024, 3, 1);
        assert!(check_birth_date(date(1990, 5, 5), today).is_ok());
        assert!(check_birth_date(today, today).is_ok());

        let err = check_birth_date(date(2024, 3, 2), today).unwrap_err();
        assert_eq!(err.code, "staff_birth_date");
        assert_eq!(
            err.message.as_deref(),
            Some("Date of birth cannot be in the future")
        );
    }

    #[test]
    fn test_future_birth_date_fails_form_validation() {
        let mut form = StaffForm::blank(date(2020, 1, 1));
        form.first_name = "Luis".into();
        form.last_name = "Pérez".into();
        form.phone = "555-0101".into();
        form.email = "luis@bistro.test".into();
        form.position = "Chef".into();
        form.date_of_birth = date(9999, 1, 1);

        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("date_of_birth"));
        let err = crate::error::AppError::from(errors);
        assert_eq!(err.code, crate::error::ErrorCode::StaffInvalidBirthDate);
    }
}
