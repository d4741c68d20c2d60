use shared::models::{Department, Gender, StaffForm};

use super::{Field, FieldErrors, FormFields, FormState, parse_date, parse_decimal};

impl FormFields for StaffForm {
    fn to_fields(&self) -> Vec<Field> {
        vec![
            Field::text("first_name", "First Name", &self.first_name),
            Field::text("last_name", "Last Name", &self.last_name),
            Field::date("date_of_birth", "Date of Birth", self.date_of_birth),
            Field::choice(
                "gender",
                "Gender",
                Gender::ALL.iter().map(|g| g.label()).collect(),
                self.gender.label(),
            ),
            Field::text("phone", "Phone", &self.phone),
            Field::text("email", "Email", &self.email),
            Field::choice(
                "department",
                "Department",
                Department::ALL.iter().map(|d| d.label()).collect(),
                self.department.label(),
            ),
            Field::text("position", "Position", &self.position),
            Field::number("salary", "Salary", self.salary),
            Field::date("hire_date", "Hire Date", self.hire_date),
        ]
    }

    fn from_state(state: &FormState) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let date_of_birth = parse_date(state, "date_of_birth", "Date of birth", &mut errors);
        let hire_date = parse_date(state, "hire_date", "Hire date", &mut errors);
        let salary = parse_decimal(state, "salary", "Salary", &mut errors);

        match (date_of_birth, hire_date, salary) {
            (Some(date_of_birth), Some(hire_date), Some(salary)) if errors.is_empty() => Ok(Self {
                first_name: state.text("first_name").trim().to_string(),
                last_name: state.text("last_name").trim().to_string(),
                date_of_birth,
                gender: Gender::ALL[state.choice("gender") % Gender::ALL.len()],
                phone: state.text("phone").trim().to_string(),
                email: state.text("email").trim().to_string(),
                department: Department::ALL[state.choice("department") % Department::ALL.len()],
                position: state.text("position").trim().to_string(),
                salary,
                hire_date,
            }),
            _ => Err(errors),
        }
    }
}
