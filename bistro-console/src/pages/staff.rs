//! Staff management page

use shared::models::{StaffForm, StaffMember};
use shared::table::{Cell, Column};

use super::crud::{CrudPage, Resource};
use crate::event::{CrudEvent, PageEvent};

pub type StaffPage = CrudPage<StaffMember>;

impl Resource for StaffMember {
    type Form = StaffForm;

    const SINGULAR: &'static str = "Staff member";
    const COLLECTION: &'static str = "staff";

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.full_name()
    }

    fn to_form(&self) -> StaffForm {
        StaffMember::to_form(self)
    }

    fn blank_form() -> StaffForm {
        StaffForm::blank(chrono::Local::now().date_naive())
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::derive("Name", |s: &StaffMember| s.full_name()),
            Column::field("Age", "age"),
            Column::field("Department", "department")
                .with_render(|s: &StaffMember| {
                    Cell::badge(s.department.label(), super::department_tone(s.department))
                }),
            Column::field("Position", "position"),
            Column::field("Phone", "phone"),
            Column::field("Email", "email"),
            Column::derive("Salary", |s: &StaffMember| format!("${}", s.salary.round_dp(2))),
        ]
    }

    fn detail(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.full_name()),
            ("Date of Birth", self.date_of_birth.to_string()),
            ("Age", self.age.to_string()),
            ("Gender", self.gender.to_string()),
            ("Phone", self.phone.clone()),
            ("Email", self.email.clone()),
            ("Department", self.department.to_string()),
            ("Position", self.position.clone()),
            ("Salary", format!("${}", self.salary.round_dp(2))),
            ("Hire Date", self.hire_date.to_string()),
        ]
    }

    fn wrap(event: CrudEvent<Self>) -> PageEvent {
        PageEvent::Staff(event)
    }
}
