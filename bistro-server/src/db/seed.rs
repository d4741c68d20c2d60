//! Demo data loaded into a fresh [`Database`](super::Database)

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use shared::models::{
    Department, Gender, InventoryItem, MenuCategory, MenuItem, Order, OrderStatus, Reservation,
    ReservationStatus, StaffMember, StockStatus, age_from_birth_year,
};

// Seed ages are computed against this date so the data set is stable
const SEED_TODAY: (i32, u32, u32) = (2024, 3, 1);

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[allow(clippy::too_many_arguments)]
fn staff_member(
    id: i64,
    first_name: &str,
    last_name: &str,
    date_of_birth: NaiveDate,
    gender: Gender,
    department: Department,
    position: &str,
    salary: i64,
    hire_date: NaiveDate,
) -> StaffMember {
    let (y, m, d) = SEED_TODAY;
    StaffMember {
        id,
        first_name: first_name.into(),
        last_name: last_name.into(),
        date_of_birth,
        age: age_from_birth_year(date_of_birth, date(y, m, d)),
        gender,
        phone: format!("555-01{id:02}"),
        email: format!(
            "{}.{}@bistro.example",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        department,
        position: position.into(),
        salary: Decimal::from(salary),
        hire_date,
    }
}

pub fn staff() -> Vec<StaffMember> {
    use Department::*;
    use Gender::*;
    vec![
        staff_member(1, "John", "Doe", date(1985, 4, 12), Male, Management, "General Manager", 65000, date(2018, 1, 15)),
        staff_member(2, "Jane", "Smith", date(1990, 9, 3), Female, Kitchen, "Head Chef", 58000, date(2019, 3, 1)),
        staff_member(3, "Carlos", "Rivera", date(1994, 2, 27), Male, Kitchen, "Sous Chef", 46000, date(2020, 6, 10)),
        staff_member(4, "Aiko", "Tanaka", date(1998, 11, 19), Female, Service, "Head Waiter", 38000, date(2021, 2, 1)),
        staff_member(5, "Liam", "Brown", date(2001, 7, 8), Male, Service, "Waiter", 29000, date(2022, 5, 16)),
        staff_member(6, "Sofia", "Rossi", date(1996, 1, 30), Female, Service, "Bartender", 31000, date(2021, 9, 20)),
        staff_member(7, "Noah", "Wilson", date(1979, 5, 22), Male, Cleaning, "Cleaning Supervisor", 27000, date(2017, 11, 6)),
        staff_member(8, "Priya", "Patel", date(1999, 12, 2), Female, Kitchen, "Line Cook", 30000, date(2023, 1, 9)),
        staff_member(9, "Sam", "Taylor", date(2003, 3, 14), Other, Delivery, "Delivery Driver", 24000, date(2023, 8, 1)),
        staff_member(10, "Emma", "Martin", date(1988, 8, 25), Female, Management, "Shift Manager", 44000, date(2019, 10, 14)),
        staff_member(11, "Lucas", "Garcia", date(2000, 6, 1), Male, Delivery, "Delivery Driver", 24000, date(2024, 1, 22)),
        staff_member(12, "Mia", "Dubois", date(1993, 10, 11), Female, Cleaning, "Cleaner", 23000, date(2022, 12, 5)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn menu_item(
    id: i64,
    item_name: &str,
    category: MenuCategory,
    description: &str,
    price_cents: i64,
    preparation_time: u32,
    dietary: (bool, bool, bool),
    availability: bool,
) -> MenuItem {
    let (is_vegetarian, is_vegan, is_gluten_free) = dietary;
    MenuItem {
        id,
        item_name: item_name.into(),
        category,
        description: description.into(),
        price: money(price_cents),
        preparation_time,
        is_vegetarian,
        is_vegan,
        is_gluten_free,
        availability,
    }
}

pub fn menu() -> Vec<MenuItem> {
    use MenuCategory::*;
    vec![
        menu_item(1, "Bruschetta", Appetizer, "Grilled bread with tomato, garlic and basil", 850, 10, (true, true, false), true),
        menu_item(2, "Caesar Salad", Appetizer, "Romaine, parmesan, croutons and Caesar dressing", 1100, 10, (false, false, false), true),
        menu_item(3, "Garlic Prawns", Appetizer, "Pan-fried prawns in garlic butter", 1350, 12, (false, false, true), true),
        menu_item(4, "Ribeye Steak", MainCourse, "300g ribeye with pepper sauce", 2899, 25, (false, false, true), true),
        menu_item(5, "Mushroom Risotto", MainCourse, "Arborio rice with wild mushrooms", 1750, 30, (true, false, true), true),
        menu_item(6, "Grilled Salmon", MainCourse, "Atlantic salmon with lemon butter", 2400, 20, (false, false, true), true),
        menu_item(7, "Vegan Buddha Bowl", MainCourse, "Quinoa, roasted vegetables and tahini", 1600, 15, (true, true, true), false),
        menu_item(8, "Tiramisu", Dessert, "Mascarpone, espresso and cocoa", 750, 5, (true, false, false), true),
        menu_item(9, "Chocolate Lava Cake", Dessert, "Warm chocolate cake with a molten centre", 850, 15, (true, false, false), true),
        menu_item(10, "Fresh Lemonade", Beverage, "House-made with mint", 450, 3, (true, true, true), true),
        menu_item(11, "Espresso", Beverage, "Double shot", 300, 2, (true, true, true), true),
        menu_item(12, "Sweet Potato Fries", SideDish, "With chipotle mayo", 550, 8, (true, false, true), true),
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            customer: "John Doe".into(),
            items: 3,
            total: money(4599),
            status: OrderStatus::Pending,
        },
        Order {
            id: 2,
            customer: "Jane Smith".into(),
            items: 2,
            total: money(2999),
            status: OrderStatus::Completed,
        },
    ]
}

pub fn reservations() -> Vec<Reservation> {
    vec![
        Reservation {
            id: 1,
            name: "John Smith".into(),
            date: date(2024, 3, 25),
            time: time(19, 0),
            guests: 4,
            status: ReservationStatus::Confirmed,
        },
        Reservation {
            id: 2,
            name: "Mary Johnson".into(),
            date: date(2024, 3, 26),
            time: time(20, 0),
            guests: 2,
            status: ReservationStatus::Pending,
        },
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: 1,
            item: "Tomatoes".into(),
            quantity: Decimal::from(50),
            unit: "kg".into(),
            status: StockStatus::InStock,
        },
        InventoryItem {
            id: 2,
            item: "Chicken".into(),
            quantity: Decimal::from(30),
            unit: "kg".into(),
            status: StockStatus::LowStock,
        },
    ]
}

/// Weekly revenue and order volume shown on the dashboard
pub fn weekly_sales() -> (Vec<&'static str>, Vec<f64>, Vec<f64>) {
    (
        vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        vec![1200.0, 1900.0, 1500.0, 2100.0, 2800.0, 3400.0, 2600.0],
        vec![42.0, 61.0, 50.0, 70.0, 88.0, 112.0, 85.0],
    )
}

/// Monthly sales on the reports page
pub fn monthly_sales() -> (Vec<&'static str>, Vec<f64>) {
    (
        vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        vec![4500.0, 5200.0, 4800.0, 5800.0, 6000.0, 6500.0],
    )
}

/// Percent share of sales per category
pub fn category_share() -> (Vec<&'static str>, Vec<f64>) {
    (
        vec!["Food", "Beverages", "Desserts", "Others"],
        vec![45.0, 25.0, 20.0, 10.0],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let staff_ids: HashSet<i64> = staff().iter().map(|s| s.id).collect();
        assert_eq!(staff_ids.len(), staff().len());
        let menu_ids: HashSet<i64> = menu().iter().map(|m| m.id).collect();
        assert_eq!(menu_ids.len(), menu().len());
    }

    #[test]
    fn test_seed_ages_use_year_difference() {
        let lucas = staff().into_iter().find(|s| s.id == 11).unwrap();
        // born 2000-06-01, seeded 2024-03-01: year difference, not calendar age
        assert_eq!(lucas.age, 24);
    }

    #[test]
    fn test_category_share_sums_to_hundred() {
        let (_, data) = category_share();
        assert_eq!(data.iter().sum::<f64>(), 100.0);
    }
}
