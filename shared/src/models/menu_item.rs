//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Menu section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MenuCategory {
    Appetizer,
    #[default]
    #[serde(rename = "Main Course")]
    MainCourse,
    Dessert,
    Beverage,
    #[serde(rename = "Side Dish")]
    SideDish,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 5] = [
        MenuCategory::Appetizer,
        MenuCategory::MainCourse,
        MenuCategory::Dessert,
        MenuCategory::Beverage,
        MenuCategory::SideDish,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Appetizer => "Appetizer",
            Self::MainCourse => "Main Course",
            Self::Dessert => "Dessert",
            Self::Beverage => "Beverage",
            Self::SideDish => "Side Dish",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub item_name: String,
    pub category: MenuCategory,
    pub description: String,
    pub price: Decimal,
    /// Minutes
    pub preparation_time: u32,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub availability: bool,
}

impl MenuItem {
    pub fn from_form(id: i64, form: MenuItemForm) -> Self {
        Self {
            id,
            item_name: form.item_name,
            category: form.category,
            description: form.description,
            price: form.price,
            preparation_time: form.preparation_time,
            is_vegetarian: form.is_vegetarian,
            is_vegan: form.is_vegan,
            is_gluten_free: form.is_gluten_free,
            availability: form.availability,
        }
    }

    pub fn to_form(&self) -> MenuItemForm {
        MenuItemForm {
            item_name: self.item_name.clone(),
            category: self.category,
            description: self.description.clone(),
            price: self.price,
            preparation_time: self.preparation_time,
            is_vegetarian: self.is_vegetarian,
            is_vegan: self.is_vegan,
            is_gluten_free: self.is_gluten_free,
            availability: self.availability,
        }
    }

    /// Dietary flags as short labels, in display order
    pub fn dietary_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.is_vegetarian {
            labels.push("Vegetarian");
        }
        if self.is_vegan {
            labels.push("Vegan");
        }
        if self.is_gluten_free {
            labels.push("Gluten-Free");
        }
        labels
    }
}

/// Create / update menu item payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuItemForm {
    #[validate(length(min = 1, message = "Item name is required"))]
    pub item_name: String,
    pub category: MenuCategory,
    #[serde(default)]
    pub description: String,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    #[validate(range(min = 1, code = "menu_preparation_time", message = "Preparation time must be at least one minute"))]
    pub preparation_time: u32,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_gluten_free: bool,
    #[serde(default = "default_availability")]
    pub availability: bool,
}

impl Default for MenuItemForm {
    fn default() -> Self {
        Self {
            item_name: String::new(),
            category: MenuCategory::default(),
            description: String::new(),
            price: Decimal::ZERO,
            preparation_time: 15,
            is_vegetarian: false,
            is_vegan: false,
            is_gluten_free: false,
            availability: true,
        }
    }
}

fn default_availability() -> bool {
    true
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("menu_price").with_message("Price must not be negative".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let form = MenuItemForm::default();
        assert_eq!(form.category, MenuCategory::MainCourse);
        assert_eq!(form.preparation_time, 15);
        assert!(form.availability);
        assert!(!form.is_vegan);
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&MenuCategory::MainCourse).unwrap(),
            "\"Main Course\""
        );
        let side: MenuCategory = serde_json::from_str("\"Side Dish\"").unwrap();
        assert_eq!(side, MenuCategory::SideDish);
        assert_eq!(side.to_string(), "Side Dish");
    }

    #[test]
    fn test_validation_codes() {
        let mut form = MenuItemForm {
            item_name: "Soup".into(),
            ..MenuItemForm::default()
        };
        assert!(form.validate().is_ok());

        form.price = Decimal::new(-1, 2);
        let err = shared_error(form.validate().unwrap_err());
        assert_eq!(err, crate::error::ErrorCode::MenuItemInvalidPrice);

        form.price = Decimal::ZERO;
        form.preparation_time = 0;
        let err = shared_error(form.validate().unwrap_err());
        assert_eq!(err, crate::error::ErrorCode::MenuItemInvalidPreparationTime);
    }

    fn shared_error(errors: validator::ValidationErrors) -> crate::error::ErrorCode {
        crate::error::AppError::from(errors).code
    }

    #[test]
    fn test_form_round_trip_keeps_id() {
        let form = MenuItemForm {
            item_name: "Tiramisu".into(),
            category: MenuCategory::Dessert,
            is_vegetarian: true,
            ..MenuItemForm::default()
        };
        let item = MenuItem::from_form(3, form.clone());
        assert_eq!(item.id, 3);
        assert_eq!(item.to_form(), form);
        assert_eq!(item.dietary_labels(), vec!["Vegetarian"]);
    }
}
