use shared::models::{MenuCategory, MenuItemForm};

use super::{Field, FieldErrors, FormFields, FormState, parse_decimal, parse_u32};

impl FormFields for MenuItemForm {
    fn to_fields(&self) -> Vec<Field> {
        vec![
            Field::text("item_name", "Item Name", &self.item_name),
            Field::choice(
                "category",
                "Category",
                MenuCategory::ALL.iter().map(|c| c.label()).collect(),
                self.category.label(),
            ),
            Field::text("description", "Description", &self.description),
            Field::number("price", "Price", self.price),
            Field::number("preparation_time", "Preparation Time (min)", self.preparation_time),
            Field::toggle("is_vegetarian", "Vegetarian", self.is_vegetarian),
            Field::toggle("is_vegan", "Vegan", self.is_vegan),
            Field::toggle("is_gluten_free", "Gluten Free", self.is_gluten_free),
            Field::toggle("availability", "Available", self.availability),
        ]
    }

    fn from_state(state: &FormState) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let price = parse_decimal(state, "price", "Price", &mut errors);
        let preparation_time = parse_u32(state, "preparation_time", "Preparation time", &mut errors);

        match (price, preparation_time) {
            (Some(price), Some(preparation_time)) => Ok(Self {
                item_name: state.text("item_name").trim().to_string(),
                category: MenuCategory::ALL[state.choice("category") % MenuCategory::ALL.len()],
                description: state.text("description").trim().to_string(),
                price,
                preparation_time,
                is_vegetarian: state.toggle("is_vegetarian"),
                is_vegan: state.toggle("is_vegan"),
                is_gluten_free: state.toggle("is_gluten_free"),
                availability: state.toggle("availability"),
            }),
            _ => Err(errors),
        }
    }
}
