use serde::{Deserialize, Serialize};

use super::{format_kronor, Kronor, ParseAmountError};

pub type ProductId = u32;

/// Parse a product id typed at a prompt.
pub fn parse_product_id(input: &str) -> Result<ProductId, ParseAmountError> {
    input
        .trim()
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)
}

/// What kind of item a catalog slot holds, with the attribute unique to
/// that kind. The machine never dispatches on anything else, so a plain
/// sum type replaces the class hierarchy a vending machine usually gets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Something to drink, measured in millilitres
    Drink { volume_ml: u32 },
    /// Something to eat, measured in grams
    Snack { weight_g: u32 },
    /// Something to play with, described by its material
    Toy { material: String },
}

impl ProductKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Drink { .. } => "drink",
            ProductKind::Snack { .. } => "snack",
            ProductKind::Toy { .. } => "toy",
        }
    }
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single catalog entry. Products are immutable once the catalog is
/// built: id, name and cost never change while the machine runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub cost: Kronor,
    pub kind: ProductKind,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, cost: Kronor, kind: ProductKind) -> Self {
        assert!(cost >= 0, "Product cost must be non-negative");
        Self {
            id,
            name: name.into(),
            cost,
            kind,
        }
    }

    pub fn drink(id: ProductId, name: impl Into<String>, cost: Kronor, volume_ml: u32) -> Self {
        Self::new(id, name, cost, ProductKind::Drink { volume_ml })
    }

    pub fn snack(id: ProductId, name: impl Into<String>, cost: Kronor, weight_g: u32) -> Self {
        Self::new(id, name, cost, ProductKind::Snack { weight_g })
    }

    pub fn toy(
        id: ProductId,
        name: impl Into<String>,
        cost: Kronor,
        material: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            cost,
            ProductKind::Toy {
                material: material.into(),
            },
        )
    }

    /// One-line listing entry: id, name and cost.
    /// Example: "Id: 1, Name: Coca-Cola, Cost: 15kr"
    pub fn summary(&self) -> String {
        format!(
            "Id: {}, Name: {}, Cost: {}",
            self.id,
            self.name,
            format_kronor(self.cost)
        )
    }

    /// Full description including the kind-specific attribute.
    /// Example: "Id: 1, Name: Coca-Cola, Cost: 15kr, Volume: 330ml"
    pub fn describe(&self) -> String {
        match &self.kind {
            ProductKind::Drink { volume_ml } => {
                format!("{}, Volume: {}ml", self.summary(), volume_ml)
            }
            ProductKind::Snack { weight_g } => {
                format!("{}, Weight: {}g", self.summary(), weight_g)
            }
            ProductKind::Toy { material } => {
                format!("{}, Material: {}", self.summary(), material)
            }
        }
    }

    /// What the buyer does with the product once it drops into the tray.
    /// Example: "You drink the Coca-Cola."
    pub fn consume(&self) -> String {
        match self.kind {
            ProductKind::Drink { .. } => format!("You drink the {}.", self.name),
            ProductKind::Snack { .. } => format!("You eat the {}.", self.name),
            ProductKind::Toy { .. } => format!("You play with the {}.", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_id_name_cost() {
        let product = Product::drink(1, "Coca-Cola", 15, 330);
        assert_eq!(product.summary(), "Id: 1, Name: Coca-Cola, Cost: 15kr");
    }

    #[test]
    fn test_describe_includes_kind_attribute() {
        let drink = Product::drink(1, "Coca-Cola", 15, 330);
        assert_eq!(
            drink.describe(),
            "Id: 1, Name: Coca-Cola, Cost: 15kr, Volume: 330ml"
        );

        let snack = Product::snack(2, "Chips", 20, 150);
        assert_eq!(
            snack.describe(),
            "Id: 2, Name: Chips, Cost: 20kr, Weight: 150g"
        );

        let toy = Product::toy(3, "Action Figure", 50, "Plastic");
        assert_eq!(
            toy.describe(),
            "Id: 3, Name: Action Figure, Cost: 50kr, Material: Plastic"
        );
    }

    #[test]
    fn test_consume_message_per_kind() {
        assert_eq!(
            Product::drink(1, "Coca-Cola", 15, 330).consume(),
            "You drink the Coca-Cola."
        );
        assert_eq!(
            Product::snack(2, "Chips", 20, 150).consume(),
            "You eat the Chips."
        );
        assert_eq!(
            Product::toy(3, "Action Figure", 50, "Plastic").consume(),
            "You play with the Action Figure."
        );
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(Product::drink(1, "Fanta", 12, 330).kind.label(), "drink");
        assert_eq!(Product::snack(2, "Nuts", 25, 80).kind.label(), "snack");
        assert_eq!(Product::toy(3, "Yo-yo", 30, "Wood").kind.label(), "toy");
    }

    #[test]
    #[should_panic(expected = "Product cost must be non-negative")]
    fn test_product_requires_non_negative_cost() {
        Product::drink(1, "Free Cola", -1, 330);
    }

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id("3"), Ok(3));
        assert_eq!(parse_product_id(" 12 \n"), Ok(12));
        assert!(parse_product_id("abc").is_err());
        assert!(parse_product_id("-1").is_err());
        assert!(parse_product_id("").is_err());
    }
}
