//! Clothing items and the fixed set of outfit categories

use serde::{Deserialize, Serialize};

/// Clothing slot an item belongs to.
///
/// Variant order is the canonical slot order: generation, outfit display and
/// serialization all walk categories in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Bag,
    Shoes,
    Outwear,
    Dress,
}

impl Category {
    /// All categories in canonical slot order
    pub const ALL: [Category; 6] = [
        Category::Top,
        Category::Bottom,
        Category::Bag,
        Category::Shoes,
        Category::Outwear,
        Category::Dress,
    ];

    /// Order used when rendering the wardrobe grid
    pub const GRID_ORDER: [Category; 6] = [
        Category::Top,
        Category::Dress,
        Category::Bottom,
        Category::Outwear,
        Category::Bag,
        Category::Shoes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Bag => "bag",
            Category::Shoes => "shoes",
            Category::Outwear => "outwear",
            Category::Dress => "dress",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::Bottom => "Bottom",
            Category::Bag => "Bag",
            Category::Shoes => "Shoes",
            Category::Outwear => "Outwear",
            Category::Dress => "Dress",
        }
    }

    /// Icon shown in an empty outfit slot
    pub fn placeholder(&self) -> &'static str {
        match self {
            Category::Top => "/shirt.svg",
            Category::Bottom => "/pants.svg",
            Category::Bag => "/bag.svg",
            Category::Shoes => "/shoes.svg",
            Category::Outwear => "/jacket.svg",
            Category::Dress => "/dress.svg",
        }
    }

    /// Top and bottom together form the alternative to a dress
    pub fn is_separate(&self) -> bool {
        matches!(self, Category::Top | Category::Bottom)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "bag" => Some(Self::Bag),
            "shoes" => Some(Self::Shoes),
            "outwear" => Some(Self::Outwear),
            "dress" => Some(Self::Dress),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s).ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// Suggested values for the thickness filter
pub const THICKNESS_OPTIONS: &[&str] = &["thin", "medium", "thick"];

/// Suggested values for the length filter
pub const LENGTH_OPTIONS: &[&str] = &["short", "medium", "long"];

/// Suggested values for the type filter
pub const TYPE_OPTIONS: &[&str] = &[
    "shirt", "pants", "jacket", "dress", "skirt", "shoes", "sneakers", "jeans", "coat", "shorts", "bodysuit", "bag",
];

/// Seasons an item can be tagged with
pub const SEASON_OPTIONS: &[&str] = &["spring", "summer", "autumn", "winter"];

/// A single catalog entry. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub item_type: String,
    pub thickness: String,
    pub length: String,
    #[serde(default)]
    pub season: Vec<String>,
    pub location: String,
    pub image: String,
}

impl Item {
    /// Whether the item is tagged with any of the given seasons
    pub fn in_any_season(&self, seasons: &[String]) -> bool {
        self.season.iter().any(|s| seasons.contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::parse("dress"), Some(Category::Dress));
        assert_eq!(Category::parse(" Outwear "), Some(Category::Outwear));
        assert_eq!("hat".parse::<Category>().ok(), None);
    }

    #[test]
    fn test_category_order() {
        let mut sorted = Category::GRID_ORDER.to_vec();
        sorted.sort();
        assert_eq!(sorted, Category::ALL.to_vec());
    }

    #[test]
    fn test_item_deserialize_renames_type() {
        let json = r#"{
            "id": "1",
            "name": "Linen Shirt",
            "category": "top",
            "type": "shirt",
            "thickness": "thin",
            "length": "short",
            "season": ["summer"],
            "location": "closet-A",
            "image": "/items/1.png"
        }"#;
        let item: Item = serde_json::from_str(json).expect("valid item");
        assert_eq!(item.item_type, "shirt");
        assert_eq!(item.category, Category::Top);

        let back = serde_json::to_value(&item).expect("serialize");
        assert_eq!(back["type"], "shirt");
    }

    #[test]
    fn test_item_missing_season_defaults_empty() {
        let json = r#"{"id":"2","name":"Tote","category":"bag","type":"bag","thickness":"medium",
            "length":"medium","location":"hall","image":"/items/2.png"}"#;
        let item: Item = serde_json::from_str(json).expect("valid item");
        assert!(item.season.is_empty());
        assert!(!item.in_any_season(&["summer".to_string()]));
    }

    #[test]
    fn test_item_unknown_category_rejected() {
        let json = r#"{"id":"3","name":"Cap","category":"hat","type":"hat","thickness":"thin",
            "length":"short","location":"hall","image":"/items/3.png"}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }
}
