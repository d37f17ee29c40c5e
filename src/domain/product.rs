use super::money::Price;
use crate::error::CartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProductId {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| CartError::ValidationError(format!("Invalid product id '{s}': {e}")))
    }
}

/// Section of the storefront a product is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Menu,
    #[serde(alias = "promociones")]
    Promotions,
    #[serde(alias = "destacados")]
    Featured,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Menu, Category::Promotions, Category::Featured];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Menu => "menu",
            Category::Promotions => "promotions",
            Category::Featured => "featured",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "menu" => Ok(Category::Menu),
            "promotions" | "promociones" => Ok(Category::Promotions),
            "featured" | "destacados" => Ok(Category::Featured),
            other => Err(CartError::ValidationError(format!(
                "Unknown category '{other}'"
            ))),
        }
    }
}

/// A sellable item of the catalog.
///
/// Products are built once from the seed feed and never change afterwards,
/// so all fields are private and exposed through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    images: Vec<String>,
    category: Category,
}

impl Product {
    /// Creates a product, rejecting a zero id or an empty image list.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        images: Vec<String>,
        category: Category,
    ) -> Result<Self, CartError> {
        if id.0 == 0 {
            return Err(CartError::ValidationError(
                "Product id must be positive".to_string(),
            ));
        }
        if images.is_empty() {
            return Err(CartError::ValidationError(format!(
                "Product {id} must have at least one image"
            )));
        }
        Ok(Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            images,
            category,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The canonical image, i.e. the first one.
    pub fn main_image(&self) -> &str {
        // `new` guarantees at least one image.
        self.images.first().map(String::as_str).unwrap_or_default()
    }

    pub fn formatted_price(&self) -> String {
        self.price.to_string()
    }

    /// Reduced display copy carrying only the main image.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            image: self.main_image().to_string(),
            category: self.category,
        }
    }
}

/// Display-oriented copy of a [`Product`] handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: Category,
}
