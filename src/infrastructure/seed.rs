//! Built-in product feed used when no catalog file is supplied.

use crate::application::catalog::CatalogStore;
use crate::domain::money::Price;
use crate::domain::product::{Category, Product, ProductId};
use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

struct SeedEntry {
    id: u32,
    name: &'static str,
    description: &'static str,
    price: Decimal,
    images: &'static [&'static str],
    category: Category,
}

const SEED: &[SeedEntry] = &[
    SeedEntry {
        id: 1,
        name: "Chocolate Cake",
        description: "Mousse filling and ganache topping",
        price: dec!(35.00),
        images: &["images/chocolate-cake.jpg"],
        category: Category::Menu,
    },
    SeedEntry {
        id: 2,
        name: "Strawberry Cheesecake",
        description: "Biscuit base and fresh strawberries",
        price: dec!(40.00),
        images: &["images/strawberry-cheesecake.webp"],
        category: Category::Menu,
    },
    SeedEntry {
        id: 3,
        name: "Lemon Tart",
        description: "With torched meringue",
        price: dec!(30.00),
        images: &["images/lemon-tart.jpg"],
        category: Category::Menu,
    },
    SeedEntry {
        id: 4,
        name: "Chocolate Cake (Promo)",
        description: "Chocolate cake with cream filling and ganache coating",
        price: dec!(350.00),
        images: &["images/chocolate-cake-promo.avif"],
        category: Category::Promotions,
    },
    SeedEntry {
        id: 5,
        name: "Assorted Cupcakes",
        description: "Pack of 6 cupcakes in different flavours and decorations",
        price: dec!(180.00),
        images: &["images/assorted-cupcakes.avif"],
        category: Category::Promotions,
    },
    SeedEntry {
        id: 6,
        name: "Decorated Cookies",
        description: "A dozen cookies with custom designs and flavours",
        price: dec!(220.00),
        images: &["images/decorated-cookies.jpg"],
        category: Category::Promotions,
    },
    SeedEntry {
        id: 7,
        name: "Birthday Cake",
        description: "Custom decoration and flavours of your choice",
        price: dec!(120.00),
        images: &["images/bday1.jpg", "images/bday2.jpg", "images/bday3.webp"],
        category: Category::Featured,
    },
    SeedEntry {
        id: 8,
        name: "Mini Cupcakes",
        description: "Ideal for events and gatherings",
        price: dec!(80.00),
        images: &["images/mini1.jpg", "images/mini2.jpg", "images/mini3.jpg"],
        category: Category::Featured,
    },
    SeedEntry {
        id: 9,
        name: "Brownies",
        description: "Classic and with walnuts",
        price: dec!(45.00),
        images: &["images/brow1.jpg", "images/brow2.jpg", "images/brow3.jpg"],
        category: Category::Featured,
    },
    SeedEntry {
        id: 12,
        name: "Macarons",
        description: "Pack of 12 macarons in assorted flavours",
        price: dec!(65.00),
        images: &[
            "images/macarons.jpg",
            "images/macarons1.jpg",
            "images/macarons2.jpg",
        ],
        category: Category::Featured,
    },
    SeedEntry {
        id: 14,
        name: "Profiteroles",
        description: "Small choux buns with pastry cream and chocolate",
        price: dec!(50.00),
        images: &[
            "images/profiteroles.jpg",
            "images/profiteroles1.jpg",
            "images/profiteroles2.jpg",
        ],
        category: Category::Featured,
    },
];

/// Products of the built-in feed, in display order.
pub fn seed_products() -> Result<Vec<Product>> {
    SEED.iter()
        .map(|entry| {
            Product::new(
                ProductId(entry.id),
                entry.name,
                entry.description,
                Price::new(entry.price)?,
                entry.images.iter().map(|img| img.to_string()).collect(),
                entry.category,
            )
        })
        .collect()
}

pub fn default_catalog() -> Result<CatalogStore> {
    CatalogStore::new(seed_products()?)
}
