//! Sample data inserted into a freshly started store.

use product_crud_core::{Product, ProductCreate};

use super::Collection;

/// Insert the three sample products. On an empty collection they get ids 1-3.
pub fn sample_products(products: &mut Collection<Product>) {
    let samples = [
        (
            "Wireless Headphones",
            "High-quality wireless headphones with noise cancellation",
            199.99,
            "Electronics",
            ["audio", "wireless", "premium"],
        ),
        (
            "Coffee Maker",
            "Programmable coffee maker with built-in grinder",
            89.99,
            "Appliances",
            ["kitchen", "coffee", "automatic"],
        ),
        (
            "Laptop Stand",
            "Adjustable aluminum laptop stand for ergonomic work",
            45.99,
            "Accessories",
            ["ergonomic", "aluminum", "adjustable"],
        ),
    ];

    for (name, description, price, category, tags) in samples {
        products.create(ProductCreate {
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            category: category.to_owned(),
            tags: tags.into_iter().map(String::from).collect(),
            in_stock: true,
        });
    }

    tracing::info!(count = products.len(), "Seeded sample products");
}
