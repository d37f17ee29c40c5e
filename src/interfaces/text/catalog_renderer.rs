use crate::application::catalog::CatalogStore;
use crate::domain::product::{Category, Product};
use std::io::{self, Write};

pub fn section_title(category: Category) -> &'static str {
    match category {
        Category::Menu => "Menu",
        Category::Promotions => "Promotions",
        Category::Featured => "Featured",
    }
}

/// Writes the listing of one catalog section.
///
/// Featured products show their whole gallery, the rest only the main image.
/// Nothing is written for a section without products.
pub fn render_section<W: Write>(
    out: &mut W,
    catalog: &CatalogStore,
    category: Category,
) -> io::Result<()> {
    let products = catalog.filter_by_category(category);
    if products.is_empty() {
        return Ok(());
    }

    writeln!(out, "== {} ==", section_title(category))?;
    for product in products {
        write_product(out, product, category)?;
    }
    Ok(())
}

/// Writes every section in display order.
pub fn render_catalog<W: Write>(out: &mut W, catalog: &CatalogStore) -> io::Result<()> {
    for category in Category::ALL {
        render_section(out, catalog, category)?;
    }
    Ok(())
}

fn write_product<W: Write>(out: &mut W, product: &Product, category: Category) -> io::Result<()> {
    writeln!(
        out,
        "#{:<4} {:<32} {:>12}",
        product.id(),
        product.name(),
        product.formatted_price()
    )?;
    if !product.description().is_empty() {
        writeln!(out, "      {}", product.description())?;
    }
    if category == Category::Featured && product.images().len() > 1 {
        writeln!(out, "      images: {}", product.images().join(", "))?;
    } else {
        writeln!(out, "      image: {}", product.main_image())?;
    }
    Ok(())
}
