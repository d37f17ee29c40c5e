pub mod cart_renderer;
pub mod catalog_renderer;
