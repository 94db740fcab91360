mod product;
mod product_promotion;
mod promotion;

pub use product::Product;
pub use product_promotion::ProductPromotion;
pub use promotion::Promotion;
