pub mod complementary;
pub mod merge;
pub mod orders;
pub mod parser;

pub use merge::merge_products;
pub use orders::process_orders;
