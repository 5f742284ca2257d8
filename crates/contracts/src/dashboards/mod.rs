pub mod common;
pub mod d500_overview;
pub mod d501_sales_trends;
pub mod d502_top_products;
pub mod d503_customer_insights;
