pub mod feature_detail;
pub mod nav;
pub mod product_tabs;
pub mod reveal;
