pub mod histogram;
pub mod products;
pub mod reporting;
