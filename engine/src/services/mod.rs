// Services built on top of the pricing core
pub mod price_service;

pub use price_service::PriceService;
