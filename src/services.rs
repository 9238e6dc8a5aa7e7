pub mod auth;
pub mod catalog_service;
pub mod order_service;
pub mod shop_service;
