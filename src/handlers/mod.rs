pub mod customer;
pub mod restaurant;
pub mod menu;
pub mod order;
pub mod payment;
pub mod shipping;
