pub mod controller;
pub mod effects;
pub mod payload;
pub mod ports;
pub mod signal;
pub mod validate;
