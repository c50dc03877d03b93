//! Domain types and the pure GiroCode encoding rules.

pub mod currency;
pub mod epc;
pub mod invoice;
pub mod payment;
pub mod ports;
pub mod render;
