#![no_std]

pub mod contract;
mod events;

pub use contract::PropertyRegistry;
