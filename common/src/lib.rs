#![no_std]

pub mod escrow {
    pub mod interface;
    pub mod types;
}

pub mod property {
    pub mod interface;
    pub mod types;
}

pub mod storage;
