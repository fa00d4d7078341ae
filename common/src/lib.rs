#![no_std]

pub mod escrow {
    pub mod interface;
    pub mod types;
}
