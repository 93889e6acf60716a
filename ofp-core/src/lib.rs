#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod constants;
pub mod types;
pub mod action;
pub mod stats;
#[cfg(feature = "json")]
pub mod json;
