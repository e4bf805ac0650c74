//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in washcycle-core on top of `embedded-hal` 1.0:
//!
//! - Water handling (relay inlet valve and drain pump)
//! - Drum motor (run relay with wash/spin speed select)
//! - Dirt detection (ADC turbidity sensor)

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod motor;
pub mod pump;
pub mod sensor;

#[cfg(test)]
pub(crate) mod mock;
