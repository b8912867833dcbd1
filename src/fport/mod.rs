//! # F.Port Protocol Module
//!
//! Decoding pipeline for the F.Port-style, S.Bus-derived serial link.
//!
//! This module handles:
//! - Frame boundary detection in an unbounded byte stream ([`parser`])
//! - Byte-unstuffing of escaped payload bytes ([`unstuff`])
//! - Structural validation: declared length and mod-255 checksum ([`frame`])
//! - Typed payload decoding, including the bit-packed channel block
//!   ([`decoder`], [`bits`])
//!
//! Data flow: transport bytes → [`parser::FportParser`] → candidate frame →
//! [`frame::validate`] → [`decoder::decode_message`] → [`protocol::Message`].

pub mod bits;
pub mod checksum;
pub mod decoder;
pub mod error;
pub mod frame;
pub mod parser;
pub mod protocol;
pub mod unstuff;

#[cfg(test)]
pub(crate) mod testutil;
