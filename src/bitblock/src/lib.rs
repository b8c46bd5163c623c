//! Fixed-size sequences of individually addressable bits.
//!
//! A [`BitBlock`] stores its bits packed into bytes, with bit 0
//! located at the LSB of the first byte. This is the same layout
//! produced by writing integers in little endian order, which
//! makes conversions between blocks, byte buffers and integers
//! straightforward:
//!
//! ```
//! use bitblock::BitBlock;
//!
//! let a = BitBlock::from_int(0xAB_u8);
//! let b: BitBlock = "1010".parse().unwrap();
//!
//! let joined = BitBlock::concatenate([&a, &b]);
//! assert_eq!(joined.size(), 12);
//! assert_eq!(joined.view(), &[0xAB, 0b0101]);
//!
//! let back: u8 = joined.sub_block(0, 8).unwrap().to_int().unwrap();
//! assert_eq!(back, 0xAB);
//! ```
//!
//! Operations validate their arguments and report violations as
//! an [`Error`] rather than panicking.
//!
//! # Features
//!
//! - `serde`: (De)serialization of blocks as binary strings. The
//!   `serde_impl` test suite only runs with this feature enabled.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod block;
pub use block::{BitBlock, Bits};

pub mod convert;
pub use convert::Integer;

mod error;
pub use error::Error;

pub mod utils;
