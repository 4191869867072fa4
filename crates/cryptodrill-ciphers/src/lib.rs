//! Classical cipher transforms for cipher practice drills
//!
//! This crate implements twenty pencil-and-paper ciphers over plain text
//! and exposes them two ways: a catalog-driven [`transform`] that takes a
//! cipher id and a raw key string, and typed cipher structs implementing
//! [`ClassicalCipher`] for callers that want the parsed key.
//!
//! # Components
//!
//! - **Catalog**: [`CipherId`], [`Direction`] and one static [`CipherSpec`]
//!   per cipher describing its name, key hint and supported directions
//! - **Substitution**: AtBash, Caesar, the keyed Aristocrat family,
//!   Xenocrypt and Cryptarithm
//! - **Numeric**: Hill 2×2 and 3×3, Affine, toy RSA
//! - **Transposition**: Railfence, Complete Columnar
//! - **Polyalphabetic**: Porta, Running Key
//! - **Symbol streams**: Baconian, Dancing Men, Pollux, Morbit, Fractionated Morse
//!
//! Keys are validated when a cipher is constructed. A malformed key is a
//! [`CipherError::KeyFormat`], a well-formed key that violates a
//! mathematical precondition is a [`CipherError::KeyConstraint`], and a
//! direction the cipher does not implement is a
//! [`CipherError::Unsupported`].
//!
//! # Examples
//!
//! ## Catalog dispatch
//!
//! ```
//! use cryptodrill_ciphers::{transform, CipherId, Direction};
//!
//! let ct = transform(CipherId::Caesar, "HELLO", "3", Direction::Encrypt).unwrap();
//! assert_eq!(ct, "KHOOR");
//! ```
//!
//! ## Typed ciphers
//!
//! ```
//! use cryptodrill_ciphers::{ClassicalCipher, Hill2};
//!
//! let hill = Hill2::new("2 1 3 4").unwrap();
//! assert_eq!(hill.determinant(), 5);
//! assert_eq!(hill.encrypt("HE").unwrap(), "SL");
//! ```

#![warn(missing_docs)]

pub mod affine;
pub mod alphabet;
pub mod catalog;
pub mod cipher;
pub mod error;
pub mod hill;
pub mod math;
pub mod morse;
pub mod polyalphabetic;
pub mod rsa;
pub mod substitution;
pub mod symbols;
pub mod transform;
pub mod transposition;

pub use error::CipherError;

// Re-export commonly used types
pub use affine::Affine;
pub use catalog::{CipherId, CipherSpec, Direction, catalog};
pub use cipher::ClassicalCipher;
pub use hill::{Hill2, Hill3};
pub use morse::{FractionatedMorse, Morbit, Pollux};
pub use polyalphabetic::{Porta, RunningKey};
pub use rsa::ToyRsa;
pub use substitution::{AtBash, Caesar, Cryptarithm, Substitution};
pub use symbols::{Baconian, DancingMen};
pub use transform::{cipher_for, decrypt, encrypt, transform};
pub use transposition::{CompleteColumnar, Railfence};
