//! # qrweave
//!
//! A Rust library for encoding text into QR Code (model 2) symbols with Reed-Solomon
//! error correction and penalty-based mask selection.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrweave::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Only data is required, the smallest fitting version and the best mask are chosen
//! let qr = QRBuilder::new("HELLO WORLD").build()?;
//!
//! let matrix = qr.to_bool_matrix(); // true for dark modules
//! assert_eq!(matrix.len(), qr.width());
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrweave::{ECLevel, MaskPattern, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("Hello, World!")
//!     .version(Version::new(2)?)        // if not provided, finds smallest version to fit data
//!     .ec_level(ECLevel::Q)             // if not provided, defaults to ECLevel::M
//!     .mask(MaskPattern::new(3)?)       // if not provided, finds mask with the lowest penalty
//!     .build()?;
//!
//! println!("{}", qr.metadata());
//! # Ok(())
//! # }
//! ```
//!
//! ## Encoding modes
//!
//! The most compact mode covering the whole message is used:
//! - **Numeric**: ASCII digits only
//! - **Alphanumeric**: `0-9`, `A-Z`, space and `$%*+-./:`
//! - **Byte**: any ISO-8859-1 text. Characters above `U+00FF` are rejected
//!
//! ## Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! ## Logging
//!
//! Build stages emit `tracing` events at `debug` level and per mask penalties at
//! `trace` level. Install any subscriber to see them.

pub mod builder;
pub(crate) mod common;

pub use builder::{generate_codewords, Module, QRBuilder, QR};
pub use common::bit_utils::BitStream;
pub use common::codec::{choose_mode, encode, encode_values, pack, Mode};
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, ECLevel, Metadata, Version};
