// Copyright 2025 the Odontogram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Odontogram Notation: tooth identities and dental numbering systems.
//!
//! ## Overview
//!
//! This crate is the static half of an odontogram. It knows the 32 permanent teeth,
//! the clinical type of each, and how to spell a tooth in the three common notations.
//! It holds no mutable state; every function is a pure lookup.
//!
//! - [`ToothCode`](crate::types::ToothCode): the identifier a host application sees,
//!   `"teeth-<quadrant><position>"` (for example `"teeth-21"`).
//! - [`ToothRegistry`](crate::registry::ToothRegistry): the catalog of anatomical positions and
//!   their clinical types.
//! - [`convert`](crate::notation::convert) and [`notations`](crate::notation::notations): FDI is canonical,
//!   Universal and Palmer are derived from it.
//! - [`ToothDetail`](crate::detail::ToothDetail): the payload reported to callers for a tooth,
//!   always recomputed from the code alone.
//!
//! ## Degrading instead of failing
//!
//! Lookups never fail. A code outside the catalog has type `"Unknown"`, and a code the
//! Universal table does not know converts to its own numeric string. Palmer conversion of a
//! code shorter than two characters echoes the input.
//!
//! ## Example
//!
//! ```
//! use odontogram_notation::notation::{Notation, convert, notations};
//! use odontogram_notation::types::ToothCode;
//!
//! let code = ToothCode::from("teeth-21");
//! assert_eq!(convert(&code, Notation::Universal), "9");
//! assert_eq!(convert(&code, Notation::Palmer), "1UL");
//!
//! let all = notations(&ToothCode::from("teeth-48"));
//! assert_eq!((all.fdi.as_str(), all.universal.as_str(), all.palmer.as_str()), ("48", "32", "8LR"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod detail;
pub mod notation;
pub mod registry;
pub mod types;

pub use detail::ToothDetail;
pub use notation::{Notation, ToothNotations, convert, notations};
pub use registry::{ToothKind, ToothRegistry};
pub use types::{Quadrant, ToothCode};
