//! # dlm-core
//!
//! Foundational helpers shared by every data layer manager crate:
//! - [`normalize`]: canonical slug form for free-text payload values, with a
//!   carve-out for absolute URLs
//! - [`JsonKind`]: the runtime kind of a JSON value, as reported in type
//!   mismatch errors and used when matching declared leaf types

pub mod kind;
pub mod normalize;

pub use kind::JsonKind;
pub use normalize::normalize;
