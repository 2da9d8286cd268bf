//! Pinboard Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Pinboard board
//! diagrams. It includes:
//!
//! - **Identifiers**: String-interned hole identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Layered SVG drawing primitives ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
