//! TimeTrack Core Types and Definitions
//!
//! This crate provides the foundational types shared by the TimeTrack
//! timeline tools. It includes:
//!
//! - **Records**: Historical figures with validated life spans ([`record::PersonRecord`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: SVG drawing primitives for timeline elements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod record;
