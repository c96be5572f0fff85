//! Kinfolk Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Kinfolk layout
//! and kinship engines. It includes:
//!
//! - **Identifiers**: String-interned person and relationship ids ([`identifier::Id`])
//! - **Model**: People, relationships and family snapshots ([`model`] module)
//! - **Dates**: Birth date parsing for seniority ([`date::BirthDate`])
//! - **Geometry**: Points, sizes and bounds ([`geometry`] module)
//! - **Colors**: CSS color handling for edge styles ([`color::Color`])

pub mod color;
pub mod date;
pub mod geometry;
pub mod identifier;
pub mod model;
