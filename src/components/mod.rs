//! Reusable UI components.

pub mod gated_outlet;
pub mod nav_bar;
