//! Terminal-facing UI contracts.
//!
//! Groups the rendering contract, styled line fragments and the theme system
//! under one namespace so the prompt logic can depend on `ui` instead of
//! importing terminal modules directly.

pub mod render;
pub mod span;
pub mod theme;
