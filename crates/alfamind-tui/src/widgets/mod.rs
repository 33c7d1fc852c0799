//! Reusable rendering helpers shared by the screens.

pub mod art;
pub mod form;
pub mod logo;
pub mod price_fmt;
