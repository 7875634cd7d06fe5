//! Reusable HTML components for page generation
//!
//! Maud component functions shared by the page and slide templates.

pub mod layout;
pub mod nav;
