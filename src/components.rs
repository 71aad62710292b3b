//! Reusable HTML components for page generation
//!
//! Maud component functions shared by page generators. The layout wrapper
//! keeps every page self contained: styles and scripts are inlined and no
//! external resource is referenced.

pub mod layout;
