//! Screen layout for menus and overlays

pub mod layout;

pub use layout::MenuLayout;
