//! Progress reporting between picks

pub mod reporter;
