pub mod consts;
pub mod controller;
pub mod element;
pub mod error;
pub mod events;
pub mod geometry;
pub mod machine;
pub mod surface;
pub mod viewport;
