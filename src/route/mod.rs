//! Multi-zone route composition.

mod composer;

pub use composer::{RouteComposer, RouteConfig, RouteResult, compose_route};
