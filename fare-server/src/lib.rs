//! Ride fare comparison viewer.
//!
//! A web application that takes a pickup and drop location, asks a remote
//! pricing service for per-provider fare estimates and a route, and renders
//! the comparison alongside a map fitted to that route.

pub mod controller;
pub mod domain;
pub mod map;
pub mod pricing;
pub mod web;
