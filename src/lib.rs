//! Server-rendered web front end for the MovieMatch recommendation API.
//!
//! Pages are rendered on the server from the backend's JSON API. The home
//! screen additionally keeps a WebSocket open so that search, paging and
//! selection update in place.

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod live;
pub mod middleware;
pub mod models;
pub mod screens;
pub mod services;
