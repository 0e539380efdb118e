//! Vizboard - dashboard for visualizations generated from uploaded datasets
//!
//! A Dioxus application that runs in the browser (`web` feature) or as a
//! desktop window (`desktop` feature).

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod icons;
pub mod navigation;
pub mod pages;
pub mod routes;
pub mod state;
