pub mod components;
pub mod layouts;
pub mod pages;

// Root component and route table
pub use pages::routes::{App, Route};
