pub mod routes;

pub mod auth;
pub mod dashboard;
pub mod landing;
pub mod views;

pub use auth::{Login, Signup};
pub use dashboard::{Dashboard, PageSelector, PageView};
pub use landing::Landing;
