pub mod landing_footer;
pub mod landing_navbar;
pub mod navbar;
pub mod sidebar;

pub use landing_footer::LandingFooter;
pub use landing_navbar::LandingNavbar;
pub use navbar::Navbar;
pub use sidebar::Sidebar;
