pub mod errors;
pub mod logging;

// Dioxus hooks (client and server)
pub mod hooks;
