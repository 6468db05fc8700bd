// Domain models
// Pure Rust, no framework dependencies

pub mod analytics;
pub mod auth_form;
pub mod navigation;
pub mod page;
pub mod sidebar;

pub use analytics::{AdAccount, AdvisorTip, CampaignRow, CampaignStatus, Kpi, ReportRow, Trend, UserProfile};
pub use auth_form::{AuthRedirect, LoginForm, SignupForm, SocialProvider, password_input_type};
pub use navigation::NavigationState;
pub use page::{Accent, Icon, MENU_ITEMS, MenuItem, PROFILE_ENTRY, PageId, sidebar_entries};
pub use sidebar::{EntryStyle, SidebarMode};
