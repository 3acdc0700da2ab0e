//! View rendering functions for the UI components.
//!
//! - `layout`: Main window (header, upload card, dashboard link)
//! - `toast`: Toast notification overlay

mod layout;
mod toast;

pub use layout::main_view;
pub use toast::toast_overlay;
