//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Header, URL bar and footer
//! - `modals`: Field editor and copy fallback dialogs
//! - `panels`: Request and response panels
//! - `tabs`: Request tab contents (params, headers, body, auth)
//! - `highlight`: JSON and XML syntax highlighting
//! - `styling`: Color schemes and style constants

mod components;
mod highlight;
mod modals;
mod panels;
mod styling;
mod tabs;

pub use components::{render_footer, render_header, render_url_bar, SPINNER};
pub use modals::{render_copy_fallback_modal, render_edit_modal};
pub use panels::{render_request_panel, render_response_panel};
pub use styling::SCROLL_LINES_PER_ACTION;
