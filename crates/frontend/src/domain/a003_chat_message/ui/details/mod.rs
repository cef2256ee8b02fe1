//! Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: reply sources (canned stand-in and completion endpoint)
//! - view_model.rs: ChatLog state and ChatVm with RwSignals
//! - view.rs: Main component ChatPanel

mod model;
mod view;
mod view_model;

pub use view::ChatPanel;
