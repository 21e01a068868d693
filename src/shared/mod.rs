pub mod api;
pub mod clock;
pub mod config;
pub mod editor_state;
pub mod google_docs;
pub mod live;
pub mod patch;
