//! Presentation helpers for datasets.

mod html;

pub use html::{render_html, render_page};
