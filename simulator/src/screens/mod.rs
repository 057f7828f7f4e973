//! Screen modules for the debug view.

mod debug;

pub use debug::draw_debug_page;
