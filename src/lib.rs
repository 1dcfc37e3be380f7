pub mod char_frequency;
pub mod engine;
pub mod render_trace;
pub mod replay;
pub mod window_search;
