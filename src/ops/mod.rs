mod export;
mod reformat;
mod write;

pub use export::{render_cases, render_script, DEFAULT_COMPILER};
pub use reformat::{reformat_all, DEFAULT_SEPARATOR};
pub use write::write_cases;
