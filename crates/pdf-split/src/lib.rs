mod pageset;
mod split;
mod types;

pub use pageset::{PageRange, PageSet};
pub use split::{extract_pages, load_pdf, page_count, save_pdf, split_file};
pub use types::*;
