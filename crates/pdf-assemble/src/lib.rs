mod assemble;
mod collection;
mod layout;
mod settings;
mod types;

pub use assemble::{
    OutputEncoding, SourceImage, assemble_pdf_bytes, assemble_to_file, default_output_name,
    encode_for_pdf,
};
pub use collection::*;
pub use layout::{Placement, fit_to_page};
pub use settings::*;
pub use types::*;
