pub mod cad_num;
pub mod format;
pub mod normalize;
pub mod record;
pub mod render;
pub mod words;

pub use cad_num::{CadastreNumber, InvalidFormat};
pub use normalize::normalize;
pub use record::CadastreRecord;
pub use render::{map_link, render, render_with_map_link};
