pub mod line_reader;
pub mod mapped_input;
pub mod numeric;

pub use line_reader::{next_line_start, split_record, RecordLines};
pub use mapped_input::MappedInput;
pub use numeric::{decode_tenths, is_well_formed};
