pub mod record_index;
pub mod response_assembler;

pub use record_index::RecordIndex;
pub use response_assembler::{AssembledResponse, ResponseAssembler};
