pub mod decode;
pub mod delete;
pub mod discover;
pub mod filename;

pub use decode::{FrameDecoder, FsDecoder};
pub use delete::{delete_duplicates, DeletionReport};
pub use discover::{discover, Discovery, DiscoveryConfig};
pub use filename::{parse_filename, NameShape, ParsedName};
