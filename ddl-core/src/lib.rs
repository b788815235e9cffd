pub mod compact;
pub mod constants;
pub mod ddl;
pub mod error;

pub use compact::{compress, compress_owned};
pub use ddl::{DdlParser, ParseOutput, SchemaObject, parse, parse_document};
pub use error::{DdlError, Result};
