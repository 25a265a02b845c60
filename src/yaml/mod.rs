mod dumper;
mod parser;

pub use dumper::DirectoryYamlDumper;
pub use parser::{DirectoryYamlError, DirectoryYamlParser};
