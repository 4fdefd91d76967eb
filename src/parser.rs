pub mod config;
pub mod tag;
pub mod xml;

pub use config::ParserConfig;
pub use xml::XmlParser;
