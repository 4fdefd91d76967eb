use crate::{
    element::ElementTree,
    error::{Result, XmlError},
    formatter::{CanonicalFormatter, FormatConfig, Formatter, PrettyFormatter},
    parser::XmlParser,
};
use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::error;

/// Reads the file at `path`, joining its lines with the terminators removed.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        error!("Failed to open file: {}", e);
        XmlError::io(format!("Cannot read file: {}", path.display())).with_source(e)
    })?;

    let mut content = String::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| {
            error!("Failed to read line: {}", e);
            XmlError::io(format!("Cannot read file: {}", path.display())).with_source(e)
        })?;
        content.push_str(&line);
    }
    Ok(content)
}

pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|e| {
        error!("Failed to write file: {}", e);
        XmlError::io(format!("Cannot write to file: {}", path.display())).with_source(e)
    })
}

pub fn parse_xml(content: &str) -> Result<ElementTree> {
    XmlParser::new(content).parse()
}

pub fn format_xml(tree: &ElementTree) -> String {
    CanonicalFormatter.format(tree.root(), &FormatConfig::default())
}

pub fn format_pretty(tree: &ElementTree) -> String {
    PrettyFormatter.format(tree.root(), &FormatConfig::default())
}
