#![no_main]
use libfuzzer_sys::fuzz_target;
use zxml::XmlParser;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tree) = XmlParser::new(s).parse() {
            let rendered = tree.to_string();
            let reparsed = XmlParser::new(&rendered)
                .parse()
                .expect("canonical rendering must parse");
            assert_eq!(tree, reparsed);
        }
    }
});
