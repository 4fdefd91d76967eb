#![no_main]
use libfuzzer_sys::fuzz_target;
use zxml::XmlParser;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tree) = XmlParser::new(s).parse() {
            let _ = tree.find_by_tag(tree.root().tag());
        }
    }
});
