#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let cfg = flowlines::ArrowConfig::default();
    let out = flowlines::annotate_listing(&text, &cfg);
    assert_eq!(out.lines().count(), text.lines().count());
});
