#![no_main]

use concierge::fuzz_api::{cache_key, canonical_json};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let canonical = canonical_json(&value);
    let reparsed: serde_json::Value = match serde_json::from_str(&canonical) {
        Ok(v) => v,
        Err(e) => panic!("canonical form does not parse: {e}"),
    };
    assert_eq!(canonical_json(&reparsed), canonical);
    assert_eq!(
        cache_key("fuzz", Some("actor"), &value),
        cache_key("fuzz", Some("actor"), &reparsed)
    );
});
