#![no_main]

use concierge::fuzz_api::{PromptGuard, normalize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let guard = PromptGuard::new();
    let blocked = guard.should_block(data);
    assert_eq!(blocked, guard.first_match(data).is_some());
    // normalizing twice changes nothing
    let once = normalize(data);
    assert_eq!(normalize(&once), once);
});
