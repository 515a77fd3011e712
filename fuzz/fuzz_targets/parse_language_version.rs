#![no_main]

use langver_version::{parse, try_parse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let parsed = parse(data);
    assert_eq!(try_parse(data), parsed.as_ref().ok().copied());
    match parsed {
        Ok(version) => assert_eq!(version.to_string(), data),
        Err(err) => assert!(data.is_char_boundary(err.offset())),
    }
});
