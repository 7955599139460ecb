#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    // Must not panic, and a valid result must survive re-validation.
    let result = rfc_mx::validate(&input);
    if let Some(rfc) = result.rfc() {
        assert_eq!(rfc_mx::validate(rfc), result);
    }
});
