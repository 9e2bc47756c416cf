#![no_main]

use libfuzzer_sys::fuzz_target;
use norsk_nummer::{KidMode, NumberKind};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — verification is total over any string.
        for kind in NumberKind::ALL {
            let _ = kind.verify(s);
        }
        let _ = norsk_nummer::verify_kid_number(s, KidMode::Mod11);
    }
});
