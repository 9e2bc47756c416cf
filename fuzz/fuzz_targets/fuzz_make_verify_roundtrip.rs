#![no_main]

use libfuzzer_sys::fuzz_target;
use norsk_nummer::{KidMode, NumberKind};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let kinds = NumberKind::ALL
            .into_iter()
            .chain(std::iter::once(NumberKind::Kid(KidMode::Mod11)));
        for kind in kinds {
            if let Ok(number) = kind.make(s) {
                assert!(kind.verify(&number), "{kind}: {number}");
            }
        }
    }
});
