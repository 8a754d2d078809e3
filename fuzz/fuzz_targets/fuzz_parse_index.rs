#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdemo_core::calculator::FibError;
use fibdemo_core::input::parse_index;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    match parse_index(text) {
        // A parsed index must be what the leading digits spell out,
        // whatever follows them.
        Ok(n) => {
            let trimmed = text.trim_start();
            let unsigned = trimmed
                .strip_prefix(['+', '-'])
                .unwrap_or(trimmed);
            let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
            let expected = digits.parse::<u32>().unwrap_or(0);
            assert_eq!(n, expected, "input {text:?}");
        }
        Err(FibError::NegativeIndex(v)) => assert!(v < 0),
        Err(FibError::IndexOutOfRange(_)) => {}
        Err(e) => panic!("unexpected error {e}"),
    }
});
