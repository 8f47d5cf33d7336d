#![no_main]
use jsondsl::{convert, JsonValue};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let converted = JsonValue::from(&value);
        assert_eq!(converted, value);
        let dynamic = convert(&value).expect("serde_json values are always supported");
        assert_eq!(dynamic, converted);
        // Floats that are not finite never come out of the parser, so the trip back is lossless.
        assert_eq!(serde_json::Value::from(converted), value);
    }
});
