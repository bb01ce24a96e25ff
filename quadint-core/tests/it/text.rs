use crate::samples;
use pretty_assertions::assert_eq;
use quadint_core::types::Int128;

#[test]
fn radix_round_trip() {
    for (value, native) in samples().into_iter().step_by(7) {
        for radix in 2..=36 {
            let text = value.to_string_radix(radix).unwrap();
            assert_eq!(Int128::from_str_radix(&text, radix).unwrap(), value, "{text}");
        }
        assert_eq!(value.to_string(), native.to_string());
        assert_eq!(format!("{value:x}"), hex(native));
    }
}

#[test]
fn dump_round_trip() {
    for (value, native) in samples().into_iter().step_by(3) {
        let dump = value.to_twos_complement_string();
        assert_eq!(dump.len(), 4 * 32 + 3);
        assert_eq!(dump.replace('_', ""), format!("{:0128b}", native as u128));
        assert_eq!(Int128::from_twos_complement_str(&dump).unwrap(), value);
    }
}

#[test]
fn parses_native_renderings() {
    for (value, native) in samples() {
        assert_eq!(native.to_string().parse::<Int128>().unwrap(), value);
    }
}

fn hex(native: i128) -> String {
    if native < 0 {
        format!("-{:x}", native.unsigned_abs())
    } else {
        format!("{native:x}")
    }
}
