//! Bundle reader
//!
//! Loads a generated bundle back into an [`AssetRegistry`] the way a JS engine
//! evaluating it would: registration lines are replayed in order, so a
//! repeated name keeps the last asset.

use crate::template::{
    REGISTRATION_DATA, REGISTRATION_MIDDLE, REGISTRATION_PREFIX, REGISTRATION_SUFFIX,
};
use bin2js_core::escape::unescape;
use bin2js_core::{Asset, AssetRegistry, Bin2JsError, Result};

const WRAPPER_OPEN: &str = "(function(";
const REGISTRY_DECL: &str = "  var ASSETS = {};";
const GET_ASSET_DECL: &str = ".getAsset = function(name) {";

/// Parse a generated bundle into the registry it builds at load time
pub fn parse_bundle(text: &str) -> Result<AssetRegistry> {
    if !text.starts_with(WRAPPER_OPEN) || !text.lines().any(|l| l == REGISTRY_DECL) {
        return Err(Bin2JsError::MalformedBundle(
            "missing bundle header".to_string(),
        ));
    }
    if !text.contains(GET_ASSET_DECL) || !text.trim_end().ends_with(");") {
        return Err(Bin2JsError::MalformedBundle(
            "missing bundle footer".to_string(),
        ));
    }

    let mut registry = AssetRegistry::new();
    for (index, line) in text.lines().enumerate() {
        if !line.starts_with(REGISTRATION_PREFIX) {
            continue;
        }
        let (name, data) = parse_registration(line).ok_or_else(|| {
            Bin2JsError::MalformedBundle(format!(
                "unparseable registration on line {}",
                index + 1
            ))
        })?;
        let bytes = unescape(data)?;
        registry.register(Asset::from_bytes(name, &bytes));
    }
    Ok(registry)
}

/// Split `  ASSETS['<name>'] = new Asset('<name>', '<data>');` into name and data.
///
/// Names are written unquoted, so the line is split from the right: the data
/// never contains a quote, and the two name copies are equal halves of what
/// remains.
fn parse_registration(line: &str) -> Option<(&str, &str)> {
    let suffix = REGISTRATION_SUFFIX.trim_end_matches('\n');
    let body = line
        .strip_prefix(REGISTRATION_PREFIX)?
        .strip_suffix(suffix)?;

    let split = body.rfind(REGISTRATION_DATA)?;
    let names = &body[..split];
    let data = &body[split + REGISTRATION_DATA.len()..];

    let name_len = names.len().checked_sub(REGISTRATION_MIDDLE.len())?;
    if name_len % 2 != 0 {
        return None;
    }
    let half = name_len / 2;
    let key = names.get(..half)?;
    let field = names
        .get(half..)?
        .strip_prefix(REGISTRATION_MIDDLE)?;

    (key == field).then_some((key, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{footer, header, registration_line};

    fn bundle(entries: &[(&str, &[u8])]) -> String {
        let mut text = header("window");
        for (name, data) in entries {
            text.push_str(&registration_line(name, data));
        }
        text.push_str(&footer("window"));
        text
    }

    #[test]
    fn test_foo_bin_scenario() {
        let text = bundle(&[("foo.bin", &[0x00, 0xff, 0x41])]);
        assert!(text.contains(r"'\x00\xff\x41'"));

        let registry = parse_bundle(&text).unwrap();
        let asset = registry.get_asset("foo.bin").unwrap();
        assert_eq!(&*asset.as_uint8_array(), &[0, 255, 65]);
    }

    #[test]
    fn test_one_entry_per_distinct_name() {
        let text = bundle(&[
            ("DMG_ROM.bin", b"boot"),
            ("roms/Asteroids.gb", b"game"),
            ("DMG_ROM.bin", b"patched"),
        ]);
        let registry = parse_bundle(&text).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get_asset("DMG_ROM.bin").unwrap().as_uint8_array().to_vec(),
            b"patched".to_vec()
        );
        assert_eq!(
            registry.get_asset("roms/Asteroids.gb").unwrap().as_uint8_array().to_vec(),
            b"game".to_vec()
        );
    }

    #[test]
    fn test_empty_bundle() {
        let registry = parse_bundle(&bundle(&[])).unwrap();
        assert!(registry.is_empty());
        assert!(registry.get_asset("anything").is_err());
    }

    #[test]
    fn test_name_with_separator_text() {
        let tricky = "odd', 'name";
        let text = bundle(&[(tricky, b"\x01")]);
        let registry = parse_bundle(&text).unwrap();
        assert_eq!(&*registry.get_asset(tricky).unwrap().as_uint8_array(), &[1]);
    }

    #[test]
    fn test_missing_header() {
        let text = registration_line("a", b"a") + &footer("window");
        assert!(matches!(
            parse_bundle(&text),
            Err(Bin2JsError::MalformedBundle(_))
        ));
    }

    #[test]
    fn test_missing_footer() {
        let text = header("window") + &registration_line("a", b"a");
        assert!(matches!(
            parse_bundle(&text),
            Err(Bin2JsError::MalformedBundle(_))
        ));
    }

    #[test]
    fn test_bad_registration_line() {
        let text = header("window") + "  ASSETS['a'] = new Asset('b', '');\n" + &footer("window");
        let err = parse_bundle(&text).unwrap_err();
        assert!(err.to_string().contains("line"));
    }

    #[test]
    fn test_bad_escape_in_data() {
        let text = header("window") + "  ASSETS['a'] = new Asset('a', '\\xZZ');\n" + &footer("window");
        assert!(matches!(
            parse_bundle(&text),
            Err(Bin2JsError::MalformedEscape { offset: 0 })
        ));
    }
}
