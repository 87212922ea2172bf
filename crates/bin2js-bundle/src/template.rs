//! JavaScript text emitted around and between the assets

use bin2js_core::escape::escape_bytes;

/// Opening of the bundle: the wrapper function, the `Asset` type and the
/// empty `ASSETS` registry
pub fn header(global: &str) -> String {
    format!(
        r#"(function({global}) {{
  var ASSETS = {{}};
  
  var Asset = function(name, str) {{
    this.name = name;
    this.str = str;
  }}

  Asset.prototype = {{
    asUint8Array: function() {{
      var i = this.str.length,
          buffer = new ArrayBuffer(this.str.length),
          array = new Uint8Array(buffer);
      while(i--) {{
        array[i] = this.str.charCodeAt(i);
      }}
      return array;
    }}
  }}

"#
    )
}

/// Closing of the bundle: `getAsset`, the `listAssets` stub and the call of
/// the wrapper. There is no trailing newline.
pub fn footer(global: &str) -> String {
    format!(
        r#"

  {global}.getAsset = function(name) {{
    if (!ASSETS.hasOwnProperty(name)) {{
      throw 'Asset not found ' + name;
    }}
    return ASSETS[name];
  }}
  {global}.listAssets = function() {{

  }}
}})({global});"#
    )
}

/// Prefix of every registration line
pub const REGISTRATION_PREFIX: &str = "  ASSETS['";

/// Text between the registry key and the asset's own name field
pub const REGISTRATION_MIDDLE: &str = "'] = new Asset('";

/// Text between the name field and the escaped data
pub const REGISTRATION_DATA: &str = "', '";

/// End of every registration line, newline included
pub const REGISTRATION_SUFFIX: &str = "');\n";

/// Registration statement for one asset.
///
/// The name goes into both quoted positions exactly as given.
pub fn registration_line(name: &str, data: &[u8]) -> String {
    let escaped = escape_bytes(data);
    let mut line = String::with_capacity(
        REGISTRATION_PREFIX.len()
            + REGISTRATION_MIDDLE.len()
            + REGISTRATION_DATA.len()
            + REGISTRATION_SUFFIX.len()
            + name.len() * 2
            + escaped.len(),
    );
    line.push_str(REGISTRATION_PREFIX);
    line.push_str(name);
    line.push_str(REGISTRATION_MIDDLE);
    line.push_str(name);
    line.push_str(REGISTRATION_DATA);
    line.push_str(&escaped);
    line.push_str(REGISTRATION_SUFFIX);
    line
}
