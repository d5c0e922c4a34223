//! Source rewriting for the compile service.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PRAGMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^pragma solidity [^;\n]+;").expect("valid pragma pattern"));

static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import "([^"]+)/([^/"]+)\.sol";"#).expect("valid import pattern")
});

/// Rewrite generated source into the form the compile service accepts.
///
/// The first `pragma solidity ...;` at the start of a line becomes
/// `pragma solidity ^0.8.0;`. Every `import "<dir>/<X>.sol";` becomes
/// `import { X } from "<dir>/X.sol";`, with the first `github.com/` in
/// `<dir>` replaced by `@`.
pub fn adjust_solidity_code(code: &str) -> String {
    let code = PRAGMA.replace(code, "pragma solidity ^0.8.0;");
    IMPORT
        .replace_all(&code, |caps: &Captures| {
            let dir = caps[1].replacen("github.com/", "@", 1);
            format!("import {{ {} }} from \"{}/{}.sol\";", &caps[2], dir, &caps[2])
        })
        .into_owned()
}
