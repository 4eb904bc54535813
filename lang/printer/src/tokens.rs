//! This module contains the symbols and keywords of the surface language.
//! These constants are used when we prettyprint source code.

// Symbols
//
//

/// The symbol `=>`
pub const FAT_ARROW: &str = "=>";

/// The symbol `:=`
pub const COLON_EQ: &str = ":=";

/// The symbol `,`
pub const COMMA: &str = ",";

/// The symbol `.`
pub const DOT: &str = ".";

/// The symbol `|`
pub const PIPE: &str = "|";

/// The symbol `*`
pub const STAR: &str = "*";

/// The symbol `_`
pub const UNDERSCORE: &str = "_";

/// The symbol `#`
pub const HASH: &str = "#";

// Keywords
//
//

/// The keyword `union`
pub const UNION: &str = "union";

/// The keyword `def`
pub const DEF: &str = "def";

/// The keyword `match`
pub const MATCH: &str = "match";

/// The keyword `as`
pub const AS: &str = "as";

/// The keyword `in`
pub const IN: &str = "in";

/// The keyword `if`
pub const IF: &str = "if";

// Attributes
//
//

/// The `dyn_constructors` attribute
pub const ATTR_DYN_CONSTRUCTORS: &str = "dyn_constructors";

/// The `allow_underscore` attribute
pub const ATTR_ALLOW_UNDERSCORE: &str = "allow_underscore";
