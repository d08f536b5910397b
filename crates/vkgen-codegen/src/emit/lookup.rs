//! String-compare cascades shared by the proc-address resolvers.

/// Vendor prefix of every exported and queried function name.
pub(crate) const VENDOR_PREFIX: &str = "vk";

/// Return `NULL` unless `var` is non-null and starts with `vk`.
pub(crate) fn proc_addr_guard(var: &str) -> String {
    format!("    if (!{var} || {var}[0] != 'v' || {var}[1] != 'k')\n        return NULL;")
}

/// Ordered `strcmp` branches over unprefixed function names.
#[derive(Debug, Default)]
pub(crate) struct Cascade {
    lines: Vec<String>,
}

impl Cascade {
    pub fn new() -> Self {
        Self::default()
    }

    /// `if (!strcmp(var, "name")) return <value>;`
    pub fn branch(&mut self, var: &str, name: &str, value: &str) {
        self.lines.push(format!("if (!strcmp({var}, \"{name}\"))"));
        self.lines.push(format!("    return {value};"));
    }

    /// Placeholder keeping a skipped function visible in the output.
    pub fn skip(&mut self, name: &str) {
        self.lines.push(format!("/* no {VENDOR_PREFIX}{name} */"));
    }

    /// A complete resolver function: `signature`, the prefix guard on
    /// `var`, the prefix skip, the branches, and a final `return NULL;`.
    pub fn into_function(self, signature: &str, var: &str) -> String {
        let mut out = vec![
            signature.to_string(),
            "{".to_string(),
            proc_addr_guard(var),
            String::new(),
            format!("    {var} += 2;"),
        ];
        out.extend(self.lines.into_iter().map(|line| format!("    {line}")));
        out.push(String::new());
        out.push("    return NULL;".to_string());
        out.push("}".to_string());
        out.join("\n")
    }
}
