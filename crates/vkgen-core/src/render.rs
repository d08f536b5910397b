//! C rendering of parameters and prototypes.

use crate::{Param, Proto};

/// Column at which `c_pretty_decl` aligns parameter names.
const PRETTY_NAME_COLUMN: usize = 44;

impl Param {
    /// The parameter as a C declarator. Array suffixes follow the name.
    pub fn c(&self) -> String {
        let (base, suffix) = self.split_array_suffix();
        format!("{base} {}{suffix}", self.name())
    }

    fn split_array_suffix(&self) -> (&str, &str) {
        let ty = self.ty();
        ty.split_at(ty.find('[').unwrap_or(ty.len()))
    }
}

impl Proto {
    /// One-line C declaration under `name`, with an optional calling-convention
    /// attribute between the return type and the name.
    pub fn c_decl(&self, name: &str, attr: &str) -> String {
        let params = if self.params().is_empty() {
            "void".to_string()
        } else {
            self.params()
                .iter()
                .map(Param::c)
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("{} {}{name}({params})", self.ret(), attr_prefix(attr))
    }

    /// `c_decl` of the prototype's own name behind `prefix`.
    pub fn c_func(&self, prefix: &str, attr: &str) -> String {
        self.c_decl(&format!("{prefix}{}", self.name()), attr)
    }

    /// Call expression forwarding every parameter by name.
    pub fn c_call(&self) -> String {
        let args: Vec<&str> = self.params().iter().map(Param::name).collect();
        format!("{}({})", self.name(), args.join(", "))
    }

    /// Multi-line declaration, one parameter per line with names aligned
    /// the way the API headers lay them out.
    pub fn c_pretty_decl(&self, name: &str, attr: &str) -> String {
        if self.params().is_empty() {
            return self.c_decl(name, attr);
        }

        let lines: Vec<String> = self
            .params()
            .iter()
            .map(|param| {
                let (base, suffix) = param.split_array_suffix();
                let pad = PRETTY_NAME_COLUMN.saturating_sub(base.len()).max(1);
                format!("    {base}{}{}{suffix}", " ".repeat(pad), param.name())
            })
            .collect();

        format!(
            "{} {}{name}(\n{})",
            self.ret(),
            attr_prefix(attr),
            lines.join(",\n")
        )
    }
}

fn attr_prefix(attr: &str) -> String {
    if attr.is_empty() {
        String::new()
    } else {
        format!("{attr} ")
    }
}
