//! Generated-file banners.

/// Comment syntax of the artifact the banner is prepended to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Banner {
    /// C block comments.
    #[default]
    C,
    /// `;` line comments of module-definition files.
    Semicolon,
}

impl Banner {
    pub fn render(self) -> String {
        let notice = [
            "Vulkan",
            "",
            "Generated by vkgen from the API description.",
            "Edit the description or the generator instead of this file.",
        ];

        match self {
            Banner::C => {
                let mut out = String::from("/* THIS FILE IS GENERATED.  DO NOT EDIT. */\n\n/*\n");
                for line in notice {
                    out.push_str(if line.is_empty() { " *" } else { " * " });
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str(" */");
                out
            }
            Banner::Semicolon => {
                let mut lines = vec![
                    "; THIS FILE IS GENERATED.  DO NOT EDIT.".to_string(),
                    String::new(),
                ];
                lines.extend(notice.iter().map(|line| {
                    if line.is_empty() {
                        ";".to_string()
                    } else {
                        format!("; {line}")
                    }
                }));
                lines.join("\n")
            }
        }
    }
}
