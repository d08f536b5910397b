use vkgen_codegen::EmitterKind;
use vkgen_core::Colors;

pub struct ListArgs {
    pub color: bool,
}

pub fn run(args: ListArgs) {
    print!("{}", render(Colors::new(args.color)));
}

pub fn render(c: Colors) -> String {
    let usages: Vec<(EmitterKind, usize)> = EmitterKind::ALL
        .into_iter()
        .map(|kind| (kind, usage_len(kind)))
        .collect();
    let width = usages.iter().map(|(_, len)| *len).max().unwrap_or(0);

    let mut out = format!("Emitters ({}):\n", usages.len());
    for (kind, len) in usages {
        let synopsis = if kind.synopsis().is_empty() {
            String::new()
        } else {
            format!(" {}", kind.synopsis())
        };
        out.push_str(&format!(
            "  {}{}{}{}{}  {}{}{}\n",
            c.blue,
            kind.name(),
            c.reset,
            synopsis,
            " ".repeat(width - len),
            c.dim,
            kind.description(),
            c.reset,
        ));
    }
    out
}

fn usage_len(kind: EmitterKind) -> usize {
    match kind.synopsis() {
        "" => kind.name().len(),
        synopsis => kind.name().len() + 1 + synopsis.len(),
    }
}
