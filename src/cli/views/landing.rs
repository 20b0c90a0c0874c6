use colored::Color;

use crate::cli::format::Formatter;

const ACCENT: Color = Color::TrueColor {
    r: 0x63,
    g: 0x66,
    b: 0xf1,
};

const FEATURES: [(&str, &str); 3] = [
    (
        "Visão Inteligente",
        "Gráficos dinâmicos que mostram exatamente para onde seu dinheiro está indo.",
    ),
    (
        "Privacidade Total",
        "Seus dados nunca saem da sua máquina. Tudo fica num arquivo JSON local.",
    ),
    (
        "Rápido e Simples",
        "Sem cadastros demorados. Abra, lance e analise em segundos.",
    ),
];

/// Landing screen: pitch, feature cards, and where to go next.
pub fn render(fmt: &Formatter) -> String {
    let mut lines = vec![
        fmt.paint("⚡ Controle financeiro simplificado", ACCENT),
        String::new(),
        format!(
            "{} {}",
            fmt.bold("Tome as rédeas da sua"),
            fmt.paint("vida financeira.", ACCENT)
        ),
        String::new(),
        "O Fineasy é a ferramenta mais simples e prática para você: monitorar e".to_string(),
        "editar seus gastos, e saldos em tempo real. Sem planilhas complexas ou".to_string(),
        "bancos de dados pesados.".to_string(),
        String::new(),
    ];

    for (title, body) in FEATURES {
        lines.push(format!("  {}", fmt.bold(title)));
        lines.push(format!("    {}", fmt.dim(body)));
    }

    lines.push(String::new());
    lines.push(format!(
        "{}  acessar meu dashboard",
        fmt.paint("dashboard", ACCENT)
    ));
    lines.push(format!("{}       lançar despesas", fmt.paint("edit", ACCENT)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::format::LocaleStyle;

    #[test]
    fn landing_mentions_every_feature_and_route() {
        let text = render(&Formatter::new(LocaleStyle::Brazilian, "BRL", false));
        for (title, _) in FEATURES {
            assert!(text.contains(title), "missing {title}");
        }
        assert!(text.contains("dashboard  acessar meu dashboard"));
        assert!(text.contains("edit       lançar despesas"));
    }
}
