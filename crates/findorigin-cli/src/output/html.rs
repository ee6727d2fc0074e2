//! HTML output formatter for chat replies (Telegram parse mode "HTML")

use findorigin_core::{Entities, FindResult};

/// Escape text for Telegram HTML
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn format_find_result(result: &FindResult) -> String {
    let mut output = String::from("<b>Возможные источники:</b>\n");

    if result.sources.is_empty() {
        match result.summary {
            Some(ref summary) => output.push_str(&format!("<i>{}</i>", escape(summary))),
            None => output.push_str("Источники не найдены."),
        }
        output.push('\n');
        return output;
    }

    for (i, source) in result.sources.iter().enumerate() {
        output.push_str(&format!(
            "{}. <a href=\"{}\">{}</a>\n",
            i + 1,
            escape(&source.url),
            escape(&source.title)
        ));
        if let Some(ref description) = source.description {
            output.push_str(&format!("   {}\n", escape(description)));
        }
        output.push_str(&format!("   Уверенность: {}\n", source.confidence.label()));
    }

    if let Some(ref summary) = result.summary {
        output.push_str(&format!("\n<i>{}</i>\n", escape(summary)));
    }

    output
}

pub fn format_entities(entities: &Entities, query: &str) -> String {
    let mut output = String::new();

    let sections = [
        ("Утверждения", &entities.claims),
        ("Даты", &entities.dates),
        ("Числа", &entities.numbers),
        ("Имена", &entities.names),
        ("Ссылки", &entities.links),
    ];
    for (title, values) in sections {
        if values.is_empty() {
            continue;
        }
        output.push_str(&format!("<b>{}:</b>\n", title));
        for value in values {
            output.push_str(&format!("• {}\n", escape(value)));
        }
    }

    output.push_str(&format!("<b>Запрос:</b> {}\n", escape(query)));
    output
}
