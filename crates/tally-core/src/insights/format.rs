//! Amount formatting for insight text

/// Format an amount with a currency symbol and thousands separators
///
/// Whole amounts print without decimals; others keep up to two.
pub fn money(symbol: &str, amount: f64) -> String {
    format!("{}{}", symbol, group_thousands(amount))
}

/// Insert `,` between groups of three integer digits: 40801 -> "40,801"
pub fn group_thousands(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();

    let text = if abs.fract() == 0.0 {
        format!("{:.0}", abs)
    } else {
        let s = format!("{:.2}", abs);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    };

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac);
    }
    out
}
