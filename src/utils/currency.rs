use regex::Regex;
use std::sync::OnceLock;

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$?(\d+(?:\.\d+)?)([MK])?").unwrap())
}

/// Parses a formatted monetary label ("$1.2M", "$500K", "$1,500", "$0")
/// into base currency units. Unparsable input contributes zero; callers
/// tolerate missing or malformed labels by silently degrading the sum.
pub fn parse_amount(label: &str) -> f64 {
    let cleaned = label.replace(',', "");
    let Some(caps) = amount_re().captures(&cleaned) else {
        return 0.0;
    };
    let Ok(value) = caps[1].parse::<f64>() else {
        return 0.0;
    };
    match caps.get(2).map(|m| m.as_str()) {
        Some("M") => value * 1_000_000.0,
        Some("K") => value * 1_000.0,
        _ => value,
    }
}

/// Renders a base-unit amount as a "$X.XM" label with one decimal place.
pub fn format_millions(amount: f64) -> String {
    format!("${:.1}M", amount / 1_000_000.0)
}

/// Renders an awarded amount as a "$2,000" label with thousands grouping.
/// Fractional cents are dropped; awards are whole-dollar in practice.
pub fn format_bounty_label(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_millions_suffix() {
        assert_eq!(parse_amount("$1.5M"), 1_500_000.0);
        assert_eq!(parse_amount("$1.2M"), 1_200_000.0);
    }

    #[test]
    fn test_parse_thousands_suffix() {
        assert_eq!(parse_amount("$250K"), 250_000.0);
        assert_eq!(parse_amount("$500K"), 500_000.0);
    }

    #[test]
    fn test_parse_unscaled() {
        assert_eq!(parse_amount("$0"), 0.0);
        assert_eq!(parse_amount("$1500"), 1500.0);
        assert_eq!(parse_amount("750"), 750.0);
    }

    #[test]
    fn test_parse_comma_grouping() {
        assert_eq!(parse_amount("$1,500"), 1500.0);
        assert_eq!(parse_amount("$2,500,000"), 2_500_000.0);
    }

    #[test]
    fn test_parse_garbage_yields_zero() {
        assert_eq!(parse_amount("garbage"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("N/A"), 0.0);
    }

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(1_500_000.0), "$1.5M");
        assert_eq!(format_millions(0.0), "$0.0M");
        assert_eq!(format_millions(250_000.0), "$0.3M");
    }

    #[test]
    fn test_format_bounty_label() {
        assert_eq!(format_bounty_label(2000.0), "$2,000");
        assert_eq!(format_bounty_label(500.0), "$500");
        assert_eq!(format_bounty_label(1_250_000.0), "$1,250,000");
    }

    #[test]
    fn test_bounty_label_round_trips() {
        assert_eq!(parse_amount(&format_bounty_label(2500.0)), 2500.0);
    }
}
