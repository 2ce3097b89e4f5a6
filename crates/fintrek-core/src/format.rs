//! Display-boundary formatting helpers

/// Format an amount with thousand separators, e.g. `8500.0` → `"8,500"`.
/// Fractional amounts keep two decimal places; whole amounts drop them.
pub fn format_amount(val: f64) -> String {
    let abs = val.abs();
    let formatted = format!("{:.2}", abs);
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    let sign = if val < 0.0 { "-" } else { "" };
    if dec_part == "00" {
        format!("{}{}", sign, with_commas)
    } else {
        format!("{}{}.{}", sign, with_commas, dec_part)
    }
}
