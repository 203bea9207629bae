/// Format an amount with thousands separators and two decimals.
///
/// `6848.475` becomes `6,848.48`. Infinities and NaN are spelled out as
/// `inf`, `-inf` and `nan`. Negative values keep their sign after rounding,
/// so `-0.001` becomes `-0.00`.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // sign follows the input even when it rounds to zero: -0.001 is "-0.00"
    let sign = if value.is_sign_negative() { "-" } else { "" };

    format!("{}{}.{}", sign, grouped, cents)
}
