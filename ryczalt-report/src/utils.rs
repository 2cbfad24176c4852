use rust_decimal::Decimal;
use ryczalt_core::calculations::common::round_half_up;

/// Formats an amount with two decimal places and no grouping, e.g. `-700.00`.
pub fn fixed2(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// Formats an amount with comma thousands separators and two decimal places,
/// e.g. `28,320.00`.
pub fn format_amount(value: Decimal) -> String {
    let plain = fixed2(value);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let digits = integer.as_bytes();
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn fixed2_pads_to_two_places() {
        assert_eq!(fixed2(dec!(28320.0)), "28320.00");
        assert_eq!(fixed2(dec!(36)), "36.00");
    }

    #[test]
    fn fixed2_rounds_half_up() {
        assert_eq!(fixed2(dec!(4629.475620)), "4629.48");
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(28320.0)), "28,320.00");
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(dec!(272756.25883440)), "272,756.26");
    }

    #[test]
    fn format_amount_leaves_small_values_ungrouped() {
        assert_eq!(format_amount(dec!(420.86142)), "420.86");
        assert_eq!(format_amount(dec!(0)), "0.00");
    }

    #[test]
    fn format_amount_keeps_sign_outside_grouping() {
        assert_eq!(format_amount(dec!(-700)), "-700.00");
        assert_eq!(format_amount(dec!(-1234.5)), "-1,234.50");
    }

    #[test]
    fn format_amount_rounding_can_add_a_group() {
        assert_eq!(format_amount(dec!(999999.999)), "1,000,000.00");
    }
}
