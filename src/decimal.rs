//! Fixed-point decimal arithmetic over the textual cell values, scaled to
//! an `i128` so results stay exact well past signed 64-bit range.

#[derive(Debug, Clone, Copy)]
struct Fixed {
    scaled: i128,
    scale: u32,
}

fn parse(value: &str) -> Result<Fixed, String> {
    let trimmed = value.trim();
    let negative = trimmed.starts_with('-');
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(format!("{value:?} is not a number"));
    }
    if !int_part.chars().all(|c| c.is_ascii_digit()) || !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("{value:?} is not a number"));
    }
    let scale = frac_part.len() as u32;
    let digits = format!("{}{}", if int_part.is_empty() { "0" } else { int_part }, frac_part);
    let magnitude: i128 = digits.parse().map_err(|_| format!("{value:?} is not a number"))?;
    Ok(Fixed {
        scaled: if negative { -magnitude } else { magnitude },
        scale,
    })
}

fn align(a: Fixed, b: Fixed) -> (i128, i128, u32) {
    let scale = a.scale.max(b.scale);
    (
        a.scaled * 10i128.pow(scale - a.scale),
        b.scaled * 10i128.pow(scale - b.scale),
        scale,
    )
}

fn format(scaled: i128, scale: u32) -> String {
    if scale == 0 {
        return scaled.to_string();
    }
    let negative = scaled < 0;
    let magnitude = scaled.unsigned_abs();
    let padded = format!("{:0>width$}", magnitude, width = scale as usize + 1);
    let split_at = padded.len() - scale as usize;
    let (int_part, frac_part) = padded.split_at(split_at);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{int_part}.{frac_part}")
}

fn rescale(value: i128, from_scale: u32, to_scale: u32) -> i128 {
    if from_scale == to_scale {
        value
    } else if from_scale > to_scale {
        value / 10i128.pow(from_scale - to_scale)
    } else {
        value * 10i128.pow(to_scale - from_scale)
    }
}

fn to_integer(value: Fixed) -> i128 {
    if value.scale == 0 {
        value.scaled
    } else {
        value.scaled / 10i128.pow(value.scale)
    }
}

pub fn add(a: &str, b: &str) -> Result<String, String> {
    let (a, b) = (parse(a)?, parse(b)?);
    let (av, bv, scale) = align(a, b);
    Ok(format(av + bv, scale))
}

pub fn sub(a: &str, b: &str) -> Result<String, String> {
    let (a, b) = (parse(a)?, parse(b)?);
    let (av, bv, scale) = align(a, b);
    Ok(format(av - bv, scale))
}

/// Products are always reported at a fixed two-decimal scale.
pub fn mul(a: &str, b: &str) -> Result<String, String> {
    let (a, b) = (parse(a)?, parse(b)?);
    let product = a.scaled * b.scaled;
    let rescaled = rescale(product, a.scale + b.scale, 2);
    Ok(format(rescaled, 2))
}

/// Integer division. Returns `Ok(None)` on division by zero; the caller is
/// responsible for turning that into a guest-visible `REG_ERROR`.
pub fn div(a: &str, b: &str) -> Result<Option<String>, String> {
    let (a, b) = (parse(a)?, parse(b)?);
    let (a_int, b_int) = (to_integer(a), to_integer(b));
    if b_int == 0 {
        return Ok(None);
    }
    Ok(Some((a_int / b_int).to_string()))
}

pub fn modulo(a: &str, b: &str) -> Result<Option<String>, String> {
    let (a, b) = (parse(a)?, parse(b)?);
    let (a_int, b_int) = (to_integer(a), to_integer(b));
    if b_int == 0 {
        return Ok(None);
    }
    Ok(Some((a_int % b_int).to_string()))
}

pub fn incr(a: &str) -> Result<String, String> {
    add(a, "1")
}

pub fn decr(a: &str) -> Result<String, String> {
    sub(a, "1")
}

pub fn is_number(value: &str) -> bool {
    parse(value).is_ok()
}

pub fn parse_integer(value: &str) -> Result<i128, String> {
    let fixed = parse(value)?;
    if fixed.scale != 0 {
        return Err(format!("{value:?} is not an integer"));
    }
    Ok(fixed.scaled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_integers_and_decimals() {
        assert_eq!(add("3", "4").unwrap(), "7");
        assert_eq!(add("1.5", "2.25").unwrap(), "3.75");
        assert_eq!(add("-1", "1").unwrap(), "0");
    }

    #[test]
    fn preserves_leading_zero_before_the_point() {
        assert_eq!(add("0.2", "0.3").unwrap(), "0.5");
        assert_eq!(sub("0", "0.5").unwrap(), "-0.5");
    }

    #[test]
    fn multiplication_reports_two_decimal_scale() {
        assert_eq!(mul("3", "4").unwrap(), "12.00");
        assert_eq!(mul("1.5", "2").unwrap(), "3.00");
    }

    #[test]
    fn division_and_modulus_are_integer() {
        assert_eq!(div("7", "2").unwrap().unwrap(), "3");
        assert_eq!(modulo("7", "2").unwrap().unwrap(), "1");
        assert!(div("7", "0").unwrap().is_none());
        assert!(modulo("7", "0").unwrap().is_none());
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(add("abc", "1").is_err());
        assert!(is_number("abc") == false);
        assert!(is_number("-3.14"));
    }
}
