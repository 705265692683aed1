use crate::models::NumericRange;

/// Multiplier applied to a token carrying an `M` suffix
const MILLION: f64 = 1_000_000.0;

/// Parse a human-written debt size band into a numeric interval
///
/// Accepts an optional `$`, thousands separators, an `M` suffix per token,
/// a trailing `+` for open-ended bands and either `-` or `to` between bounds:
///
/// * `"$5M - $25M"` -> `5_000_000..=25_000_000`
/// * `"$100M+"` -> `100_000_000..=inf`
/// * `"25M to 100M"` -> `25_000_000..=100_000_000`
/// * `"5"` -> `5..=5` (no implied magnitude)
///
/// Returns `None` only for empty input. Text outside the grammar yields
/// NaN bounds instead of failing, and NaN bounds never overlap anything.
pub fn parse_range(text: &str) -> Option<NumericRange> {
    if text.is_empty() {
        return None;
    }

    let mut cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '$')
        .collect();

    let open_ended = cleaned.ends_with('+');
    if open_ended {
        cleaned.pop();
    }

    let (lower, upper) = split_bounds(&cleaned);
    let min = parse_amount(lower);
    let max = match upper {
        Some(upper) if !upper.is_empty() => parse_amount(upper),
        _ => min,
    };

    Some(NumericRange {
        min,
        max: if open_ended { f64::INFINITY } else { max },
    })
}

/// Parse every string, dropping the ones that yield no range
pub fn parse_ranges<'a, I>(texts: I) -> Vec<NumericRange>
where
    I: IntoIterator<Item = &'a String>,
{
    texts.into_iter().filter_map(|text| parse_range(text)).collect()
}

/// Split a cleaned band on `-`, falling back to a case-insensitive `to`
fn split_bounds(cleaned: &str) -> (&str, Option<&str>) {
    if cleaned.contains('-') {
        let mut parts = cleaned.split('-');
        let lower = parts.next().unwrap_or_default();
        return (lower, parts.next());
    }

    // ASCII lowercasing keeps byte offsets aligned with `cleaned`
    let folded = cleaned.to_ascii_lowercase();
    let mut cuts = folded.match_indices("to").map(|(index, _)| index);

    match cuts.next() {
        Some(first) => {
            let upper_end = cuts.next().unwrap_or(cleaned.len());
            (&cleaned[..first], Some(&cleaned[first + 2..upper_end]))
        }
        None => (cleaned, None),
    }
}

/// Convert one bound, honoring a single trailing `M`/`m`
#[inline]
fn parse_amount(token: &str) -> f64 {
    match token.strip_suffix(|c: char| c == 'M' || c == 'm') {
        Some(number) => parse_leading_float(number) * MILLION,
        None => parse_leading_float(token),
    }
}

/// Longest leading decimal number in `text`, NaN when there is none
///
/// Trailing garbage is ignored, so `"5K"` reads as 5.
fn parse_leading_float(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let integer_digits = count_digits(end);
    end += integer_digits;

    let mut digits = integer_digits;
    if bytes.get(end) == Some(&b'.') {
        let fraction_digits = count_digits(end + 1);
        if digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
            digits += fraction_digits;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+') | Some(b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}
