//! Calendar check of the embedded `YYMMDD` block.

use chrono::NaiveDate;

/// Extract the date encoded in a normalized candidate.
///
/// The six digits before the 3-character suffix are read as `YYMMDD` with a
/// fixed `20YY` century. Impossible dates (month 13, April 31, February 29
/// outside leap years) yield `None`; days never roll into the next month.
pub fn parse_date(rfc: &str) -> Option<NaiveDate> {
    let chars: Vec<char> = rfc.chars().collect();
    let end = chars.len().checked_sub(3)?;
    let start = end.checked_sub(6)?;
    let block = &chars[start..end];

    let mut fields = [0u32; 3];
    for (field, pair) in fields.iter_mut().zip(block.chunks(2)) {
        let hi = pair[0].to_digit(10)?;
        let lo = pair[1].to_digit(10)?;
        *field = hi * 10 + lo;
    }
    let [yy, mm, dd] = fields;

    NaiveDate::from_ymd_opt(2000 + yy as i32, mm, dd)
}

/// Whether the date block of a normalized candidate is a real calendar date.
pub fn is_valid_date(rfc: &str) -> bool {
    parse_date(rfc).is_some()
}
