use alloc::{borrow::Cow, string::ToString, vec::Vec};

use core::str::FromStr;

use crate::StatsError;

/// Parses a line of comma and/or whitespace separated decimal numbers
///
/// Consecutive separators collapse into one. Each token without a decimal
/// point gets one appended before parsing, so plain integers are accepted
/// while exponent forms without a point (`1e5`) and words such as `inf` or
/// `nan` are not.
///
/// # Arguments
///
/// * `line` - The raw input line
///
/// # Returns
///
/// * `Result<Vec<T>, StatsError>` - The values in input order, or the first
///   token that failed to parse, or [`StatsError::NoValues`] for a blank line
///
/// # Examples
///
/// ```
/// # use series_statistics::parse_values;
/// let values: Vec<f64> = parse_values("1, 2 3.5").unwrap();
/// assert_eq!(values, vec![1.0, 2.0, 3.5]);
/// assert!(parse_values::<f64>("1, two").is_err());
/// ```
pub fn parse_values<T: FromStr>(line: &str) -> Result<Vec<T>, StatsError> {
    let values = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| parse_token(token, i + 1))
        .collect::<Result<Vec<T>, _>>()?;

    if values.is_empty() {
        return Err(StatsError::NoValues);
    }
    Ok(values)
}

fn parse_token<T: FromStr>(token: &str, position: usize) -> Result<T, StatsError> {
    let text = if token.contains('.') {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(format!("{token}."))
    };

    text.parse().map_err(|_| StatsError::InvalidNumber {
        token: token.to_string(),
        position,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn mixed_separators_work() {
        let values: Vec<f64> = parse_values("1, 2 3.5").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.5]);
    }

    #[test]
    fn consecutive_separators_collapse() {
        let values: Vec<f64> = parse_values(" ,1,,, 2\t\t-3 ,").unwrap();
        assert_eq!(values, vec![1.0, 2.0, -3.0]);
    }

    #[test]
    fn decimal_forms_work() {
        let values: Vec<f64> = parse_values(".5 -0.25 +4 1.5e3 7.").unwrap();
        assert_eq!(values, vec![0.5, -0.25, 4.0, 1500.0, 7.0]);
    }

    #[test]
    fn invalid_token_is_reported() {
        let err = parse_values::<f64>("1 2 x3 4").unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidNumber {
                token: "x3".to_string(),
                position: 3
            }
        );
    }

    #[test]
    fn point_less_special_forms_are_rejected() {
        assert!(parse_values::<f64>("1e5").is_err());
        assert!(parse_values::<f64>("inf").is_err());
        assert!(parse_values::<f64>("nan").is_err());
    }

    #[test]
    fn blank_line_has_no_values() {
        assert_eq!(parse_values::<f64>(""), Err(StatsError::NoValues));
        assert_eq!(parse_values::<f64>(" , \t,"), Err(StatsError::NoValues));
    }
}
