pub use super::super::{Error, *};
use itertools::Itertools;

pub fn op_result(result: std::result::Result<NamedRows, miette::Report>) -> OpResult {
    let result = result.map_err(Error::EngineError)?;

    let headers = result.headers.iter().map(String::as_str).collect_vec();
    let rows = result.rows.iter().map(Vec::as_slice).collect_vec();

    match (&headers[..], &rows[..]) {
        (["status"], [[v]]) if v == &DataValue::from("OK") => Ok(()),
        _ => Err(Error::ResultError(result)),
    }
}

/// Checks the returned columns, then converts every row or fails on the first
/// one that does not fit.
pub fn rows_result<T>(
    result: std::result::Result<NamedRows, miette::Report>,
    expected_headers: &[&str],
    row: impl Fn(&[DataValue]) -> Option<T>,
) -> Result<Vec<T>> {
    let result = result.map_err(Error::EngineError)?;

    let headers = result.headers.iter().map(String::as_str).collect_vec();
    if headers != expected_headers {
        return Err(Error::ResultError(result));
    }

    let mut res = Vec::with_capacity(result.rows.len());
    for values in &result.rows {
        match row(values) {
            Some(value) => res.push(value),
            None => return Err(Error::ResultError(result)),
        }
    }

    Ok(res)
}

pub fn at_most_one<T>(mut rows: Vec<T>) -> Result<Option<T>> {
    match rows.len() {
        0 | 1 => Ok(rows.pop()),
        n => Err(Error::TooManyRows(n)),
    }
}

pub fn exactly_one<T>(rows: Vec<T>) -> Result<T> {
    at_most_one(rows)?.ok_or(Error::TooManyRows(0))
}

pub fn optional_str(value: Option<String>) -> DataValue {
    value.map(DataValue::from).unwrap_or(DataValue::Null)
}
