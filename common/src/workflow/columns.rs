use super::error::WorkflowError;

/// Extracts the ordered list of column names from a raw CSV upload.
///
/// The first record is treated as the header row. Column names keep their
/// first-appearance order and duplicate header names collapse to one column.
/// A header with no data record behind it yields an empty set, as does
/// completely empty input; neither is an error, the column selector simply
/// stays hidden. Only the header and the first data record are touched; row
/// data is never materialized.
pub fn parse_columns(bytes: &[u8]) -> Result<Vec<String>, WorkflowError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|err| WorkflowError::Parse(err.to_string()))?
        .clone();

    match reader.records().next() {
        Some(Ok(_)) => {}
        Some(Err(err)) => return Err(WorkflowError::Parse(err.to_string())),
        None => return Ok(Vec::new()),
    }

    let mut columns: Vec<String> = Vec::with_capacity(headers.len());
    for name in headers.iter() {
        if !columns.iter().any(|column| column == name) {
            columns.push(name.to_string());
        }
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_order_is_preserved() {
        let columns = parse_columns(b"company,country,website\nAcme,US,acme.com\n").unwrap();
        assert_eq!(columns, vec!["company", "country", "website"]);
    }

    #[test]
    fn duplicate_headers_collapse_to_the_first_occurrence() {
        let columns = parse_columns(b"name,email,name\nAcme,a@x.com,Acme Corp\n").unwrap();
        assert_eq!(columns, vec!["name", "email"]);
    }

    #[test]
    fn empty_input_yields_no_columns_and_no_error() {
        assert_eq!(parse_columns(b"").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn header_without_records_yields_no_columns() {
        assert_eq!(parse_columns(b"company,country\n").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn ragged_records_do_not_fail_column_discovery() {
        let columns = parse_columns(b"a,b,c\n1,2\n").unwrap();
        assert_eq!(columns, vec!["a", "b", "c"]);
    }

    #[test]
    fn undecodable_input_is_a_parse_error() {
        let err = parse_columns(&[0x66, 0x6f, 0xff, 0xfe, 0x2c, 0x62, 0x0a, 0x31, 0x2c, 0x32])
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Parse(_)));
    }
}
