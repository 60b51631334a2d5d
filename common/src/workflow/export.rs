use crate::model::response::ResultRow;

/// Filename of the exported artifact.
pub const EXPORT_FILENAME: &str = "results.csv";

/// Renders the result set as CSV under a fixed `Entity,Email,Status` header,
/// one line per row in result-set order, without a trailing newline.
///
/// The `Status` column carries the lowercase row status; the per-row error
/// detail is not exported.
pub fn export_csv(rows: &[ResultRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push("Entity,Email,Status".to_string());
    for row in rows {
        lines.push(format!(
            "{},{},{}",
            escape_field(&row.entity),
            escape_field(&row.email),
            row.status
        ));
    }
    lines.join("\n")
}

/// Quotes a field containing a delimiter, quote, or line break, doubling
/// internal quotes.
fn escape_field(field: &str) -> String {
    if field.contains(|c| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::response::RowStatus;

    fn row(entity: &str, email: &str, status: RowStatus, error: Option<&str>) -> ResultRow {
        ResultRow {
            entity: entity.to_string(),
            email: email.to_string(),
            status,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn export_matches_the_fixed_layout() {
        let rows = vec![
            row("Acme", "a@x.com", RowStatus::Success, None),
            row("Globex", "", RowStatus::Error, Some("timeout")),
        ];
        assert_eq!(
            export_csv(&rows),
            "Entity,Email,Status\nAcme,a@x.com,success\nGlobex,,error"
        );
    }

    #[test]
    fn empty_result_set_exports_only_the_header() {
        assert_eq!(export_csv(&[]), "Entity,Email,Status");
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        let rows = vec![row("Acme, Inc.", "a@x.com", RowStatus::Success, None)];
        assert_eq!(
            export_csv(&rows),
            "Entity,Email,Status\n\"Acme, Inc.\",a@x.com,success"
        );
    }

    #[test]
    fn internal_quotes_are_doubled() {
        let rows = vec![row(r#"The "Best" Co"#, "b@x.com", RowStatus::Success, None)];
        assert_eq!(
            export_csv(&rows),
            "Entity,Email,Status\n\"The \"\"Best\"\" Co\",b@x.com,success"
        );
    }

    #[test]
    fn embedded_newlines_are_quoted() {
        let rows = vec![row("Line\nBreak Ltd", "", RowStatus::Error, None)];
        assert_eq!(
            export_csv(&rows),
            "Entity,Email,Status\n\"Line\nBreak Ltd\",,error"
        );
    }
}
