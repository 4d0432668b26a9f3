use sqlparser::dialect::GenericDialect;
use sqlparser::tokenizer::{Token, Tokenizer};
use tracing::{debug, error, warn};

/// Check that `query` tokenizes as SQL and holds at least one statement.
///
/// Only syntax is checked. Empty input and tokenizer failures are logged and
/// reported as `false`.
pub fn validate_syntax(query: Option<&str>) -> bool {
    match statement_count(query) {
        Some(0) => {
            warn!("SQL contains no statements");
            false
        }
        Some(count) => {
            debug!(statements = count, "SQL syntax is valid");
            true
        }
        None => false,
    }
}

/// Number of statements in `query`, or `None` when it is empty or does not
/// tokenize.
///
/// A statement is a run of tokens other than whitespace and comments,
/// delimited by semicolons.
pub fn statement_count(query: Option<&str>) -> Option<usize> {
    let sql = match query.map(str::trim) {
        Some(sql) if !sql.is_empty() => sql,
        _ => {
            error!("Empty SQL query");
            return None;
        }
    };

    let dialect = GenericDialect {};
    let tokens = match Tokenizer::new(&dialect, sql).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            error!(error = %e, "Invalid SQL syntax");
            return None;
        }
    };

    let mut count = 0;
    let mut in_statement = false;

    for token in &tokens {
        match token {
            Token::SemiColon => {
                if in_statement {
                    count += 1;
                }
                in_statement = false;
            }
            Token::Whitespace(_) | Token::EOF => {}
            _ => in_statement = true,
        }
    }

    if in_statement {
        count += 1;
    }

    Some(count)
}
