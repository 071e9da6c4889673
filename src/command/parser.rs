use chumsky::{prelude::*, regex::regex, text};

use super::Statement;
use crate::record::Record;

type Extra<'a> = extra::Err<Rich<'a, char>>;

/// One or more whitespace characters between arguments
fn gap<'a>() -> impl Parser<'a, &'a str, (), Extra<'a>> {
    text::whitespace().at_least(1)
}

/// A run of non-whitespace characters
fn word<'a>() -> impl Parser<'a, &'a str, &'a str, Extra<'a>> {
    regex(r"\S+")
}

fn integer<'a>() -> impl Parser<'a, &'a str, i64, Extra<'a>> {
    regex(r"[+-]?[0-9]+").try_map(|s: &str, span| {
        s.parse::<i64>()
            .map_err(|e| Rich::custom(span, format!("invalid id '{}': {}", s, e)))
    })
}

// insert <id> <name> <email>
pub fn insert_parser<'a>() -> impl Parser<'a, &'a str, Statement, Extra<'a>> {
    just("insert")
        .ignore_then(gap())
        .ignore_then(integer())
        .then_ignore(gap())
        .then(word())
        .then_ignore(gap())
        .then(word())
        .then_ignore(text::whitespace())
        .then_ignore(end())
        .map(|((id, name), email)| Statement::Insert(Record::new(id, name, email)))
}

// select
pub fn select_parser<'a>() -> impl Parser<'a, &'a str, Statement, Extra<'a>> {
    just("select")
        .then_ignore(text::whitespace())
        .then_ignore(end())
        .to(Statement::Select)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chumsky::Parser;

    #[test]
    fn test_insert() {
        let result = insert_parser().parse("insert 1 alice alice@x.com");
        assert!(!result.has_errors());
        assert_eq!(
            result.into_result().unwrap(),
            Statement::Insert(Record::new(1, "alice", "alice@x.com"))
        );
    }

    #[test]
    fn test_insert_extra_whitespace() {
        let result = insert_parser().parse("insert   -5\tbob  bob@x.com  ");
        assert_eq!(
            result.into_result().unwrap(),
            Statement::Insert(Record::new(-5, "bob", "bob@x.com"))
        );
    }

    #[test]
    fn test_insert_errors() {
        for input in [
            "insert",
            "insert abc",
            "insert 1 alice",
            "insert 1 alice a@x b@x",
            "insert one alice a@x",
            "insert 1abc alice a@x",
            "insert 99999999999999999999 alice a@x",
            "insert1 alice a@x",
        ] {
            let result = insert_parser().parse(input);
            assert!(result.has_errors(), "expected error for {:?}", input);
        }
    }

    #[test]
    fn test_select() {
        let result = select_parser().parse("select");
        assert_eq!(result.into_result().unwrap(), Statement::Select);

        assert!(select_parser().parse("select ").into_result().is_ok());
        assert!(select_parser().parse("select *").has_errors());
        assert!(select_parser().parse("selected").has_errors());
    }
}
