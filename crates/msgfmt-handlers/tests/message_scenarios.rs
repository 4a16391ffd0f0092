//! End-to-end formatting scenarios through the core engine with the
//! default handlers registered.

use std::fmt;

use msgfmt::{
    FormatError, HandlerCall, MessageFormatter, Segment, TypeHandlers, Values, parse_cases,
};
use msgfmt_handlers::{PluralHandler, SelectHandler, register_defaults};

fn formatter(locale: &str) -> MessageFormatter {
    let mut handlers = TypeHandlers::new();
    register_defaults(&mut handlers);
    MessageFormatter::new(locale, handlers)
}

#[test]
fn plural_item_count() {
    let values = Values::new().with("count", 1);
    let text = formatter("en")
        .format("{count, plural, one{# item} other{# items}}", &values)
        .unwrap();
    assert_eq!(text, "1 item");
}

#[test]
fn select_with_nested_placeholder() {
    let values = Values::new().with("n", "yes").with("name", "Sam");
    let text = formatter("en")
        .format("{n, select, yes{Hi {name}} no{Bye}}", &values)
        .unwrap();
    assert_eq!(text, "Hi Sam");
}

#[test]
fn mixed_message() {
    let message = "{name} has {count, plural, =0{no messages} one{one message} \
                   other{# messages}} in {box, select, inbox{the inbox} other{{box}}}.";
    let f = formatter("en");
    let values = Values::new()
        .with("name", "Ana")
        .with("count", 0)
        .with("box", "inbox");
    assert_eq!(
        f.format(message, &values).unwrap(),
        "Ana has no messages in the inbox."
    );
    let values = values.with("count", 12).with("box", "Archive");
    assert_eq!(
        f.format(message, &values).unwrap(),
        "Ana has 12 messages in Archive."
    );
}

#[test]
fn russian_categories_through_formatter() {
    let message = "{n, plural, one{# файл} few{# файла} many{# файлов} other{# файла}}";
    let f = formatter("ru-RU");
    let at = |n: i64| f.format(message, &Values::new().with("n", n)).unwrap();
    assert_eq!(at(1), "1 файл");
    assert_eq!(at(2), "2 файла");
    assert_eq!(at(11), "11 файлов");
    assert_eq!(at(21), "21 файл");
}

#[test]
fn unbalanced_case_body_fails() {
    let err = formatter("en")
        .format("{n, plural, one{x other{y}", &Values::new().with("n", 1))
        .unwrap_err();
    assert!(err.is_unbalanced());
}

#[test]
fn process_keeps_tree_for_renderers() {
    #[derive(Debug)]
    struct Emphasis(String);

    impl fmt::Display for Emphasis {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "*{}*", self.0)
        }
    }

    let formatter = MessageFormatter::builder("en")
        .handler("plural", PluralHandler::default())
        .handler("select", SelectHandler)
        .handler_fn("em", |call: HandlerCall<'_>| {
            Ok(Segment::custom(Emphasis(call.value.to_string())))
        })
        .build();

    let values = Values::new().with("who", "Kim").with("n", 3);
    let tree = formatter
        .process("{who, em} sent {n, plural, one{a file} other{# files}}", &values)
        .unwrap();
    let emphasized: Vec<&Emphasis> = tree
        .leaves()
        .filter_map(|leaf| leaf.downcast_custom::<Emphasis>())
        .collect();
    assert_eq!(emphasized.len(), 1);
    assert_eq!(emphasized[0].0, "Kim");
    assert_eq!(tree.to_text(), "*Kim* sent 3 files");
}

#[test]
fn custom_handler_errors_surface_unchanged() {
    #[derive(Debug)]
    struct UnknownStyle(String);

    impl fmt::Display for UnknownStyle {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "unknown number style: {}", self.0)
        }
    }

    impl std::error::Error for UnknownStyle {}

    let formatter = MessageFormatter::builder("en")
        .handler("select", SelectHandler)
        .handler_fn("number", |call: HandlerCall<'_>| {
            let cases = parse_cases(call.format)?;
            match cases.args.first() {
                Some(&"integer") | None => Ok(Segment::from(call.value.clone())),
                Some(style) => Err(FormatError::handler(UnknownStyle((*style).to_owned()))),
            }
        })
        .build();

    let values = Values::new().with("kind", "x").with("n", 4);
    // The failing handler sits inside a select case body.
    let err = formatter
        .format("{kind, select, other{{n, number, roman}}}", &values)
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown number style: roman");

    assert_eq!(
        formatter
            .format("{kind, select, other{{n, number, integer}}}", &values)
            .unwrap(),
        "4"
    );
}

#[test]
fn repeated_format_is_stable() {
    let f = formatter("en");
    let values = Values::new().with("count", 2);
    let message = "{count, plural, one{# item} other{# items}}";
    let first = f.format(message, &values).unwrap();
    let second = f.format(message, &values).unwrap();
    assert_eq!(first, second);
    assert_eq!(f.cache_stats().hits, 1);
}
