//! Integration tests for request schemas built from the validators
//!
//! The schemas here are the kind a chat backend declares for its endpoints:
//! ID rules, message bodies, registration and password reset.

use toi::prelude::*;
use toi::validators::{array, num, obj, str};
use toi::{bag, list, Reasons};

fn id_rule() -> Validator {
    required().and(num::is()).and(num::is_integer())
}

fn id_param_rule() -> Validator {
    required()
        .and(str::is())
        .and(num::parse())
        .and(num::is())
        .and(num::is_integer())
}

fn send_message() -> Validator {
    obj::keys([
        ("to", id_rule()),
        ("content", required().and(str::is()).and(str::max(400))),
    ])
}

fn register() -> Validator {
    obj::keys([
        (
            "firstname",
            required()
                .and(str::is())
                .and(str::length(1, 30).with_message("firstname length must be between 1 and 30")),
        ),
        (
            "lastname",
            required()
                .and(str::is())
                .and(str::length(1, 30).with_message("lastname length must be between 1 and 30")),
        ),
        (
            "password",
            required()
                .and(str::is())
                .and(str::password().with_message("password is invalid")),
        ),
        (
            "email",
            required()
                .and(str::is())
                .and(str::email().with_message("email is invalid")),
        ),
    ])
}

fn password_reset() -> Validator {
    obj::xor(["email", "reset"]).and(obj::keys_with(
        [
            ("email", optional().and(str::is()).and(str::email())),
            (
                "reset",
                obj::keys([
                    ("token", required().and(str::is())),
                    (
                        "password",
                        required().and(str::is()).and(str::password()),
                    ),
                ]),
            ),
        ],
        obj::KeysOptions::new().missing(["email", "reset"]),
    ))
}

fn invalid(validator: &Validator, value: Value) -> ValidationError {
    match validator.validate(value) {
        Err(Error::Invalid(err)) => err,
        other => panic!("expected {} to reject, got {other:?}", validator.name()),
    }
}

#[test]
fn test_id_rules() {
    assert_eq!(id_rule().validate(Value::from(5)).unwrap(), Value::from(5));
    assert!(id_rule().validate(Value::from(5.5)).is_err());
    assert!(id_rule().validate(Value::from("5")).is_err());

    assert_eq!(
        id_param_rule().validate(Value::from("42")).unwrap(),
        Value::from(42)
    );
    for bad in [Value::from("4.2"), Value::from("x"), Value::from(42), Value::Null] {
        assert!(id_param_rule().validate(bad).is_err());
    }
}

#[test]
fn test_send_message_accepts_valid_body() {
    let body = bag! { "to" => 5, "content" => "hi" };
    assert_eq!(send_message().validate(body).unwrap(), bag! { "to" => 5, "content" => "hi" });
}

#[test]
fn test_send_message_reports_only_failing_fields() {
    let err = invalid(&send_message(), bag! { "to" => "x", "content" => "hi" });
    assert_eq!(err.text(), "value does not match structure");
    assert_eq!(err.reason_for("to").unwrap().text(), "value is not a number");
    assert!(err.reason_for("content").is_none());
}

#[test]
fn test_send_message_content_too_long() {
    let content = "a".repeat(401);
    let err = invalid(&send_message(), bag! { "to" => 1, "content" => content });
    assert_eq!(
        err.reason_for("content").unwrap().text(),
        "value.length is greater than 400"
    );
}

#[test]
fn test_register_reports_custom_messages() {
    let err = invalid(
        &register(),
        bag! {
            "firstname" => "",
            "lastname" => "Lovelace",
            "password" => "short",
            "email" => "ada",
        },
    );

    let leaves: Vec<_> = err
        .leaves()
        .into_iter()
        .map(|(path, e)| (path, e.text().to_owned()))
        .collect();
    assert_eq!(
        leaves,
        [
            (
                "firstname".to_owned(),
                "firstname length must be between 1 and 30".to_owned()
            ),
            (
                "password".to_owned(),
                "password length is less than 8".to_owned()
            ),
            (
                "password".to_owned(),
                "password must include at least one number".to_owned()
            ),
            ("email".to_owned(), "email is invalid".to_owned()),
        ]
    );
    assert_eq!(
        err.reason_for("password").unwrap().text(),
        "password is invalid"
    );
}

#[test]
fn test_register_type_errors_keep_default_text() {
    let err = invalid(
        &register(),
        bag! {
            "firstname" => 1,
            "lastname" => "Lovelace",
            "password" => "abc12345",
            "email" => "ada@example.com",
        },
    );
    assert_eq!(err.reason_for("firstname").unwrap().text(), "value is not string");
    assert_eq!(err.reasons().map(Reasons::len), Some(1));
}

#[test]
fn test_password_reset_by_email() {
    let body = bag! { "email" => "ada@example.com" };
    let out = password_reset().validate(body).unwrap();
    assert_eq!(
        out,
        bag! { "email" => "ada@example.com", "reset" => Value::Undefined }
    );
}

#[test]
fn test_password_reset_by_token() {
    let body = bag! { "reset" => bag! { "token" => "t0k3n", "password" => "abc12345" } };
    assert!(password_reset().validate(body).is_ok());
}

#[test]
fn test_password_reset_needs_exactly_one_field() {
    let err = invalid(&password_reset(), bag! {});
    assert_eq!(
        err.text(),
        "value must have only one field present of email, reset"
    );

    let both = bag! {
        "email" => "ada@example.com",
        "reset" => bag! { "token" => "t", "password" => "abc12345" },
    };
    assert!(password_reset().validate(both).is_err());
}

#[test]
fn test_password_reset_nested_failures() {
    let err = invalid(
        &password_reset(),
        bag! { "reset" => bag! { "password" => "abc" } },
    );
    let paths: Vec<_> = err.leaves().into_iter().map(|(path, _)| path).collect();
    assert_eq!(
        paths,
        [
            "reset.token",
            "reset.password",
            "reset.password",
        ]
    );
}

#[test]
fn test_nested_lists_of_bags() {
    let conversation = obj::keys([
        ("id", id_rule()),
        (
            "members",
            required()
                .and(array::min(1))
                .and(array::items(obj::keys([("id", id_rule())]))),
        ),
    ]);

    let ok = bag! { "id" => 1, "members" => list![bag! { "id" => 2 }, bag! { "id" => 3 }] };
    assert_eq!(conversation.validate(ok.clone()).unwrap(), ok);

    let err = invalid(
        &conversation,
        bag! { "id" => 1, "members" => list![bag! { "id" => 2 }, bag! { "id" => "3" }] },
    );
    let leaves = err.leaves();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].0, "members[1].id");
    assert_eq!(leaves[0].1.value(), &Value::from("3"));

    let err = invalid(&conversation, bag! { "id" => 1, "members" => list![] });
    assert_eq!(
        err.reason_for("members").unwrap().text(),
        "value.length is smaller than 1"
    );
}

#[test]
fn test_all_fields_required_together() {
    let pair = obj::and(["a", "b"]).and(obj::keys_with(
        [("a", num::is()), ("b", num::is())],
        obj::KeysOptions::new().lenient(true),
    ));

    assert_eq!(
        pair.validate(bag! { "a" => 0, "b" => 1, "c" => 2 }).unwrap(),
        bag! { "a" => 0, "b" => 1 }
    );
    let err = invalid(&pair, bag! { "a" => 0 });
    assert!(err.reason_for("b").is_some());
    assert!(err.reason_for("a").is_none());
}
