//! End-to-end dispatch behavior across the public API

use crier_core::{callback, EventDispatcher, Payload};
use serde_json::json;
use similar_asserts::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn fan_out_preserves_registration_order_across_events() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = EventDispatcher::new();

    for label in ["first", "second", "third"] {
        let sink = Rc::clone(&log);
        dispatcher.subscribe(
            "tick",
            callback(move |_ctx, args| {
                sink.borrow_mut().push(format!("{label} {}", args[0]));
                Ok(())
            }),
        );
    }

    dispatcher
        .trigger("tick", &Payload::Single(json!(42)), None)
        .unwrap();

    assert_eq!(
        *log.borrow(),
        vec!["first 42", "second 42", "third 42"]
    );
}

#[test]
fn spread_and_single_payloads_reach_subscribers_distinctly() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = EventDispatcher::new();

    let sink = Rc::clone(&seen);
    dispatcher.subscribe(
        "measurement",
        callback(move |_ctx, args| {
            sink.borrow_mut().push(args.len());
            Ok(())
        }),
    );

    dispatcher
        .trigger(
            "measurement",
            &Payload::Spread(vec![json!(1), json!(2), json!(3)]),
            None,
        )
        .unwrap();
    dispatcher
        .trigger("measurement", &Payload::Single(json!([1, 2, 3])), None)
        .unwrap();
    dispatcher
        .trigger("measurement", &Payload::Empty, None)
        .unwrap();

    assert_eq!(*seen.borrow(), vec![3, 1, 0]);
}

#[test]
fn failing_subscriber_stops_the_chain_and_surfaces_the_error() {
    let reached = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = EventDispatcher::new();

    let before = Rc::clone(&reached);
    dispatcher.subscribe(
        "save",
        callback(move |_ctx, _args| {
            before.borrow_mut().push("validator");
            Ok(())
        }),
    );
    dispatcher.subscribe(
        "save",
        callback(|_ctx, _args| Err("store unavailable".into())),
    );
    let after = Rc::clone(&reached);
    dispatcher.subscribe(
        "save",
        callback(move |_ctx, _args| {
            after.borrow_mut().push("notifier");
            Ok(())
        }),
    );

    let err = dispatcher
        .trigger("save", &Payload::Empty, None)
        .unwrap_err();

    assert_eq!(err.to_string(), "store unavailable");
    assert_eq!(*reached.borrow(), vec!["validator"]);
}

#[test]
fn handle_identity_governs_subscribe_and_unsubscribe() {
    let count = Rc::new(RefCell::new(0usize));
    let mut dispatcher = EventDispatcher::new();

    let sink = Rc::clone(&count);
    let handle = callback(move |_ctx, _args| {
        *sink.borrow_mut() += 1;
        Ok(())
    });

    // Clones of one handle register once.
    dispatcher.subscribe("ping", Rc::clone(&handle));
    dispatcher.subscribe("ping", Rc::clone(&handle));
    dispatcher.trigger("ping", &Payload::Empty, None).unwrap();
    assert_eq!(*count.borrow(), 1);

    // Removing the handle empties the dispatcher entirely.
    dispatcher.unsubscribe("ping", &handle);
    dispatcher.trigger("ping", &Payload::Empty, None).unwrap();
    assert_eq!(*count.borrow(), 1);
    assert!(dispatcher.is_empty());
}

#[test]
fn caller_supplied_context_travels_to_every_subscriber() {
    let contexts = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = EventDispatcher::new();

    for _ in 0..2 {
        let sink = Rc::clone(&contexts);
        dispatcher.subscribe(
            "audit",
            callback(move |ctx, _args| {
                sink.borrow_mut().push(ctx.value().cloned());
                Ok(())
            }),
        );
    }

    let ctx = json!({"request": "r-77"});
    dispatcher
        .trigger("audit", &Payload::Empty, Some(&ctx))
        .unwrap();

    assert_eq!(
        *contexts.borrow(),
        vec![
            Some(json!({"request": "r-77"})),
            Some(json!({"request": "r-77"}))
        ]
    );
}
