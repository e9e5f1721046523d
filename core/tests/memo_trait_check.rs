use pretty_assertions::assert_eq;
use tryst_core::checks::Sip010MemoCheck;
use tryst_core::hooks::{
    CallContext, EmittedEvent, FunctionCall, FunctionSignature, PostCallHook, Violation,
};
use tryst_values::{to_canonical_hex, ClarityValue, PrincipalData};

fn transfer_signature() -> FunctionSignature {
    FunctionSignature::new("transfer")
        .with_parameter("amount", "uint")
        .with_parameter("sender", "principal")
        .with_parameter("recipient", "principal")
        .with_parameter("memo", "(optional (buff 34))")
}

fn principal(fill: u8) -> ClarityValue {
    ClarityValue::StandardPrincipal(PrincipalData::new(0x1a, [fill; 20]))
}

fn transfer_arguments(memo: ClarityValue) -> Vec<ClarityValue> {
    vec![
        ClarityValue::UInt(100),
        principal(0x01),
        principal(0x02),
        memo,
    ]
}

fn transfer_context(memo: ClarityValue, events: Vec<EmittedEvent>) -> CallContext {
    let mut call = FunctionCall::new(ClarityValue::ok(ClarityValue::Bool(true)));
    call.events = events;
    CallContext::new(transfer_signature(), transfer_arguments(memo)).with_function_call(call)
}

fn print_event(payload: impl Into<String>) -> EmittedEvent {
    EmittedEvent::new("print_event", payload)
}

#[test]
fn ignores_functions_other_than_transfer() {
    let context = CallContext::new(
        FunctionSignature::new("mint").with_parameter("amount", "uint"),
        vec![ClarityValue::UInt(1)],
    )
    .with_function_call(FunctionCall::new(ClarityValue::ok(ClarityValue::Bool(
        true,
    ))));

    assert_eq!(Sip010MemoCheck::new().after_call(&context), Ok(()));
}

#[test]
fn absent_memo_passes_without_any_events() {
    let context = transfer_context(ClarityValue::none(), Vec::new());
    assert_eq!(Sip010MemoCheck::new().after_call(&context), Ok(()));
}

#[test]
fn compliant_memo_echo_passes() {
    let memo = ClarityValue::buffer(*b"hello");
    let context = transfer_context(
        ClarityValue::some(memo.clone()),
        vec![print_event(to_canonical_hex(&memo))],
    );

    assert_eq!(Sip010MemoCheck::new().after_call(&context), Ok(()));
}

#[test]
fn missing_print_event_raises() {
    let context = transfer_context(ClarityValue::some(ClarityValue::buffer(*b"hello")), vec![]);

    let raised = Sip010MemoCheck::new().after_call(&context).unwrap_err();
    assert!(matches!(raised, Violation::MissingEvent(_)));
}

#[test]
fn unrelated_events_do_not_satisfy_the_check() {
    let memo = ClarityValue::buffer(*b"hello");
    let context = transfer_context(
        ClarityValue::some(memo.clone()),
        vec![EmittedEvent::new(
            "ft_transfer_event",
            to_canonical_hex(&memo),
        )],
    );

    let raised = Sip010MemoCheck::new().after_call(&context).unwrap_err();
    assert!(matches!(raised, Violation::MissingEvent(_)));
}

#[test]
fn mismatched_payload_names_both_encodings() {
    let memo = ClarityValue::buffer(*b"hello");
    let emitted = to_canonical_hex(&ClarityValue::buffer(*b"goodbye"));
    let context = transfer_context(
        ClarityValue::some(memo.clone()),
        vec![print_event(emitted.clone())],
    );

    let raised = Sip010MemoCheck::new().after_call(&context).unwrap_err();
    let expected = to_canonical_hex(&memo);
    assert_eq!(
        raised,
        Violation::PayloadMismatch {
            expected: expected.clone(),
            actual: emitted.clone(),
        }
    );

    let message = raised.to_string();
    assert!(message.contains(&expected));
    assert!(message.contains(&emitted));
}

#[test]
fn wrapper_encoding_does_not_pass_for_the_unwrapped_memo() {
    let memo = ClarityValue::buffer(*b"hello");
    let wrapped = ClarityValue::some(memo.clone());
    // A callee printing the `some` wrapper instead of its contents is not
    // echoing the memo.
    let context = transfer_context(wrapped.clone(), vec![print_event(to_canonical_hex(&wrapped))]);

    let raised = Sip010MemoCheck::new().after_call(&context).unwrap_err();
    assert!(matches!(raised, Violation::PayloadMismatch { .. }));
}

#[test]
fn non_option_memo_raises_shape_violation() {
    let context = transfer_context(ClarityValue::UInt(7), vec![]);

    let raised = Sip010MemoCheck::new().after_call(&context).unwrap_err();
    assert_eq!(
        raised,
        Violation::Shape("the memo argument has to be an option type".to_string())
    );
}

#[test]
fn signature_too_short_for_the_memo_raises_shape_violation() {
    let signature = FunctionSignature::new("transfer")
        .with_parameter("amount", "uint")
        .with_parameter("sender", "principal")
        .with_parameter("recipient", "principal");
    let context = CallContext::new(
        signature,
        vec![ClarityValue::UInt(1), principal(0x01), principal(0x02)],
    )
    .with_function_call(FunctionCall::new(ClarityValue::ok(ClarityValue::Bool(
        true,
    ))));

    let raised = Sip010MemoCheck::new().after_call(&context).unwrap_err();
    assert!(matches!(raised, Violation::Shape(_)));
}

#[test]
fn first_print_event_wins_over_later_duplicates() {
    let memo = ClarityValue::buffer(*b"hello");
    let context = transfer_context(
        ClarityValue::some(memo.clone()),
        vec![
            print_event(to_canonical_hex(&memo)),
            print_event("0xdeadbeef"),
        ],
    );

    assert_eq!(Sip010MemoCheck::new().after_call(&context), Ok(()));
}

#[test]
fn repeated_checks_on_the_same_context_agree() {
    let memo = ClarityValue::buffer(*b"hello");
    let context = transfer_context(ClarityValue::some(memo), vec![print_event("0x00")]);
    let check = Sip010MemoCheck::new();

    let first = check.after_call(&context);
    let second = check.after_call(&context);
    assert_eq!(first, second);
}

#[test]
fn custom_function_name_moves_the_gate() {
    let check = Sip010MemoCheck::new().with_function_name("transfer-memo");
    let context = transfer_context(ClarityValue::some(ClarityValue::buffer(*b"hello")), vec![]);

    // The context's function is `transfer`, which the customized check
    // no longer applies to.
    assert_eq!(check.after_call(&context), Ok(()));
}
