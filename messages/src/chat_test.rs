use super::*;

fn frame(kind: i64, text: &str, user: Option<Identity>) -> String {
    let mut env = Envelope::new(kind, text);
    env.user = user;
    env.encode()
}

// =============================================================
// Kind
// =============================================================

#[test]
fn kind_wire_values_match_protocol() {
    assert_eq!(Kind::Hello.as_i64(), 0);
    assert_eq!(Kind::Text.as_i64(), 1);
    assert_eq!(Kind::Auth.as_i64(), 2);
    assert_eq!(Kind::AuthAck.as_i64(), 3);
    assert_eq!(Kind::AuthRst.as_i64(), 4);
    assert_eq!(Kind::MayNotEnter.as_i64(), 5);
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_text_attributes_sender() {
    let raw = frame(1, "hello room", Some(Identity::new("anna", "anna@example.com")));
    assert_eq!(
        decode(&raw).unwrap(),
        Message::Text {
            from: Identity::new("anna", "anna@example.com"),
            text: "hello room".to_owned(),
        }
    );
}

#[test]
fn decode_text_without_sender_defaults_from() {
    let Message::Text { from, .. } = decode(&frame(1, "hi", None)).unwrap() else {
        panic!("expected Text");
    };
    assert_eq!(from, Identity::default());
}

#[test]
fn decode_control_frames() {
    assert_eq!(decode(&frame(0, "a\nb", None)).unwrap(), Message::Hello);
    assert_eq!(decode(&frame(2, "token", None)).unwrap(), Message::Auth);
    assert_eq!(decode(&frame(3, "", None)).unwrap(), Message::AuthAck);
    assert_eq!(decode(&frame(4, "", None)).unwrap(), Message::AuthRst);
    assert_eq!(decode(&frame(5, "", None)).unwrap(), Message::MayNotEnter);
}

#[test]
fn decode_rejects_unknown_type() {
    assert!(matches!(
        decode(&frame(6, "", None)),
        Err(CodecError::UnknownType(6))
    ));
}

#[test]
fn decode_rejects_bad_json() {
    assert!(matches!(decode("{"), Err(CodecError::Json(_))));
}

// =============================================================
// outbound constructors
// =============================================================

#[test]
fn hello_encodes_name_and_email() {
    let env = hello("anna", "anna@example.com");
    assert_eq!(env.kind, 0);
    assert_eq!(env.text, "anna\nanna@example.com");
}

#[test]
fn auth_carries_token() {
    let env = auth("s3cret");
    assert_eq!(env.kind, 2);
    assert_eq!(env.text, "s3cret");
}

#[test]
fn text_carries_body() {
    let env = text("hello room");
    assert_eq!(env.kind, 1);
    assert_eq!(env.text, "hello room");
}
