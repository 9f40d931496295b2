//! Browser-side checks for the postMessage encoding. Run with
//! `wasm-pack test --headless --chrome ui`.
#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use ui::services::host::{
    decode_host_message, encode_host_request, AuthOutcome, HostRequest, HostResponse,
    LoginPayload,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn login_request_is_a_plain_object() {
    let request = HostRequest::Login(LoginPayload {
        email: "player_one".to_string(),
        password: "secret".to_string(),
    });

    let value = encode_host_request(&request).unwrap();

    assert!(value.is_object());
    assert_eq!(get(&value, "type").as_string().as_deref(), Some("login"));
    let data = get(&value, "data");
    assert_eq!(get(&data, "email").as_string().as_deref(), Some("player_one"));
    assert_eq!(get(&data, "password").as_string().as_deref(), Some("secret"));
}

#[wasm_bindgen_test]
fn result_message_is_decoded() {
    let result = Object::new();
    Reflect::set(&result, &"success".into(), &JsValue::FALSE).unwrap();
    Reflect::set(&result, &"message".into(), &"Email taken".into()).unwrap();
    let message = Object::new();
    Reflect::set(&message, &"action".into(), &"registerResult".into()).unwrap();
    Reflect::set(&message, &"result".into(), &result).unwrap();

    assert_eq!(
        decode_host_message(message.into()),
        Some(HostResponse::RegisterResult(AuthOutcome::error("Email taken")))
    );
}

#[wasm_bindgen_test]
fn foreign_messages_are_ignored() {
    let message = Object::new();
    Reflect::set(&message, &"action".into(), &"openInventory".into()).unwrap();
    assert_eq!(decode_host_message(message.into()), None);
    assert_eq!(decode_host_message(JsValue::from_str("ping")), None);
}
