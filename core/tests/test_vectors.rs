//! Verify `build_request` / `parse_response` against JSON vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes inputs and expected outcomes. Encoded bodies
//! are compared as decoded parameter maps (not raw strings) so field
//! ordering never causes false negatives.

use std::collections::BTreeMap;

use linode_core::{ClientError, HttpResponse, LinodeClient, Params};

const ENDPOINT: &str = "http://localhost:3000/";

fn decode_form(body: &str) -> BTreeMap<String, String> {
    url::form_urlencoded::parse(body.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn encode_test_vectors() {
    let raw = include_str!("../../test-vectors/encode.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let api_key = vectors["api_key"].as_str().unwrap();
    let client = LinodeClient::with_endpoint(api_key, ENDPOINT);

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let action = case["action"].as_str().unwrap();

        let params = case["params"]
            .as_object()
            .unwrap()
            .iter()
            .fold(Params::new(), |params, (k, v)| {
                params.set(k, v.as_str().unwrap())
            });

        let request = client.build_request(action, &params);
        assert_eq!(request.url, ENDPOINT, "{name}: url");

        let expected: BTreeMap<String, String> = case["expected"]
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.as_str().unwrap().to_string()))
            .collect();
        assert_eq!(decode_form(&request.body), expected, "{name}: body");
    }
}

#[test]
fn decode_test_vectors() {
    let raw = include_str!("../../test-vectors/decode.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let client = LinodeClient::with_endpoint("vector-key", ENDPOINT);

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let response = HttpResponse {
            status: case["status"].as_u64().unwrap() as u16,
            body: case["body"].as_str().unwrap().to_string(),
        };

        let result = client.parse_response(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Api" => match err {
                    ClientError::Api(errors) => {
                        let expected = case["expected_error_array"].as_array().unwrap();
                        assert_eq!(&errors, expected, "{name}: error array");
                    }
                    other => panic!("{name}: expected Api, got {other:?}"),
                },
                "MalformedResponse" => {
                    assert!(
                        matches!(err, ClientError::MalformedResponse(_)),
                        "{name}: expected MalformedResponse, got {err:?}"
                    )
                }
                "Transport" => {
                    assert!(
                        matches!(err, ClientError::Transport(_)),
                        "{name}: expected Transport, got {err:?}"
                    )
                }
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let data = result.unwrap();
            assert_eq!(data, case["expected_data"], "{name}: data payload");
        }
    }
}
