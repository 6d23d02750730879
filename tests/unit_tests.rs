// Unit tests for jobboard-match

use jobboard_match::config::ApiSettings;
use jobboard_match::models::{listing_ids, Engine, MatchRequest};
use jobboard_match::services::ApiClient;
use serde_json::{json, Value};

fn body(request: &MatchRequest) -> Value {
    serde_json::to_value(request).unwrap()
}

#[test]
fn test_output_format_always_json_compare() {
    for engine in [Engine::Gemini, Engine::Fallback] {
        for debug in [false, true] {
            let req = MatchRequest::new("u1", "j1").with_engine(engine).with_debug(debug);
            assert_eq!(body(&req)["outputFormat"], "json-compare");
        }
    }
}

#[test]
fn test_engine_defaults_to_gemini() {
    let req = MatchRequest::new("u1", "j1");
    assert_eq!(body(&req)["engine"], "gemini");
}

#[test]
fn test_debug_defaults_to_false() {
    let req = MatchRequest::new("u1", "j1");
    assert_eq!(body(&req)["debug"], false);
}

#[test]
fn test_fallback_debug_body_is_exact() {
    let req = MatchRequest::new("u1", "j1")
        .with_engine(Engine::Fallback)
        .with_debug(true);

    assert_eq!(
        serde_json::to_string(&req).unwrap(),
        r#"{"userId":"u1","jobId":"j1","engine":"fallback","outputFormat":"json-compare","debug":true}"#
    );
}

#[test]
fn test_listing_ids_wrapped_arrays() {
    let jobs = json!({"jobs": [{"_id": "64f0"}, {"id": 17}]});
    assert_eq!(listing_ids(&jobs), vec!["64f0", "17"]);

    let internships = json!({"internships": [{"id": "i1"}, {"id": ""}, {"id": null}]});
    assert_eq!(listing_ids(&internships), vec!["i1"]);

    let data = json!({"data": [{"id": "d1"}]});
    assert_eq!(listing_ids(&data), vec!["d1"]);
}

#[test]
fn test_resolve_against_base_without_trailing_slash() {
    let api = ApiClient::new(&ApiSettings {
        base_url: "https://api.jobboard.test/v2".to_string(),
        timeout_secs: None,
    })
    .unwrap();

    let url = api.resolve("api/internships").unwrap();
    assert_eq!(url.as_str(), "https://api.jobboard.test/v2/api/internships");
}
