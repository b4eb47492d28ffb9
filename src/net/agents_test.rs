use futures::executor::block_on;

use super::*;

// =============================================================
// Path building
// =============================================================

#[test]
fn item_path_targets_the_agent_by_id() {
    assert_eq!(item_path("a-1"), "/agents/a-1");
}

#[test]
fn item_path_encodes_awkward_ids() {
    assert_eq!(item_path("a/1 x"), "/agents/a%2F1%20x");
}

// =============================================================
// Draft serialization
// =============================================================

#[test]
fn draft_serializes_every_editable_field() {
    let draft = AgentDraft {
        name: "Support".to_owned(),
        description: "Tier-1 triage".to_owned(),
        model: "claude-sonnet-4".to_owned(),
        system_prompt: "Be brief.".to_owned(),
    };
    let body = serde_json::to_value(&draft).expect("draft should serialize");
    assert_eq!(body["name"], "Support");
    assert_eq!(body["description"], "Tier-1 triage");
    assert_eq!(body["model"], "claude-sonnet-4");
    assert_eq!(body["system_prompt"], "Be brief.");
}

// =============================================================
// Off-browser behavior
// =============================================================

#[test]
fn reads_and_writes_surface_a_transport_error_off_browser() {
    let draft = AgentDraft {
        name: "n".to_owned(),
        description: String::new(),
        model: "m".to_owned(),
        system_prompt: String::new(),
    };
    assert!(matches!(block_on(get("a-1")), Err(ApiError::Network(_))));
    assert!(matches!(
        block_on(update("a-1", &draft)),
        Err(ApiError::Network(_))
    ));
}
