//! Response-shape tests — validates that backend response shapes match
//! what the frontend expects from each endpoint.
//!
//! These serialize the real response types and assert field names and
//! JSON types, so a struct rename breaks a test before it breaks a client.

use studyforge_nlp::{ArtifactBundle, FillBlankItem, McqItem};
use studyforge_store::{McqOption, McqQuestion, NoteBrief, NoteDetail, QuizFill};

/// Verify the /process-text bundle shape:
/// { summary, key_points, quiz: [{question, answer}], mcqs: [{question, options, answer, explanation}] }
#[test]
fn test_bundle_response_shape() {
    let bundle = ArtifactBundle {
        summary: "Plants make food.".to_string(),
        key_points: vec!["Plants make food.".to_string()],
        quiz: vec![FillBlankItem {
            question: "_____ make food.".to_string(),
            answer: "Plants".to_string(),
        }],
        mcqs: vec![McqItem {
            question: "Fill in the blank: _____ make food.".to_string(),
            options: vec![
                "Plants".to_string(),
                "context".to_string(),
                "process".to_string(),
                "system".to_string(),
            ],
            answer: "Plants".to_string(),
            explanation: "\"Plants\" is the term used here: \"Plants make food.\"".to_string(),
        }],
    };

    let json = serde_json::to_value(&bundle).unwrap();

    assert!(json["summary"].is_string());
    assert!(json["key_points"].is_array());
    assert!(json["quiz"].is_array());
    assert!(json["mcqs"].is_array());

    let quiz = &json["quiz"][0];
    assert!(quiz["question"].is_string());
    assert!(quiz["answer"].is_string());

    let mcq = &json["mcqs"][0];
    assert!(mcq["question"].is_string());
    assert!(mcq["options"].is_array());
    assert!(mcq["options"][0].is_string());
    assert!(mcq["answer"].is_string());
    assert!(mcq["explanation"].is_string());
}

/// Verify the empty bundle keeps the same keys with empty values, so the
/// frontend can render it without special-casing.
#[test]
fn test_empty_bundle_shape() {
    let json = serde_json::to_value(ArtifactBundle::empty()).unwrap();

    assert_eq!(json["summary"], "");
    assert_eq!(json["key_points"].as_array().unwrap().len(), 0);
    assert_eq!(json["quiz"].as_array().unwrap().len(), 0);
    assert_eq!(json["mcqs"].as_array().unwrap().len(), 0);
}

/// Verify GET /notes/{id} detail shape, including nested MCQ options with
/// is_correct flags.
#[test]
fn test_note_detail_shape() {
    let detail = NoteDetail {
        id: 7,
        original_text: "Plants make food.".to_string(),
        summary: "Plants make food.".to_string(),
        key_points: vec!["Plants make food.".to_string()],
        quiz: vec![QuizFill {
            question: "_____ make food.".to_string(),
            answer: "Plants".to_string(),
        }],
        mcqs: vec![McqQuestion {
            question: "Fill in the blank: _____ make food.".to_string(),
            explanation: String::new(),
            options: vec![
                McqOption {
                    option_text: "Plants".to_string(),
                    is_correct: true,
                },
                McqOption {
                    option_text: "context".to_string(),
                    is_correct: false,
                },
            ],
        }],
        tags: vec!["biology".to_string()],
        created_at: "2026-01-01T00:00:00+00:00".to_string(),
        updated_at: "2026-01-01T00:00:00+00:00".to_string(),
    };

    let json = serde_json::to_value(&detail).unwrap();

    assert!(json["id"].is_number());
    assert!(json["original_text"].is_string());
    assert!(json["summary"].is_string());
    assert!(json["key_points"].is_array());
    assert!(json["quiz"].is_array());
    assert!(json["mcqs"].is_array());
    assert!(json["tags"].is_array());
    assert!(json["created_at"].is_string());
    assert!(json["updated_at"].is_string());

    let option = &json["mcqs"][0]["options"][0];
    assert!(option["option_text"].is_string());
    assert!(option["is_correct"].is_boolean());
}

/// Verify GET /notes listing row shape.
#[test]
fn test_note_brief_shape() {
    let brief = NoteBrief {
        id: 7,
        summary: "Plants make food.".to_string(),
        tags: vec!["biology".to_string()],
        updated_at: "2026-01-01T00:00:00+00:00".to_string(),
    };

    let json = serde_json::to_value(&brief).unwrap();

    assert!(json["id"].is_number());
    assert!(json["summary"].is_string());
    assert!(json["tags"].is_array());
    assert!(json["tags"][0].is_string());
    assert!(json["updated_at"].is_string());
}

/// Verify the save payload accepted at POST /notes/save: artifact lists
/// and tags are optional and default to empty.
#[test]
fn test_new_note_optional_fields() {
    let minimal = serde_json::json!({
        "original_text": "Plants make food.",
        "summary": "Plants make food.",
    });

    let note: studyforge_store::NewNote = serde_json::from_value(minimal).unwrap();
    assert!(note.key_points.is_empty());
    assert!(note.quiz.is_empty());
    assert!(note.mcqs.is_empty());
    assert!(note.tags.is_empty());
}

/// Verify DELETE /notes/{id} response shape.
#[test]
fn test_delete_response_shape() {
    let response = serde_json::json!({
        "status": "deleted",
        "id": 7,
    });

    assert_eq!(response["status"], "deleted");
    assert!(response["id"].is_number());
}

/// Verify /health response shape.
#[test]
fn test_health_response_shape() {
    let response = serde_json::json!({
        "status": "healthy",
        "service": "studyforge",
        "notes": 0,
    });

    assert!(response["status"].is_string());
    assert!(response["service"].is_string());
    assert!(response["notes"].is_number());
}
