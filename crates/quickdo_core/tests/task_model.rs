use quickdo_core::{Task, TaskValidationError};

#[test]
fn parse_trims_surrounding_whitespace() {
    let task = Task::parse("  Buy milk \n").unwrap();
    assert_eq!(task.text(), "Buy milk");
}

#[test]
fn parse_rejects_empty_and_whitespace_only_input() {
    assert_eq!(Task::parse("").unwrap_err(), TaskValidationError::EmptyText);
    assert_eq!(
        Task::parse("   ").unwrap_err(),
        TaskValidationError::EmptyText
    );
    assert_eq!(
        Task::parse("\t\r\n").unwrap_err(),
        TaskValidationError::EmptyText
    );
}

#[test]
fn task_serializes_as_bare_string() {
    let task = Task::parse("Call Sam").unwrap();
    assert_eq!(
        serde_json::to_value(&task).unwrap(),
        serde_json::json!("Call Sam")
    );
}

#[test]
fn task_list_serializes_as_json_array_of_strings() {
    let tasks = vec![
        Task::parse("Buy milk").unwrap(),
        Task::parse("Call Sam").unwrap(),
    ];
    assert_eq!(
        serde_json::to_string(&tasks).unwrap(),
        r#"["Buy milk","Call Sam"]"#
    );
}

#[test]
fn deserialize_round_trips_valid_text() {
    let task: Task = serde_json::from_str(r#""Water plants""#).unwrap();
    assert_eq!(task.text(), "Water plants");
}

#[test]
fn deserialize_rejects_blank_text() {
    let err = serde_json::from_str::<Task>(r#""   ""#).unwrap_err();
    assert!(
        err.to_string().contains("empty after trimming"),
        "unexpected error: {err}"
    );
}

#[test]
fn into_text_returns_owned_trimmed_text() {
    let task = Task::parse(" Water plants ").unwrap();
    assert_eq!(task.into_text(), "Water plants");
}
