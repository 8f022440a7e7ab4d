use super::*;

// --- readyState gate ---

#[test]
fn loading_document_is_still_parsing() {
    assert!(still_parsing("loading"));
}

#[test]
fn interactive_document_is_ready() {
    assert!(!still_parsing("interactive"));
}

#[test]
fn complete_document_is_ready() {
    assert!(!still_parsing("complete"));
}

#[test]
fn unknown_ready_state_initializes_immediately() {
    // readyState is a plain string on the wire; anything unrecognized must
    // not leave the UI waiting for a DOMContentLoaded that already fired.
    assert!(!still_parsing(""));
    assert!(!still_parsing("Loading"));
}
