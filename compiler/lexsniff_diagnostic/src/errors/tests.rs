use std::collections::HashSet;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn every_code_is_documented() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::has_docs(code), "{code} has no docs");
    }
}

#[test]
fn docs_start_with_their_code() {
    for code in ErrorDocs::all_codes() {
        let doc = ErrorDocs::get(code).unwrap_or_default();
        assert!(
            doc.starts_with(&format!("# {code}:")),
            "{code} doc has wrong heading"
        );
    }
}

#[test]
fn no_duplicate_docs() {
    let codes: Vec<_> = ErrorDocs::all_codes().collect();
    let unique: HashSet<_> = codes.iter().collect();
    assert_eq!(codes.len(), unique.len());
}
