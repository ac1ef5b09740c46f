//! Property-based tests for entry naming and stream copying.
//!
//! These tests use proptest to generate arbitrary inputs and verify the
//! naming and traversal properties hold across a wide range of cases.

#![allow(clippy::expect_used)]

use proptest::prelude::*;
use std::io::Cursor;
use std::path::Component;
use std::path::Path;
use treezip_core::ArchiveError;
use treezip_core::copy::CopyBuffer;
use treezip_core::copy::copy_with_buffer;
use treezip_core::types::EntryName;

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9_-][a-zA-Z0-9_. -]{0,15}", 1..6)
}

proptest! {
    /// Joined names never double the separator and mark directories.
    #[test]
    fn prop_join_well_formed(
        prefix in "([a-z]{1,8}(/[a-z]{1,8}){0,2}/?)?",
        parts in segments(),
        is_dir in any::<bool>(),
    ) {
        let relative = parts.join("/");
        let name = EntryName::join(&prefix, &relative, is_dir);
        let name = name.as_str();

        prop_assert!(!name.contains("//"));
        prop_assert!(!name.starts_with('/'));
        prop_assert_eq!(name.ends_with('/'), is_dir);

        let trimmed = prefix.trim_end_matches('/');
        if trimmed.is_empty() {
            prop_assert!(name.starts_with(&relative));
        } else {
            let expected = format!("{trimmed}/");
            prop_assert!(name.starts_with(&expected));
        }
    }

    /// Native paths under a root map to their `/`-joined relative form.
    #[test]
    fn prop_from_native_joins_components(parts in segments(), is_dir in any::<bool>()) {
        let root = Path::new("/packing/root");
        let path = parts.iter().fold(root.to_path_buf(), |acc, part| acc.join(part));

        let name = EntryName::from_native(root, &path, "", is_dir).expect("under root");

        let mut expected = parts.join("/");
        if is_dir {
            expected.push('/');
        }
        prop_assert_eq!(name.as_str(), expected.as_str());
    }

    /// Plain names convert to relative paths with the same normal components.
    #[test]
    fn prop_relative_path_keeps_segments(parts in segments()) {
        let name = EntryName::new(parts.join("/"));

        let relative = name.to_relative_path().expect("plain name");

        prop_assert!(relative.is_relative());
        let components: Vec<String> = relative
            .components()
            .map(|c| match c {
                Component::Normal(part) => part.to_string_lossy().into_owned(),
                other => panic!("unexpected component {other:?}"),
            })
            .collect();
        prop_assert_eq!(components, parts);
    }

    /// Any name with a `..` segment is rejected.
    #[test]
    fn prop_parent_segment_rejected(
        before in prop::collection::vec("[a-z]{1,8}", 0..4),
        after in prop::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let mut parts = before;
        parts.push("..".to_string());
        parts.extend(after);
        let name = EntryName::new(parts.join("/"));

        let result = name.to_relative_path();
        prop_assert!(
            matches!(result, Err(ArchiveError::PathTraversal { .. })),
            "{} should be rejected",
            name
        );
    }

    /// Absolute names are rejected.
    #[test]
    fn prop_absolute_rejected(parts in segments()) {
        let name = EntryName::new(format!("/{}", parts.join("/")));
        prop_assert!(name.to_relative_path().is_err());
    }

    /// Copying moves every byte regardless of how it aligns with the buffer.
    #[test]
    fn prop_copy_preserves_bytes(data in prop::collection::vec(any::<u8>(), 0..200_000)) {
        let mut reader = Cursor::new(data.clone());
        let mut writer = Vec::new();
        let mut buffer = CopyBuffer::new();

        let copied = copy_with_buffer(&mut reader, &mut writer, &mut buffer).expect("copy");

        prop_assert_eq!(copied, data.len() as u64);
        prop_assert_eq!(writer, data);
    }
}
