//! Bundle enumeration from content manifests.

use bundlebuild::build::{ContentManifest, Error, enumerate};

fn manifest_from(json: &str) -> ContentManifest {
    serde_json::from_str(json).expect("test manifest should parse")
}

#[test]
fn derives_addressable_names_from_file_stems() {
    let manifest = manifest_from(
        r#"{
            "bundles": [
                {
                    "name": "environment",
                    "assets": [
                        "Assets/Textures/tree.png",
                        "Assets/Textures/rock.png",
                        "Assets/Audio/wind.ogg"
                    ]
                }
            ]
        }"#,
    );

    let bundles = enumerate(&manifest).unwrap();
    assert_eq!(bundles.len(), 1);

    let bundle = &bundles[0];
    assert_eq!(bundle.identifier, "environment");
    assert_eq!(bundle.addressable_names, vec!["tree", "rock", "wind"]);
    // 1:1, order-preserving correspondence with member paths
    assert_eq!(
        bundle.member_asset_paths.len(),
        bundle.addressable_names.len()
    );
}

#[test]
fn explicit_addresses_win_over_derivation() {
    let manifest = manifest_from(
        r#"{
            "bundles": [
                {
                    "name": "audio",
                    "assets": ["Assets/Audio/wind.ogg"],
                    "addresses": ["ambient_wind"]
                }
            ]
        }"#,
    );

    let bundles = enumerate(&manifest).unwrap();
    assert_eq!(bundles[0].addressable_names, vec!["ambient_wind"]);
}

#[test]
fn zero_bundles_is_a_valid_empty_state() {
    let manifest = manifest_from(r#"{ "bundles": [] }"#);
    assert!(enumerate(&manifest).unwrap().is_empty());

    // "bundles" may be omitted entirely
    let manifest = manifest_from("{}");
    assert!(enumerate(&manifest).unwrap().is_empty());
}

#[test]
fn duplicate_identifier_is_invalid() {
    let manifest = manifest_from(
        r#"{
            "bundles": [
                { "name": "b", "assets": ["a.png"] },
                { "name": "b", "assets": ["b.png"] }
            ]
        }"#,
    );

    assert!(matches!(
        enumerate(&manifest),
        Err(Error::InvalidManifest { .. })
    ));
}

#[test]
fn bundle_without_members_is_invalid() {
    let manifest = manifest_from(r#"{ "bundles": [{ "name": "b", "assets": [] }] }"#);

    assert!(matches!(
        enumerate(&manifest),
        Err(Error::InvalidManifest { .. })
    ));
}

#[test]
fn address_count_mismatch_is_invalid() {
    let manifest = manifest_from(
        r#"{
            "bundles": [
                {
                    "name": "b",
                    "assets": ["a.png", "b.png"],
                    "addresses": ["only_one"]
                }
            ]
        }"#,
    );

    assert!(matches!(
        enumerate(&manifest),
        Err(Error::InvalidManifest { .. })
    ));
}

#[test]
fn empty_member_path_is_invalid() {
    let manifest = manifest_from(r#"{ "bundles": [{ "name": "b", "assets": [""] }] }"#);

    assert!(matches!(
        enumerate(&manifest),
        Err(Error::InvalidManifest { .. })
    ));
}

#[test]
fn member_path_without_file_stem_is_invalid() {
    let manifest = manifest_from(r#"{ "bundles": [{ "name": "b", "assets": [".."] }] }"#);

    assert!(matches!(
        enumerate(&manifest),
        Err(Error::InvalidManifest { .. })
    ));
}

#[test]
fn empty_bundle_name_is_invalid() {
    let manifest = manifest_from(r#"{ "bundles": [{ "name": "", "assets": ["a.png"] }] }"#);

    assert!(matches!(
        enumerate(&manifest),
        Err(Error::InvalidManifest { .. })
    ));
}

#[tokio::test]
async fn loads_manifest_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");
    std::fs::write(
        &path,
        r#"{ "bundles": [{ "name": "b", "assets": ["Assets/a.png"] }] }"#,
    )
    .unwrap();

    let manifest = ContentManifest::load(&path).await.unwrap();
    let bundles = enumerate(&manifest).unwrap();
    assert_eq!(bundles[0].identifier, "b");
}

#[tokio::test]
async fn unreadable_or_garbled_manifest_is_invalid() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("nope.json");
    assert!(matches!(
        ContentManifest::load(&missing).await,
        Err(Error::InvalidManifest { .. })
    ));

    let garbled = dir.path().join("bad.json");
    std::fs::write(&garbled, "not json at all").unwrap();
    assert!(matches!(
        ContentManifest::load(&garbled).await,
        Err(Error::InvalidManifest { .. })
    ));
}
