//! Build request construction and validation.

use bundlebuild::build::{
    BuildGroup, BuildRequestBuilder, CacheServer, CompressionMode, Error, Platform,
};

#[test]
fn builder_requires_output_path_and_platform() {
    let err = BuildRequestBuilder::new()
        .platform(Platform::Linux64)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::IncompleteRequest {
            field: "output_path"
        }
    ));

    let err = BuildRequestBuilder::new()
        .output_path("out")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::IncompleteRequest { field: "platform" }));
}

#[test]
fn build_group_defaults_from_platform() {
    let request = BuildRequestBuilder::new()
        .output_path("out")
        .platform(Platform::MacOs)
        .build()
        .unwrap();
    assert_eq!(request.build_group(), BuildGroup::Standalone);

    let request = BuildRequestBuilder::new()
        .output_path("out")
        .platform(Platform::Android)
        .build()
        .unwrap();
    assert_eq!(request.build_group(), BuildGroup::Android);
}

#[test]
fn explicit_build_group_wins() {
    let request = BuildRequestBuilder::new()
        .output_path("out")
        .platform(Platform::Linux64)
        .build_group(BuildGroup::WebGl)
        .build()
        .unwrap();

    assert_eq!(request.build_group(), BuildGroup::WebGl);
}

#[test]
fn request_resolves_compression_through_its_policy() {
    let request = BuildRequestBuilder::new()
        .output_path("out")
        .platform(Platform::Windows64)
        .compression(CompressionMode::Lzma)
        .override_compression("Bundle1", CompressionMode::None)
        .build()
        .unwrap();

    assert_eq!(request.compression(), CompressionMode::Lzma);
    assert_eq!(
        request.resolve_compression("Bundle1"),
        CompressionMode::None
    );
    assert_eq!(
        request.resolve_compression("Bundle3"),
        CompressionMode::Lzma
    );
}

#[test]
fn cache_server_defaults_to_port_8126() {
    let cache = CacheServer::new("buildcache.example.com");
    assert_eq!(cache.port, 8126);
}
