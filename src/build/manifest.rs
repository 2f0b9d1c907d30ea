//! Content manifest loading and bundle enumeration.
//!
//! The content manifest is an external collaborator: a JSON document
//! listing which assets belong to which bundle. Enumeration turns it
//! into immutable [`BundleDescriptor`]s, deriving the addressable name
//! for each member from its file stem unless the manifest spells the
//! names out explicitly.

use super::{Error, Result};
use std::collections::HashSet;
use std::path::Path;

/// External content description: which assets belong to which bundle.
///
/// # Format
///
/// ```json
/// {
///   "bundles": [
///     { "name": "Bundle1", "assets": ["Assets/Textures/tree.png"] },
///     { "name": "Bundle2", "assets": ["Assets/Audio/wind.ogg"],
///       "addresses": ["ambient_wind"] }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ContentManifest {
    /// Declared bundles, in manifest order.
    #[serde(default)]
    pub bundles: Vec<ManifestBundle>,
}

/// One bundle entry as declared in the manifest.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ManifestBundle {
    /// Bundle identifier, unique within the manifest.
    pub name: String,
    /// Member asset paths, in load order.
    pub assets: Vec<String>,
    /// Explicit addressable names, parallel to `assets`.
    ///
    /// When absent, names are derived from the asset file stems.
    #[serde(default)]
    pub addresses: Option<Vec<String>>,
}

impl ContentManifest {
    /// Loads a manifest from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidManifest`] when the file cannot be read
    /// or is not valid manifest JSON.
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::invalid_manifest(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            Error::invalid_manifest(format!("cannot parse {}: {}", path.display(), e))
        })
    }
}

/// A named asset group ready to hand to the packaging engine.
///
/// Invariant: `addressable_names[i]` corresponds to
/// `member_asset_paths[i]`, same length and order.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BundleDescriptor {
    /// Bundle identifier, unique within a request.
    pub identifier: String,
    /// Member asset paths, in load order.
    pub member_asset_paths: Vec<String>,
    /// Runtime lookup names, parallel to `member_asset_paths`.
    pub addressable_names: Vec<String>,
}

/// Enumerates bundle descriptors from a content manifest.
///
/// Addressable names are derived by stripping directory and extension
/// from each member path, preserving order and count; explicit
/// `addresses` lists in the manifest win over derivation.
///
/// A manifest with zero bundles is a valid state and enumerates to an
/// empty sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidManifest`] for an empty bundle identifier,
/// a duplicate identifier, a bundle with no members, an empty member
/// path, a member path without a file stem, or an explicit address
/// list whose length disagrees with the member list.
pub fn enumerate(manifest: &ContentManifest) -> Result<Vec<BundleDescriptor>> {
    let mut seen = HashSet::new();
    let mut descriptors = Vec::with_capacity(manifest.bundles.len());

    for bundle in &manifest.bundles {
        if bundle.name.is_empty() {
            return Err(Error::invalid_manifest("bundle with empty name"));
        }
        if !seen.insert(bundle.name.as_str()) {
            return Err(Error::invalid_manifest(format!(
                "duplicate bundle identifier: {}",
                bundle.name
            )));
        }
        if bundle.assets.is_empty() {
            return Err(Error::invalid_manifest(format!(
                "bundle {} has no member assets",
                bundle.name
            )));
        }

        let addressable_names = match &bundle.addresses {
            Some(addresses) => {
                if addresses.len() != bundle.assets.len() {
                    return Err(Error::invalid_manifest(format!(
                        "bundle {}: {} addresses for {} assets",
                        bundle.name,
                        addresses.len(),
                        bundle.assets.len()
                    )));
                }
                addresses.clone()
            }
            None => bundle
                .assets
                .iter()
                .map(|asset| derive_addressable_name(&bundle.name, asset))
                .collect::<Result<Vec<_>>>()?,
        };

        descriptors.push(BundleDescriptor {
            identifier: bundle.name.clone(),
            member_asset_paths: bundle.assets.clone(),
            addressable_names,
        });
    }

    log::debug!("enumerated {} bundle(s)", descriptors.len());
    Ok(descriptors)
}

/// Derives the runtime lookup name for an asset path: the file name
/// with directory and extension stripped.
fn derive_addressable_name(bundle: &str, asset: &str) -> Result<String> {
    if asset.is_empty() {
        return Err(Error::invalid_manifest(format!(
            "bundle {} has an empty asset path",
            bundle
        )));
    }
    Path::new(asset)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            Error::invalid_manifest(format!(
                "bundle {}: asset path {:?} has no file name",
                bundle, asset
            ))
        })
}
