//! Release signing configuration resolution
//!
//! Release builds are signed with credentials read from an optional
//! `key.properties` file at the project root. The file is optional by
//! design: CI machines and contributor checkouts build unsigned release
//! artifacts, while release machines provide the keystore. A release
//! variant receives the credentials only when the file exists and names
//! a non-empty keystore path.

use crate::error::Result;
use crate::properties::PropertySource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Conventional name of the signing properties file at the project root
pub const KEY_PROPERTIES_FILE: &str = "key.properties";

/// Credentials for signing a release artifact
///
/// Every field defaults to the empty string when the backing properties
/// file is absent or does not set the corresponding key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SigningCredentials {
    /// Alias of the key inside the keystore
    pub key_alias: String,
    /// Password for the key
    pub key_password: String,
    /// Path to the keystore, relative to the project root
    pub store_file: String,
    /// Password for the keystore
    pub store_password: String,
}

impl SigningCredentials {
    /// Read credentials from an already-loaded property source
    pub fn from_properties(props: &PropertySource) -> Self {
        Self {
            key_alias: props.get("keyAlias").to_string(),
            key_password: props.get("keyPassword").to_string(),
            store_file: props.get("storeFile").to_string(),
            store_password: props.get("storePassword").to_string(),
        }
    }

    /// Load credentials from a properties file, yielding the all-empty
    /// record when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_properties(&PropertySource::load(path)?))
    }

    /// Whether every field is empty
    pub fn is_empty(&self) -> bool {
        self.key_alias.is_empty()
            && self.key_password.is_empty()
            && self.store_file.is_empty()
            && self.store_password.is_empty()
    }

    /// Whether the credentials name a keystore file.
    ///
    /// Credentials without a store file must never be applied to a
    /// build variant.
    pub fn has_store_file(&self) -> bool {
        !self.store_file.is_empty()
    }

    /// Resolve the keystore path against the project root
    pub fn store_path(&self, project_root: &Path) -> PathBuf {
        let store = Path::new(&self.store_file);
        if store.is_absolute() {
            store.to_path_buf()
        } else {
            project_root.join(store)
        }
    }
}

/// Outcome of resolving release signing for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SigningDecision {
    /// The release variant is signed with these credentials
    Signed(SigningCredentials),
    /// The release variant is built without a signing identity
    Unsigned(UnsignedReason),
}

impl SigningDecision {
    /// Whether the release variant receives a signing identity
    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Signed(_))
    }

    /// Credentials attached to the decision, if any
    pub fn credentials(&self) -> Option<&SigningCredentials> {
        match self {
            Self::Signed(creds) => Some(creds),
            Self::Unsigned(_) => None,
        }
    }
}

/// Why a release variant stays unsigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsignedReason {
    /// No key.properties file at the expected path
    PropertiesMissing,
    /// The file exists but storeFile is empty or unset
    StoreFileUnset,
}

impl UnsignedReason {
    /// Human-readable explanation for CLI output
    pub fn describe(&self) -> &'static str {
        match self {
            Self::PropertiesMissing => "key.properties not found",
            Self::StoreFileUnset => "key.properties does not set storeFile",
        }
    }
}

/// Resolve the release signing decision for a properties file path.
///
/// The release variant is signed only when the file exists and names a
/// non-empty keystore. A missing file and an unset storeFile are both
/// defined fallbacks, not errors; an unreadable or malformed file is
/// fatal.
pub fn resolve_release_signing(path: &Path) -> Result<SigningDecision> {
    if !path.exists() {
        return Ok(SigningDecision::Unsigned(UnsignedReason::PropertiesMissing));
    }

    let credentials = SigningCredentials::from_properties(&PropertySource::load(path)?);
    if !credentials.has_store_file() {
        return Ok(SigningDecision::Unsigned(UnsignedReason::StoreFileUnset));
    }

    Ok(SigningDecision::Signed(credentials))
}

/// Report on the signing material present for a project
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeystoreCheck {
    /// keyAlias is non-empty
    pub key_alias_set: bool,
    /// keyPassword is non-empty
    pub key_password_set: bool,
    /// storePassword is non-empty
    pub store_password_set: bool,
    /// storeFile as written in the properties file
    pub store_file: String,
    /// The keystore file exists on disk
    pub store_file_exists: bool,
}

impl KeystoreCheck {
    /// Whether signing would succeed with this material
    pub fn is_ready(&self) -> bool {
        self.key_alias_set
            && self.key_password_set
            && self.store_password_set
            && self.store_file_exists
    }
}

/// Check that resolved credentials are backed by real signing material.
///
/// Resolution itself never touches the keystore; this is a separate,
/// deliberate disk check for `signing verify` and `doctor`.
pub fn check_keystore(project_root: &Path, credentials: &SigningCredentials) -> KeystoreCheck {
    let store_file_exists =
        credentials.has_store_file() && credentials.store_path(project_root).exists();

    KeystoreCheck {
        key_alias_set: !credentials.key_alias.is_empty(),
        key_password_set: !credentials.key_password.is_empty(),
        store_password_set: !credentials.store_password.is_empty(),
        store_file: credentials.store_file.clone(),
        store_file_exists,
    }
}
