//! Android project configuration model
//!
//! Typed mirror of the app module's build configuration: compile
//! options, default config, and the release/debug build types. The
//! release build type picks up signing credentials through the
//! key.properties guard; the debug build type never does.

use crate::error::Result;
use crate::signing::{self, SigningCredentials, SigningDecision, KEY_PROPERTIES_FILE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application id of the HabitKit Android app
pub const APPLICATION_ID: &str = "com.LTS.habittracker";

/// Pinned NDK version for the app module
pub const NDK_VERSION: &str = "27.0.12077973";

/// Maven coordinate of the core library desugaring runtime
pub const DESUGAR_JDK_LIBS: &str = "com.android.tools:desugar_jdk_libs:2.1.4";

/// Java/Kotlin compiler settings for the app module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptions {
    /// Java source compatibility level
    pub source_compatibility: u8,
    /// Java target compatibility level
    pub target_compatibility: u8,
    /// Kotlin JVM bytecode target
    pub kotlin_jvm_target: u8,
    /// Whether core library desugaring is enabled
    pub core_library_desugaring: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            source_compatibility: 11,
            target_compatibility: 11,
            kotlin_jvm_target: 11,
            core_library_desugaring: true,
        }
    }
}

/// Default config shared by every build variant
///
/// SDK and version fields come from the enclosing toolchain in a real
/// build; the defaults here match the app's current pins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfig {
    /// Application id
    pub application_id: String,
    /// Minimum supported SDK level
    pub min_sdk: u32,
    /// Target SDK level
    pub target_sdk: u32,
    /// SDK level compiled against
    pub compile_sdk: u32,
    /// Monotonic version code
    pub version_code: u32,
    /// Human-readable version name
    pub version_name: String,
    /// Multidex support, required while min_sdk stays low
    pub multidex_enabled: bool,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            application_id: APPLICATION_ID.to_string(),
            min_sdk: 21,
            target_sdk: 34,
            compile_sdk: 34,
            version_code: 1,
            version_name: "1.0.0".to_string(),
            multidex_enabled: true,
        }
    }
}

/// Settings for a single build type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildType {
    /// Code shrinking via R8
    pub minify_enabled: bool,
    /// Resource shrinking
    pub shrink_resources: bool,
    /// Signing identity, release only and only when resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing: Option<SigningCredentials>,
}

/// Assembled configuration for the app module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Variant-independent settings
    pub default_config: DefaultConfig,
    /// Compiler settings
    pub compile_options: CompileOptions,
    /// Pinned NDK version
    pub ndk_version: String,
    /// Desugaring runtime coordinate
    pub desugaring_dependency: String,
    /// Release build type
    pub release: BuildType,
    /// Debug build type
    pub debug: BuildType,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        // Minification and shrinking are off for both variants; the app
        // ships without proguard rules.
        Self {
            default_config: DefaultConfig::default(),
            compile_options: CompileOptions::default(),
            ndk_version: NDK_VERSION.to_string(),
            desugaring_dependency: DESUGAR_JDK_LIBS.to_string(),
            release: BuildType::default(),
            debug: BuildType::default(),
        }
    }
}

impl ProjectConfig {
    /// Assemble the project configuration for a project root.
    ///
    /// Reads `<root>/key.properties` and attaches signing credentials
    /// to the release build type only when the signing guard passes.
    pub fn resolve(project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        match signing::resolve_release_signing(&project_root.join(KEY_PROPERTIES_FILE))? {
            SigningDecision::Signed(credentials) => config.release.signing = Some(credentials),
            SigningDecision::Unsigned(_) => {}
        }

        Ok(config)
    }

    /// Pretty-printed JSON for consumption by build tooling
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_without_properties_leaves_release_unsigned() {
        let dir = TempDir::new().unwrap();
        let config = ProjectConfig::resolve(dir.path()).unwrap();

        assert!(config.release.signing.is_none());
        assert!(config.debug.signing.is_none());
        assert_eq!(config.default_config.application_id, APPLICATION_ID);
    }

    #[test]
    fn test_resolve_attaches_signing_to_release_only() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(KEY_PROPERTIES_FILE),
            "keyAlias=upload\nkeyPassword=pw1\nstoreFile=upload.jks\nstorePassword=pw2\n",
        )
        .unwrap();

        let config = ProjectConfig::resolve(dir.path()).unwrap();

        let signing = config.release.signing.as_ref().unwrap();
        assert_eq!(signing.key_alias, "upload");
        assert_eq!(signing.store_file, "upload.jks");
        assert!(config.debug.signing.is_none());
    }

    #[test]
    fn test_resolve_skips_signing_when_store_file_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(KEY_PROPERTIES_FILE),
            "keyAlias=upload\nkeyPassword=pw1\nstorePassword=pw2\n",
        )
        .unwrap();

        let config = ProjectConfig::resolve(dir.path()).unwrap();
        assert!(config.release.signing.is_none());
    }

    #[test]
    fn test_minify_and_shrink_disabled_for_both_variants() {
        let config = ProjectConfig::default();

        assert!(!config.release.minify_enabled);
        assert!(!config.release.shrink_resources);
        assert!(!config.debug.minify_enabled);
        assert!(!config.debug.shrink_resources);
    }

    #[test]
    fn test_json_output_omits_absent_signing() {
        let config = ProjectConfig::default();
        let json = config.to_json().unwrap();

        assert!(json.contains("com.LTS.habittracker"));
        assert!(json.contains("desugar_jdk_libs"));
        assert!(!json.contains("keyAlias"));
    }

    #[test]
    fn test_json_output_includes_resolved_signing() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(KEY_PROPERTIES_FILE),
            "keyAlias=upload\nkeyPassword=pw1\nstoreFile=upload.jks\nstorePassword=pw2\n",
        )
        .unwrap();

        let config = ProjectConfig::resolve(dir.path()).unwrap();
        let json = config.to_json().unwrap();

        assert!(json.contains("\"keyAlias\": \"upload\""));
        assert!(json.contains("\"storeFile\": \"upload.jks\""));
    }
}
