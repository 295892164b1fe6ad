//! Local HTTPS material discovery.
//!
//! The dev server can serve over HTTPS either with a key/certificate pair
//! the developer placed at the project root, or with self-signed material
//! it synthesizes itself. Which one applies is determined once at startup
//! by probing two fixed paths; a missing pair is a normal condition, not an
//! error, so this module has no fault path.

use std::fs;
use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Key file probed at the project root.
pub const KEY_FILE: &str = "key.pem";

/// Certificate file probed at the project root.
pub const CERT_FILE: &str = "cert.pem";

/// TLS material for the local dev server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlsMaterial {
    /// Key and certificate bytes read from `key.pem` and `cert.pem`.
    Provided { key: Vec<u8>, cert: Vec<u8> },
    /// No pair on disk; the dev server generates its own material.
    SelfSigned,
}

impl TlsMaterial {
    /// Probe the project root for a key/certificate pair.
    ///
    /// Both files must exist and be readable; anything less falls back to
    /// [`TlsMaterial::SelfSigned`]. Called once at startup and never
    /// re-evaluated.
    pub fn load(project_root: &Path) -> Self {
        let key_path = project_root.join(KEY_FILE);
        let cert_path = project_root.join(CERT_FILE);

        if !key_path.exists() || !cert_path.exists() {
            tracing::debug!("No TLS pair at project root, dev server will self-sign");
            return Self::SelfSigned;
        }

        match (fs::read(&key_path), fs::read(&cert_path)) {
            (Ok(key), Ok(cert)) => {
                tracing::debug!("Loaded TLS pair from {} and {}", KEY_FILE, CERT_FILE);
                Self::Provided { key, cert }
            }
            _ => {
                tracing::debug!("TLS pair unreadable, dev server will self-sign");
                Self::SelfSigned
            }
        }
    }

    /// Whether a key/certificate pair was found on disk.
    pub fn is_provided(&self) -> bool {
        matches!(self, Self::Provided { .. })
    }

    /// One-line description for human output.
    pub fn summary(&self) -> String {
        match self {
            Self::Provided { .. } => format!("{} + {}", KEY_FILE, CERT_FILE),
            Self::SelfSigned => "self-signed".to_string(),
        }
    }
}

// Serialized for the machine-readable profile; the raw key bytes never
// belong in that output, only where the pair came from.
impl Serialize for TlsMaterial {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Provided { .. } => {
                let mut st = serializer.serialize_struct("TlsMaterial", 3)?;
                st.serialize_field("source", "provided")?;
                st.serialize_field("key_file", KEY_FILE)?;
                st.serialize_field("cert_file", CERT_FILE)?;
                st.end()
            }
            Self::SelfSigned => {
                let mut st = serializer.serialize_struct("TlsMaterial", 1)?;
                st.serialize_field("source", "self-signed")?;
                st.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_with_both_files_returns_provided_bytes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(KEY_FILE), b"key material").unwrap();
        fs::write(temp.path().join(CERT_FILE), b"cert material").unwrap();

        let material = TlsMaterial::load(temp.path());

        assert_eq!(
            material,
            TlsMaterial::Provided {
                key: b"key material".to_vec(),
                cert: b"cert material".to_vec(),
            }
        );
    }

    #[test]
    fn load_without_key_falls_back() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CERT_FILE), b"cert material").unwrap();

        assert_eq!(TlsMaterial::load(temp.path()), TlsMaterial::SelfSigned);
    }

    #[test]
    fn load_without_cert_falls_back() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(KEY_FILE), b"key material").unwrap();

        assert_eq!(TlsMaterial::load(temp.path()), TlsMaterial::SelfSigned);
    }

    #[test]
    fn load_with_empty_root_falls_back() {
        let temp = TempDir::new().unwrap();
        assert_eq!(TlsMaterial::load(temp.path()), TlsMaterial::SelfSigned);
    }

    #[test]
    fn is_provided() {
        let provided = TlsMaterial::Provided {
            key: vec![1],
            cert: vec![2],
        };
        assert!(provided.is_provided());
        assert!(!TlsMaterial::SelfSigned.is_provided());
    }

    #[test]
    fn summary_names_files_when_provided() {
        let provided = TlsMaterial::Provided {
            key: vec![],
            cert: vec![],
        };
        assert_eq!(provided.summary(), "key.pem + cert.pem");
        assert_eq!(TlsMaterial::SelfSigned.summary(), "self-signed");
    }

    #[test]
    fn serialize_never_includes_key_bytes() {
        let provided = TlsMaterial::Provided {
            key: b"SECRETKEYBYTES".to_vec(),
            cert: b"certbytes".to_vec(),
        };
        let json = serde_json::to_string(&provided).unwrap();
        assert!(json.contains("\"source\":\"provided\""));
        assert!(json.contains("key.pem"));
        assert!(!json.contains("SECRETKEYBYTES"));
    }

    #[test]
    fn serialize_self_signed() {
        let json = serde_json::to_string(&TlsMaterial::SelfSigned).unwrap();
        assert_eq!(json, r#"{"source":"self-signed"}"#);
    }
}
