use serde::{Deserialize, Serialize};

/// Texture manifest handed to the host page.
/// The page loads each image and reports completion per slot id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    pub textures: Vec<TextureEntry>,
}

/// One texture slot: id is the registry slot, path the image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureEntry {
    pub id: u32,
    pub path: String,
}

impl TextureManifest {
    /// Serialize the manifest to JSON for the wasm boundary.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let manifest = TextureManifest {
            textures: vec![
                TextureEntry { id: 0, path: "image/sun.jpg".into() },
                TextureEntry { id: 1, path: "image/mercury.jpg".into() },
            ],
        };
        let json = manifest.to_json().unwrap();
        let back = TextureManifest::from_json(&json).unwrap();
        assert_eq!(back.textures.len(), 2);
        assert_eq!(back.textures[1].path, "image/mercury.jpg");
    }

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{ "textures": [ { "id": 3, "path": "image/earth.jpg" } ] }"#;
        let manifest = TextureManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures[0].id, 3);
    }
}
