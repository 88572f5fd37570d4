//! Core types for the generation domain

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Template family that decides which handler set is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    /// Health, info and version handlers
    #[default]
    Basic,
    /// Item resource with list/create/read/update/delete/search
    Crud,
    /// User registration, login and profile management
    Auth,
    /// One generic handler per declared endpoint
    Custom,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Crud => "crud",
            Self::Auth => "auth",
            Self::Custom => "custom",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Basic, Self::Crud, Self::Auth, Self::Custom]
            .iter()
            .copied()
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "crud" => Ok(Self::Crud),
            "auth" => Ok(Self::Auth),
            "custom" => Ok(Self::Custom),
            _ => Err(format!("Unknown archetype: {s}")),
        }
    }
}

/// What a generated file is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Source,
    Manifest,
    Container,
    Ignore,
}

impl ArtifactKind {
    /// File name the artifact is written under
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Source => "main.py",
            Self::Manifest => "requirements.txt",
            Self::Container => "Dockerfile",
            Self::Ignore => ".gitignore",
        }
    }

    /// Syntax hint for viewers
    pub fn language(&self) -> &'static str {
        match self {
            Self::Source => "python",
            Self::Manifest | Self::Ignore => "text",
            Self::Container => "dockerfile",
        }
    }
}

/// One named text file produced by generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub name: String,
    pub content: String,
    pub kind: ArtifactKind,
}

impl GeneratedArtifact {
    pub fn new(kind: ArtifactKind, content: String) -> Self {
        Self {
            name: kind.file_name().to_string(),
            content,
            kind,
        }
    }
}

/// Result of a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// Archetype the configuration resolved to
    pub archetype: Archetype,
    /// Source, manifest, container and ignore files, in that order
    pub artifacts: Vec<GeneratedArtifact>,
}

impl GenerationResult {
    pub fn artifact(&self, kind: ArtifactKind) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }
}
