//! Type names and attribute descriptions exposed to the host.

use serde::Serialize;

/// Type name of the provider; resources and data sources are prefixed with it.
pub const PROVIDER_TYPE_NAME: &str = "bosk";

/// Type name of the node resource and data source for a provider.
pub fn node_type_name(provider_type_name: &str) -> String {
    format!("{provider_type_name}_node")
}

/// Identity of a provider build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    pub type_name: String,
    /// `"dev"` for local builds, `"test"` under acceptance tests.
    pub version: String,
}

/// How the host treats an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// Must be set in configuration.
    Required,
    /// May be set in configuration.
    Optional,
    /// Filled in by the provider.
    Computed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: AttributeKind,
}

impl Attribute {
    const fn new(name: &'static str, kind: AttributeKind, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind,
        }
    }
}

/// Attributes of one provider, resource or data source block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub description: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn required(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes
            .iter()
            .filter(|a| a.kind == AttributeKind::Required)
    }
}

pub fn provider_schema() -> Schema {
    Schema {
        description: "Manages nodes of a bosk state tree over its HTTP API",
        attributes: vec![
            Attribute::new(
                "base_url",
                AttributeKind::Required,
                "Specifies the URL of the bosk API. Used as a prefix for all HTTP requests. Ends with a slash.",
            ),
            Attribute::new(
                "basic_auth_var_suffix",
                AttributeKind::Required,
                "Selects the environment variables to use for HTTP basic authentication; namely \
                 TF_BOSK_USERNAME_xxx and TF_BOSK_PASSWORD_xxx. Use NO_AUTH to disable authentication.",
            ),
        ],
    }
}

pub fn node_resource_schema() -> Schema {
    Schema {
        description: "Bosk state tree node",
        attributes: vec![
            Attribute::new(
                "path",
                AttributeKind::Required,
                "When appended to the provider base_url, gives the HTTP address of the node",
            ),
            Attribute::new(
                "value_json",
                AttributeKind::Required,
                "The JSON-encoded contents of the node",
            ),
        ],
    }
}

pub fn node_data_source_schema() -> Schema {
    Schema {
        description: "Bosk state tree node data source",
        attributes: vec![
            Attribute::new(
                "path",
                AttributeKind::Optional,
                "When appended to the provider base_url, gives the HTTP address of the node. Conflicts with url.",
            ),
            Attribute::new(
                "url",
                AttributeKind::Optional,
                "The absolute HTTP address of the node. Conflicts with path.",
            ),
            Attribute::new(
                "value_json",
                AttributeKind::Computed,
                "The JSON-encoded contents of the node",
            ),
        ],
    }
}
