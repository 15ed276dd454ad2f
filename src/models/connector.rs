use serde::Deserialize;

/// Metadata describing an available wallet connector.
///
/// For EIP-6963 providers this mirrors the announced `info` object, with the
/// reverse-DNS name used as the id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ConnectorInfo {
    pub id: String,
    pub name: String,
    /// Data URI of the wallet icon.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Connectors in discovery order, unique by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectorList(Vec<ConnectorInfo>);

impl ConnectorList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connector, replacing the metadata of one with the same id in
    /// place. Returns `true` when the connector was not known yet.
    pub fn upsert(&mut self, info: ConnectorInfo) -> bool {
        match self.0.iter_mut().find(|c| c.id == info.id) {
            Some(existing) => {
                *existing = info;
                false
            }
            None => {
                self.0.push(info);
                true
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConnectorInfo> {
        self.0.iter()
    }
}
