//! Provider wiring.

use zeus_api::Client;

use crate::config::ProviderConfig;
use crate::data_source::assign::AssignDataSource;
use crate::data_source::pool::PoolDataSource;
use crate::error::Error;
use crate::resource::assign::AssignResource;
use crate::resource::pool::PoolResource;

/// The configured provider: one shared HTTP client handed to every
/// resource and data source it creates.
#[derive(Debug, Clone)]
pub struct ZeusProvider {
    client: Client,
}

impl ZeusProvider {
    /// Build the shared client from a resolved configuration.
    pub fn configure(config: ProviderConfig) -> Result<Self, Error> {
        let client = Client::new(config.endpoint.as_str(), config.token)?;
        Ok(Self { client })
    }

    pub fn pool_resource(&self) -> PoolResource {
        PoolResource::new(self.client.clone())
    }

    pub fn assign_resource(&self) -> AssignResource {
        AssignResource::new(self.client.clone())
    }

    pub fn pool_data_source(&self) -> PoolDataSource {
        PoolDataSource::new(self.client.clone())
    }

    pub fn assign_data_source(&self) -> AssignDataSource {
        AssignDataSource::new(self.client.clone())
    }
}
