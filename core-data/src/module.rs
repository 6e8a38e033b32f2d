//! Native module registered with the host UI framework.

use bridge_traits::package::NativeModule;

use crate::client::DataClient;

/// Script-facing data module.
#[derive(Clone)]
pub struct DataModule {
    client: DataClient,
}

impl DataModule {
    /// Name under which script code looks the module up.
    pub const NAME: &'static str = "AppCenterReactNativeData";

    pub fn new(client: DataClient) -> Self {
        Self { client }
    }

    /// Client the module's script calls dispatch to.
    pub fn client(&self) -> &DataClient {
        &self.client
    }
}

impl NativeModule for DataModule {
    fn name(&self) -> &str {
        Self::NAME
    }
}
