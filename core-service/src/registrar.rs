//! Plugin registration with the host UI framework.

use bridge_traits::package::{NativeModule, PackageBuilder, PackageProvider, ViewManager};
use core_data::DataModule;
use tracing::debug;

use crate::Sdk;

type ModuleFactory = fn(&Sdk) -> Box<dyn NativeModule>;
type ViewManagerFactory = fn(&Sdk) -> Box<dyn ViewManager>;

/// Every native module this SDK exposes.
const MODULES: &[ModuleFactory] = &[data_module];

/// Every view manager this SDK exposes.
const VIEW_MANAGERS: &[ViewManagerFactory] = &[];

fn data_module(sdk: &Sdk) -> Box<dyn NativeModule> {
    Box::new(DataModule::new(sdk.data().clone()))
}

/// Registers the SDK's native modules and view managers.
#[derive(Clone)]
pub struct SdkPackageProvider {
    sdk: Sdk,
}

impl SdkPackageProvider {
    pub fn new(sdk: Sdk) -> Self {
        Self { sdk }
    }
}

impl PackageProvider for SdkPackageProvider {
    fn create_package(&self, builder: &mut dyn PackageBuilder) {
        for factory in MODULES {
            builder.add_native_module(factory(&self.sdk));
        }
        for factory in VIEW_MANAGERS {
            builder.add_view_manager(factory(&self.sdk));
        }
        debug!(
            modules = MODULES.len(),
            view_managers = VIEW_MANAGERS.len(),
            "Package created"
        );
    }
}
